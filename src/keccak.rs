// src/keccak.rs
// Keccak-f[1600] permutation (24 rounds), lane (x, y) stored at index x + 5y.

use crate::shake_params::{KECCAK_LANES, KECCAK_ROUNDS};

pub type KeccakState = [u64; KECCAK_LANES];

pub const RC: [u64; KECCAK_ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

// rho offset of lane x + 5y
const RHO: [u32; KECCAK_LANES] = [
     0,  1, 62, 28, 27,
    36, 44,  6, 55, 20,
     3, 10, 43, 25, 39,
    41, 45, 15, 21,  8,
    18,  2, 61, 56, 14,
];

// pi: lane (x, y) moves to (y, 2x + 3y)
const PI: [usize; KECCAK_LANES] = [
     0, 10, 20,  5, 15,
    16,  1, 11, 21,  6,
     7, 17,  2, 12, 22,
    23,  8, 18,  3, 13,
    14, 24,  9, 19,  4,
];

/// One Keccak round: theta, rho, pi, chi, then iota with `rc`.
#[inline(always)]
pub fn keccak_round(state: &mut KeccakState, rc: u64) {
    // theta
    let mut c = [0u64; 5];
    for (x, col) in c.iter_mut().enumerate() {
        *col = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            state[x + 5 * y] ^= d;
        }
    }

    // rho + pi
    let mut b = [0u64; KECCAK_LANES];
    for i in 0..KECCAK_LANES {
        b[PI[i]] = state[i].rotate_left(RHO[i]);
    }

    // chi
    for y in 0..5 {
        let row = 5 * y;
        for x in 0..5 {
            state[row + x] = b[row + x] ^ (!b[row + (x + 1) % 5] & b[row + (x + 2) % 5]);
        }
    }

    // iota
    state[0] ^= rc;
}

pub fn keccak_f1600(state: &mut KeccakState) {
    for &rc in RC.iter() {
        keccak_round(state, rc);
    }
}
