// SHAKE128 sponge over Keccak-f[1600]: streaming absorb, one-time padding,
// streaming squeeze. Chunking of input or output never changes the result.
//
// Cursor (`pos`) is a byte offset inside the 168-byte rate window and stays
// in 0..SHAKE128_RATE between calls.
//  - Absorbing: next input byte is XORed at `pos`. A full block is permuted
//    as soon as it is filled.
//  - Squeezing: `pos == 0` means the current block is used up (or was never
//    produced), so the next output byte needs a fresh permutation first.

use core::fmt;

use crate::error::{XofError, XofResult};
use crate::keccak::{keccak_f1600, KeccakState};
use crate::lane_codec::{load_partial_lane, store_lanes, store_partial_lane, xor_lanes};
use crate::shake_params::{
    KECCAK_LANES, LANE_BYTES, PAD_LAST_BIT, RATE_LANES, SHAKE128_RATE, SHAKE_PAD,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Absorbing,
    Squeezing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Absorbing => f.write_str("absorbing"),
            Phase::Squeezing => f.write_str("squeezing"),
        }
    }
}

// ----------------------------------------------------------------------------
// Cursor arithmetic
// ----------------------------------------------------------------------------

#[inline(always)]
pub fn lane_index(pos: usize) -> usize {
    pos / LANE_BYTES
}

#[inline(always)]
pub fn lane_offset(pos: usize) -> usize {
    pos % LANE_BYTES
}

/// Bytes needed to bring a mid-lane cursor to the next lane boundary,
/// capped by what is `available`. Zero when already lane aligned.
#[inline]
pub fn head_len(pos: usize, available: usize) -> usize {
    match lane_offset(pos) {
        0 => 0,
        off => (LANE_BYTES - off).min(available),
    }
}

#[inline(always)]
pub fn bytes_left_in_block(pos: usize) -> usize {
    SHAKE128_RATE - pos
}

/// Split `len` into (whole-lane bytes, trailing bytes).
#[inline]
pub fn split_at_lane_boundary(len: usize) -> (usize, usize) {
    let whole = len - len % LANE_BYTES;
    (whole, len - whole)
}

// ----------------------------------------------------------------------------
// Sponge
// ----------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct SpongeState {
    lanes: KeccakState,
    pos: usize,
    phase: Phase,
    absorbed: u64,
}

impl SpongeState {
    pub fn new() -> Self {
        Self {
            lanes: [0u64; KECCAK_LANES],
            pos: 0,
            phase: Phase::Absorbing,
            absorbed: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total number of bytes absorbed so far.
    pub fn absorbed_len(&self) -> u64 {
        self.absorbed
    }

    #[cfg(test)]
    fn lanes(&self) -> &KeccakState {
        &self.lanes
    }

    /// XOR `input` into the state, permuting after every completed block.
    ///
    /// Fails with [`XofError::InvalidPhase`] once squeezing has started; the
    /// state is left untouched in that case.
    pub fn absorb(&mut self, input: &[u8]) -> XofResult<()> {
        if self.phase == Phase::Squeezing {
            log::debug!("rejected absorb of {} bytes after finalize", input.len());
            return Err(XofError::InvalidPhase { op: "absorb", phase: self.phase });
        }
        self.absorbed += input.len() as u64;

        let mut off = 0usize;

        // finish a lane left open by the previous call
        let head = head_len(self.pos, input.len());
        if head > 0 {
            self.lanes[lane_index(self.pos)] ^=
                load_partial_lane(&input[..head], lane_offset(self.pos));
            self.pos += head;
            off = head;
        }

        // rest of the current block, then whole blocks straight from input
        while input.len() - off >= bytes_left_in_block(self.pos) {
            let n = bytes_left_in_block(self.pos);
            debug_assert!(n == 0 || lane_offset(self.pos) == 0);
            xor_lanes(&mut self.lanes[lane_index(self.pos)..RATE_LANES], &input[off..off + n]);
            keccak_f1600(&mut self.lanes);
            self.pos = 0;
            off += n;
        }

        // whole lanes, then a trailing partial lane, no permutation
        let (whole, tail) = split_at_lane_boundary(input.len() - off);
        if whole > 0 {
            xor_lanes(&mut self.lanes[lane_index(self.pos)..RATE_LANES], &input[off..off + whole]);
            self.pos += whole;
            off += whole;
        }
        if tail > 0 {
            self.lanes[lane_index(self.pos)] ^= load_partial_lane(&input[off..], 0);
            self.pos += tail;
        }

        debug_assert!(self.pos < SHAKE128_RATE);
        Ok(())
    }

    /// pad10*1 with the SHAKE suffix; runs once, on the first non-empty squeeze.
    fn finalize(&mut self) {
        if self.phase == Phase::Squeezing {
            return;
        }
        self.lanes[lane_index(self.pos)] ^=
            load_partial_lane(&[SHAKE_PAD], lane_offset(self.pos));
        self.lanes[RATE_LANES - 1] ^= PAD_LAST_BIT;
        self.pos = 0;
        self.phase = Phase::Squeezing;
        log::trace!("shake128 finalized after {} absorbed bytes", self.absorbed);
    }

    /// Fill `out` with the next `out.len()` bytes of the output stream.
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        if out.is_empty() {
            return;
        }
        self.finalize();

        let mut off = 0usize;

        // rest of a lane handed out partially by the previous call
        let head = head_len(self.pos, out.len());
        if head > 0 {
            let lane = self.lanes[lane_index(self.pos)];
            store_partial_lane(lane, lane_offset(self.pos), &mut out[..head]);
            self.pos += head;
            off = head;
        }

        // rest of the already permuted block
        if self.pos != 0 && out.len() - off >= bytes_left_in_block(self.pos) {
            let n = bytes_left_in_block(self.pos);
            store_lanes(&self.lanes[lane_index(self.pos)..RATE_LANES], &mut out[off..off + n]);
            self.pos = 0;
            off += n;
        }

        // whole fresh blocks
        while out.len() - off >= SHAKE128_RATE {
            keccak_f1600(&mut self.lanes);
            store_lanes(&self.lanes[..RATE_LANES], &mut out[off..off + SHAKE128_RATE]);
            off += SHAKE128_RATE;
        }

        if off == out.len() {
            return;
        }
        if self.pos == 0 {
            keccak_f1600(&mut self.lanes);
        }

        let (whole, tail) = split_at_lane_boundary(out.len() - off);
        if whole > 0 {
            store_lanes(&self.lanes[lane_index(self.pos)..RATE_LANES], &mut out[off..off + whole]);
            self.pos += whole;
            off += whole;
        }
        if tail > 0 {
            store_partial_lane(self.lanes[lane_index(self.pos)], 0, &mut out[off..]);
            self.pos += tail;
        }

        debug_assert!(self.pos < SHAKE128_RATE);
    }
}

impl Default for SpongeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absorbed(chunks: &[&[u8]]) -> SpongeState {
        let mut s = SpongeState::new();
        for c in chunks {
            s.absorb(c).unwrap();
        }
        s
    }

    #[test]
    fn cursor_helpers() {
        assert_eq!(lane_index(0), 0);
        assert_eq!(lane_index(167), 20);
        assert_eq!(lane_offset(13), 5);

        assert_eq!(head_len(0, 100), 0);
        assert_eq!(head_len(3, 100), 5);
        assert_eq!(head_len(3, 2), 2);
        assert_eq!(head_len(167, 9), 1);

        assert_eq!(bytes_left_in_block(0), SHAKE128_RATE);
        assert_eq!(bytes_left_in_block(160), 8);

        assert_eq!(split_at_lane_boundary(0), (0, 0));
        assert_eq!(split_at_lane_boundary(7), (0, 7));
        assert_eq!(split_at_lane_boundary(17), (16, 1));
    }

    #[test]
    fn new_state_is_zero_and_absorbing() {
        let s = SpongeState::new();
        assert_eq!(s.lanes(), &[0u64; KECCAK_LANES]);
        assert_eq!(s.position(), 0);
        assert_eq!(s.phase(), Phase::Absorbing);
    }

    #[test]
    fn cursor_tracks_absorbed_bytes() {
        let s = absorbed(&[&[1u8; 5]]);
        assert_eq!(s.position(), 5);
        assert_eq!(s.lanes()[0], 0x0000_0001_0101_0101);

        let s = absorbed(&[&[1u8; 5], &[2u8; 12]]);
        assert_eq!(s.position(), 17);

        // exactly one block permutes and wraps the cursor
        let s = absorbed(&[&[0u8; SHAKE128_RATE]]);
        assert_eq!(s.position(), 0);
        let mut zero_perm = [0u64; KECCAK_LANES];
        keccak_f1600(&mut zero_perm);
        assert_eq!(s.lanes(), &zero_perm);
    }

    #[test]
    fn block_completed_by_partial_lane_is_permuted() {
        let a = absorbed(&[&[9u8; 163], &[9u8; 5]]);
        let b = absorbed(&[&[9u8; SHAKE128_RATE]]);
        assert_eq!(a.position(), 0);
        assert_eq!(a.lanes(), b.lanes());
    }

    #[test]
    fn empty_absorb_is_noop() {
        let mut s = absorbed(&[&[7u8; 11]]);
        let before = s.clone();
        s.absorb(&[]).unwrap();
        assert_eq!(s.position(), before.position());
        assert_eq!(s.lanes(), before.lanes());
    }

    #[test]
    fn empty_squeeze_does_not_finalize() {
        let mut s = absorbed(&[b"abc"]);
        s.squeeze_into(&mut [0u8; 0]);
        assert_eq!(s.phase(), Phase::Absorbing);
        assert_eq!(s.position(), 3);
        assert!(s.absorb(b"d").is_ok());
    }

    #[test]
    fn padding_applied_once() {
        let mut s = SpongeState::new();
        let mut out = [0u8; 1];
        s.squeeze_into(&mut out);
        assert_eq!(s.phase(), Phase::Squeezing);
        assert_eq!(s.position(), 1);

        // padding of the empty message: 0x1F at byte 0, 0x80 at byte 167
        let mut expected = [0u64; KECCAK_LANES];
        expected[0] = SHAKE_PAD as u64;
        expected[RATE_LANES - 1] = PAD_LAST_BIT;
        keccak_f1600(&mut expected);
        assert_eq!(s.lanes(), &expected);

        s.squeeze_into(&mut out);
        assert_eq!(s.lanes(), &expected);
        assert_eq!(s.position(), 2);
    }

    #[test]
    fn absorb_after_squeeze_is_rejected() {
        let mut s = absorbed(&[b"seed"]);
        let mut out = [0u8; 4];
        s.squeeze_into(&mut out);
        let snapshot = s.clone();

        let err = s.absorb(b"more").unwrap_err();
        assert_eq!(err, XofError::InvalidPhase { op: "absorb", phase: Phase::Squeezing });
        assert_eq!(s.lanes(), snapshot.lanes());
        assert_eq!(s.position(), snapshot.position());
        assert_eq!(s.absorbed_len(), 4);
    }

    #[test]
    fn squeeze_cursor_wraps_at_block_end() {
        let mut s = SpongeState::new();
        let mut out = vec![0u8; SHAKE128_RATE - 3];
        s.squeeze_into(&mut out);
        assert_eq!(s.position(), SHAKE128_RATE - 3);

        let mut rest = [0u8; 3];
        s.squeeze_into(&mut rest);
        assert_eq!(s.position(), 0);

        let mut next = [0u8; 10];
        s.squeeze_into(&mut next);
        assert_eq!(s.position(), 10);
    }
}
