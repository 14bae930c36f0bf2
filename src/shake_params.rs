// SHAKE128 parameters: Keccak-f[1600], r = 1344 bits, c = 256 bits, suffix 0x1F

pub const KECCAK_LANES: usize = 25;
pub const KECCAK_ROUNDS: usize = 24;
pub const LANE_BYTES: usize = 8;

pub const STATE_BYTES: usize = KECCAK_LANES * LANE_BYTES; // 200

pub const SHAKE128_RATE: usize = 168;
pub const SHAKE128_CAPACITY_BITS: usize = 8 * (STATE_BYTES - SHAKE128_RATE); // 256
pub const RATE_LANES: usize = SHAKE128_RATE / LANE_BYTES; // 21

// domain separation bits "1111" + first padding bit
pub const SHAKE_PAD: u8 = 0x1F;
// last padding bit, top bit of lane[RATE_LANES - 1]
pub const PAD_LAST_BIT: u64 = 1 << 63;

const _: () = assert!(SHAKE128_RATE % LANE_BYTES == 0);
const _: () = assert!(SHAKE128_CAPACITY_BITS == 256);
