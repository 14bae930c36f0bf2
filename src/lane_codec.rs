// Little-endian packing between bytes and 64-bit Keccak lanes.
// byte 0 of a lane is its least significant byte.

use crate::shake_params::LANE_BYTES;

#[inline(always)]
pub fn bytes_to_lane(bytes: &[u8; LANE_BYTES]) -> u64 {
    u64::from_le_bytes(*bytes)
}

#[inline(always)]
pub fn lane_to_bytes(lane: u64) -> [u8; LANE_BYTES] {
    lane.to_le_bytes()
}

/// Pack `bytes` into a lane starting at byte `offset`, zero everywhere else.
///
/// `offset + bytes.len()` must not exceed 8.
#[inline]
pub fn load_partial_lane(bytes: &[u8], offset: usize) -> u64 {
    debug_assert!(offset + bytes.len() <= LANE_BYTES);
    let mut t = [0u8; LANE_BYTES];
    t[offset..offset + bytes.len()].copy_from_slice(bytes);
    bytes_to_lane(&t)
}

/// Write bytes `offset..offset + out.len()` of `lane` into `out`.
#[inline]
pub fn store_partial_lane(lane: u64, offset: usize, out: &mut [u8]) {
    debug_assert!(offset + out.len() <= LANE_BYTES);
    let t = lane_to_bytes(lane);
    out.copy_from_slice(&t[offset..offset + out.len()]);
}

/// XOR whole lanes from `bytes` into `lanes`, one lane per 8 bytes.
#[inline]
pub fn xor_lanes(lanes: &mut [u64], bytes: &[u8]) {
    debug_assert!(bytes.len() % LANE_BYTES == 0);
    debug_assert!(bytes.len() / LANE_BYTES <= lanes.len());
    for (lane, chunk) in lanes.iter_mut().zip(bytes.chunks_exact(LANE_BYTES)) {
        let mut t = [0u8; LANE_BYTES];
        t.copy_from_slice(chunk);
        *lane ^= bytes_to_lane(&t);
    }
}

/// Emit whole lanes into `out`, one lane per 8 bytes.
#[inline]
pub fn store_lanes(lanes: &[u64], out: &mut [u8]) {
    debug_assert!(out.len() % LANE_BYTES == 0);
    debug_assert!(out.len() / LANE_BYTES <= lanes.len());
    for (lane, chunk) in lanes.iter().zip(out.chunks_exact_mut(LANE_BYTES)) {
        chunk.copy_from_slice(&lane_to_bytes(*lane));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_zero_is_least_significant() {
        let lane = bytes_to_lane(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        assert_eq!(lane, 0x0807_0605_0403_0201);
        assert_eq!(lane_to_bytes(0x0807_0605_0403_0201), [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn lane_roundtrip_edges() {
        for v in [0u64, 1, u64::MAX, 1 << 63, 0xDEAD_BEEF_0BAD_F00D] {
            assert_eq!(bytes_to_lane(&lane_to_bytes(v)), v);
        }
    }

    #[test]
    fn partial_lane_lands_at_offset() {
        assert_eq!(load_partial_lane(&[0xAA, 0xBB], 3), 0x0000_00BB_AA00_0000);
        assert_eq!(load_partial_lane(&[], 5), 0);
        assert_eq!(load_partial_lane(&[0x1F], 7), 0x1F00_0000_0000_0000);

        let mut out = [0u8; 3];
        store_partial_lane(0x0807_0605_0403_0201, 5, &mut out);
        assert_eq!(out, [6, 7, 8]);
    }

    #[test]
    fn xor_and_store_whole_lanes() {
        let mut lanes = [0u64; 3];
        let bytes: Vec<u8> = (0u8..16).collect();
        xor_lanes(&mut lanes, &bytes);
        xor_lanes(&mut lanes, &bytes[..8]);
        assert_eq!(lanes[0], 0);
        assert_eq!(lanes[1], 0x0F0E_0D0C_0B0A_0908);
        assert_eq!(lanes[2], 0);

        let mut out = [0u8; 16];
        store_lanes(&lanes, &mut out);
        assert_eq!(&out[..8], &[0u8; 8]);
        assert_eq!(&out[8..], &bytes[8..]);
    }
}
