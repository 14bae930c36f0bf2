// Byte-stream view of a finished SHAKE128 sponge.
// Samplers that pull one byte at a time (rejection sampling, CBD) read from
// here instead of calling squeeze per byte; output is refilled a block at a
// time and is identical to one long squeeze.

use rand_core::{CryptoRng, RngCore};

use crate::shake::Shake128;
use crate::shake_params::SHAKE128_RATE;

#[derive(Clone, Debug)]
pub struct ShakeStream {
    xof: Shake128,
    buf: [u8; SHAKE128_RATE],
    pos: usize, // next read position inside buf
}

impl ShakeStream {
    /// Absorb `seed` in one go, then ready to squeeze bytes.
    pub fn shake128(seed: &[u8]) -> Self {
        let mut xof = Shake128::new();
        // a fresh state is always absorbing
        let _ = xof.absorb(seed);
        Self::from(xof)
    }

    /// Get next byte from XOF stream.
    #[inline(always)]
    pub fn next_u8(&mut self) -> u8 {
        if self.pos >= SHAKE128_RATE {
            self.refill();
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        b
    }

    /// Fill `out` with bytes from the stream.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut off = 0usize;
        while off < out.len() {
            if self.pos >= SHAKE128_RATE {
                self.refill();
            }
            let take = core::cmp::min(SHAKE128_RATE - self.pos, out.len() - off);
            out[off..off + take].copy_from_slice(&self.buf[self.pos..self.pos + take]);
            self.pos += take;
            off += take;
        }
    }

    #[inline(always)]
    fn refill(&mut self) {
        self.xof.squeeze_into(&mut self.buf);
        self.pos = 0;
    }
}

impl From<Shake128> for ShakeStream {
    /// Take over an absorbing (or already squeezing) XOF; nothing is squeezed
    /// until the first read.
    fn from(xof: Shake128) -> Self {
        Self { xof, buf: [0u8; SHAKE128_RATE], pos: SHAKE128_RATE }
    }
}

impl RngCore for ShakeStream {
    fn next_u32(&mut self) -> u32 {
        let mut b = [0u8; 4];
        ShakeStream::fill_bytes(self, &mut b);
        u32::from_le_bytes(b)
    }

    fn next_u64(&mut self) -> u64 {
        let mut b = [0u8; 8];
        ShakeStream::fill_bytes(self, &mut b);
        u64::from_le_bytes(b)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        ShakeStream::fill_bytes(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        ShakeStream::fill_bytes(self, dest);
        Ok(())
    }
}

impl CryptoRng for ShakeStream {}
