// SHAKE128 XOF: init / absorb / squeeze facade over the sponge, plus
// one-shot helpers for callers that have the whole input up front.

use crate::error::XofResult;
use crate::sponge::{Phase, SpongeState};

/// Incremental SHAKE128.
///
/// ```
/// use lattice_xof::shake::Shake128;
///
/// let mut xof = Shake128::new();
/// xof.absorb(b"ab").unwrap();
/// xof.absorb(b"c").unwrap();
/// let out = xof.squeeze(32);
/// assert_eq!(out, lattice_xof::shake::shake128_vec(b"abc", 32));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Shake128 {
    sponge: SpongeState,
}

impl Shake128 {
    pub fn new() -> Self {
        Self { sponge: SpongeState::new() }
    }

    /// Absorb more input. Any number of calls with any chunk sizes give the
    /// same result as one call with the concatenation.
    pub fn absorb(&mut self, input: &[u8]) -> XofResult<()> {
        self.sponge.absorb(input)
    }

    /// Next `len` bytes of output. Pads the input on the first non-empty call.
    pub fn squeeze(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.sponge.squeeze_into(&mut out);
        out
    }

    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        self.sponge.squeeze_into(out);
    }

    pub fn is_squeezing(&self) -> bool {
        self.sponge.phase() == Phase::Squeezing
    }

    pub fn sponge(&self) -> &SpongeState {
        &self.sponge
    }
}

pub fn shake128(input: &[u8], out: &mut [u8]) {
    let mut xof = Shake128::new();
    // a fresh state is always absorbing
    let _ = xof.absorb(input);
    xof.squeeze_into(out);
}

pub fn shake128_vec(input: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    shake128(input, &mut out);
    out
}
