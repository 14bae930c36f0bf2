// Usage errors of the SHAKE128 sponge. The permutation and the lane codec
// cannot fail; the only contract a caller can break is phase ordering.

use thiserror::Error;

use crate::sponge::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum XofError {
    /// `absorb` after the first non-empty `squeeze`.
    #[error("cannot {op} while {phase}")]
    InvalidPhase { op: &'static str, phase: Phase },
}

pub type XofResult<T> = Result<T, XofError>;
