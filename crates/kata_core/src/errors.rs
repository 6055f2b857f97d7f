//! Minimal error set for core value construction, access and parsing.

use core::fmt;

/// Errors surfaced by `kata_core` types. Kept `Copy` so callers can match
/// and re-raise without allocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoreError {
    /// A fraction would end up with a zero denominator.
    ZeroDenominator,
    /// Indexed access on a fraction with an index other than 0 or 1.
    IndexOutOfBounds(usize),
    /// `i32` overflow while combining fraction terms.
    Overflow(&'static str),
    /// Text that is neither `n` nor `n/d`.
    InvalidFraction,
    /// Id token outside `[A-Za-z0-9_.:-]{1,64}`.
    InvalidToken,
}

impl CoreError {
    /// True for the invalid-argument family (bad construction input).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CoreError::ZeroDenominator | CoreError::InvalidFraction | CoreError::InvalidToken
        )
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::ZeroDenominator => write!(f, "denominator cannot be zero"),
            CoreError::IndexOutOfBounds(i) => write!(f, "index must be 0 or 1, got {i}"),
            CoreError::Overflow(ctx) => write!(f, "arithmetic overflow: {ctx}"),
            CoreError::InvalidFraction => write!(f, "invalid fraction (expected `n` or `n/d`)"),
            CoreError::InvalidToken => write!(f, "invalid token"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}
