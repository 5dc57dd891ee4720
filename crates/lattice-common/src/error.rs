//! Error types for lattice construction.

use thiserror::Error;

/// Result type alias using LatticeError.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Primary error type for lattice operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LatticeError {
    #[error(
        "Invalid lattice dimensions m={m}, n={n}: both must be between 1 and {max}",
        max = crate::dims::MAX_EXTENT
    )]
    InvalidDimensions { m: u32, n: u32 },

    #[error("Invalid tube repeat count: {0} (must be at least 1, with m * repeat within u32)")]
    InvalidRepeat(u32),
}

impl LatticeError {
    /// Short machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            LatticeError::InvalidDimensions { .. } => "InvalidDimensions",
            LatticeError::InvalidRepeat(_) => "InvalidRepeat",
        }
    }
}
