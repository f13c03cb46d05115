//! Error handling for the LWE core
//!
//! Every failure is a caller error: out-of-range parameters or inconsistent
//! sizes. Nothing here is transient, so nothing is retried. A decryption that
//! returns the wrong bit because of accumulated noise is not an error.

use thiserror::Error;

/// LWE operation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LweError {
    /// A parameter or input value is out of range or inconsistent
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A vector length does not match the key dimension
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl LweError {
    /// Returns true for `InvalidParameter`
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }

    /// Returns true for `DimensionMismatch`
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}

/// Result type for LWE operations
pub type Result<T> = std::result::Result<T, LweError>;

/// Create an `InvalidParameter` error with format string support
macro_rules! invalid_param {
    ($($arg:tt)*) => {
        $crate::error::LweError::InvalidParameter(format!($($arg)*))
    };
}

pub(crate) use invalid_param;

/// Fail with `DimensionMismatch` unless `actual == expected`
pub(crate) fn ensure_dim(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(LweError::DimensionMismatch { expected, actual })
    }
}
