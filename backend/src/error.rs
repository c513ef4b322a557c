//! Error types for shrub computation.
//!
//! Every fallible operation in the maths and figure layers returns
//! [`ShrubResult`]. The HTTP layer converts these into `AppError` responses.

use thiserror::Error;

/// Result type for shrub operations
pub type ShrubResult<T> = Result<T, ShrubError>;

/// Errors raised while iterating orbits or building figures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShrubError {
    /// Orbits are only defined for positive integers.
    #[error("invalid start value {0}: starting integer must be >= 1")]
    InvalidStart(u64),

    /// The successor of `value` does not fit in 64 bits.
    #[error("orbit of {start} overflows u64 at step {step} (value {value})")]
    Overflow { start: u64, step: usize, value: u64 },

    #[error("mode must be 'binary' or 'ternary' (got '{0}')")]
    InvalidScheme(String),

    /// A control value is outside the range the server accepts.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ShrubError {
    /// Build an [`ShrubError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        ShrubError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
