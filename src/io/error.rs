//! Error types for grid index operations

use std::fmt;

/// Main error type for all grid index operations
#[derive(Debug)]
pub enum GridError {
    /// Grid parameter validation failed
    ///
    /// Construction is the only fallible operation on the index, so every
    /// error produced by this crate currently carries this shape.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for grid index results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
///
/// Accepts unsized values so callers can pass string literals directly
/// alongside formatted or numeric values.
pub fn invalid_parameter(
    parameter: &'static str,
    value: &(impl ToString + ?Sized),
    reason: &(impl ToString + ?Sized),
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
