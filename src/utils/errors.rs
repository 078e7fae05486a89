//! Error types for cone screening.
//!
//! Every operation in the crate is a leaf: invalid input fails the whole
//! call immediately, nothing is clamped or coerced. Callers decide whether
//! to skip, log or abort.

use std::fmt::Display;
use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrnError {
    /// Malformed or inconsistent input: shape mismatch, non-positive
    /// dimension, zero vector, subset size out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A seed vector already violates its own declared bounds.
    #[error("Value {value} is out of the allowed range {offset}-{limit}")]
    OutOfRange {
        /// The offending coordinate, rendered
        value: String,
        /// Inclusive lower bound
        offset: String,
        /// Inclusive upper bound
        limit: String,
    },
}

impl CrnError {
    /// Create an `InvalidArgument` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        CrnError::InvalidArgument(message.into())
    }

    /// Create an `OutOfRange` error for a coordinate outside `[offset, limit]`.
    pub fn out_of_range<T: Display>(value: T, offset: T, limit: T) -> Self {
        CrnError::OutOfRange {
            value: value.to_string(),
            offset: offset.to_string(),
            limit: limit.to_string(),
        }
    }

    /// Whether this is an `InvalidArgument` error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CrnError::InvalidArgument(_))
    }

    /// Whether this is an `OutOfRange` error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, CrnError::OutOfRange { .. })
    }
}

/// Result type using CrnError.
pub type CrnResult<T> = Result<T, CrnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CrnError::out_of_range(5, -1, 1);
        let s = format!("{}", err);
        assert!(s.contains('5'));
        assert!(s.contains("-1-1"));
        assert!(err.is_out_of_range());

        let err = CrnError::invalid("Ks has 2 columns, expected 3");
        assert_eq!(err.to_string(), "Invalid argument: Ks has 2 columns, expected 3");
        assert!(err.is_invalid_argument());
    }
}
