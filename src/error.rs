//! Error types for vector operations

use thiserror::Error;

/// Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Errors that can occur during vector operations
///
/// All of these are deterministic input-validation failures; none are
/// transient, so callers should not retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VectorError {
    /// Requested construction length is negative
    #[error("length cannot be negative: {0}")]
    InvalidLength(i64),

    /// Index outside `[0, len)` for indexed get/set
    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Length of the vector at the time of the access
        len: usize,
    },

    /// Operand lengths differ in an elementwise binary operation
    #[error("vector length mismatch: {left} != {right}")]
    LengthMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },

    /// Statistic requested on a zero-length vector
    #[error("empty vector")]
    EmptyVector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_error() {
        let err = VectorError::InvalidLength(-3);
        assert_eq!(err.to_string(), "length cannot be negative: -3");
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = VectorError::IndexOutOfRange { index: 4, len: 4 };
        assert_eq!(
            err.to_string(),
            "index 4 out of range for vector of length 4"
        );
    }

    #[test]
    fn test_length_mismatch_error() {
        let err = VectorError::LengthMismatch { left: 1, right: 2 };
        assert_eq!(err.to_string(), "vector length mismatch: 1 != 2");
    }

    #[test]
    fn test_empty_vector_error() {
        let err = VectorError::EmptyVector;
        assert_eq!(err.to_string(), "empty vector");
    }

    #[test]
    fn test_error_equality() {
        let err1 = VectorError::LengthMismatch { left: 1, right: 2 };
        let err2 = VectorError::LengthMismatch { left: 1, right: 2 };
        assert_eq!(err1, err2);
    }
}
