//! Error types for permutation algebra, square transformations and experiment runs

use std::fmt;

/// Main error type for all crate operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatinError {
    /// Values are not a bijection on `0..n`
    InvalidPermutation {
        /// The rejected values
        values: Vec<usize>,
    },

    /// Rows do not form a Latin square
    InvalidLatinSquare {
        /// Number of rows supplied
        size: usize,
        /// Which part of the Latin property failed
        reason: String,
    },

    /// Operation is undefined on a chain without permutations
    ///
    /// This is the soft failure of the order computation: callers check for
    /// it before using the result, nothing panics.
    EmptyChain {
        /// Operation that received the empty chain
        operation: &'static str,
    },

    /// Operands have incompatible sizes
    DimensionMismatch {
        /// Operation that compared the sizes
        operation: &'static str,
        /// Size required by the operation
        expected: usize,
        /// Size actually supplied
        found: usize,
    },

    /// Row or column index outside the chain
    IndexOutOfBounds {
        /// Operation that received the index
        operation: &'static str,
        /// The invalid index
        index: usize,
        /// Number of valid positions
        len: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Worker pool for an experiment run could not be created
    ThreadPool {
        /// Description reported by the pool builder
        reason: String,
    },
}

impl fmt::Display for LatinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPermutation { values } => {
                write!(
                    f,
                    "Invalid permutation {values:?}: must contain each integer from 0 to {} exactly once",
                    values.len().saturating_sub(1)
                )
            }
            Self::InvalidLatinSquare { size, reason } => {
                write!(f, "Invalid Latin square of size {size}: {reason}")
            }
            Self::EmptyChain { operation } => {
                write!(f, "Empty permutation chain received by {operation}")
            }
            Self::DimensionMismatch {
                operation,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Size mismatch in {operation}: expected {expected}, found {found}"
                )
            }
            Self::IndexOutOfBounds {
                operation,
                index,
                len,
            } => {
                write!(
                    f,
                    "Index {index} is out of bounds in {operation} (length {len})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ThreadPool { reason } => {
                write!(f, "Failed to build worker pool: {reason}")
            }
        }
    }
}

impl std::error::Error for LatinError {}

impl From<rayon::ThreadPoolBuildError> for LatinError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool {
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, LatinError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LatinError {
    LatinError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a size mismatch error
pub const fn dimension_mismatch(
    operation: &'static str,
    expected: usize,
    found: usize,
) -> LatinError {
    LatinError::DimensionMismatch {
        operation,
        expected,
        found,
    }
}
