//! Error types for numprim operations

use thiserror::Error;

/// Result type for numprim operations
pub type Result<T> = std::result::Result<T, NumprimError>;

/// Coarse error classification
///
/// Every [`NumprimError`] falls into exactly one of these classes. Callers that
/// only care about the class (e.g. "was this a bad argument?") can match on
/// [`NumprimError::kind`] instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input: negative tolerance, non-positive size, empty input, size mismatch
    InvalidArgument,
    /// Accessor index outside `[0, len)`
    IndexOutOfRange,
    /// Division by zero (zero norm, `w == 0`)
    Arithmetic,
    /// Operation not valid for the vector's current shape
    IllegalState,
}

/// Errors that can occur during numprim operations
#[derive(Debug, Error, PartialEq)]
pub enum NumprimError {
    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Size mismatch between operands
    #[error("Incompatible vector sizes for '{op}': {expected} vs {actual}")]
    SizeMismatch {
        /// Operation that was attempted
        op: &'static str,
        /// Length of the receiver
        expected: usize,
        /// Length of the other operand
        actual: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Vector length
        len: usize,
    },

    /// Division by zero (e.g., normalizing zero vector)
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Operation not valid in the current state
    #[error("Illegal state: {0}")]
    IllegalState(String),
}

impl NumprimError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::SizeMismatch { .. } => ErrorKind::InvalidArgument,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::DivisionByZero(_) => ErrorKind::Arithmetic,
            Self::IllegalState(_) => ErrorKind::IllegalState,
        }
    }
}
