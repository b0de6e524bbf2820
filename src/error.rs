//! Shared error type for the estimators in this crate.

/// Errors produced by estimator construction, fitting, and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimatorError {
    /// Two arrays that must align in length or width do not.
    #[error("dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A prediction or fit metric was requested before `fit` ran.
    #[error("model not fitted, call fit() first")]
    NotFitted,

    /// The normal-equation matrix has no usable pivot and cannot be solved.
    #[error("matrix is singular or nearly singular")]
    SingularMatrix,

    /// An estimation method name that the crate does not recognize.
    #[error("unsupported fit method: {0:?}")]
    UnsupportedMethod(String),

    /// A configuration value outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, EstimatorError>;
