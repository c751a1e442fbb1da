//! Errors of the resampling functions

use thiserror::Error;

/// Failure while resizing or scaling a matrix
#[derive(Debug, Error)]
pub enum TransformError {
    /// Matrix allocation or access failed
    #[error(transparent)]
    Core(#[from] imgops_core::Error),

    /// Scale factor that is not finite and positive
    #[error("bad scale factor: {0}")]
    InvalidScaleFactor(String),

    /// Target size or other argument out of range
    #[error("bad transform argument: {0}")]
    InvalidParameters(String),
}

/// Result of a transform operation
pub type TransformResult<T> = Result<T, TransformError>;
