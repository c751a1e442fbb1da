//! Error types for the test framework

use thiserror::Error;

/// Errors raised by the regression harness itself (not check failures)
#[derive(Debug, Error)]
pub enum TestError {
    /// Writing or reading back a regression image failed
    #[error("image '{path}': {source}")]
    Image {
        /// File that could not be processed
        path: String,
        /// Underlying codec or file error
        #[source]
        source: imgops_io::IoError,
    },

    /// Copying a golden file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
