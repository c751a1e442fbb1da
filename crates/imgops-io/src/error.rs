//! Errors of the codec layer

use thiserror::Error;

/// Failure while reading, writing, decoding or encoding an image
#[derive(Error, Debug)]
pub enum IoError {
    /// Reading or writing a file or stream failed
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown signature, or a codec that is unsupported or compiled out
    #[error("format not supported: {0}")]
    UnsupportedFormat(String),

    /// Headers or sample buffers that contradict each other
    #[error("malformed image: {0}")]
    InvalidData(String),

    /// Rejected by the underlying decoder
    #[error("decoding failed: {0}")]
    DecodeError(String),

    /// Rejected by the underlying encoder
    #[error("encoding failed: {0}")]
    EncodeError(String),

    /// Encoded input larger than [`DecodeOptions::max_input_bytes`](crate::DecodeOptions)
    #[error("{size} byte input rejected, at most {limit} bytes are accepted")]
    InputTooLarge {
        /// Length of the rejected input
        size: usize,
        /// Limit in force
        limit: usize,
    },

    /// Matrix construction failed
    #[error(transparent)]
    Core(#[from] imgops_core::Error),
}

/// Result of a codec operation
pub type IoResult<T> = Result<T, IoError>;
