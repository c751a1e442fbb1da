//! Errors of the matrix model and point operations

use crate::Channel;
use thiserror::Error;

/// Failure of a core matrix operation
#[derive(Error, Debug)]
pub enum Error {
    /// Zero width or height
    #[error("invalid matrix dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Operands of a binary operation or concatenation do not line up
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Pixel or column index past the end
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Argument out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Histogram equalization on a channel whose values are all zero
    #[error("degenerate histogram: {channel} channel has no values above zero")]
    DegenerateHistogram { channel: Channel },

    /// Nothing to operate on, such as an empty concatenation list
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

/// Result of a core operation
pub type Result<T> = std::result::Result<T, Error>;
