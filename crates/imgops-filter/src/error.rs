//! Errors of the neighborhood filters

use thiserror::Error;

/// Failure while convolving or rank filtering a matrix
#[derive(Debug, Error)]
pub enum FilterError {
    /// Matrix allocation or access failed
    #[error(transparent)]
    Core(#[from] imgops_core::Error),

    /// Mask that is empty, even-sized or inconsistent
    #[error("bad mask: {0}")]
    InvalidMask(String),

    /// Mask does not fit inside the matrix
    #[error("mask of size {size} does not fit a {width}x{height} matrix")]
    MaskTooLarge {
        /// Mask side length
        size: u32,
        /// Matrix width
        width: u32,
        /// Matrix height
        height: u32,
    },

    /// Radius, rank or other argument out of range
    #[error("bad filter argument: {0}")]
    InvalidParameters(String),
}

/// Result of a filter operation
pub type FilterResult<T> = Result<T, FilterError>;
