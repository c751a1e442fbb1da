//! imgops-filter - Masked neighborhood filters
//!
//! This crate provides a generic filter engine and the filters built on it:
//!
//! - [`Mask`] - square weight grids (uniform, Gaussian, custom)
//! - [`Reducer`] / [`Reduction`] - map a weighted neighborhood to one sample
//! - [`apply_filter`] - slide a mask over a matrix and reduce every channel
//! - Blur operations (box blur, Gaussian blur)
//! - Rank filtering (min, max, median, arbitrary rank, conservative smoothing)
//!
//! Mask shape, weight semantics and reduction are independent: any mask
//! can be paired with any reducer.

pub mod convolve;
mod error;
pub mod kernel;
pub mod rank;
pub mod reduce;

pub use error::{FilterError, FilterResult};
pub use kernel::Mask;
pub use reduce::{Reducer, Reduction};

// Re-export commonly used functions
pub use convolve::{apply_filter, box_blur, gaussian_blur};
pub use rank::{conservative_smooth, max_filter, median_filter, min_filter, rank_filter};
