//! Rank filtering operations
//!
//! Order-statistic filters over a square window of ones:
//!
//! - [`max_filter`] - dilation (rank 1.0)
//! - [`min_filter`] - erosion (rank 0.0)
//! - [`median_filter`] - rank 0.5
//! - [`rank_filter`] - arbitrary rank in `[0, 1]`
//! - [`conservative_smooth`] - clamp each pixel into its neighbors' range

use crate::{FilterResult, Mask, Reduction, apply_filter};
use imgops_core::PixelMatrix;

/// Apply rank filter.
///
/// # Arguments
/// * `m` - Input matrix
/// * `size` - Window side length (odd)
/// * `rank` - Rank value in [0.0, 1.0] (0.0=min, 0.5=median, 1.0=max)
pub fn rank_filter(m: &PixelMatrix, size: u32, rank: f64) -> FilterResult<PixelMatrix> {
    apply_filter(m, &Mask::ones(size)?, &Reduction::Rank(rank))
}

/// Apply median filter.
pub fn median_filter(m: &PixelMatrix, size: u32) -> FilterResult<PixelMatrix> {
    apply_filter(m, &Mask::ones(size)?, &Reduction::Median)
}

/// Apply minimum filter.
pub fn min_filter(m: &PixelMatrix, size: u32) -> FilterResult<PixelMatrix> {
    apply_filter(m, &Mask::ones(size)?, &Reduction::Min)
}

/// Apply maximum filter.
pub fn max_filter(m: &PixelMatrix, size: u32) -> FilterResult<PixelMatrix> {
    apply_filter(m, &Mask::ones(size)?, &Reduction::Max)
}

/// Apply conservative smoothing.
///
/// A pixel brighter than every neighbor in the window is lowered to the
/// brightest neighbor; one darker than every neighbor is raised to the
/// darkest. Other pixels are unchanged.
pub fn conservative_smooth(m: &PixelMatrix, size: u32) -> FilterResult<PixelMatrix> {
    apply_filter(m, &Mask::ones(size)?, &Reduction::Conservative)
}
