//! Image scaling operations
//!
//! Nearest-neighbor sampling only. Target pixel `(x, y)` reads source pixel
//!
//! ```text
//! sx = min(floor(x / (new_width / width)), width - 1)
//! sy = min(floor(y / (new_height / height)), height - 1)
//! ```
//!
//! so enlarging by an integer factor `k` replicates every source pixel into
//! a `k x k` block.

use crate::{TransformError, TransformResult};
use imgops_core::PixelMatrix;

/// Largest target, in pixels, that [`scale_by_sampling`] will allocate.
pub const MAX_SCALED_PIXELS: u64 = 1 << 28;

/// Resize a matrix to exactly `width x height` by nearest-neighbor sampling.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if either target
/// dimension is 0.
///
/// # Example
///
/// ```
/// use imgops_core::PixelMatrix;
/// use imgops_transform::resize_nearest_neighbor;
///
/// let m = PixelMatrix::new_filled(2, 2, [1, 2, 3]).unwrap();
/// let big = resize_nearest_neighbor(&m, 500, 500).unwrap();
/// assert_eq!(big.dimensions(), (500, 500));
/// ```
pub fn resize_nearest_neighbor(
    m: &PixelMatrix,
    width: u32,
    height: u32,
) -> TransformResult<PixelMatrix> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target size must be non-zero, got {width}x{height}"
        )));
    }

    let (src_w, src_h) = m.dimensions();
    let x_ratio = width as f64 / src_w as f64;
    let y_ratio = height as f64 / src_h as f64;

    let src_y: Vec<u32> = (0..height)
        .map(|y| ((y as f64 / y_ratio).floor() as u32).min(src_h - 1))
        .collect();

    let out = PixelMatrix::from_fn(width, height, |x, y| {
        let sx = ((x as f64 / x_ratio).floor() as u32).min(src_w - 1);
        m.get_pixel_unchecked(sx, src_y[y as usize])
    })?;
    Ok(out)
}

/// Scale a matrix by the given factors using nearest-neighbor sampling.
///
/// The target size is `round(width * scale_x) x round(height * scale_y)`,
/// at least 1 in each dimension.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if a factor is not a
/// positive finite number or the target exceeds [`MAX_SCALED_PIXELS`].
pub fn scale_by_sampling(
    m: &PixelMatrix,
    scale_x: f32,
    scale_y: f32,
) -> TransformResult<PixelMatrix> {
    for (name, s) in [("scale_x", scale_x), ("scale_y", scale_y)] {
        if !s.is_finite() || s <= 0.0 {
            return Err(TransformError::InvalidScaleFactor(format!(
                "{name} must be positive, got {s}"
            )));
        }
    }

    let width = (m.width() as f64 * scale_x as f64).round().max(1.0);
    let height = (m.height() as f64 * scale_y as f64).round().max(1.0);
    if width * height > MAX_SCALED_PIXELS as f64 {
        return Err(TransformError::InvalidScaleFactor(format!(
            "scaling by {scale_x}x{scale_y} gives a {width}x{height} target, over {MAX_SCALED_PIXELS} pixels"
        )));
    }
    resize_nearest_neighbor(m, width as u32, height as u32)
}
