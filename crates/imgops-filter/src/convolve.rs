//! Masked neighborhood filtering
//!
//! [`apply_filter`] slides a [`Mask`] over every interior pixel and hands
//! the weighted neighborhood of each channel to a [`Reducer`]. Pixels closer
//! than `size / 2` to any edge are copied through unchanged.
//!
//! Blur filters built on it:
//! - [`box_blur`] - mask of ones + [`Reduction::Mean`]
//! - [`gaussian_blur`] - Gaussian mask + [`Reduction::Sum`]

use crate::{FilterError, FilterResult, Mask, Reducer, Reduction};
use imgops_core::PixelMatrix;

/// Apply a mask and reducer to every interior pixel.
///
/// For each channel independently, every mask cell contributes
/// `neighbor * weight` to a sample buffer of mask-area length, which is
/// passed to `reducer` together with the index of the center cell.
/// Neighbors outside the matrix read as 0.
///
/// # Errors
///
/// Returns [`FilterError::MaskTooLarge`] if the mask is wider or taller
/// than the matrix, or any error from [`Reducer::validate`].
///
/// # Example
///
/// ```
/// use imgops_core::PixelMatrix;
/// use imgops_filter::{Mask, Reduction, apply_filter};
///
/// let m = PixelMatrix::new_filled(5, 5, [90, 90, 90]).unwrap();
/// let out = apply_filter(&m, &Mask::ones(3).unwrap(), &Reduction::Mean).unwrap();
/// assert_eq!(out.get_pixel(2, 2), Some([90, 90, 90]));
/// ```
pub fn apply_filter<R>(m: &PixelMatrix, mask: &Mask, reducer: &R) -> FilterResult<PixelMatrix>
where
    R: Reducer + ?Sized,
{
    reducer.validate()?;

    let size = mask.size();
    let (width, height) = m.dimensions();
    if size > width || size > height {
        return Err(FilterError::MaskTooLarge {
            size,
            width,
            height,
        });
    }

    let half = mask.center();
    let center = mask.center_index();
    let weights = mask.data();
    let mut samples = [
        vec![0.0f64; mask.len()],
        vec![0.0f64; mask.len()],
        vec![0.0f64; mask.len()],
    ];

    let mut out = m.to_mut();
    for x in half..width - half {
        for y in half..height - half {
            for my in 0..size {
                for mx in 0..size {
                    let cell = (my * size + mx) as usize;
                    let w = weights[cell];
                    let neighbor = m
                        .get_pixel(x + mx - half, y + my - half)
                        .unwrap_or([0, 0, 0]);
                    for c in 0..3 {
                        samples[c][cell] = neighbor[c] as f64 * w;
                    }
                }
            }

            let rgb = [
                reducer.reduce(&mut samples[0], center),
                reducer.reduce(&mut samples[1], center),
                reducer.reduce(&mut samples[2], center),
            ];
            out.set_pixel_unchecked(x, y, rgb);
        }
    }

    Ok(out.into())
}

/// Apply a box (averaging) blur with a `size x size` window.
pub fn box_blur(m: &PixelMatrix, size: u32) -> FilterResult<PixelMatrix> {
    apply_filter(m, &Mask::ones(size)?, &Reduction::Mean)
}

/// Apply a Gaussian blur with a `size x size` mask.
pub fn gaussian_blur(m: &PixelMatrix, size: u32, sigma: f64) -> FilterResult<PixelMatrix> {
    apply_filter(m, &Mask::gaussian(size, sigma)?, &Reduction::Sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::clamp_sample;

    fn create_test_image() -> PixelMatrix {
        PixelMatrix::from_fn(5, 5, |x, y| [(x * 50) as u8, (y * 50) as u8, 128]).unwrap()
    }

    #[test]
    fn test_identity_mask() {
        let m = create_test_image();
        let mut data = [0.0; 9];
        data[4] = 1.0;
        let mask = Mask::from_slice(3, &data).unwrap();
        let out = apply_filter(&m, &mask, &Reduction::Sum).unwrap();
        assert_eq!(out, m);
    }

    #[test]
    fn test_border_passes_through() {
        let m = create_test_image();
        let out = box_blur(&m, 3).unwrap();
        for i in 0..5 {
            assert_eq!(out.get_pixel(i, 0), m.get_pixel(i, 0));
            assert_eq!(out.get_pixel(i, 4), m.get_pixel(i, 4));
            assert_eq!(out.get_pixel(0, i), m.get_pixel(0, i));
            assert_eq!(out.get_pixel(4, i), m.get_pixel(4, i));
        }
    }

    #[test]
    fn test_box_blur_of_linear_ramp() {
        // the mean of a linear ramp over a symmetric window is its center
        let m = create_test_image();
        let out = box_blur(&m, 3).unwrap();
        for x in 1..4 {
            for y in 1..4 {
                assert_eq!(out.get_pixel(x, y), m.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_gaussian_blur_preserves_constant() {
        let m = PixelMatrix::new_filled(7, 7, [200, 100, 50]).unwrap();
        let out = gaussian_blur(&m, 5, 1.2).unwrap();
        assert!(out.data().iter().all(|&p| p == [200, 100, 50]));
    }

    #[test]
    fn test_channels_are_independent() {
        let m = PixelMatrix::from_fn(3, 3, |x, y| {
            if x == 1 && y == 1 { [255, 0, 0] } else { [0, 0, 255] }
        })
        .unwrap();
        let out = apply_filter(&m, &Mask::ones(3).unwrap(), &Reduction::Max).unwrap();
        assert_eq!(out.get_pixel(1, 1), Some([255, 0, 255]));
    }

    #[test]
    fn test_mask_too_large() {
        let m = PixelMatrix::new(4, 10).unwrap();
        assert!(matches!(
            box_blur(&m, 5),
            Err(FilterError::MaskTooLarge { size: 5, width: 4, height: 10 })
        ));
        assert!(matches!(box_blur(&m, 2), Err(FilterError::InvalidMask(_))));
    }

    #[test]
    fn test_closure_reducer_sees_center() {
        let m = create_test_image();
        let center_only = |s: &mut [f64], c: usize| clamp_sample(s[c]);
        let out = apply_filter(&m, &Mask::ones(5).unwrap(), &center_only).unwrap();
        assert_eq!(out, m);
    }
}
