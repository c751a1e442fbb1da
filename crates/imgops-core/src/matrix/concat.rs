//! Matrix concatenation
//!
//! Joins matrices side by side or stacked, framing each input with white
//! separator strips. With separator `s`, every input contributes
//! `s + width + s` columns (horizontal) or `s + height + s` rows (vertical).

use super::{MatrixData, PixelMatrix};
use crate::color::{Rgb, WHITE};
use crate::error::{Error, Result};

/// Concatenate matrices left to right.
///
/// Each input is bracketed on the left and right by a white strip
/// `separator` columns wide. All inputs must have the same height.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice,
/// [`Error::DimensionMismatch`] if the heights differ and
/// [`Error::InvalidDimension`] if the total width does not fit in `u32`.
///
/// # Example
///
/// ```
/// use imgops_core::{PixelMatrix, concat_horizontal};
///
/// let a = PixelMatrix::new(2, 3).unwrap();
/// let b = PixelMatrix::new(4, 3).unwrap();
/// let joined = concat_horizontal(&[a, b], 1).unwrap();
/// assert_eq!(joined.dimensions(), (1 + 2 + 1 + 1 + 4 + 1, 3));
/// ```
pub fn concat_horizontal(matrices: &[PixelMatrix], separator: u32) -> Result<PixelMatrix> {
    let first = matrices
        .first()
        .ok_or(Error::EmptyInput("concat_horizontal"))?;
    let height = first.height();

    let mut width = 0u32;
    for m in matrices {
        if m.height() != height {
            return Err(Error::DimensionMismatch {
                expected: (m.width(), height),
                actual: m.dimensions(),
            });
        }
        width = framed_extent(width, m.width(), separator).ok_or(Error::InvalidDimension {
            width: u32::MAX,
            height,
        })?;
    }

    let strip = vec![WHITE; separator as usize * height as usize];
    let mut data: Vec<Rgb> = Vec::with_capacity(width as usize * height as usize);
    for m in matrices {
        // Column-major storage makes each block a contiguous run.
        data.extend_from_slice(&strip);
        data.extend_from_slice(m.data());
        data.extend_from_slice(&strip);
    }

    Ok(PixelMatrix::from_data(MatrixData {
        width,
        height,
        data,
    }))
}

/// Concatenate matrices top to bottom.
///
/// Each input is bracketed above and below by a white strip `separator`
/// rows tall. The output width is the first input's width and every input
/// must match it.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice,
/// [`Error::DimensionMismatch`] if the widths differ and
/// [`Error::InvalidDimension`] if the total height does not fit in `u32`.
pub fn concat_vertical(matrices: &[PixelMatrix], separator: u32) -> Result<PixelMatrix> {
    let first = matrices.first().ok_or(Error::EmptyInput("concat_vertical"))?;
    let width = first.width();

    let mut height = 0u32;
    for m in matrices {
        if m.width() != width {
            return Err(Error::DimensionMismatch {
                expected: (width, m.height()),
                actual: m.dimensions(),
            });
        }
        height = framed_extent(height, m.height(), separator).ok_or(Error::InvalidDimension {
            width,
            height: u32::MAX,
        })?;
    }

    let strip = vec![WHITE; separator as usize];
    let mut data: Vec<Rgb> = Vec::with_capacity(width as usize * height as usize);
    for x in 0..width {
        for m in matrices {
            data.extend_from_slice(&strip);
            data.extend_from_slice(m.column(x));
            data.extend_from_slice(&strip);
        }
    }

    Ok(PixelMatrix::from_data(MatrixData {
        width,
        height,
        data,
    }))
}

/// `total + separator + len + separator`, or `None` on overflow.
fn framed_extent(total: u32, len: u32, separator: u32) -> Option<u32> {
    separator
        .checked_mul(2)?
        .checked_add(len)?
        .checked_add(total)
}
