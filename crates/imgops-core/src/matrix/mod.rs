//! PixelMatrix - The RGB raster container
//!
//! `PixelMatrix` is the image type every imgops component operates on:
//! a rectangular grid of `[u8; 3]` RGB triples indexed `[x][y]`.
//!
//! # Layout
//!
//! - Pixels are stored column-major: index `x * height + y`
//! - Width is the outer (`x`) dimension, height the inner (`y`) one
//! - Both dimensions are non-zero
//!
//! # Ownership model
//!
//! `PixelMatrix` uses `Arc` for cheap cloning (shared ownership) and is
//! never mutated once built. To modify pixel data, convert to
//! [`PixelMatrixMut`] via [`PixelMatrix::try_into_mut`],
//! [`PixelMatrix::to_mut`] or [`PixelMatrix::into_mut`], then convert back
//! with `Into<PixelMatrix>`. In-place operations exist only on
//! `PixelMatrixMut`, so a buffer that is visible through another handle
//! can never change underneath it.

mod access;
pub mod arith;
pub mod concat;
pub mod convert;
pub mod histogram;

pub use concat::{concat_horizontal, concat_vertical};
pub use histogram::Histogram;

use crate::color::{BLACK, Rgb};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal matrix data
#[derive(Debug, Clone, PartialEq, Eq)]
struct MatrixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Column-major pixel triples
    data: Vec<Rgb>,
}

impl MatrixData {
    fn check_dimensions(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(width as usize * height as usize)
    }
}

/// Immutable RGB pixel matrix
///
/// # Examples
///
/// ```
/// use imgops_core::PixelMatrix;
///
/// let m = PixelMatrix::new_filled(4, 3, [255, 0, 0]).unwrap();
/// assert_eq!(m.width(), 4);
/// assert_eq!(m.height(), 3);
/// assert_eq!(m.get_pixel(3, 2), Some([255, 0, 0]));
/// assert_eq!(m.get_pixel(4, 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct PixelMatrix {
    inner: Arc<MatrixData>,
}

impl PixelMatrix {
    /// Create a black matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, BLACK)
    }

    /// Create a matrix with every pixel set to `rgb`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, rgb: Rgb) -> Result<Self> {
        let len = MatrixData::check_dimensions(width, height)?;
        Ok(Self::from_data(MatrixData {
            width,
            height,
            data: vec![rgb; len],
        }))
    }

    /// Create a matrix from column-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::IndexOutOfBounds`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<Rgb>) -> Result<Self> {
        let len = MatrixData::check_dimensions(width, height)?;
        if data.len() != len {
            return Err(Error::IndexOutOfBounds {
                index: data.len(),
                len,
            });
        }
        Ok(Self::from_data(MatrixData {
            width,
            height,
            data,
        }))
    }

    /// Create a matrix from nested `[x][y]` columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if there are no columns or the first
    /// column is empty, and [`Error::DimensionMismatch`] if the columns do
    /// not all have the same length.
    pub fn from_columns(columns: Vec<Vec<Rgb>>) -> Result<Self> {
        let height = columns.first().map(Vec::len).unwrap_or(0);
        if height == 0 {
            return Err(Error::EmptyInput("matrix columns"));
        }
        let width = columns.len() as u32;
        let height = height as u32;

        let mut data = Vec::with_capacity(width as usize * height as usize);
        for column in columns {
            if column.len() != height as usize {
                return Err(Error::DimensionMismatch {
                    expected: (width, height),
                    actual: (width, column.len() as u32),
                });
            }
            data.extend(column);
        }

        Self::from_raw(width, height, data)
    }

    /// Create a matrix by evaluating `f(x, y)` for every pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let len = MatrixData::check_dimensions(width, height)?;
        let mut data = Vec::with_capacity(len);
        for x in 0..width {
            for y in 0..height {
                data.push(f(x, y));
            }
        }
        Ok(Self::from_data(MatrixData {
            width,
            height,
            data,
        }))
    }

    fn from_data(inner: MatrixData) -> Self {
        PixelMatrix {
            inner: Arc::new(inner),
        }
    }

    /// Get the matrix width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the matrix height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Get raw access to the column-major pixel data.
    #[inline]
    pub fn data(&self) -> &[Rgb] {
        &self.inner.data
    }

    /// Get the pixels of column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    #[inline]
    pub fn column(&self, x: u32) -> &[Rgb] {
        let start = x as usize * self.inner.height as usize;
        &self.inner.data[start..start + self.inner.height as usize]
    }

    /// Copy out the nested `[x][y]` representation.
    pub fn to_columns(&self) -> Vec<Vec<Rgb>> {
        self.inner
            .data
            .chunks(self.inner.height as usize)
            .map(<[Rgb]>::to_vec)
            .collect()
    }

    /// Get the number of strong references to the shared data.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two matrices have the same width and height.
    pub fn sizes_equal(&self, other: &PixelMatrix) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Create a deep copy of this matrix.
    ///
    /// Unlike `clone()`, which shares data via `Arc`, the copy owns
    /// independent storage.
    pub fn deep_clone(&self) -> Self {
        Self::from_data((*self.inner).clone())
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelMatrixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelMatrixMut { inner: data }),
            Err(arc) => Err(PixelMatrix { inner: arc }),
        }
    }

    /// Create a mutable copy of this matrix.
    pub fn to_mut(&self) -> PixelMatrixMut {
        PixelMatrixMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Convert into a mutable matrix, copying only if the data is shared.
    pub fn into_mut(self) -> PixelMatrixMut {
        self.try_into_mut().unwrap_or_else(|shared| shared.to_mut())
    }
}

impl PartialEq for PixelMatrix {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for PixelMatrix {}

/// Mutable pixel matrix
///
/// Exclusively owned. Convert back to an immutable [`PixelMatrix`]
/// using `Into<PixelMatrix>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrixMut {
    inner: MatrixData,
}

impl PixelMatrixMut {
    /// Create a black mutable matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixelMatrix::new(width, height)?.into_mut())
    }

    /// Create a mutable matrix with every pixel set to `rgb`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, rgb: Rgb) -> Result<Self> {
        Ok(PixelMatrix::new_filled(width, height, rgb)?.into_mut())
    }

    /// Get the matrix width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the matrix height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[Rgb] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Rgb] {
        &mut self.inner.data
    }

    /// Get mutable access to column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    #[inline]
    pub fn column_mut(&mut self, x: u32) -> &mut [Rgb] {
        let height = self.inner.height as usize;
        let start = x as usize * height;
        &mut self.inner.data[start..start + height]
    }

    /// Set every pixel to `rgb`.
    pub fn fill(&mut self, rgb: Rgb) {
        self.inner.data.fill(rgb);
    }
}

impl From<PixelMatrixMut> for PixelMatrix {
    fn from(m: PixelMatrixMut) -> Self {
        PixelMatrix::from_data(m.inner)
    }
}
