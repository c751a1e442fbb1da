//! Elementwise matrix arithmetic
//!
//! Lifts the per-sample operators in [`crate::pixel`] to whole matrices:
//!
//! - Two-matrix combination (`combine`, `combine_with`)
//! - One-matrix mapping (`map`, `map_with`, `apply_unary`, `map_inplace`)
//! - Inversion (`invert`, `invert_channel_max`)
//!
//! Two matrices of different sizes combine into a matrix covering both;
//! samples outside either input read as 0.

use super::{MatrixData, PixelMatrix, PixelMatrixMut};
use crate::color::{BLACK, Rgb};
use crate::error::Result;
use crate::pixel::{BinaryOp, UnaryOp};

impl PixelMatrix {
    /// Combine two matrices sample by sample with a [`BinaryOp`].
    ///
    /// The result is `max(w1, w2) x max(h1, h2)`. Where a pixel exists in
    /// only one input the other contributes 0.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidParameter`] if the operator's
    /// parameter is rejected by [`BinaryOp::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use imgops_core::{BinaryOp, PixelMatrix};
    ///
    /// let a = PixelMatrix::new_filled(2, 2, [200, 10, 0]).unwrap();
    /// let b = PixelMatrix::new_filled(2, 2, [100, 10, 0]).unwrap();
    /// let sum = a.combine(&b, BinaryOp::Add).unwrap();
    /// assert_eq!(sum.get_pixel(0, 0), Some([255, 20, 0]));
    /// ```
    pub fn combine(&self, other: &PixelMatrix, op: BinaryOp) -> Result<PixelMatrix> {
        op.validate()?;
        Ok(self.combine_with(other, |a, b| op.apply(a, b)))
    }

    /// Combine two matrices sample by sample with an arbitrary function.
    ///
    /// Always allocates a new matrix; neither input is touched.
    pub fn combine_with<F>(&self, other: &PixelMatrix, f: F) -> PixelMatrix
    where
        F: Fn(u8, u8) -> u8,
    {
        let width = self.width().max(other.width());
        let height = self.height().max(other.height());

        let mut data = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                let a = self.get_pixel(x, y).unwrap_or(BLACK);
                let b = other.get_pixel(x, y).unwrap_or(BLACK);
                data.push([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2])]);
            }
        }

        PixelMatrix::from_data(MatrixData {
            width,
            height,
            data,
        })
    }

    /// Apply a [`UnaryOp`] to every sample, consuming the matrix.
    ///
    /// Storage is reused when this handle is the only owner.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidParameter`] if the operator's
    /// parameter is rejected by [`UnaryOp::validate`].
    pub fn map(self, op: UnaryOp) -> Result<PixelMatrix> {
        op.validate()?;
        Ok(self.map_with(|p| op.apply(p)))
    }

    /// Apply a function to every sample, consuming the matrix.
    pub fn map_with<F>(self, f: F) -> PixelMatrix
    where
        F: Fn(u8) -> u8,
    {
        let mut m = self.into_mut();
        m.map_inplace(f);
        m.into()
    }

    /// Complement every sample against 255.
    pub fn invert(self) -> PixelMatrix {
        self.map_with(crate::pixel::not)
    }

    /// Complement every sample against the maximum of its own channel.
    ///
    /// A channel whose largest value is `m` maps `v` to `m - v`, so the
    /// brightest sample of each channel becomes 0.
    pub fn invert_channel_max(self) -> PixelMatrix {
        let max = channel_max(self.data());
        let mut m = self.into_mut();
        for p in m.data_mut() {
            for c in 0..3 {
                p[c] = max[c] - p[c];
            }
        }
        m.into()
    }
}

impl PixelMatrixMut {
    /// Apply a [`UnaryOp`] to every sample in place.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidParameter`] if the operator's
    /// parameter is rejected. The matrix is left unchanged in that case.
    pub fn apply_unary(&mut self, op: UnaryOp) -> Result<()> {
        op.validate()?;
        self.map_inplace(|p| op.apply(p));
        Ok(())
    }

    /// Apply a function to every sample in place.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: Fn(u8) -> u8,
    {
        for p in self.data_mut() {
            *p = [f(p[0]), f(p[1]), f(p[2])];
        }
    }
}

fn channel_max(data: &[Rgb]) -> Rgb {
    data.iter().fold(BLACK, |acc, p| {
        [acc[0].max(p[0]), acc[1].max(p[1]), acc[2].max(p[2])]
    })
}
