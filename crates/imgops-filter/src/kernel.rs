//! Filter masks
//!
//! A [`Mask`] is a square grid of `f64` weights with an odd side length.
//! Its center cell sits at `(size / 2, size / 2)`.
//!
//! - [`Mask::ones`] - every weight 1 (unnormalized; the reducer averages)
//! - [`Mask::gaussian`] - Gaussian weights normalized to sum to 1
//! - [`Mask::from_slice`] - arbitrary weights

use crate::{FilterError, FilterResult};

/// A square filter mask
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    /// Side length (odd)
    size: u32,
    /// Weights (row-major order)
    data: Vec<f64>,
}

impl Mask {
    /// Validate `size` and return the number of cells.
    ///
    /// The cell count must fit in `u32`, so sizes above 65535 are rejected.
    fn cell_count(size: u32) -> FilterResult<usize> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidMask(format!(
                "size must be odd and non-zero, got {size}"
            )));
        }
        size.checked_mul(size)
            .map(|n| n as usize)
            .ok_or_else(|| FilterError::InvalidMask(format!("size {size} has too many cells")))
    }

    /// Create a mask with every weight set to 1.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidMask`] if `size` is even, zero or above
    /// 65535.
    pub fn ones(size: u32) -> FilterResult<Self> {
        let cells = Self::cell_count(size)?;
        Ok(Mask {
            size,
            data: vec![1.0; cells],
        })
    }

    /// Create a normalized Gaussian mask.
    ///
    /// The weight at offset `(dx, dy)` from the center is
    /// `exp(-(dx² + dy²) / 2σ²) / 2πσ²`; the weights are then divided by
    /// their sum so they total 1.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidMask`] if `size` is even or zero and
    /// [`FilterError::InvalidParameters`] if `sigma` is not a positive
    /// finite number.
    pub fn gaussian(size: u32, sigma: f64) -> FilterResult<Self> {
        let cells = Self::cell_count(size)?;
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "sigma must be positive, got {sigma}"
            )));
        }

        let half = (size / 2) as i64;
        let two_sigma_sq = 2.0 * sigma * sigma;
        let scale = 1.0 / (std::f64::consts::PI * two_sigma_sq);

        let mut data = Vec::with_capacity(cells);
        for dy in -half..=half {
            for dx in -half..=half {
                let dist_sq = (dx * dx + dy * dy) as f64;
                data.push(scale * (-dist_sq / two_sigma_sq).exp());
            }
        }

        let sum: f64 = data.iter().sum();
        for w in &mut data {
            *w /= sum;
        }

        Ok(Mask { size, data })
    }

    /// Create a mask from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidMask`] if `size` is even or zero, or if
    /// `data` does not hold exactly `size * size` weights.
    pub fn from_slice(size: u32, data: &[f64]) -> FilterResult<Self> {
        let expected = Self::cell_count(size)?;
        if data.len() != expected {
            return Err(FilterError::InvalidMask(format!(
                "expected {expected} weights, got {}",
                data.len()
            )));
        }
        Ok(Mask {
            size,
            data: data.to_vec(),
        })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Center coordinate (the same on both axes).
    #[inline]
    pub fn center(&self) -> u32 {
        self.size / 2
    }

    /// Index of the center cell in [`Mask::data`].
    #[inline]
    pub fn center_index(&self) -> usize {
        let c = self.center() as usize;
        c * self.size as usize + c
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; masks have at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the weight at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.size && y < self.size {
            Some(self.data[y as usize * self.size as usize + x as usize])
        } else {
            None
        }
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Row-major weights.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}
