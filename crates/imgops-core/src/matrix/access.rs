//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels and
//! channel samples. Pixel `(x, y)` lives at index `x * height + y`.

use super::{PixelMatrix, PixelMatrixMut};
use crate::color::{Channel, Rgb};
use crate::error::{Error, Result};

#[inline]
fn offset(width: u32, height: u32, x: u32, y: u32) -> Option<usize> {
    if x < width && y < height {
        Some(x as usize * height as usize + y as usize)
    } else {
        None
    }
}

impl PixelMatrix {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        offset(self.inner.width, self.inner.height, x, y).map(|i| self.inner.data[i])
    }

    /// Get the pixel at (x, y) without bounds checking on `y`.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgb {
        self.inner.data[x as usize * self.inner.height as usize + y as usize]
    }

    /// Get one channel sample at (x, y).
    pub fn get_channel(&self, x: u32, y: u32, channel: Channel) -> Option<u8> {
        self.get_pixel(x, y).map(|p| p[channel.index()])
    }
}

impl PixelMatrixMut {
    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        offset(self.inner.width, self.inner.height, x, y).map(|i| self.inner.data[i])
    }

    /// Get the pixel at (x, y) without bounds checking on `y`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgb {
        self.inner.data[x as usize * self.inner.height as usize + y as usize]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: Rgb) -> Result<()> {
        let len = self.inner.data.len();
        let i = offset(self.inner.width, self.inner.height, x, y).ok_or(
            Error::IndexOutOfBounds {
                index: x as usize * self.inner.height as usize + y as usize,
                len,
            },
        )?;
        self.inner.data[i] = rgb;
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking on `y`.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, rgb: Rgb) {
        let i = x as usize * self.inner.height as usize + y as usize;
        self.inner.data[i] = rgb;
    }

    /// Set one channel sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_channel(&mut self, x: u32, y: u32, channel: Channel, val: u8) -> Result<()> {
        let mut rgb = self.get_pixel(x, y).ok_or(Error::IndexOutOfBounds {
            index: x as usize * self.inner.height as usize + y as usize,
            len: self.inner.data.len(),
        })?;
        rgb[channel.index()] = val;
        self.set_pixel_unchecked(x, y, rgb);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut m = PixelMatrixMut::new(4, 3).unwrap();
        m.set_pixel(3, 2, [1, 2, 3]).unwrap();
        m.set_channel(0, 1, Channel::Blue, 77).unwrap();
        assert_eq!(m.get_pixel(3, 2), Some([1, 2, 3]));

        let m: PixelMatrix = m.into();
        assert_eq!(m.get_pixel_unchecked(3, 2), [1, 2, 3]);
        assert_eq!(m.get_channel(0, 1, Channel::Blue), Some(77));
        assert_eq!(m.get_channel(0, 1, Channel::Red), Some(0));
        // column-major
        assert_eq!(m.data()[3 * 3 + 2], [1, 2, 3]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut m = PixelMatrixMut::new(2, 2).unwrap();
        assert!(m.get_pixel(2, 0).is_none());
        assert!(m.get_pixel(0, 2).is_none());
        assert!(matches!(
            m.set_pixel(0, 2, [0, 0, 0]),
            Err(Error::IndexOutOfBounds { .. })
        ));
        assert!(m.set_channel(5, 5, Channel::Red, 1).is_err());
    }
}
