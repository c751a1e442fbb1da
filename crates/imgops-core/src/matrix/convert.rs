//! Color conversions
//!
//! - [`PixelMatrix::to_grayscale`]: unweighted channel mean on all channels
//! - [`PixelMatrix::to_binary`]: grayscale thresholded at the mean gray value

use super::PixelMatrix;
use crate::color::{BLACK, WHITE, gray_value};

impl PixelMatrix {
    /// Replace every pixel by its gray value `(r + g + b) / 3`.
    pub fn to_grayscale(self) -> PixelMatrix {
        let mut m = self.into_mut();
        for p in m.data_mut() {
            let g = gray_value(*p);
            *p = [g, g, g];
        }
        m.into()
    }

    /// Convert to black and white.
    ///
    /// The threshold is the mean gray value of the whole matrix (truncated);
    /// pixels whose gray value reaches it become white, the rest black.
    pub fn to_binary(self) -> PixelMatrix {
        let sum: u64 = self.data().iter().map(|&p| gray_value(p) as u64).sum();
        let threshold = (sum / self.pixel_count() as u64) as u8;

        let mut m = self.into_mut();
        for p in m.data_mut() {
            *p = if gray_value(*p) >= threshold { WHITE } else { BLACK };
        }
        m.into()
    }
}
