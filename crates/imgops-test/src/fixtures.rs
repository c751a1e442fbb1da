//! Synthetic input matrices for regression tests
//!
//! Every fixture is deterministic, so golden files generated from them are
//! stable across runs and machines.

use imgops_core::{PixelMatrix, Rgb};

/// Solid matrix of one color.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn solid(width: u32, height: u32, rgb: Rgb) -> PixelMatrix {
    PixelMatrix::new_filled(width, height, rgb).expect("fixture dimensions must be non-zero")
}

/// Horizontal gray ramp from 0 at `x = 0` to 255 at `x = width - 1`.
pub fn gradient(width: u32, height: u32) -> PixelMatrix {
    let span = width.saturating_sub(1).max(1);
    PixelMatrix::from_fn(width, height, |x, _| {
        let v = (x * 255 / span) as u8;
        [v, v, v]
    })
    .expect("fixture dimensions must be non-zero")
}

/// Color ramp: red rises with `x`, green rises with `y`, blue is their
/// mean.
pub fn color_gradient(width: u32, height: u32) -> PixelMatrix {
    let sx = width.saturating_sub(1).max(1);
    let sy = height.saturating_sub(1).max(1);
    PixelMatrix::from_fn(width, height, |x, y| {
        let r = (x * 255 / sx) as u8;
        let g = (y * 255 / sy) as u8;
        [r, g, ((r as u16 + g as u16) / 2) as u8]
    })
    .expect("fixture dimensions must be non-zero")
}

/// Checkerboard of `cell`-sized black and white squares; (0, 0) is black.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> PixelMatrix {
    let cell = cell.max(1);
    PixelMatrix::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            [0, 0, 0]
        } else {
            [255, 255, 255]
        }
    })
    .expect("fixture dimensions must be non-zero")
}

/// Black matrix with a single pixel at `(x, y)` set to `rgb`.
pub fn single_seed(width: u32, height: u32, x: u32, y: u32, rgb: Rgb) -> PixelMatrix {
    PixelMatrix::from_fn(width, height, |px, py| {
        if px == x && py == y { rgb } else { [0, 0, 0] }
    })
    .expect("fixture dimensions must be non-zero")
}

/// Deterministic pseudo-random noise (xorshift, fixed seed).
pub fn noise(width: u32, height: u32, seed: u32) -> PixelMatrix {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state >> 24) as u8
    };
    PixelMatrix::from_fn(width, height, |_, _| [next(), next(), next()])
        .expect("fixture dimensions must be non-zero")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let m = gradient(16, 4);
        assert_eq!(m.get_pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(m.get_pixel(15, 3), Some([255, 255, 255]));
    }

    #[test]
    fn test_checkerboard_cells() {
        let m = checkerboard(4, 4, 2);
        assert_eq!(m.get_pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(m.get_pixel(2, 0), Some([255, 255, 255]));
        assert_eq!(m.get_pixel(2, 2), Some([0, 0, 0]));
    }

    #[test]
    fn test_noise_is_deterministic() {
        assert_eq!(noise(8, 8, 7), noise(8, 8, 7));
        assert_ne!(noise(8, 8, 7), noise(8, 8, 8));
    }
}
