//! imgops Core - Pixel matrix and elementwise operators
//!
//! This crate provides the fundamental data structures and per-pixel
//! operators used throughout the imgops image processing library:
//!
//! - [`PixelMatrix`] / [`PixelMatrixMut`] - The RGB raster container (immutable / mutable)
//! - [`Channel`] - Color channel selector
//! - [`pixel`] - Saturating per-sample operators and the [`BinaryOp`] / [`UnaryOp`] objects
//! - [`Histogram`] - Per-channel value frequencies
//!
//! # See also
//!
//! `imgops-filter` for neighborhood filters and `imgops-transform` for resizing.

pub mod error;
pub mod matrix;
pub mod pixel;

pub use color::{Channel, Rgb};
pub use error::{Error, Result};
pub use matrix::{Histogram, PixelMatrix, PixelMatrixMut, concat_horizontal, concat_vertical};
pub use pixel::{BinaryOp, UnaryOp};

/// Color channels and helpers for RGB pixel triples.
///
/// # Pixel format
///
/// A pixel is a `[u8; 3]` triple in red, green, blue order.
pub mod color {
    /// One RGB pixel: `[red, green, blue]`.
    pub type Rgb = [u8; 3];

    /// Black pixel
    pub const BLACK: Rgb = [0, 0, 0];
    /// White pixel
    pub const WHITE: Rgb = [255, 255, 255];

    /// Color channel selector.
    ///
    /// Every component that needs to name a channel uses this enum;
    /// the discriminant is the channel's index inside an [`Rgb`] triple.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Channel {
        /// Red channel (index 0)
        Red = 0,
        /// Green channel (index 1)
        Green = 1,
        /// Blue channel (index 2)
        Blue = 2,
    }

    impl Channel {
        /// All channels in storage order.
        pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

        /// Index of this channel inside an [`Rgb`] triple.
        #[inline]
        pub fn index(self) -> usize {
            self as usize
        }

        /// The pure color for this channel (e.g. `[255, 0, 0]` for red).
        pub fn color(self) -> Rgb {
            let mut rgb = BLACK;
            rgb[self.index()] = 255;
            rgb
        }

        /// Lowercase channel name.
        pub fn name(self) -> &'static str {
            match self {
                Channel::Red => "red",
                Channel::Green => "green",
                Channel::Blue => "blue",
            }
        }
    }

    impl std::fmt::Display for Channel {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    /// Check whether a pixel is pure white.
    #[inline]
    pub fn is_white(rgb: Rgb) -> bool {
        rgb == WHITE
    }

    /// Unweighted gray value `(r + g + b) / 3`, truncated.
    #[inline]
    pub fn gray_value(rgb: Rgb) -> u8 {
        ((rgb[0] as u32 + rgb[1] as u32 + rgb[2] as u32) / 3) as u8
    }

}
