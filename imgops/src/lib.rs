//! imgops - RGB pixel-matrix image processing
//!
//! # Overview
//!
//! Images are decoded into a [`PixelMatrix`], an immutable column-major
//! grid of RGB triples, transformed, and encoded again:
//!
//! - Elementwise arithmetic and logic between two matrices ([`BinaryOp`])
//!   or on one ([`UnaryOp`])
//! - Masked neighborhood filters: box and Gaussian blur, rank filters
//! - Histograms, equalization and histogram charts
//! - Nearest-neighbor resizing and concatenation
//! - PNG, JPEG, BMP and TIFF decoding
//!
//! # Example
//!
//! ```
//! use imgops::{BinaryOp, PixelMatrix};
//!
//! let a = PixelMatrix::new_filled(4, 4, [200, 100, 50]).unwrap();
//! let b = PixelMatrix::new_filled(4, 4, [100, 200, 10]).unwrap();
//! let sum = a.combine(&b, BinaryOp::Add).unwrap();
//! assert_eq!(sum.get_pixel(0, 0), Some([255, 255, 60]));
//!
//! let blurred = imgops::filter::box_blur(&sum, 3).unwrap();
//! assert_eq!(blurred.dimensions(), (4, 4));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use imgops_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use imgops_chart as chart;
pub use imgops_filter as filter;
pub use imgops_io as io;
pub use imgops_transform as transform;
