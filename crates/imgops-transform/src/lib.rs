//! imgops-transform - Geometric transformations for imgops
//!
//! This crate provides resizing by nearest-neighbor sampling, either to an
//! explicit target size or by scale factors.

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{MAX_SCALED_PIXELS, resize_nearest_neighbor, scale_by_sampling};
