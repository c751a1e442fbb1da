//! imgops-chart - Histogram charts for imgops
//!
//! Renders per-channel histograms as bar charts and lays them out into
//! panels:
//!
//! - [`ChartRenderer`] - turns 256 bin counts into encoded image bytes
//! - [`BarChart`] - built-in renderer (white canvas, black axes, PNG output)
//! - [`rgb_histogram_panel`] - the three channel charts, tinted and side by side
//! - [`compare_histograms`] - two images next to their histogram panels

mod error;
pub mod panel;
pub mod plot;

pub use error::{ChartError, ChartResult};
pub use panel::{
    CompareLayout, compare_histograms, render_channel_histogram, rgb_histogram_panel,
    tint_non_white,
};
pub use plot::{BarChart, ChartRenderer, ChartStyle};
