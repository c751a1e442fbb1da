//! Error types for imgops-chart

use thiserror::Error;

/// Errors that can occur while rendering charts and panels
#[derive(Debug, Error)]
pub enum ChartError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imgops_core::Error),

    /// Encoding or decoding of chart images failed
    #[error("I/O error: {0}")]
    Io(#[from] imgops_io::IoError),

    /// Resizing a chart or image failed
    #[error("transform error: {0}")]
    Transform(#[from] imgops_transform::TransformError),

    /// The renderer could not draw the chart
    #[error("render error: {0}")]
    Render(String),
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
