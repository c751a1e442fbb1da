//! Histogram bar charts
//!
//! A [`ChartRenderer`] turns the 256 bin counts of one channel into an
//! encoded image. [`BarChart`] is the built-in renderer: a white canvas with
//! a black L-shaped axis, one bar per sample value and a square in the
//! channel's color above the top right of the plot, written as PNG.

use crate::{ChartError, ChartResult};
use imgops_core::color::{BLACK, WHITE};
use imgops_core::{Channel, PixelMatrix, PixelMatrixMut, Rgb};

/// Renders a single-channel histogram to encoded image bytes.
///
/// The returned bytes must be decodable by [`imgops_io::decode`].
pub trait ChartRenderer {
    /// Render the 256 bin counts of `channel`.
    fn render(&self, channel: Channel, counts: &[u32; 256]) -> ChartResult<Vec<u8>>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &R {
    fn render(&self, channel: Channel, counts: &[u32; 256]) -> ChartResult<Vec<u8>> {
        (**self).render(channel, counts)
    }
}

/// Layout and colors of a [`BarChart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Blank border around the plot area
    pub margin: u32,
    /// Thickness of both axes
    pub axis_width: u32,
    /// Canvas color
    pub background: Rgb,
    /// Axis color
    pub axis_color: Rgb,
    /// Bar color
    pub bar_color: Rgb,
    /// Side of the channel marker in the top margin; 0 disables it
    pub marker_size: u32,
}

impl Default for ChartStyle {
    /// 6 cm square at 96 dpi.
    fn default() -> Self {
        Self {
            width: 227,
            height: 227,
            margin: 10,
            axis_width: 1,
            background: WHITE,
            axis_color: BLACK,
            bar_color: [64, 64, 64],
            marker_size: 6,
        }
    }
}

impl ChartStyle {
    /// Plot area left of the axis and above the baseline, `(x, y, w, h)`.
    fn plot_area(&self) -> ChartResult<(u32, u32, u32, u32)> {
        let inset = 2 * self.margin + self.axis_width;
        if self.width <= inset || self.height <= inset {
            return Err(ChartError::Render(format!(
                "{}x{} canvas leaves no room for margin {} and axis {}",
                self.width, self.height, self.margin, self.axis_width
            )));
        }
        Ok((
            self.margin + self.axis_width,
            self.margin,
            self.width - inset,
            self.height - inset,
        ))
    }
}

/// Built-in bar chart renderer
#[derive(Debug, Clone, Default)]
pub struct BarChart {
    style: ChartStyle,
}

impl BarChart {
    /// Create a renderer with the given style.
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// The style used for rendering.
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Draw the chart of `channel` without encoding it.
    pub fn draw(&self, channel: Channel, counts: &[u32; 256]) -> ChartResult<PixelMatrix> {
        let s = &self.style;
        let (px, py, pw, ph) = s.plot_area()?;
        let mut canvas = PixelMatrixMut::new_filled(s.width, s.height, s.background)?;

        // y axis, then x axis along the bottom of the plot area
        fill_rect(&mut canvas, s.margin, s.margin, s.axis_width, ph + s.axis_width, s.axis_color);
        fill_rect(&mut canvas, s.margin, py + ph, pw + s.axis_width, s.axis_width, s.axis_color);

        let max = counts.iter().copied().max().unwrap_or(0) as u64;
        if max > 0 {
            for (v, &count) in counts.iter().enumerate() {
                let left = px + (v as u64 * pw as u64 / 256) as u32;
                let right = px + ((v as u64 + 1) * pw as u64 / 256) as u32;
                let bar_h = (count as u64 * ph as u64 / max) as u32;
                if bar_h == 0 {
                    continue;
                }
                fill_rect(
                    &mut canvas,
                    left,
                    py + ph - bar_h,
                    (right - left).max(1),
                    bar_h,
                    s.bar_color,
                );
            }
        }

        // channel marker, kept inside the top margin
        if s.marker_size > 0 {
            fill_rect(
                &mut canvas,
                (px + pw).saturating_sub(s.marker_size),
                s.margin.saturating_sub(s.marker_size) / 2,
                s.marker_size,
                s.marker_size.min(s.margin),
                channel.color(),
            );
        }

        Ok(canvas.into())
    }
}

impl ChartRenderer for BarChart {
    fn render(&self, channel: Channel, counts: &[u32; 256]) -> ChartResult<Vec<u8>> {
        let chart = self.draw(channel, counts)?;
        let bytes = imgops_io::encode_png(&chart)?;
        log::debug!(
            "rendered {} histogram chart {}x{} ({} bytes)",
            channel,
            chart.width(),
            chart.height(),
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Fill a rectangle, clipped to the canvas.
fn fill_rect(canvas: &mut PixelMatrixMut, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
    let x_end = x.saturating_add(w).min(canvas.width());
    let y_end = y.saturating_add(h).min(canvas.height());
    if x >= x_end || y >= y_end {
        return;
    }
    for xi in x..x_end {
        canvas.column_mut(xi)[y as usize..y_end as usize].fill(color);
    }
}
