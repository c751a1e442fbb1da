//! Histogram panels
//!
//! Channel charts are rendered through a [`ChartRenderer`], decoded back into
//! matrices and tinted with their channel color. Panels and images are then
//! arranged with [`concat_horizontal`] and [`concat_vertical`].

use crate::{ChartRenderer, ChartResult};
use imgops_core::color::is_white;
use imgops_core::{Channel, PixelMatrix, concat_horizontal, concat_vertical};
use imgops_io::DecodeOptions;
use imgops_transform::resize_nearest_neighbor;

/// Sizes and spacing used by [`compare_histograms`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareLayout {
    /// Width each input image is resized to
    pub image_width: u32,
    /// Height each input image is resized to
    pub image_height: u32,
    /// Width each histogram panel is resized to
    pub histogram_width: u32,
    /// Height each histogram panel is resized to
    pub histogram_height: u32,
    /// White strip between an image and its panel
    pub column_separator: u32,
    /// White strip between the two rows
    pub row_separator: u32,
    /// White strip between the three channel charts of a panel
    pub panel_separator: u32,
}

impl Default for CompareLayout {
    fn default() -> Self {
        Self {
            image_width: 500,
            image_height: 500,
            histogram_width: 1500,
            histogram_height: 500,
            column_separator: 5,
            row_separator: 15,
            panel_separator: 5,
        }
    }
}

/// Render the histogram of one channel and decode it into a matrix.
pub fn render_channel_histogram<R>(
    renderer: &R,
    channel: Channel,
    m: &PixelMatrix,
) -> ChartResult<PixelMatrix>
where
    R: ChartRenderer + ?Sized,
{
    let hist = m.histogram();
    let bytes = renderer.render(channel, hist.channel(channel))?;
    let chart = imgops_io::decode_with_options(&bytes, &DecodeOptions::unlimited())?;
    Ok(chart)
}

/// Replace every non-white pixel with the pure color of `channel`.
pub fn tint_non_white(m: PixelMatrix, channel: Channel) -> PixelMatrix {
    let color = channel.color();
    let mut out = m.into_mut();
    for p in out.data_mut() {
        if !is_white(*p) {
            *p = color;
        }
    }
    out.into()
}

/// Red, green and blue histogram charts, tinted and placed side by side.
pub fn rgb_histogram_panel<R>(
    m: &PixelMatrix,
    renderer: &R,
    separator: u32,
) -> ChartResult<PixelMatrix>
where
    R: ChartRenderer + ?Sized,
{
    let charts = Channel::ALL
        .iter()
        .map(|&channel| -> ChartResult<PixelMatrix> {
            let chart = render_channel_histogram(renderer, channel, m)?;
            Ok(tint_non_white(chart, channel))
        })
        .collect::<ChartResult<Vec<_>>>()?;

    let panel = concat_horizontal(&charts, separator)?;
    log::debug!("histogram panel {}x{}", panel.width(), panel.height());
    Ok(panel)
}

/// Lay out two images next to their histogram panels, one row per image.
///
/// Each row is the image resized to `image_width x image_height`, then its
/// panel resized to `histogram_width x histogram_height`, joined with
/// `column_separator`. The rows are stacked with `row_separator`.
///
/// # Errors
///
/// Returns [`crate::ChartError::Core`] with a dimension mismatch if
/// `image_height` and `histogram_height` differ, and propagates renderer,
/// decode and resize failures.
pub fn compare_histograms<R>(
    a: &PixelMatrix,
    b: &PixelMatrix,
    renderer: &R,
    layout: &CompareLayout,
) -> ChartResult<PixelMatrix>
where
    R: ChartRenderer + ?Sized,
{
    let rows = [a, b]
        .into_iter()
        .map(|m| -> ChartResult<PixelMatrix> {
            let image = resize_nearest_neighbor(m, layout.image_width, layout.image_height)?;
            let panel = rgb_histogram_panel(m, renderer, layout.panel_separator)?;
            let panel =
                resize_nearest_neighbor(&panel, layout.histogram_width, layout.histogram_height)?;
            Ok(concat_horizontal(&[image, panel], layout.column_separator)?)
        })
        .collect::<ChartResult<Vec<_>>>()?;

    let out = concat_vertical(&rows, layout.row_separator)?;
    log::debug!("histogram comparison {}x{}", out.width(), out.height());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BarChart, ChartError, ChartStyle};
    use imgops_core::color::WHITE;

    /// Renders every chart as a fixed-size canvas with one black pixel.
    struct Dot;

    impl ChartRenderer for Dot {
        fn render(&self, _channel: Channel, _counts: &[u32; 256]) -> ChartResult<Vec<u8>> {
            let m = PixelMatrix::from_fn(4, 3, |x, y| {
                if x == 1 && y == 1 { [0, 0, 0] } else { WHITE }
            })?;
            Ok(imgops_io::encode_png(&m)?)
        }
    }

    struct Broken;

    impl ChartRenderer for Broken {
        fn render(&self, _channel: Channel, _counts: &[u32; 256]) -> ChartResult<Vec<u8>> {
            Err(ChartError::Render("no backend".to_string()))
        }
    }

    #[test]
    fn test_tint_non_white() {
        let m = PixelMatrix::from_columns(vec![vec![WHITE, [10, 20, 30]], vec![[254, 255, 255], WHITE]])
            .unwrap();
        let out = tint_non_white(m, Channel::Green);
        assert_eq!(out.get_pixel(0, 0), Some(WHITE));
        assert_eq!(out.get_pixel(0, 1), Some([0, 255, 0]));
        assert_eq!(out.get_pixel(1, 0), Some([0, 255, 0]));
        assert_eq!(out.get_pixel(1, 1), Some(WHITE));
    }

    #[test]
    fn test_render_channel_histogram_decodes() {
        let m = PixelMatrix::new(5, 5).unwrap();
        let chart = render_channel_histogram(&Dot, Channel::Red, &m).unwrap();
        assert_eq!(chart.dimensions(), (4, 3));
        assert_eq!(chart.get_pixel(1, 1), Some([0, 0, 0]));
    }

    #[test]
    fn test_rgb_panel_layout() {
        let m = PixelMatrix::new(5, 5).unwrap();
        let panel = rgb_histogram_panel(&m, &Dot, 2).unwrap();
        // 3 charts of width 4, each framed by 2 px on both sides
        assert_eq!(panel.dimensions(), (3 * 4 + 6 * 2, 3));
        assert_eq!(panel.get_pixel(3, 1), Some([255, 0, 0]));
        assert_eq!(panel.get_pixel(11, 1), Some([0, 255, 0]));
        assert_eq!(panel.get_pixel(19, 1), Some([0, 0, 255]));
        assert_eq!(panel.get_pixel(0, 1), Some(WHITE));
    }

    #[test]
    fn test_renderer_error_propagates() {
        let m = PixelMatrix::new(2, 2).unwrap();
        assert!(matches!(
            rgb_histogram_panel(&m, &Broken, 5),
            Err(ChartError::Render(_))
        ));
    }

    #[test]
    fn test_compare_histograms_small_layout() {
        let layout = CompareLayout {
            image_width: 20,
            image_height: 10,
            histogram_width: 30,
            histogram_height: 10,
            column_separator: 1,
            row_separator: 2,
            panel_separator: 1,
        };
        let a = PixelMatrix::new_filled(3, 3, [200, 0, 0]).unwrap();
        let b = PixelMatrix::new_filled(7, 2, [0, 0, 90]).unwrap();
        let out = compare_histograms(&a, &b, &Dot, &layout).unwrap();

        // each row: 20 + 30 + 4 * 1
        assert_eq!(out.width(), 54);
        // two rows of 10 framed by 2 px strips
        assert_eq!(out.height(), 2 * 10 + 4 * 2);
        assert_eq!(out.get_pixel(1, 2), Some([200, 0, 0]));
        assert_eq!(out.get_pixel(1, 16), Some([0, 0, 90]));
        assert_eq!(out.get_pixel(1, 13), Some(WHITE));
    }

    #[test]
    fn test_compare_histograms_mismatched_heights() {
        let layout = CompareLayout {
            image_height: 400,
            ..CompareLayout::default()
        };
        let m = PixelMatrix::new(2, 2).unwrap();
        let renderer = BarChart::new(ChartStyle::default());
        assert!(matches!(
            compare_histograms(&m, &m, &renderer, &layout),
            Err(ChartError::Core(_))
        ));
    }

    #[test]
    fn test_default_layout() {
        let l = CompareLayout::default();
        assert_eq!((l.image_width, l.image_height), (500, 500));
        assert_eq!((l.histogram_width, l.histogram_height), (1500, 500));
        assert_eq!((l.column_separator, l.row_separator, l.panel_separator), (5, 15, 5));
    }
}
