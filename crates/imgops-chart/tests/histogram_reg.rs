//! Histogram chart regression test
//!
//! Renders channel charts of synthetic images with the built-in bar chart
//! and checks the panel and comparison layouts.

use imgops_chart::{
    BarChart, ChartRenderer, ChartStyle, CompareLayout, compare_histograms, rgb_histogram_panel,
};
use imgops_core::Channel;
use imgops_core::color::WHITE;
use imgops_io::ImageFormat;
use imgops_test::{RegParams, fixtures};

#[test]
fn histogram_reg_panel() {
    let mut rp = RegParams::new("histogram_panel");

    let m = fixtures::color_gradient(64, 48);
    let renderer = BarChart::default();
    let panel = rgb_histogram_panel(&m, &renderer, 5).expect("panel");

    // three 227x227 charts, each framed by 5 px strips
    rp.compare_values((3 * 227 + 6 * 5) as f64, panel.width() as f64, 0.0);
    rp.compare_values(227.0, panel.height() as f64, 0.0);

    // every pixel is white or a pure channel color
    let allowed = [WHITE, [255, 0, 0], [0, 255, 0], [0, 0, 255]];
    let stray = panel.data().iter().filter(|p| !allowed.contains(p)).count();
    rp.compare_values(0.0, stray as f64, 0.0);

    // the y axis of the green chart sits at its left margin
    let green_axis_x = 5 + 227 + 5 + 5 + 10;
    rp.compare_values(
        1.0,
        (panel.get_pixel(green_axis_x, 100) == Some([0, 255, 0])) as u8 as f64,
        0.0,
    );

    rp.write_pix_and_check(&panel, ImageFormat::Png).expect("write");
    assert!(rp.cleanup(), "histogram_panel regression test failed");
}

#[test]
fn histogram_reg_compare_default_layout() {
    let mut rp = RegParams::new("histogram_compare");

    let a = fixtures::gradient(40, 30);
    let b = fixtures::noise(25, 25, 7);
    let layout = CompareLayout::default();
    let out = compare_histograms(&a, &b, &BarChart::default(), &layout).expect("compare");

    rp.compare_values((500 + 1500 + 4 * 5) as f64, out.width() as f64, 0.0);
    rp.compare_values((2 * 500 + 4 * 15) as f64, out.height() as f64, 0.0);
    rp.compare_values(
        1.0,
        (out.get_pixel(5, 15) == a.get_pixel(0, 0)) as u8 as f64,
        0.0,
    );
    rp.compare_values(1.0, (out.get_pixel(0, 0) == Some(WHITE)) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "histogram_compare regression test failed");
}

#[test]
fn histogram_reg_custom_style() {
    let mut rp = RegParams::new("histogram_style");

    let style = ChartStyle {
        width: 300,
        height: 150,
        margin: 4,
        axis_width: 2,
        ..ChartStyle::default()
    };
    let renderer = BarChart::new(style);
    let m = fixtures::solid(8, 8, [10, 128, 250]);
    let counts = m.histogram();

    let bytes = renderer.render(Channel::Blue, counts.channel(Channel::Blue)).expect("render");
    let chart = imgops_io::decode(&bytes).expect("decode");
    rp.compare_values(300.0, chart.width() as f64, 0.0);
    rp.compare_values(150.0, chart.height() as f64, 0.0);

    // a single full-height bar for value 250
    let drawn = renderer.draw(Channel::Blue, counts.channel(Channel::Blue)).expect("draw");
    rp.compare_pix(&drawn, &chart);

    assert!(rp.cleanup(), "histogram_style regression test failed");
}
