//! Concatenation regression test
//!
//! Tests the separator layout of concat_horizontal() / concat_vertical()
//! and the panel layout they are combined into by the chart crate.

use imgops_core::color::WHITE;
use imgops_core::{Error, concat_horizontal, concat_vertical};
use imgops_io::ImageFormat;
use imgops_test::{RegParams, fixtures};

#[test]
fn concat_reg_horizontal() {
    let mut rp = RegParams::new("concat_horizontal");

    let a = fixtures::gradient(20, 10);
    let b = fixtures::checkerboard(30, 10, 5);
    let c = fixtures::solid(5, 10, [255, 0, 0]);
    let out = concat_horizontal(&[a.clone(), b.clone(), c], 5).expect("concat");

    rp.compare_values((20 + 30 + 5 + 6 * 5) as f64, out.width() as f64, 0.0);
    rp.compare_values(10.0, out.height() as f64, 0.0);

    // separators framing each block
    for x in [0, 4, 25, 29, 30, 34, 65, 69, 70, 74, 80, 84] {
        rp.compare_values(1.0, (out.get_pixel(x, 3) == Some(WHITE)) as u8 as f64, 0.0);
    }
    // first pixel of each block
    rp.compare_values(1.0, (out.get_pixel(5, 0) == a.get_pixel(0, 0)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (out.get_pixel(35, 0) == b.get_pixel(0, 0)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (out.get_pixel(75, 9) == Some([255, 0, 0])) as u8 as f64, 0.0);

    rp.write_pix_and_check(&out, ImageFormat::Png).expect("write");
    assert!(rp.cleanup(), "concat_horizontal regression test failed");
}

#[test]
fn concat_reg_vertical() {
    let mut rp = RegParams::new("concat_vertical");

    let a = fixtures::color_gradient(40, 12);
    let b = fixtures::noise(40, 20, 3);
    let out = concat_vertical(&[a.clone(), b.clone()], 15).expect("concat");

    rp.compare_values(40.0, out.width() as f64, 0.0);
    rp.compare_values((12 + 20 + 4 * 15) as f64, out.height() as f64, 0.0);
    rp.compare_values(1.0, (out.get_pixel(7, 14) == Some(WHITE)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (out.get_pixel(7, 15) == a.get_pixel(7, 0)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (out.get_pixel(39, 57) == b.get_pixel(39, 0)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (out.get_pixel(0, 91) == Some(WHITE)) as u8 as f64, 0.0);

    rp.write_pix_and_check(&out, ImageFormat::Png).expect("write");
    assert!(rp.cleanup(), "concat_vertical regression test failed");
}

#[test]
fn concat_reg_errors() {
    let a = fixtures::solid(4, 4, [0, 0, 0]);
    let b = fixtures::solid(4, 5, [0, 0, 0]);
    let c = fixtures::solid(5, 4, [0, 0, 0]);

    assert!(matches!(
        concat_horizontal(&[a.clone(), b], 1),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(matches!(
        concat_vertical(&[a, c], 1),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(matches!(concat_vertical(&[], 1), Err(Error::EmptyInput(_))));
}
