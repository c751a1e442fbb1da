//! Convolution regression test
//!
//! Tests the mask/reducer engine:
//!   (1) Gaussian masks are normalized for a range of sizes and sigmas
//!   (2) box_blur() and gaussian_blur() on a checkerboard
//!   (3) the engine with a custom mask and a closure reducer

use imgops_core::PixelMatrix;
use imgops_filter::{Mask, Reduction, apply_filter, box_blur, gaussian_blur};
use imgops_io::ImageFormat;
use imgops_test::{RegParams, fixtures};

#[test]
fn convolve_reg_gaussian_mask() {
    let mut rp = RegParams::new("convolve_gaussian_mask");

    for size in [3u32, 5, 7, 9, 15] {
        for sigma in [0.5, 1.0, 2.0, 5.0] {
            let mask = Mask::gaussian(size, sigma).expect("gaussian mask");
            rp.compare_values(1.0, mask.sum(), 1e-9);
            rp.compare_values((size * size) as f64, mask.len() as f64, 0.0);
        }
    }

    assert!(rp.cleanup(), "convolve_gaussian_mask regression test failed");
}

#[test]
fn convolve_reg_blur() {
    let mut rp = RegParams::new("convolve_blur");

    let board = fixtures::checkerboard(40, 40, 4);

    let boxed = box_blur(&board, 5).expect("box_blur");
    rp.compare_values(40.0, boxed.width() as f64, 0.0);
    rp.compare_values(40.0, boxed.height() as f64, 0.0);
    // interior of a 4-pixel cell edge mixes black and white
    let mid = boxed.get_pixel(4, 10).unwrap()[0];
    rp.compare_values(1.0, (mid > 0 && mid < 255) as u8 as f64, 0.0);
    // border rows are copied
    rp.compare_pix(
        &PixelMatrix::from_columns(vec![board.column(0).to_vec()]).unwrap(),
        &PixelMatrix::from_columns(vec![boxed.column(0).to_vec()]).unwrap(),
    );
    rp.write_pix_and_check(&boxed, ImageFormat::Png)
        .expect("write box");

    let gauss = gaussian_blur(&board, 7, 1.5).expect("gaussian_blur");
    rp.write_pix_and_check(&gauss, ImageFormat::Png)
        .expect("write gaussian");

    // both blurs keep the mean brightness of a balanced checkerboard close to 127
    for blurred in [&boxed, &gauss] {
        let mean = blurred.data().iter().map(|p| p[0] as f64).sum::<f64>()
            / blurred.pixel_count() as f64;
        rp.compare_values(127.5, mean, 8.0);
    }

    assert!(rp.cleanup(), "convolve_blur regression test failed");
}

#[test]
fn convolve_reg_custom() {
    let mut rp = RegParams::new("convolve_custom");

    let m = fixtures::color_gradient(20, 20);

    // horizontal neighbor difference through a closure reducer
    let mask = Mask::from_slice(3, &[0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
    let edge = |s: &mut [f64], _c: usize| s.iter().sum::<f64>().abs().round().min(255.0) as u8;
    let out = apply_filter(&m, &mask, &edge).expect("custom filter");

    // red rises by 13 or 14 per column, green is constant along x
    let p = out.get_pixel(10, 10).unwrap();
    rp.compare_values(27.0, p[0] as f64, 1.0);
    rp.compare_values(0.0, p[1] as f64, 0.0);

    let same = apply_filter(&m, &Mask::ones(1).unwrap(), &Reduction::Sum).unwrap();
    rp.compare_pix(&m, &same);

    assert!(rp.cleanup(), "convolve_custom regression test failed");
}
