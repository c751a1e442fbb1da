//! Image I/O regression test
//!
//! Encodes fixtures through every writable format, decodes them back and
//! checks the size limit applied to untrusted input.

use imgops_core::PixelMatrix;
use imgops_io::{
    DecodeOptions, ImageFormat, IoError, decode, decode_with_options, encode, encode_png,
    read_image, write_image,
};
use imgops_test::{RegParams, fixtures, regout_dir};

#[test]
fn io_reg_png_invert_end_to_end() {
    let mut rp = RegParams::new("io_invert");

    let red = fixtures::solid(10, 10, [255, 0, 0]);
    let bytes = encode_png(&red).expect("encode");
    let decoded = decode(&bytes).expect("decode");
    rp.compare_pix(&red, &decoded);

    let inverted = decoded.invert();
    let expected = PixelMatrix::new_filled(10, 10, [0, 255, 255]).expect("expected");
    rp.compare_pix(&expected, &inverted);

    rp.write_pix_and_check(&inverted, ImageFormat::Png).expect("write");
    assert!(rp.cleanup(), "io_invert regression test failed");
}

#[test]
fn io_reg_lossless_formats() {
    let mut rp = RegParams::new("io_lossless");

    let m = fixtures::color_gradient(33, 17);
    for format in [ImageFormat::Png, ImageFormat::Bmp] {
        let bytes = encode(&m, format).expect("encode");
        let back = decode(&bytes).expect("decode");
        rp.compare_pix(&m, &back);
    }

    let jpeg = encode(&m, ImageFormat::Jpeg).expect("encode jpeg");
    let back = decode(&jpeg).expect("decode jpeg");
    rp.compare_values(33.0, back.width() as f64, 0.0);
    rp.compare_values(17.0, back.height() as f64, 0.0);

    assert!(rp.cleanup(), "io_lossless regression test failed");
}

#[test]
fn io_reg_file_roundtrip() {
    let mut rp = RegParams::new("io_file");

    let m = fixtures::checkerboard(24, 16, 4);
    let path = format!("{}/io_file_roundtrip.bmp", regout_dir());
    write_image(&m, &path, ImageFormat::Bmp).expect("write");
    let back = read_image(&path).expect("read");
    rp.compare_pix(&m, &back);

    assert!(rp.cleanup(), "io_file regression test failed");
}

#[test]
fn io_reg_input_limit() {
    let m = fixtures::noise(64, 64, 11);
    let bytes = encode_png(&m).expect("encode");

    let tight = DecodeOptions::with_max_input_bytes(bytes.len() - 1);
    match decode_with_options(&bytes, &tight) {
        Err(IoError::InputTooLarge { size, limit }) => {
            assert_eq!(size, bytes.len());
            assert_eq!(limit, bytes.len() - 1);
        }
        other => panic!("expected InputTooLarge, got {:?}", other.map(|p| p.dimensions())),
    }

    let exact = DecodeOptions::with_max_input_bytes(bytes.len());
    assert_eq!(decode_with_options(&bytes, &exact).expect("decode"), m);
    assert_eq!(
        decode_with_options(&bytes, &DecodeOptions::unlimited()).expect("decode"),
        m
    );
}
