//! TIFF image format support (read only)
//!
//! Decodes the first page of 8- or 16-bit gray, gray+alpha, RGB and RGBA
//! TIFF files. 16-bit samples keep their high byte; alpha is discarded.

use crate::{IoError, IoResult};
use imgops_core::{PixelMatrix, Rgb};
use std::io::{Read, Seek};
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};

/// Read the first page of a TIFF image
pub fn read_tiff<R: Read + Seek>(reader: R) -> IoResult<PixelMatrix> {
    let mut decoder = Decoder::new(reader)
        .map_err(|e| IoError::DecodeError(format!("TIFF decode error: {}", e)))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("Failed to get TIFF dimensions: {}", e)))?;
    let color_type = decoder
        .colortype()
        .map_err(|e| IoError::DecodeError(format!("Failed to get TIFF color type: {}", e)))?;

    let spp = match color_type {
        ColorType::Gray(8 | 16) => 1,
        ColorType::GrayA(8 | 16) => 2,
        ColorType::RGB(8 | 16) => 3,
        ColorType::RGBA(8 | 16) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported TIFF color type: {:?}",
                color_type
            )));
        }
    };

    let image_data = decoder
        .read_image()
        .map_err(|e| IoError::DecodeError(format!("Failed to read TIFF image data: {}", e)))?;

    let m = match image_data {
        DecodingResult::U8(data) => samples_to_matrix(&data, width, height, spp, |v| v)?,
        DecodingResult::U16(data) => {
            samples_to_matrix(&data, width, height, spp, |v| (v >> 8) as u8)?
        }
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported TIFF sample format for {:?}",
                color_type
            )));
        }
    };

    log::debug!("decoded TIFF {}x{} ({:?})", width, height, color_type);
    Ok(m)
}

/// Build a matrix from interleaved row-major samples.
fn samples_to_matrix<T: Copy>(
    data: &[T],
    width: u32,
    height: u32,
    spp: usize,
    to_u8: impl Fn(T) -> u8,
) -> IoResult<PixelMatrix> {
    let expected = width as usize * height as usize * spp;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "TIFF sample buffer too short: {} < {}",
            data.len(),
            expected
        )));
    }

    let stride = width as usize * spp;
    let m = PixelMatrix::from_fn(width, height, |x, y| {
        let idx = y as usize * stride + x as usize * spp;
        let px = &data[idx..idx + spp];
        let rgb: Rgb = if spp <= 2 {
            let v = to_u8(px[0]);
            [v, v, v]
        } else {
            [to_u8(px[0]), to_u8(px[1]), to_u8(px[2])]
        };
        rgb
    })?;
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tiff::encoder::TiffEncoder;
    use tiff::encoder::colortype::{Gray8, Gray16, RGB8, RGBA8};

    #[test]
    fn test_tiff_rgb8() {
        let data = [255u8, 0, 0, 0, 255, 0, 0, 0, 255, 9, 8, 7];
        let mut buf = Cursor::new(Vec::new());
        TiffEncoder::new(&mut buf)
            .unwrap()
            .write_image::<RGB8>(2, 2, &data)
            .unwrap();

        let m = read_tiff(Cursor::new(buf.into_inner())).unwrap();
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(m.get_pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(m.get_pixel(1, 0), Some([0, 255, 0]));
        assert_eq!(m.get_pixel(0, 1), Some([0, 0, 255]));
        assert_eq!(m.get_pixel(1, 1), Some([9, 8, 7]));
    }

    #[test]
    fn test_tiff_gray_replicated() {
        let mut buf = Cursor::new(Vec::new());
        TiffEncoder::new(&mut buf)
            .unwrap()
            .write_image::<Gray8>(3, 1, &[0, 128, 255])
            .unwrap();

        let m = read_tiff(Cursor::new(buf.into_inner())).unwrap();
        assert_eq!(m.get_pixel(1, 0), Some([128, 128, 128]));
        assert_eq!(m.get_pixel(2, 0), Some([255, 255, 255]));
    }

    #[test]
    fn test_tiff_gray16_high_byte() {
        let mut buf = Cursor::new(Vec::new());
        TiffEncoder::new(&mut buf)
            .unwrap()
            .write_image::<Gray16>(2, 1, &[0x1234, 0xFF00])
            .unwrap();

        let m = read_tiff(Cursor::new(buf.into_inner())).unwrap();
        assert_eq!(m.get_pixel(0, 0), Some([0x12, 0x12, 0x12]));
        assert_eq!(m.get_pixel(1, 0), Some([0xFF, 0xFF, 0xFF]));
    }

    #[test]
    fn test_tiff_alpha_dropped() {
        let mut buf = Cursor::new(Vec::new());
        TiffEncoder::new(&mut buf)
            .unwrap()
            .write_image::<RGBA8>(1, 1, &[10, 20, 30, 0])
            .unwrap();

        let m = read_tiff(Cursor::new(buf.into_inner())).unwrap();
        assert_eq!(m.get_pixel(0, 0), Some([10, 20, 30]));
    }

    #[test]
    fn test_tiff_garbage_rejected() {
        let result = read_tiff(Cursor::new(b"II*\x00garbage".to_vec()));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
