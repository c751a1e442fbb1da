//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes baseline
//! RGB JPEG using `jpeg-encoder`. Grayscale input is replicated to three
//! channels; CMYK input is not supported.

use crate::{IoError, IoResult};
use imgops_core::PixelMatrix;
use jpeg_decoder::PixelFormat;
use std::io::{Read, Write};

/// Quality used by [`crate::encode`] for JPEG output.
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelMatrix> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG metadata unavailable".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let stride = width as usize;

    let m = match info.pixel_format {
        PixelFormat::L8 => PixelMatrix::from_fn(width, height, |x, y| {
            let v = pixels[y as usize * stride + x as usize];
            [v, v, v]
        })?,
        PixelFormat::L16 => PixelMatrix::from_fn(width, height, |x, y| {
            // big-endian samples; keep the high byte
            let v = pixels[(y as usize * stride + x as usize) * 2];
            [v, v, v]
        })?,
        PixelFormat::RGB24 => PixelMatrix::from_fn(width, height, |x, y| {
            let idx = (y as usize * stride + x as usize) * 3;
            [pixels[idx], pixels[idx + 1], pixels[idx + 2]]
        })?,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    log::debug!("decoded JPEG {}x{} ({:?})", width, height, info.pixel_format);
    Ok(m)
}

/// Write an RGB JPEG image.
///
/// # Arguments
/// * `quality` - 1 (smallest) to 100 (best)
pub fn write_jpeg<W: Write>(m: &PixelMatrix, mut writer: W, quality: u8) -> IoResult<()> {
    let (width, height) = m.dimensions();
    let (Ok(w16), Ok(h16)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(IoError::EncodeError(format!(
            "JPEG dimensions limited to 65535, got {}x{}",
            width, height
        )));
    };

    let data = crate::rgb_rows(m);
    let mut buf = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut buf, quality.clamp(1, 100));
    encoder
        .encode(&data, w16, h16, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    writer.write_all(&buf).map_err(IoError::Io)?;
    Ok(())
}
