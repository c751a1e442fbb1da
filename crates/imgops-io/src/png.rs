//! PNG image format support
//!
//! Palette and sub-byte images are expanded to 8 bits per sample and
//! 16-bit samples keep their most significant byte. Gray images are
//! replicated to three channels; alpha is discarded.

use crate::{IoError, IoResult};
use imgops_core::{PixelMatrix, Rgb};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelMatrix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth after expansion: {:?}",
            output_info.bit_depth
        )));
    }

    let samples = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
        }
    };

    let line_size = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let m = PixelMatrix::from_fn(output_info.width, output_info.height, |x, y| {
        let idx = y as usize * line_size + x as usize * samples;
        sample_to_rgb(&data[idx..idx + samples])
    })?;

    log::debug!("decoded PNG {}x{} ({:?})", m.width(), m.height(), output_info.color_type);
    Ok(m)
}

/// Convert one decoded pixel (1 to 4 samples) to RGB.
#[inline]
fn sample_to_rgb(px: &[u8]) -> Rgb {
    match px.len() {
        1 | 2 => [px[0], px[0], px[0]],
        _ => [px[0], px[1], px[2]],
    }
}

/// Write a PNG image (8-bit RGB)
pub fn write_png<W: Write>(m: &PixelMatrix, writer: W) -> IoResult<()> {
    let width = m.width();
    let height = m.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data = crate::rgb_rows(m);
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
