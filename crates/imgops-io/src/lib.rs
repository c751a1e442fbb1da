//! imgops-io - Image I/O for imgops
//!
//! Decodes encoded image bytes into [`PixelMatrix`] values and encodes them
//! back. Supported formats:
//!
//! - PNG (feature `png-format`)
//! - JPEG (feature `jpeg`)
//! - BMP (feature `bmp`)
//! - TIFF, read only (feature `tiff-format`)
//!
//! All formats are enabled by default. Every decoder produces 8-bit RGB:
//! gray is replicated, alpha is discarded and 16-bit samples keep their
//! high byte.
//!
//! # Example
//!
//! ```
//! use imgops_core::PixelMatrix;
//! use imgops_io::{decode, encode_png};
//!
//! let m = PixelMatrix::new_filled(4, 4, [255, 0, 0]).unwrap();
//! let bytes = encode_png(&m).unwrap();
//! let back = decode(&bytes).unwrap();
//! assert_eq!(back.invert().get_pixel(0, 0), Some([0, 255, 255]));
//! ```

mod error;
pub mod format;

#[cfg(feature = "bmp")]
pub mod bmp;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "tiff-format")]
pub mod tiff;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use imgops_core::PixelMatrix;
use std::path::Path;

/// Default upper bound on encoded input accepted by [`decode`].
pub const DEFAULT_MAX_INPUT_BYTES: usize = 3_000_000;

/// Limits applied before any decoding takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Largest accepted input in bytes; `None` disables the check.
    pub max_input_bytes: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
        }
    }
}

impl DecodeOptions {
    /// Options without an input size limit.
    pub fn unlimited() -> Self {
        Self {
            max_input_bytes: None,
        }
    }

    /// Options with the given input size limit.
    pub fn with_max_input_bytes(limit: usize) -> Self {
        Self {
            max_input_bytes: Some(limit),
        }
    }
}

/// Decode an image with the default [`DecodeOptions`].
pub fn decode(data: &[u8]) -> IoResult<PixelMatrix> {
    decode_with_options(data, &DecodeOptions::default())
}

/// Decode an image, detecting its format from the leading magic bytes.
///
/// # Errors
///
/// - [`IoError::InputTooLarge`] if `data` exceeds `options.max_input_bytes`
///   (checked before the format is inspected)
/// - [`IoError::UnsupportedFormat`] for unknown or disabled formats
/// - [`IoError::DecodeError`] / [`IoError::InvalidData`] for corrupt input
pub fn decode_with_options(data: &[u8], options: &DecodeOptions) -> IoResult<PixelMatrix> {
    if let Some(limit) = options.max_input_bytes.filter(|&limit| data.len() > limit) {
        log::warn!("rejecting {} byte input, limit is {}", data.len(), limit);
        return Err(IoError::InputTooLarge {
            size: data.len(),
            limit,
        });
    }

    let format = detect_format_from_bytes(data)?;
    log::debug!("decoding {} bytes as {}", data.len(), format);

    #[allow(unused_variables)]
    let cursor = std::io::Cursor::new(data);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::read_png(cursor),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => crate::jpeg::read_jpeg(cursor),
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => crate::bmp::read_bmp(cursor),
        #[cfg(feature = "tiff-format")]
        ImageFormat::Tiff => crate::tiff::read_tiff(cursor),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{} support is not enabled",
            other
        ))),
    }
}

/// Encode a matrix into the given format.
///
/// PNG and BMP are lossless; JPEG uses [`jpeg::DEFAULT_QUALITY`]. TIFF
/// output is not supported.
pub fn encode(m: &PixelMatrix, format: ImageFormat) -> IoResult<Vec<u8>> {
    #[allow(unused_mut)]
    let mut buf = Vec::new();
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::write_png(m, &mut buf)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => crate::jpeg::write_jpeg(m, &mut buf, crate::jpeg::DEFAULT_QUALITY)?,
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => crate::bmp::write_bmp(m, &mut buf)?,
        ImageFormat::Tiff => {
            return Err(IoError::UnsupportedFormat(
                "TIFF encoding is not supported".to_string(),
            ));
        }
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "{} support is not enabled",
                other
            )));
        }
    }
    log::debug!("encoded {}x{} as {} ({} bytes)", m.width(), m.height(), format, buf.len());
    Ok(buf)
}

/// Encode a matrix as 8-bit RGB PNG.
pub fn encode_png(m: &PixelMatrix) -> IoResult<Vec<u8>> {
    encode(m, ImageFormat::Png)
}

/// Read an image file. No input size limit is applied.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelMatrix> {
    let data = std::fs::read(path.as_ref()).map_err(IoError::Io)?;
    decode_with_options(&data, &DecodeOptions::unlimited())
}

/// Write an image file in the given format.
pub fn write_image<P: AsRef<Path>>(
    m: &PixelMatrix,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let bytes = encode(m, format)?;
    std::fs::write(path.as_ref(), bytes).map_err(IoError::Io)?;
    Ok(())
}

/// Interleave a matrix into row-major `R G B` bytes.
#[allow(dead_code)]
pub(crate) fn rgb_rows(m: &PixelMatrix) -> Vec<u8> {
    let (width, height) = m.dimensions();
    let mut out = Vec::with_capacity(m.pixel_count() * 3);
    for y in 0..height {
        for x in 0..width {
            out.extend_from_slice(&m.get_pixel_unchecked(x, y));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_oversized_input() {
        let data = vec![0u8; 16];
        let opts = DecodeOptions::with_max_input_bytes(8);
        assert!(matches!(
            decode_with_options(&data, &opts),
            Err(IoError::InputTooLarge { size: 16, limit: 8 })
        ));
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(DecodeOptions::default().max_input_bytes, Some(3_000_000));
        let big = vec![0u8; DEFAULT_MAX_INPUT_BYTES + 1];
        assert!(matches!(decode(&big), Err(IoError::InputTooLarge { .. })));
    }

    #[test]
    fn test_decode_unknown_format() {
        assert!(matches!(
            decode(b"GIF89a\x01\x00\x01\x00"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_encode_decode_each_format() {
        let m = PixelMatrix::from_fn(6, 4, |x, y| [(x * 40) as u8, (y * 60) as u8, 200]).unwrap();
        for format in [ImageFormat::Png, ImageFormat::Bmp] {
            let bytes = encode(&m, format).unwrap();
            assert_eq!(detect_format_from_bytes(&bytes).unwrap(), format);
            assert_eq!(decode(&bytes).unwrap(), m, "{format}");
        }
        let jpeg = encode(&m, ImageFormat::Jpeg).unwrap();
        assert_eq!(decode(&jpeg).unwrap().dimensions(), (6, 4));
    }

    #[test]
    fn test_encode_tiff_unsupported() {
        let m = PixelMatrix::new(2, 2).unwrap();
        assert!(matches!(
            encode(&m, ImageFormat::Tiff),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_rgb_rows_order() {
        let m = PixelMatrix::from_fn(2, 2, |x, y| [x as u8, y as u8, 9]).unwrap();
        assert_eq!(rgb_rows(&m), vec![0, 0, 9, 1, 0, 9, 0, 1, 9, 1, 1, 9]);
    }
}
