//! Encoded image formats and signature sniffing

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Encoded image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG (JFIF)
    Jpeg,
    /// Windows bitmap
    Bmp,
    /// Tagged Image File Format (read only)
    Tiff,
}

impl ImageFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Tiff => "tif",
        }
    }

    /// Look up a format by file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "bmp" => Some(ImageFormat::Bmp),
            "tif" | "tiff" => Some(ImageFormat::Tiff),
            _ => None,
        }
    }

    /// MIME type used when serving encoded bytes.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Tiff => "image/tiff",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Bmp => "BMP",
            ImageFormat::Tiff => "TIFF",
        };
        f.write_str(name)
    }
}

/// Leading bytes that identify each format, checked in order
const SIGNATURES: &[(&[u8], ImageFormat)] = &[
    (b"BM", ImageFormat::Bmp),
    (b"\x89PNG\r\n\x1a\n", ImageFormat::Png),
    (b"\xFF\xD8\xFF", ImageFormat::Jpeg),
    (b"II*\x00", ImageFormat::Tiff),
    (b"MM\x00*", ImageFormat::Tiff),
];

/// Longest signature in [`SIGNATURES`]
const HEADER_LEN: usize = 8;

/// Read the first bytes of a file and identify its format.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let file = File::open(path).map_err(IoError::Io)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64)
        .read_to_end(&mut header)
        .map_err(IoError::Io)?;
    detect_format_from_bytes(&header)
}

/// Identify the format of encoded image bytes.
///
/// # Errors
///
/// [`IoError::InvalidData`] for fewer than two bytes,
/// [`IoError::UnsupportedFormat`] when no signature matches.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(format!(
            "{} byte(s) are too few to identify an image",
            data.len()
        )));
    }

    SIGNATURES
        .iter()
        .find(|(magic, _)| data.starts_with(magic))
        .map(|&(_, format)| format)
        .ok_or_else(|| IoError::UnsupportedFormat("unrecognized image signature".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signatures() {
        let cases: [(&[u8], ImageFormat); 5] = [
            (b"BM\x36\x00\x00\x00", ImageFormat::Bmp),
            (b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR", ImageFormat::Png),
            (b"\xFF\xD8\xFF\xE0\x00\x10JFIF", ImageFormat::Jpeg),
            (b"II*\x00\x08\x00\x00\x00", ImageFormat::Tiff),
            (b"MM\x00*\x00\x00\x00\x08", ImageFormat::Tiff),
        ];
        for (data, format) in cases {
            assert_eq!(detect_format_from_bytes(data).unwrap(), format);
        }
    }

    #[test]
    fn test_unrecognized_and_short_input() {
        assert!(matches!(
            detect_format_from_bytes(b"GIF89a\x00\x00"),
            Err(IoError::UnsupportedFormat(_))
        ));
        // a truncated PNG signature is not a PNG
        assert!(matches!(
            detect_format_from_bytes(b"\x89PN"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"B"),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_header_len_covers_signatures() {
        assert!(SIGNATURES.iter().all(|(magic, _)| magic.len() <= HEADER_LEN));
    }

    #[test]
    fn test_extension_lookup() {
        assert_eq!(ImageFormat::from_extension("JPEG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("tif"), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::from_extension("gif"), None);
        for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Bmp, ImageFormat::Tiff] {
            assert_eq!(ImageFormat::from_extension(format.extension()), Some(format));
        }
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
    }
}
