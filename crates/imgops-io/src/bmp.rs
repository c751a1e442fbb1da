//! BMP image format support
//!
//! Reads uncompressed Windows Bitmap files at 1, 4, 8 (palette), 24 and
//! 32 bits per pixel. Writes 24-bit bottom-up bitmaps.

use crate::{IoError, IoResult};
use imgops_core::{PixelMatrix, PixelMatrixMut, Rgb};
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

#[inline]
fn le_u32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

#[inline]
fn le_i32(b: &[u8]) -> i32 {
    i32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

/// Read a BMP image
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<PixelMatrix> {
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header).map_err(IoError::Io)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    let pixel_offset = le_u32(&file_header[10..14]) as usize;

    let mut info_header = [0u8; 40];
    reader.read_exact(&mut info_header).map_err(IoError::Io)?;

    let header_size = le_u32(&info_header[0..4]);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = le_i32(&info_header[4..8]);
    let height = le_i32(&info_header[8..12]);

    let planes = u16::from_le_bytes([info_header[12], info_header[13]]);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = u16::from_le_bytes([info_header[14], info_header[15]]);

    // 3 = BI_BITFIELDS; only the default BGR(A) masks are honored
    let compression = le_u32(&info_header[16..20]);
    if compression != 0 && compression != 3 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }

    if !matches!(bits_per_pixel, 1 | 4 | 8 | 24 | 32) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    let extra_header = header_size as usize - BMP_INFO_HEADER_SIZE as usize;
    if extra_header > 0 {
        skip(&mut reader, extra_header)?;
    }

    let palette = if bits_per_pixel <= 8 {
        let used = le_u32(&info_header[32..36]) as usize;
        let max_colors = 1usize << bits_per_pixel;
        let num_colors = if used == 0 || used > max_colors { max_colors } else { used };

        let mut raw = vec![0u8; num_colors * 4];
        reader.read_exact(&mut raw).map_err(IoError::Io)?;
        raw.chunks_exact(4).map(|c| [c[2], c[1], c[0]]).collect::<Vec<Rgb>>()
    } else {
        Vec::new()
    };

    let current_pos = BMP_FILE_HEADER_SIZE + header_size as usize + palette.len() * 4;
    if pixel_offset > current_pos {
        skip(&mut reader, pixel_offset - current_pos)?;
    }

    // BMP rows are 4-byte aligned
    let row_stride = (width as usize * bits_per_pixel as usize).div_ceil(32) * 4;
    let data_size = row_stride
        .checked_mul(height as usize)
        .ok_or_else(|| IoError::InvalidData(format!("BMP size overflow: {}x{}", width, height)))?;

    // raster must be fully present before the matrix is allocated
    let mut raster = Vec::new();
    reader
        .by_ref()
        .take(data_size as u64)
        .read_to_end(&mut raster)
        .map_err(IoError::Io)?;
    if raster.len() < data_size {
        return Err(IoError::InvalidData(format!(
            "truncated BMP pixel data: {} of {} bytes",
            raster.len(),
            data_size
        )));
    }

    let mut out = PixelMatrixMut::new(width, height)?;
    let lookup = |idx: u8| -> IoResult<Rgb> {
        palette.get(idx as usize).copied().ok_or_else(|| {
            IoError::InvalidData(format!("palette index {} out of range", idx))
        })
    };

    for (row, row_buffer) in raster.chunks_exact(row_stride).enumerate() {
        let row = row as u32;
        let y = if top_down { row } else { height - 1 - row };

        for x in 0..width {
            let xi = x as usize;
            let rgb = match bits_per_pixel {
                1 => lookup((row_buffer[xi / 8] >> (7 - (xi % 8))) & 1)?,
                4 => {
                    let byte = row_buffer[xi / 2];
                    lookup(if xi % 2 == 0 { byte >> 4 } else { byte & 0xF })?
                }
                8 => lookup(row_buffer[xi])?,
                24 => {
                    let idx = xi * 3;
                    [row_buffer[idx + 2], row_buffer[idx + 1], row_buffer[idx]]
                }
                _ => {
                    let idx = xi * 4;
                    [row_buffer[idx + 2], row_buffer[idx + 1], row_buffer[idx]]
                }
            };
            out.set_pixel_unchecked(x, y, rgb);
        }
    }

    log::debug!("decoded BMP {}x{} at {} bpp", width, height, bits_per_pixel);
    Ok(out.into())
}

fn skip<R: Read>(reader: &mut R, n: usize) -> IoResult<()> {
    let copied = std::io::copy(&mut reader.by_ref().take(n as u64), &mut std::io::sink())
        .map_err(IoError::Io)?;
    if copied < n as u64 {
        return Err(IoError::InvalidData("unexpected end of BMP header".to_string()));
    }
    Ok(())
}

/// Write a 24-bit BMP image
pub fn write_bmp<W: Write>(m: &PixelMatrix, mut writer: W) -> IoResult<()> {
    let (width, height) = m.dimensions();
    let bits_per_pixel: u16 = 24;

    let row_stride = (width as usize * 3).div_ceil(4) * 4;
    let pixel_data_size = row_stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let file_size = pixel_offset + pixel_data_size;

    if file_size > u32::MAX as usize {
        return Err(IoError::EncodeError(format!(
            "{}x{} is too large for BMP",
            width, height
        )));
    }

    let mut header = Vec::with_capacity(pixel_offset);
    header.extend_from_slice(b"BM");
    header.extend_from_slice(&(file_size as u32).to_le_bytes());
    header.extend_from_slice(&[0u8; 4]); // reserved
    header.extend_from_slice(&(pixel_offset as u32).to_le_bytes());

    header.extend_from_slice(&BMP_INFO_HEADER_SIZE.to_le_bytes());
    header.extend_from_slice(&(width as i32).to_le_bytes());
    header.extend_from_slice(&(height as i32).to_le_bytes()); // bottom-up
    header.extend_from_slice(&1u16.to_le_bytes()); // planes
    header.extend_from_slice(&bits_per_pixel.to_le_bytes());
    header.extend_from_slice(&0u32.to_le_bytes()); // compression
    header.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    header.extend_from_slice(&0i32.to_le_bytes()); // x pixels per meter
    header.extend_from_slice(&0i32.to_le_bytes()); // y pixels per meter
    header.extend_from_slice(&0u32.to_le_bytes()); // colors used
    header.extend_from_slice(&0u32.to_le_bytes()); // important colors
    writer.write_all(&header).map_err(IoError::Io)?;

    let mut row_buffer = vec![0u8; row_stride];
    for row in 0..height {
        let y = height - 1 - row;
        for x in 0..width {
            let [r, g, b] = m.get_pixel_unchecked(x, y);
            let idx = x as usize * 3;
            row_buffer[idx] = b;
            row_buffer[idx + 1] = g;
            row_buffer[idx + 2] = r;
        }
        writer.write_all(&row_buffer).map_err(IoError::Io)?;
    }

    Ok(())
}
