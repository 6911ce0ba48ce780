//! Encoder: always emits uncompressed 24-bit output with a 14-byte file
//! header and a 40-byte info header.

use enough::Stop;

use crate::error::RetouchError;
use crate::image::Image;

const FILE_HEADER_SIZE: usize = 14;
const INFO_HEADER_SIZE: usize = 40;
const PIXEL_ARRAY_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// 2835 pixels per meter, roughly 72 DPI.
const RESOLUTION_PPM: u32 = 2835;

pub(crate) fn encode(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, RetouchError> {
    if image.is_empty() {
        return Err(RetouchError::EmptyImage);
    }

    let w = image.width() as usize;
    let h = image.height() as usize;
    let too_large = || RetouchError::DimensionsTooLarge {
        width: image.width(),
        height: image.height(),
    };

    // Scanlines are padded up to a 4-byte boundary.
    let row_stride = w
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
        .ok_or_else(too_large)?;
    let pixel_data_size = row_stride.checked_mul(h).ok_or_else(too_large)?;
    let file_size = pixel_data_size
        .checked_add(PIXEL_ARRAY_OFFSET)
        .ok_or_else(too_large)?;

    let mut out = Vec::with_capacity(file_size);
    write_headers(&mut out, file_size, pixel_data_size, image.width(), image.height());

    let pad_bytes = row_stride - w * 3;
    for (row_idx, row) in image.rows().rev().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_headers(out: &mut Vec<u8>, file_size: usize, pixel_data_size: usize, width: u32, height: u32) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(PIXEL_ARRAY_OFFSET as u32).to_le_bytes());

    // Info header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes()); // h resolution
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
