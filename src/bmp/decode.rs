//! Decoder for the uncompressed, bottom-up, padded-scanline pixel array.

use enough::Stop;

use super::header;
use crate::error::RetouchError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::Pixel;

/// Header fields the decoder needs. Transient: validated, used to locate
/// the pixel array, then dropped. Encode recomputes everything from the grid.
pub(crate) struct BmpHeader {
    pub file_size: u32,
    pub pixel_array_offset: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
}

impl BmpHeader {
    fn bytes_per_pixel(&self) -> u64 {
        u64::from(self.bits_per_pixel) / 8
    }

    /// Unpadded scanline size in bytes.
    fn scanline_size(&self) -> u64 {
        u64::from(self.width) * self.bytes_per_pixel()
    }

    /// Zero bytes appended to each scanline to reach a 4-byte boundary.
    pub(crate) fn padding(&self) -> u64 {
        (4 - self.scanline_size() % 4) % 4
    }

    /// File size implied by the header geometry.
    fn computed_file_size(&self) -> u64 {
        u64::from(self.pixel_array_offset)
            + (self.scanline_size() + self.padding()) * u64::from(self.height)
    }
}

pub(crate) fn parse_header(data: &[u8]) -> Result<BmpHeader, RetouchError> {
    if data.get(..2) != Some(b"BM".as_slice()) {
        return Err(RetouchError::UnrecognizedFormat);
    }

    let file_size = header::read_le(data, header::FILE_SIZE)?;
    let pixel_array_offset = header::read_le(data, header::PIXEL_ARRAY_OFFSET)?;
    let width = header::read_le(data, header::WIDTH)?;
    let height = header::read_le(data, header::HEIGHT)?;
    let bits_per_pixel = header::read_le(data, header::BITS_PER_PIXEL)? as u16;

    // Only effective 24-bit RGB is supported; 32-bit input has its alpha
    // byte discarded.
    if bits_per_pixel != 24 && bits_per_pixel != 32 {
        return Err(RetouchError::UnsupportedVariant(format!(
            "{bits_per_pixel}-bit BMP unsupported (only 24 and 32)"
        )));
    }
    if width == 0 {
        return Err(RetouchError::InvalidHeader("BMP width is zero".into()));
    }
    if height == 0 {
        return Err(RetouchError::InvalidHeader("BMP height is zero".into()));
    }
    if (width as i32) < 0 {
        return Err(RetouchError::InvalidHeader(format!(
            "BMP width is negative ({})",
            width as i32
        )));
    }
    if (height as i32) < 0 {
        return Err(RetouchError::UnsupportedVariant(
            "top-down BMP (negative height) unsupported".into(),
        ));
    }

    Ok(BmpHeader {
        file_size,
        pixel_array_offset,
        width,
        height,
        bits_per_pixel,
    })
}

pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, RetouchError> {
    let header = parse_header(data)?;

    let declared = u64::from(header.file_size);
    let computed = header.computed_file_size();
    if declared != computed {
        return Err(RetouchError::GeometryMismatch { declared, computed });
    }

    let too_large = RetouchError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    };
    let out_bytes = (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(too_large)?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        limits.check_memory(out_bytes)?;
    }
    stop.check()?;

    let width = header.width as usize;
    let height = header.height as usize;
    let bpp = header.bytes_per_pixel() as usize;
    let padding = header.padding() as usize;
    let row_bytes = width * bpp;

    let mut pixels = vec![Pixel::default(); out_bytes / 3];
    let mut pos = header.pixel_array_offset as usize;

    // On-disk scanline k holds output row height-1-k (bottom-up storage),
    // pixels left to right, channels in B, G, R order.
    for k in 0..height {
        if k % 16 == 0 {
            stop.check()?;
        }
        let scanline = data.get(pos..pos + row_bytes).ok_or(RetouchError::UnexpectedEof)?;
        // The trailing padding must be present too; the geometry check
        // promised it, but the buffer may still be truncated.
        if data.len() < pos + row_bytes + padding {
            return Err(RetouchError::UnexpectedEof);
        }

        let row = height - 1 - k;
        let out_row = &mut pixels[row * width..(row + 1) * width];
        for (out_px, chunk) in out_row.iter_mut().zip(scanline.chunks_exact(bpp)) {
            *out_px = Pixel::new(chunk[2], chunk[1], chunk[0]);
        }

        pos += row_bytes + padding;
    }

    Ok(Image::from_raw(header.width, header.height, pixels))
}
