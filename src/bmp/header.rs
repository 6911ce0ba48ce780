//! Fixed-offset header fields for the BMP variant we read.
//!
//! Each field the decoder needs is a named [`RawField`] consumed by one
//! generic little-endian reader, instead of magic offsets scattered
//! through the parser. The same table documents the inverse mapping the
//! encoder emits.

use crate::error::RetouchError;

/// A little-endian unsigned integer at a fixed byte offset.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RawField {
    pub offset: usize,
    /// Field width in bytes, 1–4.
    pub len: usize,
}

/// Total file size declared by the file header.
pub(crate) const FILE_SIZE: RawField = RawField { offset: 2, len: 4 };
/// Byte offset of the first on-disk scanline.
pub(crate) const PIXEL_ARRAY_OFFSET: RawField = RawField { offset: 10, len: 4 };
/// Width in pixels.
pub(crate) const WIDTH: RawField = RawField { offset: 18, len: 4 };
/// Height in pixels (positive = bottom-up storage).
pub(crate) const HEIGHT: RawField = RawField { offset: 22, len: 4 };
/// Bits per pixel.
pub(crate) const BITS_PER_PIXEL: RawField = RawField { offset: 28, len: 2 };

/// Read one header field, least significant byte first.
///
/// A field extending past the end of the input is [`RetouchError::UnexpectedEof`].
pub(crate) fn read_le(data: &[u8], field: RawField) -> Result<u32, RetouchError> {
    debug_assert!(field.len >= 1 && field.len <= 4);
    let end = field
        .offset
        .checked_add(field.len)
        .ok_or(RetouchError::UnexpectedEof)?;
    let bytes = data
        .get(field.offset..end)
        .ok_or(RetouchError::UnexpectedEof)?;
    let mut value = 0u32;
    for (i, &byte) in bytes.iter().enumerate() {
        value |= u32::from(byte) << (8 * i);
    }
    Ok(value)
}
