//! Codec for the uncompressed, bottom-up, 24-bit BMP variant.
//!
//! On-disk layout: 14-byte file header (`BM`, file size, reserved, pixel
//! array offset), 40-byte info header (dimensions, planes, bit depth,
//! compression, raw size, resolution, palette counts), then the pixel
//! array — bottom row first, each row left to right as BGR triples, each
//! row zero-padded to a 4-byte boundary.
//!
//! The decoder validates the declared file size against the geometry the
//! header implies before touching the pixel array; a mismatch is
//! [`RetouchError::GeometryMismatch`] and no partial image is produced.

mod decode;
mod encode;
mod header;

use std::path::Path;

use enough::Stop;

use crate::error::RetouchError;
use crate::image::Image;
use crate::limits::Limits;

/// Decode a BMP byte buffer into an [`Image`].
///
/// Accepts 24-bit input directly and 32-bit input with the alpha byte
/// discarded. The on-disk bottom-up row order becomes top-to-bottom in
/// the returned grid.
pub fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Image, RetouchError> {
    decode::decode(data, limits, &stop)
}

/// Read and decode a BMP file.
///
/// Open and read failures surface as [`RetouchError::Io`].
pub fn decode_bmp_file(
    path: impl AsRef<Path>,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Image, RetouchError> {
    let data = std::fs::read(path)?;
    decode::decode(&data, limits, &stop)
}

/// Encode an image as an uncompressed 24-bit BMP.
///
/// A grid with zero rows or zero columns is [`RetouchError::EmptyImage`].
pub fn encode_bmp(image: &Image, stop: impl Stop) -> Result<Vec<u8>, RetouchError> {
    encode::encode(image, &stop)
}

/// Encode an image and write it to `path`.
///
/// Write failures surface as [`RetouchError::Io`] rather than a false
/// success.
pub fn encode_bmp_file(
    path: impl AsRef<Path>,
    image: &Image,
    stop: impl Stop,
) -> Result<(), RetouchError> {
    let bytes = encode::encode(image, &stop)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
