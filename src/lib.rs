//! # zenretouch
//!
//! Decoder and encoder for the uncompressed, bottom-up, 24-bit Windows
//! bitmap variant, plus a catalogue of classic per-pixel and geometric
//! retouch filters over an owned RGB grid.
//!
//! ## Codec
//!
//! The decoder reads the five header fields it needs from their fixed
//! little-endian offsets, validates the declared file size against the
//! computed scanline geometry, and materializes a top-to-bottom [`Image`]
//! from the bottom-up, BGR, 4-byte-padded pixel array. 32-bit input is
//! accepted with its alpha byte discarded; output is always 24-bit.
//! Encoding the decode of an encoder-produced file is byte-identical.
//!
//! ## Filters
//!
//! Every filter in [`transform`] is a pure function from a borrowed
//! [`Image`] to a new one. Channel arithmetic runs wider than 8 bits and is
//! clamped back to `[0, 255]` on storage.
//!
//! ## Non-Goals
//!
//! - Compression (RLE, bitfields) and palettes
//! - Alpha preservation
//! - Any format other than this BMP variant
//!
//! ## Usage
//!
//! ```no_run
//! use zenretouch::{Unstoppable, decode_bmp_file, encode_bmp_file, transform};
//!
//! let image = decode_bmp_file("in.bmp", None, Unstoppable)?;
//! let rotated = transform::rotate90(&image, Unstoppable)?;
//! encode_bmp_file("out.bmp", &rotated, Unstoppable)?;
//! # Ok::<(), zenretouch::RetouchError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod image;
mod limits;
mod pixel;

pub mod bmp;
pub mod transform;

// Re-exports
pub use bmp::{decode_bmp, decode_bmp_file, encode_bmp, encode_bmp_file};
pub use enough::{Stop, Unstoppable};
pub use error::RetouchError;
pub use image::Image;
pub use limits::Limits;
pub use pixel::Pixel;
