//! The retouch filter catalogue.
//!
//! Every filter is a pure function from a borrowed [`Image`](crate::Image)
//! to a new one; inputs are never mutated. Filters check for cancellation
//! between rows. Channel arithmetic runs wider than 8 bits and is clamped
//! back to `[0, 255]` on storage.

mod color;
mod geometry;

pub use color::{clarendon, darken, five_color, grayscale, high_contrast, lighten, vignette};
pub use geometry::{enlarge, rotate90, rotate_quarter_turns};

use enough::Stop;

use crate::error::RetouchError;
use crate::image::Image;
use crate::pixel::Pixel;

/// Apply `f` to every pixel, checking for cancellation between rows.
fn per_pixel(
    image: &Image,
    stop: &dyn Stop,
    f: impl Fn(Pixel) -> Pixel,
) -> Result<Image, RetouchError> {
    let mut pixels = Vec::with_capacity(image.pixels().len());
    for (row_idx, row) in image.rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        pixels.extend(row.iter().map(|&px| f(px)));
    }
    Ok(Image::from_raw(image.width(), image.height(), pixels))
}
