//! Per-pixel color filters.

use enough::Stop;

use super::per_pixel;
use crate::error::RetouchError;
use crate::image::Image;
use crate::pixel::{Pixel, clamp_channel};

/// Multiply each channel by `factor`, saturating at the storage range.
fn scale(px: Pixel, factor: f64) -> Pixel {
    Pixel::new(
        clamp_channel(f64::from(px.r) * factor),
        clamp_channel(f64::from(px.g) * factor),
        clamp_channel(f64::from(px.b) * factor),
    )
}

/// Move each channel toward white: `255 - (255 - c) * factor`.
fn scale_toward_white(px: Pixel, factor: f64) -> Pixel {
    let lift = |c: u8| clamp_channel(255.0 - (255.0 - f64::from(c)) * factor);
    Pixel::new(lift(px.r), lift(px.g), lift(px.b))
}

/// Darken each pixel proportionally to its distance from the image center.
///
/// `factor = (height - distance) / height`, so corners of a wide image can
/// go fully black (the factor clamps at zero rather than wrapping).
pub fn vignette(image: &Image, stop: impl Stop) -> Result<Image, RetouchError> {
    let height = f64::from(image.height());
    // Integer center, matching the grid's discrete coordinates.
    let center_col = i64::from(image.width() / 2);
    let center_row = i64::from(image.height() / 2);

    let mut pixels = Vec::with_capacity(image.pixels().len());
    for (row_idx, row) in image.rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let dy = row_idx as i64 - center_row;
        for (col, &px) in row.iter().enumerate() {
            let dx = col as i64 - center_col;
            let distance = ((dx * dx + dy * dy) as f64).sqrt();
            let factor = (height - distance) / height;
            pixels.push(scale(px, factor));
        }
    }
    Ok(Image::from_raw(image.width(), image.height(), pixels))
}

/// Tone curve: lights lighter, darks darker, midtones untouched.
///
/// Pixels with integer channel average >= 170 are lifted toward white by
/// `factor`, pixels with average < 90 are scaled toward black, and the
/// rest pass through unchanged.
pub fn clarendon(image: &Image, factor: f64, stop: impl Stop) -> Result<Image, RetouchError> {
    per_pixel(image, &stop, |px| {
        let average = px.average();
        if average >= 170 {
            scale_toward_white(px, factor)
        } else if average < 90 {
            scale(px, factor)
        } else {
            px
        }
    })
}

/// Set every channel to the integer average of the original three.
pub fn grayscale(image: &Image, stop: impl Stop) -> Result<Image, RetouchError> {
    per_pixel(image, &stop, |px| {
        let gray = px.average();
        Pixel::new(gray, gray, gray)
    })
}

/// Pure black/white threshold on the integer channel average (>= 128 is
/// white).
pub fn high_contrast(image: &Image, stop: impl Stop) -> Result<Image, RetouchError> {
    per_pixel(image, &stop, |px| {
        if px.average() >= 128 {
            Pixel::WHITE
        } else {
            Pixel::BLACK
        }
    })
}

/// Lighten every channel: `255 - (255 - c) * factor`.
pub fn lighten(image: &Image, factor: f64, stop: impl Stop) -> Result<Image, RetouchError> {
    per_pixel(image, &stop, |px| scale_toward_white(px, factor))
}

/// Darken every channel: `c * factor`.
pub fn darken(image: &Image, factor: f64, stop: impl Stop) -> Result<Image, RetouchError> {
    per_pixel(image, &stop, |px| scale(px, factor))
}

/// Posterize to black, white, and the pure primaries.
///
/// Channel sum >= 550 is white, <= 150 is black; anything else becomes the
/// pure primary of its largest channel, ties broken red > green > blue.
pub fn five_color(image: &Image, stop: impl Stop) -> Result<Image, RetouchError> {
    per_pixel(image, &stop, |px| {
        let sum = px.channel_sum();
        if sum >= 550 {
            Pixel::WHITE
        } else if sum <= 150 {
            Pixel::BLACK
        } else if px.r >= px.g && px.r >= px.b {
            Pixel::new(255, 0, 0)
        } else if px.g >= px.b {
            Pixel::new(0, 255, 0)
        } else {
            Pixel::new(0, 0, 255)
        }
    })
}
