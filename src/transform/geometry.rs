//! Geometric filters: rotation and nearest-neighbor enlargement.

use enough::Stop;

use crate::error::RetouchError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::Pixel;

/// Rotate 90 degrees clockwise.
///
/// `new[c][height - 1 - r] = old[r][c]`; a `width x height` grid becomes
/// `height x width`.
pub fn rotate90(image: &Image, stop: impl Stop) -> Result<Image, RetouchError> {
    rotate_once(image, &stop)
}

fn rotate_once(image: &Image, stop: &dyn Stop) -> Result<Image, RetouchError> {
    let width = image.width();
    let height = image.height();
    let mut out = Image::filled(height, width, Pixel::default());
    for row in 0..height {
        if row % 16 == 0 {
            stop.check()?;
        }
        for col in 0..width {
            out.set(col, height - 1 - row, image.get(row, col));
        }
    }
    Ok(out)
}

/// Rotate clockwise by `turns` quarter turns.
///
/// Only the turn count modulo 4 matters; negative counts rotate the other
/// way, so `turns` and `turns + 4` always produce identical output.
pub fn rotate_quarter_turns(
    image: &Image,
    turns: i32,
    stop: impl Stop,
) -> Result<Image, RetouchError> {
    let mut out = image.clone();
    for _ in 0..turns.rem_euclid(4) {
        out = rotate_once(&out, &stop)?;
    }
    Ok(out)
}

/// Nearest-neighbor upscale to `(width * x_scale) x (height * y_scale)`.
///
/// `new[r][c] = old[r / y_scale][c / x_scale]`. Scales must be at least 1;
/// `limits`, when given, bound the output dimensions.
pub fn enlarge(
    image: &Image,
    x_scale: u32,
    y_scale: u32,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Image, RetouchError> {
    if x_scale == 0 || y_scale == 0 {
        return Err(RetouchError::InvalidParameter(
            "enlarge scales must be at least 1".into(),
        ));
    }

    let too_large = || RetouchError::DimensionsTooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = image.width().checked_mul(x_scale).ok_or_else(too_large)?;
    let height = image.height().checked_mul(y_scale).ok_or_else(too_large)?;
    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;

    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(pixel_count.checked_mul(3).ok_or_else(too_large)?)?;
    }

    let mut pixels = Vec::with_capacity(pixel_count);
    for row in 0..height {
        if row % 16 == 0 {
            stop.check()?;
        }
        let src_row = row / y_scale;
        for col in 0..width {
            pixels.push(image.get(src_row, col / x_scale));
        }
    }
    Ok(Image::from_raw(width, height, pixels))
}
