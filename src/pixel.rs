/// A single RGB pixel. Copied, never aliased; no alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b }
    }

    /// Integer average of the three channels.
    pub fn average(self) -> u8 {
        (self.channel_sum() / 3) as u8
    }

    pub(crate) fn channel_sum(self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }
}

/// Narrow an intermediate channel value back to storage range.
///
/// The clamp is deliberate: scaling factors above 1 (or negative vignette
/// factors near the corners) produce out-of-range intermediates, and those
/// saturate instead of wrapping.
pub(crate) fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Pixel {
    fn from(px: rgb::RGB8) -> Self {
        Pixel::new(px.r, px.g, px.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Pixel> for rgb::RGB8 {
    fn from(px: Pixel) -> Self {
        rgb::RGB8 {
            r: px.r,
            g: px.g,
            b: px.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rounds_down() {
        assert_eq!(Pixel::new(0, 0, 2).average(), 0);
        assert_eq!(Pixel::new(255, 255, 255).average(), 255);
        assert_eq!(Pixel::new(100, 150, 200).average(), 150);
    }

    #[test]
    fn clamp_saturates_both_ends() {
        assert_eq!(clamp_channel(-12.5), 0);
        assert_eq!(clamp_channel(0.0), 0);
        assert_eq!(clamp_channel(127.9), 127);
        assert_eq!(clamp_channel(255.0), 255);
        assert_eq!(clamp_channel(300.0), 255);
    }
}
