use crate::error::RetouchError;
use crate::pixel::Pixel;

/// An owned rectangular pixel grid: `height` rows of `width` columns,
/// row-major, origin at the top-left.
///
/// Every row has length `width`. The grid has no identity beyond its
/// content; filters always build a new `Image` rather than mutating one
/// in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Grid filled with a single color.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Self {
        Image {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Image {
            width,
            height,
            pixels,
        }
    }

    /// Wrap a row-major pixel buffer.
    ///
    /// Returns [`RetouchError::InvalidParameter`] if the buffer length does
    /// not equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, RetouchError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RetouchError::InvalidParameter(format!(
                "pixel buffer length {} does not match {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Image {
            width,
            height,
            pixels,
        })
    }

    /// Invariant upheld by callers: `pixels.len() == width * height`.
    pub(crate) fn from_raw(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Image {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the grid holds no pixels (zero rows or zero columns).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    pub fn get(&self, row: u32, col: u32) -> Pixel {
        assert!(row < self.height && col < self.width, "pixel out of bounds");
        self.pixels[row as usize * self.width as usize + col as usize]
    }

    /// Overwrite the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    pub fn set(&mut self, row: u32, col: u32, pixel: Pixel) {
        assert!(row < self.height && col < self.width, "pixel out of bounds");
        self.pixels[row as usize * self.width as usize + col as usize] = pixel;
    }

    /// Iterate rows top to bottom, each a `width`-long slice.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Pixel> {
        // max(1) keeps the chunk size valid for a zero-width grid, which
        // has no pixels and therefore yields no rows.
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// The full row-major pixel buffer.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Copy out the grid as typed `rgb` pixels.
    #[cfg(feature = "rgb")]
    pub fn to_rgb8(&self) -> Vec<rgb::RGB8> {
        self.pixels.iter().map(|&px| px.into()).collect()
    }

    /// Build a grid from typed `rgb` pixels.
    ///
    /// Returns [`RetouchError::InvalidParameter`] if the buffer length does
    /// not equal `width * height`.
    #[cfg(feature = "rgb")]
    pub fn from_rgb8(width: u32, height: u32, pixels: &[rgb::RGB8]) -> Result<Self, RetouchError> {
        Self::from_pixels(width, height, pixels.iter().map(|&px| px.into()).collect())
    }
}
