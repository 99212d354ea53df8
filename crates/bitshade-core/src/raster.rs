//! In-memory pixel buffer shared by the codec and the transform engine.

use crate::error::RasterError;

/// One pixel as `[R, G, B]`.
pub type Rgb = [u8; 3];

/// A width × height grid of 8-bit RGB pixels.
///
/// Pixels are stored row-major with the top row first. The buffer always
/// holds exactly `width * height` pixels, so transforms never need bounds
/// checks beyond the dimensions themselves. Rasters are never shared
/// mutably: every transform allocates a fresh output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// A black raster of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| [0, 0, 0])
    }

    /// Build a raster by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap an existing row-major pixel buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, RasterError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::BufferSize {
                expected: expected.saturating_mul(3),
                actual: pixels.len().saturating_mul(3),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Copy a packed `RGBRGB...` byte buffer into a new raster.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, RasterError> {
        let expected = pixel_count(width, height)?
            .checked_mul(3)
            .ok_or(RasterError::Overflow { width, height })?;
        if bytes.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels: &[Rgb] = bytemuck::cast_slice(bytes);
        Ok(Self {
            width,
            height,
            pixels: pixels.to_vec(),
        })
    }

    /// Assemble a raster whose buffer length is already known to match.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
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

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the raster covers zero pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row-major pixels, top row first.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The pixel buffer viewed as packed `RGBRGB...` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Pixels of row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Rgb]> + '_ {
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.pixels[y * width..(y + 1) * width])
    }

    /// Apply `f` to every pixel, producing a new raster of the same size.
    pub fn map_pixels(&self, f: impl FnMut(&Rgb) -> Rgb) -> Self {
        Self::from_parts(self.width, self.height, self.pixels.iter().map(f).collect())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize, RasterError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(RasterError::Overflow { width, height })
}

impl From<&image::RgbImage> for Raster {
    fn from(img: &image::RgbImage) -> Self {
        Self::from_fn(img.width(), img.height(), |x, y| img.get_pixel(x, y).0)
    }
}

impl From<&Raster> for image::RgbImage {
    fn from(raster: &Raster) -> Self {
        image::RgbImage::from_fn(raster.width, raster.height, |x, y| {
            image::Rgb(raster.pixels[raster.index(x, y)])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Raster {
        Raster::from_fn(width, height, |x, y| [x as u8, y as u8, (x + y) as u8])
    }

    #[test]
    fn test_from_fn_fills_row_major() {
        let raster = gradient(3, 2);
        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.pixels()[0], [0, 0, 0]);
        assert_eq!(raster.pixels()[2], [2, 0, 2]);
        assert_eq!(raster.pixels()[3], [0, 1, 1]);
        assert_eq!(raster.pixel(2, 1), Some([2, 1, 3]));
        assert_eq!(raster.pixel(3, 0), None);
        assert_eq!(raster.pixel(0, 2), None);
    }

    #[test]
    fn test_from_pixels_rejects_wrong_length() {
        let err = Raster::from_pixels(2, 2, vec![[0, 0, 0]; 3]).unwrap_err();
        assert_eq!(
            err,
            RasterError::BufferSize {
                expected: 12,
                actual: 9
            }
        );
    }

    #[test]
    fn test_from_rgb_bytes_matches_as_bytes() {
        let bytes: Vec<u8> = (0..18).collect();
        let raster = Raster::from_rgb_bytes(3, 2, &bytes).unwrap();
        assert_eq!(raster.pixel(1, 0), Some([3, 4, 5]));
        assert_eq!(raster.as_bytes(), bytes.as_slice());
        assert!(Raster::from_rgb_bytes(3, 2, &bytes[..17]).is_err());
    }

    #[test]
    fn test_rows_walk_top_to_bottom() {
        let raster = gradient(2, 3);
        let firsts: Vec<Rgb> = raster.rows().map(|row| row[0]).collect();
        assert_eq!(firsts, vec![[0, 0, 0], [0, 1, 1], [0, 2, 2]]);
        assert_eq!(raster.row(1).map(<[Rgb]>::len), Some(2));
        assert!(raster.row(3).is_none());
    }

    #[test]
    fn test_zero_width_raster_is_empty_but_has_rows() {
        let raster = Raster::new(0, 4);
        assert!(raster.is_empty());
        assert_eq!(raster.rows().count(), 4);
        assert!(raster.rows().all(<[Rgb]>::is_empty));
    }

    #[test]
    fn test_rgb_image_conversion_is_lossless() {
        let raster = gradient(5, 4);
        let img = image::RgbImage::from(&raster);
        assert_eq!(img.dimensions(), (5, 4));
        assert_eq!(img.get_pixel(4, 3).0, [4, 3, 7]);
        assert_eq!(Raster::from(&img), raster);
    }
}
