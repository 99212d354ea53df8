//! Rectangular sub-raster extraction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CropError;
use crate::raster::Raster;

/// A rectangle in raster coordinates: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The region covering all of `raster`.
    pub fn full(raster: &Raster) -> Self {
        Self::new(0, 0, raster.width(), raster.height())
    }

    /// Check the region against an image of `image_width` × `image_height`.
    ///
    /// The extent must be non-zero and `x + width`, `y + height` must not
    /// exceed the image. Coordinate overflow counts as out of bounds.
    pub fn validate(&self, image_width: u32, image_height: u32) -> Result<(), CropError> {
        if self.width == 0 || self.height == 0 {
            return Err(CropError::EmptyRegion { region: *self });
        }
        if !self.fits_within(image_width, image_height) {
            return Err(CropError::OutOfBounds {
                region: *self,
                width: image_width,
                height: image_height,
            });
        }
        Ok(())
    }

    /// Whether the region lies inside an image of the given size.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= image_width && b <= image_height)
    }

    /// Whether the point `(px, py)` lies inside the region.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x
            && py >= self.y
            && px - self.x < self.width
            && py - self.y < self.height
    }
}

impl fmt::Display for CropRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Copy `region` of `base` into a new, independently owned raster.
pub fn crop(base: &Raster, region: CropRegion) -> Result<Raster, CropError> {
    region.validate(base.width(), base.height())?;

    let x0 = region.x as usize;
    let x1 = x0 + region.width as usize;
    let mut pixels = Vec::with_capacity(region.width as usize * region.height as usize);
    for row in base
        .rows()
        .skip(region.y as usize)
        .take(region.height as usize)
    {
        pixels.extend_from_slice(&row[x0..x1]);
    }
    Ok(Raster::from_parts(region.width, region.height, pixels))
}
