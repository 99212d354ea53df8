//! Per-channel auto-level contrast stretch.
//!
//! Pass 1 finds the observed `[min, max]` of R, G, and B independently.
//! Pass 2 remaps each channel so its observed range covers `[0, 255]`:
//!
//! ```text
//! out = clamp((v − min) × 255 / (max − min), 0, 255)
//! ```
//!
//! with integer (truncating) division. A channel whose minimum equals its
//! maximum is passed through unchanged. Channels never share a range.

use crate::raster::Raster;

/// Observed value range of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
}

impl ChannelRange {
    /// Map `value` from `[min, max]` onto `[0, 255]`.
    ///
    /// Identity when the range is degenerate or already spans `[0, 255]`.
    pub fn stretch(self, value: u8) -> u8 {
        if self.max == self.min {
            return value;
        }
        let span = i32::from(self.max) - i32::from(self.min);
        let shifted = i32::from(value) - i32::from(self.min);
        (shifted * 255 / span).clamp(0, 255) as u8
    }
}

/// Per-channel `[R, G, B]` ranges, or `None` for a raster with no pixels.
pub fn channel_ranges(raster: &Raster) -> Option<[ChannelRange; 3]> {
    let (first, rest) = raster.pixels().split_first()?;
    let mut ranges = first.map(|v| ChannelRange { min: v, max: v });
    for px in rest {
        for (range, &v) in ranges.iter_mut().zip(px) {
            range.min = range.min.min(v);
            range.max = range.max.max(v);
        }
    }
    Some(ranges)
}

/// Stretch every channel of `base` to the full `[0, 255]` range.
pub fn auto_level(base: &Raster) -> Raster {
    let Some(ranges) = channel_ranges(base) else {
        return base.clone();
    };
    base.map_pixels(|px| {
        [
            ranges[0].stretch(px[0]),
            ranges[1].stretch(px[1]),
            ranges[2].stretch(px[2]),
        ]
    })
}
