//! Luma grayscale conversion.

use crate::raster::{Raster, Rgb};

/// Rec. 601 luma weights for R, G, B.
pub const LUMA_REC601: [f64; 3] = [0.299, 0.587, 0.114];

/// Grayscale intensity of one pixel.
///
/// Each channel is weighted and truncated toward zero *before* summing:
///
/// ```text
/// luma = trunc(R × 0.299) + trunc(G × 0.587) + trunc(B × 0.114)
/// ```
///
/// The sum of the truncated terms is at most 254, so no clamping is needed.
pub fn luma(rgb: Rgb) -> u8 {
    let mut sum = 0u16;
    for (channel, weight) in rgb.into_iter().zip(LUMA_REC601) {
        sum += (f64::from(channel) * weight) as u16;
    }
    sum as u8
}

/// Replace every pixel with `(luma, luma, luma)`.
pub fn grayscale(base: &Raster) -> Raster {
    base.map_pixels(|&rgb| {
        let y = luma(rgb);
        [y, y, y]
    })
}
