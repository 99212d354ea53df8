//! Ordered (Bayer) dithering to pure black and white.

use crate::raster::{Raster, Rgb};

use super::grayscale::grayscale;

/// 4×4 threshold matrix, indexed `BAYER_4X4[x % 4][y % 4]`.
///
/// Each value in `0..16` appears exactly once.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

const MATRIX_SIZE: usize = 4;
const LEVELS: u16 = (MATRIX_SIZE * MATRIX_SIZE) as u16;

const WHITE: Rgb = [255, 255, 255];
const BLACK: Rgb = [0, 0, 0];

/// Whether a pixel of the given intensity at `(x, y)` dithers to white.
///
/// The intensity is scaled into the matrix range with integer division
/// (`intensity * 16 / 256`) and compared strictly against the threshold.
pub fn dithers_to_white(intensity: u8, x: usize, y: usize) -> bool {
    let scaled = u16::from(intensity) * LEVELS / 256;
    let threshold = BAYER_4X4[x % MATRIX_SIZE][y % MATRIX_SIZE];
    scaled > u16::from(threshold)
}

/// Grayscale `base`, then threshold it against [`BAYER_4X4`].
///
/// Every output pixel is either `(0, 0, 0)` or `(255, 255, 255)`.
pub fn ordered_dither(base: &Raster) -> Raster {
    let gray = grayscale(base);
    let mut pixels = Vec::with_capacity(gray.pixels().len());
    for (y, row) in gray.rows().enumerate() {
        for (x, px) in row.iter().enumerate() {
            pixels.push(if dithers_to_white(px[0], x, y) {
                WHITE
            } else {
                BLACK
            });
        }
    }
    Raster::from_parts(gray.width(), gray.height(), pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_a_permutation_of_sixteen_levels() {
        let mut seen = [false; 16];
        for row in BAYER_4X4 {
            for value in row {
                assert!(!seen[value as usize], "duplicate threshold {value}");
                seen[value as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_black_input_dithers_to_all_black() {
        let out = ordered_dither(&Raster::new(8, 8));
        assert!(out.pixels().iter().all(|&px| px == BLACK));
    }

    #[test]
    fn test_white_input_leaves_one_black_cell_per_tile() {
        // White grays to 254, which scales to 15: white everywhere except
        // where the threshold is also 15, i.e. x % 4 == 3 and y % 4 == 0.
        let base = Raster::from_fn(8, 8, |_, _| [255, 255, 255]);
        let out = ordered_dither(&base);
        for y in 0..8 {
            for x in 0..8 {
                let expected = if x % 4 == 3 && y % 4 == 0 { BLACK } else { WHITE };
                assert_eq!(out.pixel(x, y), Some(expected), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_mid_gray_follows_threshold_matrix() {
        // 128 grays to 38 + 75 + 14 = 127, which scales to 7: white where
        // the threshold is below 7.
        let out = ordered_dither(&Raster::from_fn(4, 4, |_, _| [128, 128, 128]));
        for y in 0..4 {
            for x in 0..4 {
                let white = BAYER_4X4[x as usize][y as usize] < 7;
                assert_eq!(out.pixel(x, y) == Some(WHITE), white, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_output_is_binary_for_any_input() {
        let base = Raster::from_fn(13, 7, |x, y| {
            [(x * 19 + y) as u8, (y * 37) as u8, (x * y * 3) as u8]
        });
        let out = ordered_dither(&base);
        assert_eq!(out.dimensions(), base.dimensions());
        assert!(out.pixels().iter().all(|&px| px == BLACK || px == WHITE));
    }

    #[test]
    fn test_dither_of_empty_raster_is_empty() {
        let out = ordered_dither(&Raster::new(0, 0));
        assert!(out.is_empty());
    }
}
