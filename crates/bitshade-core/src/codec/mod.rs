//! Bitmap codec — uncompressed 24-bit `.bmp` decode and encode.
//!
//! The decoder accepts bottom-up and top-down pixel arrays behind any of the
//! common DIB header variants. The encoder always writes a
//! `BITMAPINFOHEADER` with padded rows, so `decode(encode(r)) == r` for every
//! non-empty raster within the size limits.

mod decode;
mod encode;
pub mod header;
pub mod limits;

pub use decode::{decode, decode_with_limits};
pub use encode::{EncodeOptions, encode, encode_with};
pub use header::{BitmapInfo, HeaderKind, RowOrder};
pub use limits::CodecLimits;

use crate::error::DecodeError;

/// Read and validate the headers of a bitmap without decoding its pixels.
pub fn probe(bytes: &[u8]) -> Result<BitmapInfo, DecodeError> {
    header::parse(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Raster;

    fn sample(width: u32, height: u32) -> Raster {
        Raster::from_fn(width, height, |x, y| {
            [
                (x * 37 + y * 11) as u8,
                (x * 5 + y * 71) as u8,
                (x ^ y).wrapping_mul(29) as u8,
            ]
        })
    }

    #[test]
    fn test_roundtrip_preserves_pixels_for_every_padding() {
        // Widths 1..=4 cover all four row-padding remainders.
        for width in 1..=4 {
            for height in [1, 2, 5] {
                let raster = sample(width, height);
                let decoded = decode(&encode(&raster).unwrap()).unwrap();
                assert_eq!(decoded, raster, "{width}x{height}");
            }
        }
    }

    #[test]
    fn test_roundtrip_top_down_output() {
        let raster = sample(7, 3);
        let options = EncodeOptions {
            row_order: RowOrder::TopDown,
            ..EncodeOptions::default()
        };
        let bytes = encode_with(&raster, &options).unwrap();
        assert_eq!(probe(&bytes).unwrap().row_order, RowOrder::TopDown);
        assert_eq!(decode(&bytes).unwrap(), raster);
    }

    #[test]
    fn test_probe_reports_encoded_layout() {
        let bytes = encode(&sample(5, 4)).unwrap();
        let info = probe(&bytes).unwrap();
        assert_eq!((info.width, info.height), (5, 4));
        assert_eq!(info.bits_per_pixel, 24);
        assert_eq!(info.header, HeaderKind::Info);
        assert_eq!(info.pixel_offset, 54);
        assert_eq!(info.declared_file_size as usize, bytes.len());
    }

    #[test]
    fn test_encoded_bitmap_is_readable_by_image_crate() {
        let raster = sample(6, 5);
        let bytes = encode(&raster).unwrap();
        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Bmp)
            .unwrap()
            .to_rgb8();
        assert_eq!(Raster::from(&decoded), raster);
    }

    #[test]
    fn test_decodes_bitmap_written_by_image_crate() {
        let raster = sample(3, 3);
        let img = image::RgbImage::from(&raster);
        let mut bytes = std::io::Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Bmp).unwrap();
        assert_eq!(decode(bytes.get_ref()).unwrap(), raster);
    }
}
