//! Bitmap bytes → [`Raster`].

use crate::error::DecodeError;
use crate::raster::{Raster, Rgb};

use super::header::{self, RowOrder};
use super::limits::CodecLimits;

/// Decode a 24-bit uncompressed bitmap using the default [`CodecLimits`].
pub fn decode(bytes: &[u8]) -> Result<Raster, DecodeError> {
    decode_with_limits(bytes, &CodecLimits::default())
}

/// Decode a 24-bit uncompressed bitmap, rejecting images larger than `limits`.
///
/// Bytes after the last pixel row are ignored. A pixel array shorter than
/// the declared dimensions require is reported as
/// [`DecodeError::TruncatedPixelData`].
pub fn decode_with_limits(bytes: &[u8], limits: &CodecLimits) -> Result<Raster, DecodeError> {
    let info = header::parse(bytes)?;
    let too_large = || DecodeError::TooLarge {
        width: info.width,
        height: info.height,
        max: limits.max_dimension,
    };
    if !limits.allows(info.width, info.height) {
        return Err(too_large());
    }

    let stride = info.stride();
    let offset = info.pixel_offset as usize;
    let data_len = info.pixel_data_len().ok_or_else(too_large)?;
    let end = offset.checked_add(data_len).ok_or_else(too_large)?;
    if bytes.len() < end {
        return Err(DecodeError::TruncatedPixelData {
            expected: data_len,
            actual: bytes.len().saturating_sub(offset),
        });
    }

    let width = info.width as usize;
    let mut pixels: Vec<Rgb> = Vec::with_capacity(width * info.height as usize);
    let rows = bytes[offset..end].chunks_exact(stride);
    match info.row_order {
        RowOrder::BottomUp => rows.rev().for_each(|row| push_row(&mut pixels, row, width)),
        RowOrder::TopDown => rows.for_each(|row| push_row(&mut pixels, row, width)),
    }

    tracing::trace!(
        width = info.width,
        height = info.height,
        header = info.header.label(),
        "decoded bitmap"
    );
    Ok(Raster::from_parts(info.width, info.height, pixels))
}

/// Append one stored row, converting BGR to RGB and dropping padding.
fn push_row(pixels: &mut Vec<Rgb>, row: &[u8], width: usize) {
    pixels.extend(
        row[..width * 3]
            .chunks_exact(3)
            .map(|bgr| [bgr[2], bgr[1], bgr[0]]),
    );
}
