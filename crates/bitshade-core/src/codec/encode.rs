//! [`Raster`] → bitmap bytes.

use crate::error::EncodeError;
use crate::raster::{Raster, Rgb};

use super::header::{
    BI_RGB, BITS_PER_PIXEL, FILE_HEADER_SIZE, INFO_HEADER_SIZE, PIXELS_PER_METER, RowOrder,
    SIGNATURE, row_stride,
};
use super::limits::CodecLimits;

/// Options controlling bitmap output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Stored row order. Bottom-up is what most readers expect.
    pub row_order: RowOrder,
    /// Size limits checked before writing.
    pub limits: CodecLimits,
}

/// Encode as a bottom-up 24-bit uncompressed bitmap.
pub fn encode(raster: &Raster) -> Result<Vec<u8>, EncodeError> {
    encode_with(raster, &EncodeOptions::default())
}

/// Encode as a 24-bit uncompressed bitmap with a `BITMAPINFOHEADER`.
///
/// Rows are padded with zero bytes to a 4-byte boundary and every size
/// field (file size, pixel offset, image size) is filled in.
pub fn encode_with(raster: &Raster, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    let too_large = || EncodeError::TooLarge {
        width,
        height,
        max: options.limits.max_dimension,
    };
    if !options.limits.allows(width, height) {
        return Err(too_large());
    }

    let stride = row_stride(width);
    let padding = stride - width as usize * 3;
    let header_len = FILE_HEADER_SIZE + INFO_HEADER_SIZE as usize;
    let image_size = stride
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;
    let file_size = header_len.checked_add(image_size).ok_or_else(too_large)?;

    let file_size_field = u32::try_from(file_size).map_err(|_| too_large())?;
    let image_size_field = u32::try_from(image_size).map_err(|_| too_large())?;
    let width_field = i32::try_from(width).map_err(|_| too_large())?;
    let height_field = i32::try_from(height).map_err(|_| too_large())?;
    let height_field = match options.row_order {
        RowOrder::BottomUp => height_field,
        RowOrder::TopDown => -height_field,
    };

    let mut out = Vec::with_capacity(file_size);

    // BITMAPFILEHEADER
    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(&file_size_field.to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&(header_len as u32).to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&width_field.to_le_bytes());
    out.extend_from_slice(&height_field.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&BI_RGB.to_le_bytes());
    out.extend_from_slice(&image_size_field.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    match options.row_order {
        RowOrder::BottomUp => raster
            .rows()
            .rev()
            .for_each(|row| write_row(&mut out, row, padding)),
        RowOrder::TopDown => raster
            .rows()
            .for_each(|row| write_row(&mut out, row, padding)),
    }

    debug_assert_eq!(out.len(), file_size);
    tracing::trace!(width, height, bytes = out.len(), "encoded bitmap");
    Ok(out)
}

/// Append one row as BGR triples followed by zero padding.
fn write_row(out: &mut Vec<u8>, row: &[Rgb], padding: usize) {
    for &[r, g, b] in row {
        out.extend_from_slice(&[b, g, r]);
    }
    out.resize(out.len() + padding, 0);
}
