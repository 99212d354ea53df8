//! Bitmap file and DIB header layout.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// `BITMAPFILEHEADER` length.
pub const FILE_HEADER_SIZE: usize = 14;

/// `BITMAPINFOHEADER` length, the header the encoder writes.
pub const INFO_HEADER_SIZE: u32 = 40;

/// Magic bytes at the start of every bitmap file.
pub const SIGNATURE: [u8; 2] = *b"BM";

/// `BI_RGB`: uncompressed pixels.
pub const BI_RGB: u32 = 0;

/// Encoded resolution, 72 DPI expressed in pixels per meter.
pub const PIXELS_PER_METER: i32 = 2835;

/// Bits per pixel of the only supported pixel format.
pub const BITS_PER_PIXEL: u16 = 24;

/// Order in which rows are stored in the pixel array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Last raster row first (positive height). The common layout.
    #[default]
    BottomUp,
    /// First raster row first (negative height).
    TopDown,
}

/// DIB header variants, identified by their declared size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderKind {
    /// OS/2 `BITMAPCOREHEADER`, 16-bit dimensions.
    Core,
    /// `BITMAPINFOHEADER`.
    Info,
    /// Adobe extension with RGB masks.
    V2,
    /// Adobe extension with RGBA masks.
    V3,
    /// `BITMAPV4HEADER`.
    V4,
    /// `BITMAPV5HEADER`.
    V5,
}

impl HeaderKind {
    fn from_size(size: u32) -> Option<Self> {
        match size {
            12 => Some(Self::Core),
            40 => Some(Self::Info),
            52 => Some(Self::V2),
            56 => Some(Self::V3),
            108 => Some(Self::V4),
            124 => Some(Self::V5),
            _ => None,
        }
    }

    /// Declared byte length of the header.
    pub const fn size(self) -> u32 {
        match self {
            Self::Core => 12,
            Self::Info => 40,
            Self::V2 => 52,
            Self::V3 => 56,
            Self::V4 => 108,
            Self::V5 => 124,
        }
    }

    /// Conventional name of the header structure.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Core => "BITMAPCOREHEADER",
            Self::Info => "BITMAPINFOHEADER",
            Self::V2 => "BITMAPV2INFOHEADER",
            Self::V3 => "BITMAPV3INFOHEADER",
            Self::V4 => "BITMAPV4HEADER",
            Self::V5 => "BITMAPV5HEADER",
        }
    }
}

/// Header fields of a supported bitmap, as read by [`probe`](super::probe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitmapInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    pub row_order: RowOrder,
    pub header: HeaderKind,
    /// Byte offset of the pixel array from the start of the file.
    pub pixel_offset: u32,
    /// File size as declared in the header. Not trusted by the decoder.
    pub declared_file_size: u32,
}

impl BitmapInfo {
    /// Bytes per stored row, including padding.
    pub fn stride(&self) -> usize {
        row_stride(self.width)
    }

    /// Bytes occupied by the whole pixel array, or `None` on overflow.
    pub fn pixel_data_len(&self) -> Option<usize> {
        self.stride().checked_mul(self.height as usize)
    }
}

/// Bytes per 24-bit row, padded to a 4-byte boundary.
pub(crate) fn row_stride(width: u32) -> usize {
    (width as usize * 3 + 3) & !3
}

/// Parse and validate the file and DIB headers.
pub(crate) fn parse(bytes: &[u8]) -> Result<BitmapInfo, DecodeError> {
    ensure_len(bytes, FILE_HEADER_SIZE + 4)?;
    if bytes[..2] != SIGNATURE {
        return Err(DecodeError::BadSignature);
    }
    let declared_file_size = read_u32(bytes, 2);
    let pixel_offset = read_u32(bytes, 10);

    let dib_size = read_u32(bytes, FILE_HEADER_SIZE);
    let header = HeaderKind::from_size(dib_size).ok_or(DecodeError::UnsupportedHeader(dib_size))?;
    let header_end = FILE_HEADER_SIZE + dib_size as usize;
    ensure_len(bytes, header_end)?;

    let (width, height, planes, bits_per_pixel, compression) = match header {
        HeaderKind::Core => (
            i64::from(read_u16(bytes, 18)),
            i64::from(read_u16(bytes, 20)),
            read_u16(bytes, 22),
            read_u16(bytes, 24),
            BI_RGB,
        ),
        _ => (
            i64::from(read_i32(bytes, 18)),
            i64::from(read_i32(bytes, 22)),
            read_u16(bytes, 26),
            read_u16(bytes, 28),
            read_u32(bytes, 30),
        ),
    };

    if planes != 1 {
        return Err(DecodeError::UnsupportedPlanes(planes));
    }
    if bits_per_pixel != BITS_PER_PIXEL {
        return Err(DecodeError::UnsupportedBitDepth(bits_per_pixel));
    }
    if compression != BI_RGB {
        return Err(DecodeError::UnsupportedCompression(compression));
    }
    if width <= 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }
    let row_order = if height < 0 {
        RowOrder::TopDown
    } else {
        RowOrder::BottomUp
    };
    if (pixel_offset as usize) < header_end {
        return Err(DecodeError::BadPixelOffset {
            offset: pixel_offset,
            header_end,
        });
    }

    // Both fit: `width` is a positive i32 and `|height|` is at most 2^31.
    let width = u32::try_from(width).map_err(|_| DecodeError::InvalidDimensions { width, height })?;
    let abs_height = u32::try_from(height.unsigned_abs())
        .map_err(|_| DecodeError::InvalidDimensions { width: i64::from(width), height })?;

    Ok(BitmapInfo {
        width,
        height: abs_height,
        bits_per_pixel,
        row_order,
        header,
        pixel_offset,
        declared_file_size,
    })
}

fn ensure_len(bytes: &[u8], needed: usize) -> Result<(), DecodeError> {
    if bytes.len() < needed {
        return Err(DecodeError::TooShort {
            needed,
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
