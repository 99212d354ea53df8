//! Error types for decoding, encoding, cropping, and raster construction.

use crate::transform::crop::CropRegion;

/// Failure to build a [`Raster`](crate::Raster) from caller-provided pixels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("pixel buffer holds {actual} bytes, expected {expected} for the declared size")]
    BufferSize { expected: usize, actual: usize },
    #[error("raster dimensions {width}x{height} overflow addressable memory")]
    Overflow { width: u32, height: u32 },
}

/// Failure to parse a bitmap byte stream.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("bitmap is too short: {actual} bytes, need at least {needed}")]
    TooShort { needed: usize, actual: usize },
    #[error("missing BM signature")]
    BadSignature,
    #[error("unsupported DIB header size {0}")]
    UnsupportedHeader(u32),
    #[error("unsupported plane count {0}, expected 1")]
    UnsupportedPlanes(u16),
    #[error("unsupported bit depth {0}, only 24-bit bitmaps are supported")]
    UnsupportedBitDepth(u16),
    #[error("unsupported compression method {0}, only uncompressed bitmaps are supported")]
    UnsupportedCompression(u32),
    #[error("invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
    #[error("bitmap dimensions {width}x{height} exceed the {max} pixel limit")]
    TooLarge { width: u32, height: u32, max: u32 },
    #[error("pixel data offset {offset} points inside the headers (which end at {header_end})")]
    BadPixelOffset { offset: u32, header_end: usize },
    #[error("pixel data is truncated: expected {expected} bytes, found {actual}")]
    TruncatedPixelData { expected: usize, actual: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to serialize a raster as a bitmap.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot encode a {width}x{height} raster")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("raster dimensions {width}x{height} exceed the {max} pixel limit")]
    TooLarge { width: u32, height: u32, max: u32 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to extract a sub-raster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CropError {
    #[error("crop region {region} has zero width or height")]
    EmptyRegion { region: CropRegion },
    #[error("crop region {region} lies outside the {width}x{height} image")]
    OutOfBounds {
        region: CropRegion,
        width: u32,
        height: u32,
    },
}

/// Any error surfaced by a [`Session`](crate::Session).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Crop(#[from] CropError),
}
