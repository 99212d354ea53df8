//! Bitshade Core — bitmap decode/encode and deterministic raster transforms.
//!
//! This crate contains the pixel buffer type, the 24-bit bitmap codec, the
//! transform engine (grayscale, ordered dither, auto-level, crop), and the
//! view state that decides which derived image is current. No UI or
//! windowing dependencies; a shell calls these plain functions and renders
//! the rasters they return.

pub mod codec;
pub mod error;
pub mod io;
pub mod raster;
pub mod session;
pub mod transform;
pub mod view;

// Re-exports for convenience.
pub use codec::{BitmapInfo, CodecLimits, EncodeOptions, RowOrder, decode, encode, probe};
pub use error::{CropError, DecodeError, EncodeError, Error, RasterError};
pub use io::{export_path, load, save};
pub use raster::{Raster, Rgb};
pub use session::Session;
pub use transform::{CropRegion, auto_level, crop, grayscale, ordered_dither as dither};
pub use view::{ViewState, current_view};
