//! Transform engine — grayscale, ordered dither, auto-level, and crop.
//!
//! Every transform is a pure function from `&Raster` to a freshly allocated
//! `Raster`. Only [`crop`] can fail; the others are total over any raster,
//! including zero-area ones.

pub mod auto_level;
pub mod crop;
pub mod dither;
pub mod grayscale;

pub use auto_level::{ChannelRange, auto_level, channel_ranges};
pub use crop::{CropRegion, crop};
pub use dither::{BAYER_4X4, ordered_dither};
pub use grayscale::{grayscale, luma};
