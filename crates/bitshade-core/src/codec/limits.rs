//! Size limits applied when decoding and encoding bitmaps.

use serde::{Deserialize, Serialize};

/// Default largest accepted width or height, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 16_384;

/// Environment variable that overrides [`DEFAULT_MAX_DIMENSION`].
pub const MAX_DIMENSION_ENV: &str = "BITSHADE_MAX_DIMENSION";

/// Upper bounds on raster size for the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecLimits {
    /// Largest accepted width or height.
    pub max_dimension: u32,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl CodecLimits {
    /// Limits taken from `BITSHADE_MAX_DIMENSION`, falling back to the defaults
    /// when the variable is unset, unparsable, or zero.
    pub fn from_env() -> Self {
        let max_dimension = std::env::var(MAX_DIMENSION_ENV)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&v: &u32| v > 0)
            .unwrap_or(DEFAULT_MAX_DIMENSION);
        Self { max_dimension }
    }

    /// Whether a `width` × `height` image fits.
    pub const fn allows(&self, width: u32, height: u32) -> bool {
        width <= self.max_dimension && height <= self.max_dimension
    }
}
