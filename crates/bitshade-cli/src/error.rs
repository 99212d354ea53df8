//! Error type for the command-line shell.

use bitshade_core::{CropError, DecodeError, EncodeError};

use crate::region::RegionParseError;

/// Anything a subcommand can fail with. Core messages are shown verbatim.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: DecodeError,
    },

    #[error("failed to write image: {0}")]
    Encode(#[from] EncodeError),

    #[error("crop failed: {0}")]
    Crop(#[from] CropError),

    #[error(transparent)]
    Region(#[from] RegionParseError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] bitshade_core::Error),
}

impl CliError {
    pub fn decode(path: &std::path::Path, source: DecodeError) -> Self {
        Self::Decode {
            path: path.display().to_string(),
            source,
        }
    }
}
