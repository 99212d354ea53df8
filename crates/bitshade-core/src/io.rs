//! Loading and saving bitmaps on disk.

use std::path::{Path, PathBuf};

use crate::codec::{self, CodecLimits, EncodeOptions};
use crate::error::{DecodeError, EncodeError};
use crate::raster::Raster;

/// Extension every exported file ends with.
pub const BMP_EXTENSION: &str = "bmp";

/// Read and decode a bitmap file with the default limits.
pub fn load(path: &Path) -> Result<Raster, DecodeError> {
    load_with_limits(path, &CodecLimits::default())
}

/// Read and decode a bitmap file, rejecting images larger than `limits`.
pub fn load_with_limits(path: &Path, limits: &CodecLimits) -> Result<Raster, DecodeError> {
    let bytes = std::fs::read(path)?;
    let raster = codec::decode_with_limits(&bytes, limits)?;
    tracing::debug!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "loaded bitmap"
    );
    Ok(raster)
}

/// Encode `raster` as a 24-bit bitmap and write it next to `path`.
///
/// The file name is normalized with [`export_path`]; the path actually
/// written is returned.
pub fn save(raster: &Raster, path: &Path) -> Result<PathBuf, EncodeError> {
    save_with(raster, path, &EncodeOptions::default())
}

/// [`save`] with explicit encoder options.
pub fn save_with(
    raster: &Raster,
    path: &Path,
    options: &EncodeOptions,
) -> Result<PathBuf, EncodeError> {
    let bytes = codec::encode_with(raster, options)?;
    let target = export_path(path);
    std::fs::write(&target, &bytes)?;
    tracing::debug!(path = %target.display(), bytes = bytes.len(), "saved bitmap");
    Ok(target)
}

/// Append `.bmp` unless the file name already ends with it (any case).
///
/// The suffix is appended, not substituted: `shot.png` becomes
/// `shot.png.bmp`.
pub fn export_path(path: &Path) -> PathBuf {
    let has_bmp_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(BMP_EXTENSION));
    if has_bmp_extension {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(BMP_EXTENSION);
    PathBuf::from(name)
}
