//! Editing session — the base raster plus its view state.
//!
//! A `Session` is owned by whichever thread drives it; it has no interior
//! mutability and no global instance. The view only changes after the
//! requested image has been produced, so a failed crop leaves it untouched.

use std::path::{Path, PathBuf};

use crate::codec::{CodecLimits, EncodeOptions};
use crate::error::{CropError, DecodeError, Error};
use crate::io;
use crate::raster::Raster;
use crate::transform::{self, CropRegion};
use crate::view::ViewState;

/// The loaded image and which derived view of it is current.
#[derive(Debug, Clone)]
pub struct Session {
    base: Raster,
    state: ViewState,
}

impl Session {
    /// Start a session on `base`, showing the original.
    pub fn new(base: Raster) -> Self {
        Self {
            base,
            state: ViewState::Original,
        }
    }

    /// Load a bitmap from disk and start a session on it.
    pub fn open(path: &Path) -> Result<Self, DecodeError> {
        io::load(path).map(Self::new)
    }

    /// [`open`](Self::open) with explicit size limits.
    pub fn open_with_limits(path: &Path, limits: &CodecLimits) -> Result<Self, DecodeError> {
        io::load_with_limits(path, limits).map(Self::new)
    }

    /// Swap in a new base image and reset the view to the original.
    pub fn replace_base(&mut self, base: Raster) {
        self.base = base;
        self.state = ViewState::Original;
    }

    /// Load a new base image from disk. On failure the session is unchanged.
    pub fn reload(&mut self, path: &Path) -> Result<(), DecodeError> {
        let base = io::load(path)?;
        self.replace_base(base);
        Ok(())
    }

    pub fn base(&self) -> &Raster {
        &self.base
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn show_original(&mut self) -> Raster {
        self.set_state(ViewState::Original);
        self.base.clone()
    }

    pub fn grayscale(&mut self) -> Raster {
        let out = transform::grayscale(&self.base);
        self.set_state(ViewState::Grayscale);
        out
    }

    pub fn dither(&mut self) -> Raster {
        let out = transform::ordered_dither(&self.base);
        self.set_state(ViewState::Dithered);
        out
    }

    pub fn auto_level(&mut self) -> Raster {
        let out = transform::auto_level(&self.base);
        self.set_state(ViewState::AutoLevel);
        out
    }

    /// Crop the base image. The view only changes if the region is valid.
    pub fn crop(&mut self, region: CropRegion) -> Result<Raster, CropError> {
        self.state.transition(&self.base, ViewState::Cropped(region))
    }

    /// Recompute the current view from the base image.
    pub fn current(&self) -> Result<Raster, CropError> {
        self.state.render(&self.base)
    }

    /// The "before" image to show beside [`current`](Self::current).
    pub fn reference(&self) -> Option<Raster> {
        self.state.reference(&self.base)
    }

    /// Render the current view and save it as a bitmap.
    ///
    /// Returns the path actually written (see [`io::export_path`]).
    pub fn export(&self, path: &Path) -> Result<PathBuf, Error> {
        self.export_with(path, &EncodeOptions::default())
    }

    /// [`export`](Self::export) with explicit encoder options.
    pub fn export_with(&self, path: &Path, options: &EncodeOptions) -> Result<PathBuf, Error> {
        let current = self.current()?;
        let written = io::save_with(&current, path, options)?;
        tracing::debug!(view = self.state.label(), path = %written.display(), "exported view");
        Ok(written)
    }

    fn set_state(&mut self, next: ViewState) {
        if self.state != next {
            tracing::debug!(from = self.state.label(), to = next.label(), "view state changed");
        }
        self.state = next;
    }
}
