//! View state — which derived image is "current".
//!
//! `ViewState` records the last requested transform (and its region, for
//! crops). It never caches pixels: the current image is recomputed from the
//! base raster on every [`render`](ViewState::render).

use serde::{Deserialize, Serialize};

use crate::error::CropError;
use crate::raster::Raster;
use crate::transform::{CropRegion, auto_level, crop, grayscale, ordered_dither};

/// The transform whose output is currently displayed or exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewState {
    /// The base raster itself. Initial state after every load.
    #[default]
    Original,
    Grayscale,
    Dithered,
    AutoLevel,
    /// A crop of the base raster, re-validated on every render.
    Cropped(CropRegion),
}

impl ViewState {
    /// Recompute the current image from `base`.
    ///
    /// A recorded crop that no longer fits `base` (for example because a
    /// smaller image was loaded since) fails with [`CropError`] rather than
    /// being clamped.
    pub fn render(&self, base: &Raster) -> Result<Raster, CropError> {
        match *self {
            Self::Original => Ok(base.clone()),
            Self::Grayscale => Ok(grayscale(base)),
            Self::Dithered => Ok(ordered_dither(base)),
            Self::AutoLevel => Ok(auto_level(base)),
            Self::Cropped(region) => crop(base, region),
        }
    }

    /// Render `next` from `base` and switch to it on success.
    ///
    /// On failure the state is left as it was.
    pub fn transition(&mut self, base: &Raster, next: ViewState) -> Result<Raster, CropError> {
        let rendered = next.render(base)?;
        if *self != next {
            tracing::debug!(from = self.label(), to = next.label(), "view state changed");
        }
        *self = next;
        Ok(rendered)
    }

    /// The image a side-by-side view shows next to the current one.
    ///
    /// Dithering is compared against its grayscale input, every other
    /// transform against the base. `None` for [`ViewState::Original`].
    pub fn reference(&self, base: &Raster) -> Option<Raster> {
        match self {
            Self::Original => None,
            Self::Dithered => Some(grayscale(base)),
            Self::Grayscale | Self::AutoLevel | Self::Cropped(_) => Some(base.clone()),
        }
    }

    /// Short human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Grayscale => "grayscale",
            Self::Dithered => "ordered dither",
            Self::AutoLevel => "auto level",
            Self::Cropped(_) => "crop",
        }
    }
}

/// Recompute the image `state` designates from `base`.
pub fn current_view(base: &Raster, state: &ViewState) -> Result<Raster, CropError> {
    state.render(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Raster {
        Raster::from_fn(6, 4, |x, y| [(x * 40) as u8, (y * 60) as u8, 90])
    }

    #[test]
    fn test_default_state_is_original() {
        let state = ViewState::default();
        assert_eq!(state, ViewState::Original);
        assert_eq!(state.render(&base()).unwrap(), base());
        assert!(state.reference(&base()).is_none());
    }

    #[test]
    fn test_render_dispatches_to_matching_transform() {
        let base = base();
        assert_eq!(ViewState::Grayscale.render(&base).unwrap(), grayscale(&base));
        assert_eq!(ViewState::Dithered.render(&base).unwrap(), ordered_dither(&base));
        assert_eq!(ViewState::AutoLevel.render(&base).unwrap(), auto_level(&base));
        let region = CropRegion::new(1, 1, 2, 2);
        assert_eq!(
            ViewState::Cropped(region).render(&base).unwrap(),
            crop(&base, region).unwrap()
        );
    }

    #[test]
    fn test_transition_moves_to_requested_state() {
        let base = base();
        let mut state = ViewState::Original;
        let out = state.transition(&base, ViewState::AutoLevel).unwrap();
        assert_eq!(state, ViewState::AutoLevel);
        assert_eq!(out, auto_level(&base));

        state.transition(&base, ViewState::Dithered).unwrap();
        assert_eq!(state, ViewState::Dithered);
    }

    #[test]
    fn test_failed_crop_keeps_previous_state() {
        let base = base();
        let mut state = ViewState::Grayscale;
        let err = state
            .transition(&base, ViewState::Cropped(CropRegion::new(5, 0, 2, 1)))
            .unwrap_err();
        assert!(matches!(err, CropError::OutOfBounds { .. }));
        assert_eq!(state, ViewState::Grayscale);
    }

    #[test]
    fn test_recorded_crop_fails_against_smaller_base() {
        let state = ViewState::Cropped(CropRegion::new(2, 2, 4, 2));
        assert!(state.render(&base()).is_ok());
        let smaller = Raster::new(3, 3);
        assert!(matches!(
            current_view(&smaller, &state),
            Err(CropError::OutOfBounds {
                width: 3,
                height: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_reference_image_per_state() {
        let base = base();
        assert_eq!(ViewState::Grayscale.reference(&base), Some(base.clone()));
        assert_eq!(ViewState::Dithered.reference(&base), Some(grayscale(&base)));
        assert_eq!(ViewState::AutoLevel.reference(&base), Some(base.clone()));
    }

    #[test]
    fn test_state_serializes_with_tag() {
        let state = ViewState::Cropped(CropRegion::new(1, 2, 3, 4));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"view":"cropped","x":1,"y":2,"width":3,"height":4}"#);
        assert_eq!(serde_json::from_str::<ViewState>(&json).unwrap(), state);
        assert_eq!(
            serde_json::to_string(&ViewState::AutoLevel).unwrap(),
            r#"{"view":"auto_level"}"#
        );
    }
}
