//! Adjustment parameters and automatic-stage options.

use serde::{Deserialize, Serialize};

use crate::presets::AUTO_PRESET_SLUG;

/// Legal range for the brightness parameter.
pub const BRIGHTNESS_RANGE: (i32, i32) = (-100, 100);

/// Legal range for the contrast parameter.
pub const CONTRAST_RANGE: (i32, i32) = (-100, 100);

/// The complete set of interactive adjustment parameters.
///
/// This is also the persistence shape: history snapshots and the externally
/// stored "custom" preset bundle are values of this type. The threshold is
/// stored as an offset from the computed Otsu value; it only becomes an
/// absolute intensity at the buffer-application boundary
/// (see [`crate::presets::resolve_threshold`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentParameters {
    /// Additive brightness offset, -100..=100
    pub brightness: i32,

    /// Contrast amount, -100..=100, mapped to a multiplicative factor
    pub contrast: i32,

    /// Signed offset from the computed Otsu threshold
    #[serde(default)]
    pub threshold_offset: i32,

    /// Slug of the active preset ("auto", "custom", or a material slug)
    #[serde(default = "default_preset_slug")]
    pub preset: String,
}

fn default_preset_slug() -> String {
    AUTO_PRESET_SLUG.to_string()
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 0,
            threshold_offset: 0,
            preset: default_preset_slug(),
        }
    }
}

impl AdjustmentParameters {
    /// Return a copy with brightness and contrast clamped to their legal
    /// ranges. Out-of-range values are tolerated, never rejected.
    pub fn clamped(&self) -> Self {
        Self {
            brightness: self.brightness.clamp(BRIGHTNESS_RANGE.0, BRIGHTNESS_RANGE.1),
            contrast: self.contrast.clamp(CONTRAST_RANGE.0, CONTRAST_RANGE.1),
            threshold_offset: self.threshold_offset.clamp(-255, 255),
            preset: self.preset.clone(),
        }
    }
}

/// Source of the reference background intensity for segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundReference {
    /// Derive the reference from the image border (modal intensity of the
    /// one-pixel frame, where backgrounds typically dominate).
    Auto,
    /// Use an explicit grayscale intensity.
    Intensity(u8),
}

impl Default for BackgroundReference {
    fn default() -> Self {
        Self::Auto
    }
}

/// Options for the automatic (non-interactive) pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPrepOptions {
    /// Run background segmentation before equalization
    pub remove_background: bool,

    /// Segmentation sensitivity: pixels within this distance of the
    /// reference background intensity are masked out
    pub sensitivity: u8,

    /// Where the reference background intensity comes from
    pub background: BackgroundReference,
}

impl Default for AutoPrepOptions {
    fn default() -> Self {
        Self {
            remove_background: false,
            sensitivity: 30,
            background: BackgroundReference::Auto,
        }
    }
}
