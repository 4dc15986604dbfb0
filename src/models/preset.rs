//! Material preset types.

use serde::{Deserialize, Serialize};

/// Adjustment bundle stored by a preset.
///
/// Brightness and contrast are absolute parameter values; the threshold is
/// an offset applied to the Otsu value computed for the current image, so a
/// preset adapts to each photo instead of fighting the automatic stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetAdjustments {
    pub brightness: i32,
    pub contrast: i32,
    #[serde(default)]
    pub threshold_offset: i32,
}

/// A named bundle of adjustments tuned for a physical engraving material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDefinition {
    /// Display name (e.g., "Wood")
    pub label: String,

    /// Short description of when to use this preset
    pub description: String,

    /// The adjustments the preset applies
    pub adjustments: PresetAdjustments,
}
