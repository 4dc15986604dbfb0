//! Material preset table and preset-state transitions.
//!
//! The built-in table ships compiled in (the host needs no file system
//! access); YAML helpers let hosts load additional presets or persist the
//! mutable "custom" bundle through the external storage collaborator.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::{AdjustmentParameters, PresetAdjustments, PresetDefinition};

/// Slug of the automatic preset: no adjustments beyond the automatic stage.
pub const AUTO_PRESET_SLUG: &str = "auto";

/// Slug of the mutable, externally persisted preset.
pub const CUSTOM_PRESET_SLUG: &str = "custom";

fn material(
    label: &str,
    description: &str,
    brightness: i32,
    contrast: i32,
    threshold_offset: i32,
) -> PresetDefinition {
    PresetDefinition {
        label: label.to_string(),
        description: description.to_string(),
        adjustments: PresetAdjustments {
            brightness,
            contrast,
            threshold_offset,
        },
    }
}

/// Built-in material presets, keyed by slug.
pub static MATERIAL_PRESETS: Lazy<HashMap<&'static str, PresetDefinition>> = Lazy::new(|| {
    let mut presets = HashMap::new();
    presets.insert(
        "wood",
        material(
            "Wood",
            "Warm grain; slightly darker burn with lifted contrast",
            0,
            10,
            -10,
        ),
    );
    presets.insert(
        "leather",
        material(
            "Leather",
            "Soft surface; gentle brightness lift to avoid scorching",
            10,
            5,
            -5,
        ),
    );
    presets.insert(
        "acrylic",
        material(
            "Acrylic",
            "High-contrast frosting on cast acrylic",
            -5,
            20,
            0,
        ),
    );
    presets.insert(
        "anodized-aluminum",
        material(
            "Anodized Aluminum",
            "Bright marking; favors detail over depth",
            15,
            15,
            10,
        ),
    );
    presets.insert(
        "slate",
        material(
            "Slate",
            "Dark stone; aggressive brightening for visible marks",
            25,
            10,
            5,
        ),
    );
    presets
});

/// Display order for preset pickers: auto first, materials, custom last.
pub static PRESET_SLUGS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        AUTO_PRESET_SLUG,
        "wood",
        "leather",
        "acrylic",
        "anodized-aluminum",
        "slate",
        CUSTOM_PRESET_SLUG,
    ]
});

/// Look up a built-in material preset by slug.
pub fn get_preset(slug: &str) -> Option<&'static PresetDefinition> {
    MATERIAL_PRESETS.get(slug)
}

/// Which parameter a manual edit touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentField {
    Brightness,
    Contrast,
    Threshold,
}

/// Preset-state transition for a manual parameter edit.
///
/// Editing any field while a named preset (including "auto") is active moves
/// the state to "custom"; an edit under "custom" stays there. Pure function
/// of its inputs — the caller hands the resulting bundle to the external
/// persistence collaborator.
pub fn preset_after_edit(_current: &str, _field: AdjustmentField) -> &'static str {
    CUSTOM_PRESET_SLUG
}

/// Absolute threshold for a preset offset against a computed Otsu value.
pub fn resolve_threshold(otsu: u8, offset: i32) -> u8 {
    (otsu as i32 + offset).clamp(0, 255) as u8
}

/// Build the full parameter set for selecting a preset.
///
/// Material presets use their stored bundle; "auto" is the identity; and
/// "custom" replays the externally persisted bundle (or the identity when
/// nothing has been stored yet). Unknown slugs yield `None`.
pub fn params_for_preset(
    slug: &str,
    stored_custom: Option<&AdjustmentParameters>,
) -> Option<AdjustmentParameters> {
    if slug == AUTO_PRESET_SLUG {
        return Some(AdjustmentParameters::default());
    }
    if slug == CUSTOM_PRESET_SLUG {
        let mut params = stored_custom.cloned().unwrap_or_default();
        params.preset = CUSTOM_PRESET_SLUG.to_string();
        return Some(params);
    }

    let preset = get_preset(slug)?;
    Some(AdjustmentParameters {
        brightness: preset.adjustments.brightness,
        contrast: preset.adjustments.contrast,
        threshold_offset: preset.adjustments.threshold_offset,
        preset: slug.to_string(),
    })
}

/// Validate a preset slug before it reaches storage or a lookup table.
///
/// Slugs are lowercase ASCII letters, digits, and hyphens, non-empty, and
/// never begin or end with a hyphen.
pub fn validate_preset_slug(slug: &str) -> Result<(), String> {
    if slug.is_empty() {
        return Err("Preset slug cannot be empty".to_string());
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err("Preset slug cannot start or end with '-'".to_string());
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(format!(
            "Preset slug '{}' may only contain lowercase letters, digits, and '-'",
            slug
        ));
    }
    Ok(())
}

/// Parse a preset definition from a YAML string.
pub fn load_preset_from_str(yaml: &str) -> Result<PresetDefinition, String> {
    serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse preset YAML: {}", e))
}

/// Serialize a preset definition to a YAML string.
pub fn preset_to_yaml(preset: &PresetDefinition) -> Result<String, String> {
    serde_yaml::to_string(preset).map_err(|e| format!("Failed to serialize preset: {}", e))
}
