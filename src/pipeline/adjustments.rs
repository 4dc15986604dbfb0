//! Brightness and contrast remapping.
//!
//! These are the only two primitives cheap enough to re-run on every
//! interactive tick; they operate on the orchestrator's cached baseline,
//! never on the raw source. Both are exact identities at parameter 0, and
//! the composition order is fixed: brightness first, then contrast.

use crate::error::PrepError;
use crate::models::{PixelBuffer, BRIGHTNESS_RANGE, CONTRAST_RANGE};

use super::helpers::ensure_valid;

/// Multiplicative contrast factor for a parameter in [-100, 100].
///
/// Monotonic in the parameter and exactly 1.0 at 0. Uses the standard
/// 259-based remap with the parameter scaled onto [-255, 255].
pub fn contrast_factor(contrast: i32) -> f32 {
    let c = contrast.clamp(CONTRAST_RANGE.0, CONTRAST_RANGE.1) as f32 * 2.55;
    (259.0 * (c + 255.0)) / (255.0 * (259.0 - c))
}

/// Add a brightness offset to every channel, clamped to [0, 255].
pub fn apply_brightness(source: &PixelBuffer, brightness: i32) -> Result<PixelBuffer, PrepError> {
    ensure_valid(source)?;
    let offset = brightness.clamp(BRIGHTNESS_RANGE.0, BRIGHTNESS_RANGE.1);
    remap(source, |value| (value as i32 + offset).clamp(0, 255) as u8)
}

/// Scale channel values around the 128 midpoint, clamped to [0, 255].
pub fn apply_contrast(source: &PixelBuffer, contrast: i32) -> Result<PixelBuffer, PrepError> {
    ensure_valid(source)?;
    let factor = contrast_factor(contrast);
    remap(source, |value| {
        (factor * (value as f32 - 128.0) + 128.0).round().clamp(0.0, 255.0) as u8
    })
}

/// Apply brightness then contrast in a single pass.
///
/// Idempotent for identical parameters and pixel-identical to the input at
/// (0, 0). The two maps compose into one 256-entry lookup table, so the
/// combined pass costs the same as either one alone.
pub fn apply_adjustments(
    source: &PixelBuffer,
    brightness: i32,
    contrast: i32,
) -> Result<PixelBuffer, PrepError> {
    ensure_valid(source)?;

    let offset = brightness.clamp(BRIGHTNESS_RANGE.0, BRIGHTNESS_RANGE.1);
    let factor = contrast_factor(contrast);

    let mut lut = [0u8; 256];
    for (value, entry) in lut.iter_mut().enumerate() {
        let brightened = (value as i32 + offset).clamp(0, 255) as f32;
        *entry = (factor * (brightened - 128.0) + 128.0)
            .round()
            .clamp(0.0, 255.0) as u8;
    }

    remap(source, |value| lut[value as usize])
}

/// Remap RGB channels through a pointwise function; alpha is untouched.
fn remap(source: &PixelBuffer, map: impl Fn(u8) -> u8) -> Result<PixelBuffer, PrepError> {
    let mut result = source.clone();
    for px in result.data.chunks_exact_mut(4) {
        px[0] = map(px[0]);
        px[1] = map(px[1]);
        px[2] = map(px[2]);
    }
    Ok(result)
}
