//! Otsu threshold selection and bi-level binarization.

use crate::error::PrepError;
use crate::models::PixelBuffer;

use super::helpers::{ensure_valid, intensity_histogram};

/// Select the binarization threshold with Otsu's method.
///
/// For each candidate `t`, pixels split into a class below (`intensity < t`)
/// and a class at-or-above; the chosen `t` maximizes the between-class
/// variance computed from cumulative weights and means of the included
/// pixels. Ties break toward the lowest candidate, so identical histograms
/// always yield identical thresholds. With `mask_alpha` set, fully
/// transparent pixels are excluded from the statistics.
pub fn otsu_threshold(source: &PixelBuffer, mask_alpha: bool) -> Result<u8, PrepError> {
    ensure_valid(source)?;

    let (histogram, total) = intensity_histogram(source, mask_alpha);

    let weighted_total: u64 = histogram
        .iter()
        .enumerate()
        .map(|(bin, &count)| bin as u64 * count as u64)
        .sum();

    let mut weight_below = 0u64;
    let mut sum_below = 0u64;
    let mut best_threshold = 0u8;
    let mut best_variance = 0.0f64;

    for t in 0u16..=255 {
        if t > 0 {
            let bin = (t - 1) as usize;
            weight_below += histogram[bin] as u64;
            sum_below += bin as u64 * histogram[bin] as u64;
        }

        let weight_above = total - weight_below;
        if weight_below == 0 || weight_above == 0 {
            continue;
        }

        let mean_below = sum_below as f64 / weight_below as f64;
        let mean_above = (weighted_total - sum_below) as f64 / weight_above as f64;
        let diff = mean_below - mean_above;
        let variance = weight_below as f64 * weight_above as f64 * diff * diff;

        // Strict comparison keeps the lowest threshold on ties
        if variance > best_variance {
            best_variance = variance;
            best_threshold = t as u8;
        }
    }

    Ok(best_threshold)
}

/// Binarize a grayscale buffer against an absolute threshold.
///
/// Intensity below `threshold` maps to 0, at or above maps to 255; alpha is
/// copied. With `mask_alpha` set, fully transparent pixels pass through with
/// their original values.
pub fn binarize(
    source: &PixelBuffer,
    threshold: u8,
    mask_alpha: bool,
) -> Result<PixelBuffer, PrepError> {
    ensure_valid(source)?;

    let mut result = source.clone();
    for px in result.data.chunks_exact_mut(4) {
        if mask_alpha && px[3] == 0 {
            continue;
        }
        let value = if px[0] < threshold { 0 } else { 255 };
        px[0] = value;
        px[1] = value;
        px[2] = value;
    }

    Ok(result)
}
