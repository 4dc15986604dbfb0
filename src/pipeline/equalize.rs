//! Histogram equalization.

use crate::error::PrepError;
use crate::models::PixelBuffer;

use super::helpers::{ensure_valid, intensity_histogram};

/// Equalize the intensity histogram of a grayscale buffer.
///
/// Builds a 256-bin histogram over the included pixels, derives the
/// cumulative distribution, and remaps every included pixel through the
/// normalized lookup table. With `mask_alpha` set, fully transparent pixels
/// are excluded from the histogram and left untouched, so a prior
/// segmentation pass keeps its mask.
///
/// A histogram with a single occupied bin (uniform image) returns the input
/// unchanged; there is no division by zero.
pub fn equalize(source: &PixelBuffer, mask_alpha: bool) -> Result<PixelBuffer, PrepError> {
    ensure_valid(source)?;

    if source.is_empty() {
        return Ok(source.clone());
    }

    let (histogram, included) = intensity_histogram(source, mask_alpha);
    let occupied_bins = histogram.iter().filter(|&&count| count > 0).count();
    if included == 0 || occupied_bins <= 1 {
        return Ok(source.clone());
    }

    // Cumulative distribution over included pixels
    let mut cdf = [0u64; 256];
    let mut running = 0u64;
    for (bin, &count) in histogram.iter().enumerate() {
        running += count as u64;
        cdf[bin] = running;
    }

    // First non-zero CDF value anchors the normalization
    let cdf_min = cdf
        .iter()
        .copied()
        .find(|&value| value > 0)
        .unwrap_or(0);
    let denom = included - cdf_min;

    let mut lut = [0u8; 256];
    for (bin, entry) in lut.iter_mut().enumerate() {
        let scaled = (cdf[bin].saturating_sub(cdf_min)) as f32 / denom as f32;
        *entry = (scaled * 255.0).round() as u8;
    }

    let mut result = source.clone();
    for px in result.data.chunks_exact_mut(4) {
        if mask_alpha && px[3] == 0 {
            continue;
        }
        let mapped = lut[px[0] as usize];
        px[0] = mapped;
        px[1] = mapped;
        px[2] = mapped;
    }

    Ok(result)
}
