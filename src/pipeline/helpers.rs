//! Shared utilities for the pixel primitives.

use crate::error::PrepError;
use crate::models::PixelBuffer;

/// Validate a buffer before a primitive touches its bytes.
///
/// Length mismatches are rejected so no stage can index out of bounds;
/// zero-area buffers are legal and every primitive no-ops on them.
pub(crate) fn ensure_valid(buffer: &PixelBuffer) -> Result<(), PrepError> {
    buffer.validate()
}

/// Build a 256-bin intensity histogram.
///
/// Intensity is read from the red channel; by the time any histogram-based
/// stage runs, the buffer has passed through grayscale and R = G = B.
/// With `mask_alpha` set, fully transparent pixels (alpha 0) are excluded,
/// which lets a prior segmentation pass carve pixels out of the statistics.
///
/// Returns the histogram and the number of included pixels.
pub(crate) fn intensity_histogram(buffer: &PixelBuffer, mask_alpha: bool) -> ([u32; 256], u64) {
    let mut histogram = [0u32; 256];
    let mut included = 0u64;

    for px in buffer.data.chunks_exact(4) {
        if mask_alpha && px[3] == 0 {
            continue;
        }
        histogram[px[0] as usize] += 1;
        included += 1;
    }

    (histogram, included)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_included_pixels() {
        let mut buf = PixelBuffer::new(2, 1);
        buf.data = vec![10, 10, 10, 255, 200, 200, 200, 0];

        let (hist, included) = intensity_histogram(&buf, false);
        assert_eq!(included, 2);
        assert_eq!(hist[10], 1);
        assert_eq!(hist[200], 1);

        let (hist, included) = intensity_histogram(&buf, true);
        assert_eq!(included, 1, "alpha-0 pixel should be excluded when masking");
        assert_eq!(hist[200], 0);
    }
}
