//! Optional background segmentation.
//!
//! Runs on the grayscale buffer before equalization; the alpha mask it
//! produces propagates through every later stage (equalization, Otsu,
//! binarization all honor alpha-0 exclusion).

use crate::error::PrepError;
use crate::models::{BackgroundReference, PixelBuffer};

use super::helpers::ensure_valid;

/// Mask out pixels close to the background intensity.
///
/// Pixels whose intensity lies within `sensitivity` of the reference
/// background intensity get alpha 0; all others get alpha 255. RGB channels
/// are left untouched.
pub fn remove_background(
    source: &PixelBuffer,
    sensitivity: u8,
    reference: BackgroundReference,
) -> Result<PixelBuffer, PrepError> {
    ensure_valid(source)?;

    if source.is_empty() {
        return Ok(source.clone());
    }

    let reference = match reference {
        BackgroundReference::Intensity(value) => value,
        BackgroundReference::Auto => border_mode_intensity(source),
    };

    let mut result = source.clone();
    for px in result.data.chunks_exact_mut(4) {
        let distance = (px[0] as i16 - reference as i16).unsigned_abs();
        px[3] = if distance <= sensitivity as u16 { 0 } else { 255 };
    }

    Ok(result)
}

/// Most frequent intensity along the one-pixel image border.
///
/// Backgrounds dominate the frame edge in typical engraving photos, so the
/// border mode is a robust reference. Ties resolve toward the lowest
/// intensity to keep the result deterministic.
fn border_mode_intensity(buffer: &PixelBuffer) -> u8 {
    let width = buffer.width as usize;
    let height = buffer.height as usize;
    let mut histogram = [0u32; 256];

    let mut tally = |x: usize, y: usize| {
        let idx = (y * width + x) * 4;
        histogram[buffer.data[idx] as usize] += 1;
    };

    for x in 0..width {
        tally(x, 0);
        tally(x, height - 1);
    }
    for y in 0..height {
        tally(0, y);
        tally(width - 1, y);
    }

    let mut mode = 0u8;
    let mut best = 0u32;
    for (intensity, &count) in histogram.iter().enumerate() {
        if count > best {
            best = count;
            mode = intensity as u8;
        }
    }
    mode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_reference_masks_near_pixels() {
        let mut buf = PixelBuffer::new(3, 1);
        buf.data = vec![
            195, 195, 195, 255, // within sensitivity of 200
            100, 100, 100, 255, // far from background
            210, 210, 210, 255, // within sensitivity of 200
        ];

        let result =
            remove_background(&buf, 10, BackgroundReference::Intensity(200)).expect("valid buffer");

        assert_eq!(result.data[3], 0, "195 is within 10 of 200");
        assert_eq!(result.data[7], 255, "100 is far from 200");
        assert_eq!(result.data[11], 0, "210 is within 10 of 200");
        // RGB untouched
        assert_eq!(result.data[0], 195);
        assert_eq!(result.data[4], 100);
    }

    #[test]
    fn test_auto_reference_uses_border_mode() {
        // 3x3 with a uniform 240 border and a dark center pixel
        let mut buf = PixelBuffer::new(3, 3);
        for px in buf.data.chunks_exact_mut(4) {
            px[0] = 240;
            px[1] = 240;
            px[2] = 240;
        }
        let center = (1 * 3 + 1) * 4;
        buf.data[center] = 20;
        buf.data[center + 1] = 20;
        buf.data[center + 2] = 20;

        let result =
            remove_background(&buf, 15, BackgroundReference::Auto).expect("valid buffer");

        assert_eq!(result.data[3], 0, "border pixel should be masked");
        assert_eq!(result.data[center + 3], 255, "center pixel should survive");
    }

    #[test]
    fn test_zero_area_buffer_passes_through() {
        let buf = PixelBuffer::new(0, 0);
        let result =
            remove_background(&buf, 10, BackgroundReference::Auto).expect("zero-area is legal");
        assert!(result.is_empty());
    }
}
