//! Luminosity grayscale conversion.

use crate::error::PrepError;
use crate::models::PixelBuffer;

use super::helpers::ensure_valid;

/// Convert an RGB(A) buffer to grayscale using the luminosity method.
///
/// Each output pixel has R = G = B = `round(0.299 R + 0.587 G + 0.114 B)`;
/// alpha is copied unchanged. Zero-area buffers pass through.
pub fn grayscale(source: &PixelBuffer) -> Result<PixelBuffer, PrepError> {
    ensure_valid(source)?;

    let mut data = Vec::with_capacity(source.data.len());
    for px in source.data.chunks_exact(4) {
        let luma = (0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32).round()
            as u8;
        data.extend_from_slice(&[luma, luma, luma, px[3]]);
    }

    Ok(PixelBuffer {
        width: source.width,
        height: source.height,
        data,
    })
}
