//! Preview downsampling.
//!
//! Interactive hosts run the pipeline against a bounded preview and only
//! process the full-resolution buffer on export.

use crate::models::PixelBuffer;

/// Downsample a buffer so its longest side is at most `max_dim`.
///
/// Aspect ratio is preserved and sampling is bilinear. Buffers already
/// within the limit (and zero-area buffers) come back as a plain clone.
pub fn create_preview(source: &PixelBuffer, max_dim: u32) -> PixelBuffer {
    let longest = source.width.max(source.height);
    if longest <= max_dim || source.is_empty() || max_dim == 0 {
        return source.clone();
    }

    let scale = max_dim as f32 / longest as f32;
    let new_width = ((source.width as f32 * scale).round() as u32).max(1);
    let new_height = ((source.height as f32 * scale).round() as u32).max(1);

    let mut data = Vec::with_capacity((new_width * new_height * 4) as usize);

    for y in 0..new_height {
        for x in 0..new_width {
            // Map to source coordinates
            let src_x = (x as f32 / new_width as f32) * (source.width - 1) as f32;
            let src_y = (y as f32 / new_height as f32) * (source.height - 1) as f32;

            let x0 = src_x.floor() as u32;
            let y0 = src_y.floor() as u32;
            let x1 = (x0 + 1).min(source.width - 1);
            let y1 = (y0 + 1).min(source.height - 1);

            let fx = src_x - x0 as f32;
            let fy = src_y - y0 as f32;

            for c in 0..4 {
                let p00 = channel(source, x0, y0, c);
                let p10 = channel(source, x1, y0, c);
                let p01 = channel(source, x0, y1, c);
                let p11 = channel(source, x1, y1, c);

                let value = p00 * (1.0 - fx) * (1.0 - fy)
                    + p10 * fx * (1.0 - fy)
                    + p01 * (1.0 - fx) * fy
                    + p11 * fx * fy;

                data.push(value.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    PixelBuffer {
        width: new_width,
        height: new_height,
        data,
    }
}

fn channel(buffer: &PixelBuffer, x: u32, y: u32, c: usize) -> f32 {
    let idx = ((y * buffer.width + x) * 4) as usize + c;
    buffer.data.get(idx).copied().unwrap_or(0) as f32
}
