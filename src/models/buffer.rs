//! Raw RGBA raster buffer passed between pipeline stages.

use crate::error::PrepError;

/// Number of interleaved channels per pixel (RGBA).
pub(crate) const CHANNELS: usize = 4;

/// Decoded raster data plus dimensions.
///
/// Pipeline stages never mutate their input buffer and never alias: every
/// primitive returns a freshly allocated buffer. Invariant:
/// `data.len() == width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved RGBA bytes, row-major
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create an opaque black buffer of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut data = vec![0u8; pixel_count * CHANNELS];
        for px in data.chunks_exact_mut(CHANNELS) {
            px[3] = 255;
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap externally decoded RGBA bytes, checking the length invariant.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PrepError> {
        let buffer = Self {
            width,
            height,
            data,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True for zero-area buffers (width or height of 0).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check the `data.len() == width * height * 4` invariant.
    pub fn validate(&self) -> Result<(), PrepError> {
        let expected = self.pixel_count() * CHANNELS;
        if self.data.len() != expected {
            return Err(PrepError::invalid_buffer(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                self.width,
                self.height,
                self.data.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_opaque_black() {
        let buf = PixelBuffer::new(2, 2);
        assert_eq!(buf.data.len(), 16);
        assert_eq!(&buf.data[0..4], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_from_data_rejects_length_mismatch() {
        let result = PixelBuffer::from_data(2, 2, vec![0u8; 15]);
        assert!(result.is_err(), "15 bytes cannot back a 2x2 RGBA buffer");
    }

    #[test]
    fn test_zero_area_buffer_is_valid_and_empty() {
        let buf = PixelBuffer::from_data(0, 5, Vec::new()).expect("zero-area buffer is legal");
        assert!(buf.is_empty());
        assert_eq!(buf.pixel_count(), 0);
    }
}
