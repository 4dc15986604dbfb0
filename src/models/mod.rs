//! Data model types shared across the pipeline.

mod buffer;
mod params;
mod preset;

pub use buffer::PixelBuffer;
pub use params::{
    AdjustmentParameters, AutoPrepOptions, BackgroundReference, BRIGHTNESS_RANGE, CONTRAST_RANGE,
};
pub use preset::{PresetAdjustments, PresetDefinition};
