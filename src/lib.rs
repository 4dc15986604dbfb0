//! Engrave Prep Core Library
//!
//! Deterministic, in-process preparation of a photo for binary (black/white)
//! laser-engraving output. The pipeline runs a fixed automatic stage
//! (grayscale → optional background segmentation → histogram equalization →
//! Otsu binarization), caches the result as a baseline, and serves every
//! interactive brightness/contrast change from that cache. Around the
//! pipeline sit a bounded parameter-only undo history, a material preset
//! table, and timing gates for debounced commits and flicker-free loading
//! indicators.
//!
//! Decoding, UI, export, and storage are the host's responsibility; this
//! crate only consumes and produces [`models::PixelBuffer`] values and
//! serde-shaped parameter snapshots.

pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod orchestrator;
pub mod pipeline;
pub mod presets;
pub mod timing;

// Re-export commonly used types
pub use error::PrepError;
pub use history::{HistoryManager, HistoryStep};
pub use models::{
    AdjustmentParameters, AutoPrepOptions, BackgroundReference, PixelBuffer, PresetAdjustments,
    PresetDefinition,
};
pub use orchestrator::{AutoPrepOutcome, AutoPrepTicket, PipelineOrchestrator, PrepState};
pub use timing::{CommitDebounce, LoadingIndicator};
