//! Error taxonomy for the preparation pipeline.

use thiserror::Error;

/// Errors surfaced by the pipeline and its orchestrator.
///
/// During normal interactive operation none of these escape the orchestrator
/// boundary as panics; they are recorded in its single error slot and cleared
/// on the next successful run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrepError {
    /// Zero-area or length-mismatched pixel buffer.
    #[error("invalid pixel buffer: {reason}")]
    InvalidBuffer { reason: String },

    /// Adjustments were requested before an auto-prep pass produced a
    /// baseline. Expected during UI races; logged and treated as a no-op.
    #[error("no cached baseline; run auto-prep before applying adjustments")]
    PrecursorMissing,

    /// The external image loader failed to produce a usable buffer.
    /// The pipeline never retries: its stages are pure functions, so
    /// re-running them on the same input cannot change the outcome.
    #[error("image processing failed: {message}")]
    DecodeFailure { message: String },
}

impl PrepError {
    pub(crate) fn invalid_buffer(reason: impl Into<String>) -> Self {
        Self::InvalidBuffer {
            reason: reason.into(),
        }
    }

    /// Message suitable for direct display to an end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidBuffer { .. } | Self::DecodeFailure { .. } => {
                "Processing failed. Please try a different image.".to_string()
            }
            Self::PrecursorMissing => {
                "Load an image before adjusting settings.".to_string()
            }
        }
    }
}
