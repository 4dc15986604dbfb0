//! Pipeline orchestration and baseline caching.
//!
//! The orchestrator owns the only two pieces of mutable pipeline state: the
//! cached baseline produced by the automatic stage and the single error
//! slot. It runs the expensive automatic pass once, then serves every
//! interactive brightness/contrast change from the cached baseline.

use crate::error::PrepError;
use crate::models::{AutoPrepOptions, PixelBuffer};
use crate::pipeline;

/// Orchestrator lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepState {
    /// No image processed yet
    Idle,
    /// An automatic pass is in flight
    Processing,
    /// A baseline is cached and adjustments may be applied
    Ready,
}

/// Token identifying one automatic pass.
///
/// A new `begin_auto_prep` supersedes every earlier ticket, so a slow first
/// pass can never clobber the output of a faster later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPrepTicket(u64);

/// Output of the automatic stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoPrepOutcome {
    /// Binarized buffer, also cached as the baseline
    pub buffer: PixelBuffer,

    /// The Otsu threshold selected for this image
    pub otsu: u8,
}

/// Runs the automatic stage, caches its baseline, and re-applies only the
/// cheap adjustments on interactive changes.
#[derive(Debug, Default)]
pub struct PipelineOrchestrator {
    state: PrepState,
    baseline: Option<PixelBuffer>,
    otsu: Option<u8>,
    latest_ticket: u64,
    last_error: Option<PrepError>,
}

impl Default for PrepState {
    fn default() -> Self {
        Self::Idle
    }
}

impl PipelineOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PrepState {
        self.state
    }

    /// The Otsu threshold from the most recent successful automatic pass.
    pub fn otsu(&self) -> Option<u8> {
        self.otsu
    }

    /// The cached baseline, if an automatic pass has completed.
    pub fn baseline(&self) -> Option<&PixelBuffer> {
        self.baseline.as_ref()
    }

    /// The error recorded by the most recent failed operation, if any.
    /// Cleared by the next successful run.
    pub fn last_error(&self) -> Option<&PrepError> {
        self.last_error.as_ref()
    }

    /// Drop all cached state, e.g. when the host unloads the image.
    pub fn reset(&mut self) {
        self.state = PrepState::Idle;
        self.baseline = None;
        self.otsu = None;
        self.last_error = None;
    }

    /// The pure automatic stage: grayscale → [segmentation] → equalization
    /// → Otsu selection + binarization. No orchestrator state is touched, so
    /// a host may run this off its UI thread and commit the result later.
    pub fn compute_auto_prep(
        source: &PixelBuffer,
        options: &AutoPrepOptions,
    ) -> Result<AutoPrepOutcome, PrepError> {
        let gray = pipeline::grayscale(source)?;

        let masked = if options.remove_background {
            pipeline::remove_background(&gray, options.sensitivity, options.background)?
        } else {
            gray
        };

        let mask_alpha = options.remove_background;
        let equalized = pipeline::equalize(&masked, mask_alpha)?;
        let otsu = pipeline::otsu_threshold(&equalized, mask_alpha)?;
        let buffer = pipeline::binarize(&equalized, otsu, mask_alpha)?;

        log::debug!(
            "auto-prep complete: {}x{}, otsu={}, segmentation={}",
            buffer.width,
            buffer.height,
            otsu,
            options.remove_background
        );

        Ok(AutoPrepOutcome { buffer, otsu })
    }

    /// Start an automatic pass: transition to Processing and hand out the
    /// ticket that `commit_auto_prep` will check for staleness.
    pub fn begin_auto_prep(&mut self) -> AutoPrepTicket {
        self.latest_ticket += 1;
        self.state = PrepState::Processing;
        AutoPrepTicket(self.latest_ticket)
    }

    /// Complete an automatic pass. Results carrying a superseded ticket are
    /// discarded; the caller gets `None` and cached state is untouched.
    pub fn commit_auto_prep(
        &mut self,
        ticket: AutoPrepTicket,
        result: Result<AutoPrepOutcome, PrepError>,
    ) -> Option<AutoPrepOutcome> {
        if ticket.0 != self.latest_ticket {
            log::debug!(
                "discarding superseded auto-prep result (ticket {} < {})",
                ticket.0,
                self.latest_ticket
            );
            return None;
        }

        match result {
            Ok(outcome) => {
                self.accept(&outcome);
                Some(outcome)
            }
            Err(err) => {
                self.record_failure(err);
                None
            }
        }
    }

    /// Synchronous automatic pass: begin, compute, commit in one call.
    pub fn run_auto_prep(
        &mut self,
        source: &PixelBuffer,
        options: &AutoPrepOptions,
    ) -> Result<AutoPrepOutcome, PrepError> {
        let _ticket = self.begin_auto_prep();
        match Self::compute_auto_prep(source, options) {
            Ok(outcome) => {
                self.accept(&outcome);
                Ok(outcome)
            }
            Err(err) => {
                log::warn!("auto-prep failed: {}", err);
                self.record_failure(err.clone());
                Err(err)
            }
        }
    }

    /// Apply brightness then contrast against the cached baseline.
    ///
    /// Never re-runs segmentation, equalization, or thresholding. Calling
    /// this before a baseline exists is an expected UI race: it logs a
    /// warning and returns `None` instead of panicking.
    pub fn apply_adjustments(&mut self, brightness: i32, contrast: i32) -> Option<PixelBuffer> {
        let Some(baseline) = self.baseline.as_ref() else {
            log::warn!("adjustments requested before auto-prep produced a baseline; ignoring");
            self.last_error = Some(PrepError::PrecursorMissing);
            return None;
        };

        match pipeline::apply_adjustments(baseline, brightness, contrast) {
            Ok(buffer) => {
                self.last_error = None;
                Some(buffer)
            }
            Err(err) => {
                log::warn!("adjustment pass failed: {}", err);
                self.last_error = Some(err);
                None
            }
        }
    }

    fn accept(&mut self, outcome: &AutoPrepOutcome) {
        self.baseline = Some(outcome.buffer.clone());
        self.otsu = Some(outcome.otsu);
        self.state = PrepState::Ready;
        self.last_error = None;
    }

    fn record_failure(&mut self, err: PrepError) {
        self.last_error = Some(err);
        // A stale baseline from an earlier image may still be usable
        self.state = if self.baseline.is_some() {
            PrepState::Ready
        } else {
            PrepState::Idle
        };
    }
}
