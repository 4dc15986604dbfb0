//! Timing gates for interactive parameter changes.
//!
//! Two independent policies, modeled as pure state machines over explicit
//! instants so any host timer or event loop can drive them (and tests need
//! no real sleeping):
//!
//! - [`CommitDebounce`]: trailing-edge debounce that collapses a rapid burst
//!   of parameter values into the single final value after a quiet period.
//! - [`LoadingIndicator`]: derived boolean that only turns on if an
//!   operation is still in flight after a delay, suppressing spinner
//!   flicker on fast operations.

use std::time::{Duration, Instant};

/// Default quiet period before a parameter burst commits.
pub const DEFAULT_COMMIT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Default delay before a loading indicator becomes visible.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(500);

/// Trailing-edge debounce over a stream of values.
///
/// Each submission replaces the pending value and restarts the quiet-period
/// timer; `poll` releases the final value once the period elapses without a
/// newer submission.
#[derive(Debug, Clone)]
pub struct CommitDebounce<T> {
    delay: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> CommitDebounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Record a new value at `now`, resetting the quiet-period timer.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.deadline = Some(now + self.delay);
    }

    /// Release the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.pending.take()
    }

    /// True while a value awaits its quiet period.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending value without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }
}

impl<T> Default for CommitDebounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_COMMIT_DEBOUNCE)
    }
}

/// Delayed visibility flag for long-running operations.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    delay: Duration,
    started: Option<Instant>,
}

impl LoadingIndicator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: None,
        }
    }

    /// Mark an operation as started at `now`.
    pub fn begin(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Mark the operation as finished; visibility resets instantly.
    pub fn finish(&mut self) {
        self.started = None;
    }

    /// Whether the indicator should be shown at `now`: only when an
    /// operation is still in flight after the delay.
    pub fn is_visible(&self, now: Instant) -> bool {
        match self.started {
            Some(started) => now.duration_since(started) >= self.delay,
            None => false,
        }
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new(DEFAULT_LOADING_DELAY)
    }
}
