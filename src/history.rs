//! Bounded undo/redo history over adjustment parameters.
//!
//! Snapshots hold scalar parameters only, never pixel buffers, so memory
//! stays bounded no matter how large the image is. All operations are
//! synchronous and observable in the same call.

use crate::models::AdjustmentParameters;

/// Default number of snapshots retained; the oldest is dropped beyond this.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Result of a successful undo step.
///
/// Stepping back past the first snapshot is a deliberate state — "back to
/// pristine" — and is distinct from having nothing to undo (query
/// [`HistoryManager::can_undo`] for that).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryStep {
    /// Undid the first snapshot; the host should show the unadjusted state
    Pristine,
    /// Restored the snapshot that is now current
    Restored(AdjustmentParameters),
}

/// Stack of parameter snapshots with a single current-index pointer.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: Vec<AdjustmentParameters>,
    /// Index of the current snapshot; `None` means "before the first entry"
    current: Option<usize>,
    capacity: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// History bounded to `capacity` snapshots (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            capacity: capacity.max(1),
        }
    }

    /// Record a committed parameter change.
    ///
    /// Entries past the current index (the redo tail) are discarded, the
    /// snapshot is appended, and the oldest entry is dropped if the stack
    /// exceeds its capacity.
    pub fn push(&mut self, snapshot: AdjustmentParameters) {
        match self.current {
            Some(index) => self.entries.truncate(index + 1),
            None => self.entries.clear(),
        }

        self.entries.push(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        self.current = Some(self.entries.len() - 1);
    }

    /// Step back one snapshot.
    ///
    /// Returns `None` when there is nothing to undo. Otherwise yields either
    /// the snapshot that became current or [`HistoryStep::Pristine`] when
    /// the pointer moved past the first entry.
    pub fn undo(&mut self) -> Option<HistoryStep> {
        match self.current? {
            0 => {
                self.current = None;
                Some(HistoryStep::Pristine)
            }
            index => {
                self.current = Some(index - 1);
                Some(HistoryStep::Restored(self.entries[index - 1].clone()))
            }
        }
    }

    /// Step forward one snapshot, if a redo tail exists.
    pub fn redo(&mut self) -> Option<AdjustmentParameters> {
        let next = match self.current {
            None if !self.entries.is_empty() => 0,
            Some(index) if index + 1 < self.entries.len() => index + 1,
            _ => return None,
        };
        self.current = Some(next);
        Some(self.entries[next].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.current.is_some()
    }

    pub fn can_redo(&self) -> bool {
        match self.current {
            None => !self.entries.is_empty(),
            Some(index) => index + 1 < self.entries.len(),
        }
    }

    /// The snapshot the pointer currently rests on, if any.
    pub fn current(&self) -> Option<&AdjustmentParameters> {
        self.current.map(|index| &self.entries[index])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(brightness: i32) -> AdjustmentParameters {
        AdjustmentParameters {
            brightness,
            ..AdjustmentParameters::default()
        }
    }

    #[test]
    fn test_cap_drops_oldest_snapshots() {
        let mut history = HistoryManager::new();
        for i in 0..15 {
            history.push(snapshot(i));
        }

        assert_eq!(history.len(), 10, "15 pushes must retain exactly 10");
        assert_eq!(
            history.current().expect("current snapshot").brightness,
            14,
            "newest snapshot must survive"
        );

        // Walk all the way back: the oldest surviving snapshot is #5
        let mut oldest = None;
        while history.can_undo() {
            if let Some(HistoryStep::Restored(snap)) = history.undo() {
                oldest = Some(snap.brightness);
            }
        }
        assert_eq!(oldest, Some(5), "snapshots 0-4 must have been dropped");
    }

    #[test]
    fn test_undo_to_pristine_then_exhausted() {
        let mut history = HistoryManager::new();
        for i in 0..10 {
            history.push(snapshot(i));
        }

        let mut steps = 0;
        while history.can_undo() {
            assert!(history.undo().is_some());
            steps += 1;
        }
        assert_eq!(steps, 10, "10 snapshots allow exactly 10 undo steps");
        assert!(!history.can_undo());
        assert!(history.undo().is_none(), "exhausted history must refuse undo");
    }

    #[test]
    fn test_undo_past_first_is_pristine_not_refusal() {
        let mut history = HistoryManager::new();
        history.push(snapshot(1));

        assert_eq!(history.undo(), Some(HistoryStep::Pristine));
        assert!(!history.can_undo());
        assert!(
            history.can_redo(),
            "pristine still has the first snapshot ahead of it"
        );
    }

    #[test]
    fn test_redo_restores_exact_snapshot() {
        let mut history = HistoryManager::new();
        history.push(snapshot(1));
        history.push(snapshot(2));

        assert_eq!(
            history.undo(),
            Some(HistoryStep::Restored(snapshot(1)))
        );
        assert_eq!(history.redo(), Some(snapshot(2)));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_after_undo_discards_redo_tail() {
        let mut history = HistoryManager::new();
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push(snapshot(3));

        history.undo();
        history.undo();
        history.push(snapshot(9));

        assert!(!history.can_redo(), "push must clear the redo tail");
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().expect("current").brightness, 9);
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut history = HistoryManager::new();
        history.push(snapshot(1));
        history.clear();

        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.current().is_none());
    }
}
