use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::complex::Complex;

/// Maximum number of retained view snapshots.
pub const MAX_HISTORY: usize = 50;

/// A view snapshot taken before a discrete zoom action.
///
/// Palette and phase are deliberately absent: undoing a zoom restores where
/// you were, not how it was colored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub center: Complex,
    pub zoom: f64,
    pub iteration_bound: u32,
}

impl HistoryEntry {
    pub fn new(center: Complex, zoom: f64, iteration_bound: u32) -> Self {
        Self {
            center,
            zoom,
            iteration_bound,
        }
    }
}

/// Bounded undo stack for discrete zoom steps.
///
/// Append-only from the caller's perspective: `push` on every wheel or
/// rectangle zoom (not per-tick during continuous zoom drags), `pop` on the
/// undo gesture. Once more than [`MAX_HISTORY`] entries accumulate the
/// oldest is dropped, and the last remaining entry — the current view — is
/// never popped.
#[derive(Debug, Clone, Default)]
pub struct ViewHistory {
    entries: VecDeque<HistoryEntry>,
}

impl ViewHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot, evicting the oldest entry beyond capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        if self.entries.len() > MAX_HISTORY {
            self.entries.pop_front();
        }
    }

    /// Undo one zoom step.
    ///
    /// Removes the top entry and returns the one below it — the view to
    /// restore. With a single entry (or none) nothing is removed and the
    /// current top is returned unchanged.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        if self.entries.len() > 1 {
            self.entries.pop_back();
            if let Some(top) = self.top() {
                debug!(center = %top.center, zoom = top.zoom, "Restored previous view");
            }
        } else {
            debug!("No earlier view to restore");
        }
        self.top()
    }

    /// The most recent snapshot, if any.
    pub fn top(&self) -> Option<HistoryEntry> {
        self.entries.back().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
