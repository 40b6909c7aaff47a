//! Per-run statistics for ingestion.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Outcome of processing a single listed item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Detail fetch succeeded and the payload mapped to a well-formed item.
    Fetched,
    /// Detail fetch failed or the payload was unusable; the id is dropped.
    Skipped,
}

/// Statistics for one load invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub fetched: usize,
    pub skipped: usize,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Fetched => self.fetched += 1,
            LoadOutcome::Skipped => self.skipped += 1,
        }
    }

    /// Total number of ids processed.
    pub fn total(&self) -> usize {
        self.fetched + self.skipped
    }
}

/// Thread-safe counterpart of [`LoadStats`], shared across the concurrent
/// fetch tasks of a single run.
#[derive(Debug, Default)]
pub struct AtomicLoadStats {
    fetched: AtomicUsize,
    skipped: AtomicUsize,
}

impl AtomicLoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Fetched => self.fetched.fetch_add(1, Ordering::Relaxed),
            LoadOutcome::Skipped => self.skipped.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// Snapshots the counters into a plain [`LoadStats`].
    pub fn to_stats(&self) -> LoadStats {
        LoadStats {
            fetched: self.fetched.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
        }
    }
}

// ===== Tests =====
