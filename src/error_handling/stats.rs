//! Per-run file statistics.
//!
//! Counts what each located file contributed. Filled in after the fan-out has
//! been gathered, so no synchronization is involved.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::FileOutcome;

/// Tally of file outcomes for one merge run.
///
/// Every [`FileOutcome`] is initialized to zero on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    outcomes: HashMap<FileOutcome, usize>,
}

impl FileStats {
    /// Creates an empty tally.
    pub fn new() -> Self {
        let outcomes = FileOutcome::iter().map(|o| (o, 0)).collect();
        FileStats { outcomes }
    }

    /// Records one file's outcome.
    pub fn record(&mut self, outcome: FileOutcome) {
        *self.outcomes.entry(outcome).or_insert(0) += 1;
    }

    /// Number of files with the given outcome.
    pub fn count(&self, outcome: FileOutcome) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Total number of files recorded.
    pub fn total(&self) -> usize {
        self.outcomes.values().sum()
    }
}

impl Default for FileStats {
    fn default() -> Self {
        Self::new()
    }
}
