//! Merge engine.
//!
//! Loads and extracts every located file as an independent task, gathers the
//! results back in file-list order, and collapses duplicate `objectid`s so the
//! first occurrence wins.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use log::debug;

use crate::error_handling::{FileOutcome, FileStats, LoadError, MergeError};
use crate::extract::extract_entries;
use crate::load::load_document;
use crate::models::Entry;

/// Entries contributed by one file.
#[derive(Debug, Clone)]
pub struct FileEntries {
    /// Source file
    pub path: PathBuf,
    /// How the file contributed
    pub outcome: FileOutcome,
    /// Entries in feature order
    pub entries: Vec<Entry>,
}

/// Result of merging a set of files.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Deduplicated entries, first occurrence first
    pub entries: Vec<Entry>,
    /// Per-file outcome counts
    pub stats: FileStats,
    /// Entries extracted before deduplication
    pub records_extracted: usize,
    /// Later duplicates that were dropped
    pub duplicates_dropped: usize,
}

/// Loads one file and extracts its entries.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read.
pub async fn load_file_entries(path: &Path) -> Result<FileEntries, LoadError> {
    let loaded = load_document(path).await?;
    let entries = extract_entries(&loaded.document);

    let outcome = if loaded.is_unparseable() {
        FileOutcome::Unparseable
    } else if entries.is_empty() {
        FileOutcome::WithoutEntries
    } else {
        FileOutcome::WithEntries
    };
    debug!("{}: {} entries ({})", path.display(), entries.len(), outcome);

    Ok(FileEntries {
        path: loaded.path,
        outcome,
        entries,
    })
}

/// Keeps the first entry for each `objectid`, preserving input order.
///
/// Returns the surviving entries and the number of dropped duplicates.
pub fn dedupe_entries<I>(entries: I) -> (Vec<Entry>, usize)
where
    I: IntoIterator<Item = Entry>,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    let mut dropped = 0;

    for entry in entries {
        if seen.insert(entry.dedup_key()) {
            kept.push(entry);
        } else {
            dropped += 1;
        }
    }

    (kept, dropped)
}

/// Merges all `paths` into one deduplicated entry list.
///
/// Each file is loaded on its own task. Results are gathered in the order of
/// `paths`, regardless of completion order, so the surviving duplicate is
/// always the one from the earliest file (then earliest feature).
///
/// # Errors
///
/// Fails as soon as any file cannot be read, or if a task panics.
pub async fn merge_files(paths: &[PathBuf]) -> Result<MergeOutcome, MergeError> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move { load_file_entries(&path).await }))
        .collect();

    let per_file = try_join_all(handles.into_iter().map(|handle| async move {
        match handle.await {
            Ok(result) => result.map_err(MergeError::from),
            Err(e) => Err(MergeError::from(e)),
        }
    }))
    .await?;

    Ok(combine(per_file))
}

/// Concatenates per-file results in the given order and deduplicates them.
pub fn combine(per_file: Vec<FileEntries>) -> MergeOutcome {
    let mut stats = FileStats::new();
    let mut all = Vec::new();

    for file in per_file {
        stats.record(file.outcome);
        all.extend(file.entries);
    }

    let records_extracted = all.len();
    let (entries, duplicates_dropped) = dedupe_entries(all);
    debug!(
        "Merged {} entries into {} ({} duplicates dropped)",
        records_extracted,
        entries.len(),
        duplicates_dropped
    );

    MergeOutcome {
        entries,
        stats,
        records_extracted,
        duplicates_dropped,
    }
}
