//! Error type definitions.
//!
//! This module defines the fatal error types used throughout the application and
//! the per-file outcome categories tracked for the run report.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A configuration value that cannot produce a useful run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid configuration for `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: String,
    /// What is wrong and what is expected instead
    pub message: String,
}

/// Errors expanding the input glob into file paths.
#[derive(Error, Debug)]
pub enum LocateError {
    /// The pattern is not a valid glob.
    #[error("Invalid input pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// Pattern as given
        pattern: String,
        /// Underlying glob error
        #[source]
        source: globset::Error,
    },

    /// Directory traversal failed.
    #[error("Failed to list input directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Errors reading a located input file.
///
/// Parse failures are not represented here: a file that cannot be parsed
/// contributes no entries instead of failing the run.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read input file {}: {source}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors gathering the per-file results of a merge.
#[derive(Error, Debug)]
pub enum MergeError {
    /// A located file could not be read.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A per-file task panicked or was cancelled.
    #[error("File processing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Errors writing the merged output.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The requested format is neither `json` nor `csv`.
    #[error("Invalid export format: {0}")]
    InvalidFormat(String),

    /// The output's parent directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write output file {}: {source}", .path.display())]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// What a single located file contributed to the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIterMacro)]
pub enum FileOutcome {
    /// Parsed and contributed at least one entry
    #[strum(serialize = "with entries")]
    WithEntries,
    /// Parsed but carried no entries (missing or empty `features`)
    #[strum(serialize = "without entries")]
    WithoutEntries,
    /// Could not be parsed as JSON; contributed nothing
    #[strum(serialize = "unparseable")]
    Unparseable,
}
