//! Error handling and run statistics.
//!
//! This module provides:
//! - Fatal error types for each stage (locate, load, export) and for setup
//! - Configuration validation errors
//! - Per-file outcome tracking for the run report
//!
//! Failures are split into:
//! - **Fatal**: the input cannot be listed or read, or the output cannot be
//!   written; the run aborts
//! - **Recoverable**: a file is not valid JSON; it contributes no entries and
//!   is counted as [`FileOutcome::Unparseable`]

mod stats;
mod types;

// Re-export public API
pub use stats::FileStats;
pub use types::{
    ConfigValidationError, ExportError, FileOutcome, InitializationError, LoadError, LocateError,
    MergeError,
};
