//! geosurvey_merge library: consolidation of geological survey exports
//!
//! Reads every survey JSON export matching a glob, flattens each feature to its
//! attribute record, drops duplicate `objectid`s (first occurrence wins), and
//! writes one CSV or pretty JSON file.
//!
//! # Example
//!
//! ```no_run
//! use geosurvey_merge::{run_merge, Config};
//! use geosurvey_merge::export::ExportFormat;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input_pattern: "input/*.json".to_string(),
//!     format: ExportFormat::Json,
//!     output_file: "./output/geology-sk.json".into(),
//!     ..Default::default()
//! };
//!
//! let report = run_merge(config).await?;
//! println!("{} records from {} files", report.records_written, report.files_located);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Files are loaded on spawned tasks.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod initialization;
pub mod load;
pub mod locate;
pub mod merge;
pub mod models;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use models::{Entry, SourceDocument};
pub use run::{run_merge, MergeReport};

// Internal run module (locate, merge, export)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info};
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::config::Config;
    use crate::error_handling::FileOutcome;
    use crate::export::{export_entries, ExportFormat, ExportOptions};
    use crate::locate::locate_files;
    use crate::merge::merge_files;

    /// Results of a merge run.
    #[derive(Debug, Clone)]
    pub struct MergeReport {
        /// Files matched by the input pattern
        pub files_located: usize,
        /// Files that were not valid JSON and contributed nothing
        pub files_unparseable: usize,
        /// Entries extracted across all files, before deduplication
        pub records_extracted: usize,
        /// Duplicate entries dropped
        pub duplicates_dropped: usize,
        /// Entries written to the output
        pub records_written: usize,
        /// Output file
        pub output_file: PathBuf,
        /// Output format
        pub format: ExportFormat,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one merge with the provided configuration.
    ///
    /// Locates the input files, merges them, and writes the output.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid
    /// - The input pattern is malformed or a directory cannot be listed
    /// - A located file cannot be read
    /// - The output cannot be written
    ///
    /// Files that are not valid JSON are skipped, not treated as errors.
    pub async fn run_merge(config: Config) -> Result<MergeReport> {
        let start = Instant::now();
        config.validate()?;

        let pattern = config.input_pattern.clone();
        let paths = tokio::task::spawn_blocking(move || locate_files(&pattern))
            .await
            .context("Input listing task failed")?
            .context("Failed to locate input files")?;
        debug!(
            "Located {} file(s) for pattern {}",
            paths.len(),
            config.input_pattern
        );

        let merged = merge_files(&paths)
            .await
            .context("Failed to merge input files")?;

        let options = ExportOptions {
            output_file: config.output_file.clone(),
            format: config.format,
        };
        let written = export_entries(&merged.entries, &options)
            .await
            .context("Failed to export merged records")?;

        let files_unparseable = merged.stats.count(FileOutcome::Unparseable);
        if files_unparseable > 0 {
            info!("{} input file(s) were not valid JSON and were skipped", files_unparseable);
        }

        Ok(MergeReport {
            files_located: paths.len(),
            files_unparseable,
            records_extracted: merged.records_extracted,
            duplicates_dropped: merged.duplicates_dropped,
            records_written: written,
            output_file: options.output_file,
            format: options.format,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
