//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `geosurvey_merge` library that handles:
//! - Command-line argument parsing (every option has a default)
//! - Logger initialization
//! - Reporting fatal errors
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use geosurvey_merge::initialization::init_logger_with;
use geosurvey_merge::{run_merge, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_merge(config).await {
        Ok(report) => {
            log::debug!(
                "Merged {} file{} ({} unparseable): {} records, {} duplicates dropped, {} written as {} in {:.2}s",
                report.files_located,
                if report.files_located == 1 { "" } else { "s" },
                report.files_unparseable,
                report.records_extracted,
                report.duplicates_dropped,
                report.records_written,
                report.format,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("geosurvey-merge error: {:#}", e);
            process::exit(1);
        }
    }
}
