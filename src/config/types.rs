//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_INPUT_PATTERN, DEFAULT_OUTPUT_FILE};
use crate::error_handling::ConfigValidationError;
use crate::export::ExportFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Parsed from the command line by the binary; every option has a default, so
/// running with no arguments reads `input/*.json` and writes
/// `./output/geology-sk.csv`. Library callers construct it directly.
///
/// # Examples
///
/// ```no_run
/// use geosurvey_merge::Config;
/// use geosurvey_merge::export::ExportFormat;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input_pattern: "exports/2024/*.json".to_string(),
///     output_file: PathBuf::from("./out/boreholes.json"),
///     format: ExportFormat::Json,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geosurvey-merge",
    about = "Merges geological survey JSON exports into one deduplicated CSV or JSON file."
)]
pub struct Config {
    /// Glob pattern selecting the input files
    #[arg(long = "input", default_value = DEFAULT_INPUT_PATTERN)]
    pub input_pattern: String,

    /// Output file path (parent directories are created as needed)
    #[arg(long = "output", value_parser, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Output format: json|csv
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_pattern: DEFAULT_INPUT_PATTERN.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: ExportFormat::Csv,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the configuration for values that cannot lead to a useful run.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] naming the offending field when the
    /// input pattern is blank or the output path is empty or names a directory.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.input_pattern.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "input_pattern".to_string(),
                message: "must not be empty (e.g. input/*.json)".to_string(),
            });
        }

        let output = self.output_file.to_string_lossy();
        if output.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "output_file".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if output.ends_with('/') || output.ends_with(std::path::MAIN_SEPARATOR) {
            return Err(ConfigValidationError {
                field: "output_file".to_string(),
                message: format!("must name a file, not a directory: {}", output),
            });
        }

        Ok(())
    }
}
