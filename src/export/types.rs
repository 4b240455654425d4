//! Export types and options.

use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use strum_macros::{Display, EnumIter};

use crate::config::DEFAULT_EXPORT_OUTPUT;
use crate::error_handling::ExportError;

/// Output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON array of entry objects
    Json,
    /// Header row from the first entry, then one row per entry
    Csv,
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Parses `json` or `csv`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ExportError::InvalidFormat(s.to_string())),
        }
    }
}

/// Where and how to write the merged entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Output file path; its parent directory is created if missing
    pub output_file: PathBuf,
    /// Export format
    pub format: ExportFormat,
}

impl ExportOptions {
    /// Builds options from a format name such as `"csv"`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidFormat`] for anything but `json` or `csv`.
    pub fn new(output_file: impl Into<PathBuf>, format: &str) -> Result<Self, ExportError> {
        Ok(Self {
            output_file: output_file.into(),
            format: format.parse()?,
        })
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_EXPORT_OUTPUT),
            format: ExportFormat::Json,
        }
    }
}
