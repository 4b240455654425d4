//! Export of merged entries.
//!
//! This module writes the deduplicated entries to a single file as pretty
//! JSON or CSV, creating the output directory first if needed.

mod csv;
mod json;
mod types;

use std::path::Path;

use log::info;

use crate::error_handling::ExportError;
use crate::models::Entry;

pub use self::csv::to_csv;
pub use self::json::to_json;
pub use self::types::{ExportFormat, ExportOptions};

/// Serializes entries in the given format.
pub fn serialize_entries(entries: &[Entry], format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Json => to_json(entries),
        ExportFormat::Csv => to_csv(entries),
    }
}

/// Writes entries to `options.output_file`, overwriting any existing file.
///
/// The parent directory is created recursively if missing. Serialization
/// happens before the file is opened, so a serializer failure leaves any
/// existing output untouched.
///
/// # Returns
///
/// The number of entries written.
///
/// # Errors
///
/// Returns [`ExportError`] if the directory cannot be created, serialization
/// fails, or the file cannot be written.
pub async fn export_entries(
    entries: &[Entry],
    options: &ExportOptions,
) -> Result<usize, ExportError> {
    let output = &options.output_file;
    ensure_parent_dir(output).await?;

    let bytes = serialize_entries(entries, options.format)?;
    tokio::fs::write(output, &bytes)
        .await
        .map_err(|source| ExportError::Write {
            path: output.clone(),
            source,
        })?;

    info!(
        "Wrote {} records to {} ({})",
        entries.len(),
        output.display(),
        options.format
    );
    Ok(entries.len())
}

/// Like [`export_entries`], with the format given by name.
///
/// # Errors
///
/// Returns [`ExportError::InvalidFormat`] for an unknown format before any
/// directory or file is created.
pub async fn export_entries_as(
    entries: &[Entry],
    output_file: &Path,
    format: &str,
) -> Result<usize, ExportError> {
    let options = ExportOptions::new(output_file, format)?;
    export_entries(entries, &options).await
}

async fn ensure_parent_dir(output: &Path) -> Result<(), ExportError> {
    let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };

    // create_dir_all is a no-op for an existing directory
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ExportError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    info!("Output directory ready: {}", dir.display());
    Ok(())
}
