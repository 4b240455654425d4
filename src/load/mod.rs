//! Source document loading.
//!
//! Reads an export file in full and parses it as JSON. Parsing is best-effort:
//! a file that is not valid JSON becomes the empty document, so one broken
//! export does not stop the rest of the merge. Read failures stay fatal.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::Value;

use crate::error_handling::LoadError;
use crate::models::SourceDocument;

/// A loaded file together with the outcome of parsing it.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// File the document was read from
    pub path: PathBuf,
    /// Parsed document, or the empty sentinel when parsing failed
    pub document: SourceDocument,
    /// Parser message when the file was not valid JSON
    pub parse_error: Option<String>,
}

impl LoadedDocument {
    /// Returns `true` if the file could not be parsed.
    pub fn is_unparseable(&self) -> bool {
        self.parse_error.is_some()
    }
}

/// Parses text into a document, returning the parser error on failure.
///
/// A leading byte-order mark is ignored.
pub fn try_parse_document(text: &str) -> Result<SourceDocument, serde_json::Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    serde_json::from_str::<Value>(text).map(SourceDocument::new)
}

/// Parses text into a document. Malformed input yields [`SourceDocument::empty`].
pub fn parse_document(text: &str) -> SourceDocument {
    try_parse_document(text).unwrap_or_default()
}

/// Reads and parses one file.
///
/// Invalid UTF-8 is replaced rather than rejected; such a file normally fails
/// to parse and contributes nothing.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read.
pub async fn load_document(path: &Path) -> Result<LoadedDocument, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let (document, parse_error) = match try_parse_document(&text) {
        Ok(document) => (document, None),
        Err(e) => {
            warn!("Skipping {}: not valid JSON ({})", path.display(), e);
            (SourceDocument::empty(), Some(e.to_string()))
        }
    };
    debug!("Loaded {} ({} bytes)", path.display(), bytes.len());

    Ok(LoadedDocument {
        path: path.to_path_buf(),
        document,
        parse_error,
    })
}
