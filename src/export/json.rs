//! JSON serialization.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::JSON_INDENT;
use crate::error_handling::ExportError;
use crate::models::Entry;

/// Serializes entries as a pretty-printed JSON array with 2-space indentation.
///
/// Each entry keeps its source field order. An empty list produces `[]`.
pub fn to_json(entries: &[Entry]) -> Result<Vec<u8>, ExportError> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    entries.serialize(&mut serializer)?;
    Ok(out)
}
