//! CSV serialization.
//!
//! The header is taken from the first entry's fields, in source order. Every
//! entry is then written as one row against that header; fields the first
//! entry lacks are not written and missing fields become empty cells.

use csv::Writer;
use serde_json::Value;

use crate::error_handling::ExportError;
use crate::models::Entry;

/// Serializes entries to CSV text.
///
/// An empty entry list produces empty output with no header.
pub fn to_csv(entries: &[Entry]) -> Result<Vec<u8>, ExportError> {
    let Some(first) = entries.first() else {
        return Ok(Vec::new());
    };
    let header: Vec<&str> = first.field_names().collect();

    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(&header)?;

    for entry in entries {
        writer.write_record(header.iter().map(|field| render_cell(entry.get(field))))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))
}

/// Renders one field value as cell text.
fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        // Nested values are unusual in survey attributes; keep them as JSON
        Some(nested) => nested.to_string(),
    }
}
