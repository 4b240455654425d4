//! Entry extraction.
//!
//! Pulls the attribute payload out of every feature in a source document.

use serde_json::Value;

use crate::config::{ATTRIBUTES_FIELD, RECORDS_FIELD};
use crate::models::{Entry, SourceDocument};

/// Returns the entries carried by `document`, in feature order.
///
/// Total: a document without a `features` array yields no entries, and any
/// feature whose `attributes` is missing or not an object is dropped.
pub fn extract_entries(document: &SourceDocument) -> Vec<Entry> {
    let Some(Value::Array(features)) = document.field(RECORDS_FIELD) else {
        return Vec::new();
    };

    features
        .iter()
        .filter_map(|feature| match feature.get(ATTRIBUTES_FIELD) {
            Some(Value::Object(attributes)) => Some(Entry::new(attributes.clone())),
            _ => None,
        })
        .collect()
}
