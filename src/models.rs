//! Data model: survey entries and the documents they come from.
//!
//! An [`Entry`] is one borehole record, a flat mapping of field names to JSON
//! scalars. A [`SourceDocument`] is the loosely-typed export file that carries
//! zero or more entries under its `features` collection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DEDUP_KEY;

/// One borehole survey record.
///
/// Field order is the order in which the fields appeared in the source
/// document and is preserved through merge and export. Entries have no
/// mutating API once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Map<String, Value>);

impl Entry {
    /// Wraps an attribute map as an entry.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the raw `objectid` value, if present and not null.
    pub fn object_id(&self) -> Option<&Value> {
        self.0.get(DEDUP_KEY).filter(|v| !v.is_null())
    }

    /// Returns the normalized key used to collapse duplicate entries.
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::from_value(self.object_id())
    }

    /// Iterates over field names in source order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of fields in this entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the entry has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Normalized form of an entry's `objectid`.
///
/// Numeric identifiers compare by value, so `1` and `1.0` are the same key.
/// Entries without an identifier all share [`DedupKey::Missing`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    /// Integral numeric identifier
    Int(i128),
    /// Non-integral numeric identifier, stored as IEEE-754 bits
    Float(u64),
    /// String identifier
    Text(String),
    /// Boolean, array or object identifier, keyed by its compact JSON text
    Other(String),
    /// No identifier (absent or null)
    Missing,
}

impl DedupKey {
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => DedupKey::Missing,
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    DedupKey::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    DedupKey::Int(i128::from(u))
                } else {
                    let f = n.as_f64().unwrap_or(f64::NAN);
                    if f.fract() == 0.0 && f.abs() < 1e18 {
                        DedupKey::Int(f as i128)
                    } else {
                        DedupKey::Float(f.to_bits())
                    }
                }
            }
            Some(Value::String(s)) => DedupKey::Text(s.clone()),
            Some(other) => DedupKey::Other(other.to_string()),
        }
    }
}

/// A parsed survey export file.
///
/// Holds whatever JSON the file contained. Documents that failed to parse are
/// represented by [`SourceDocument::empty`], which carries no entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument(Value);

impl SourceDocument {
    /// Wraps an already-parsed JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The empty-document sentinel.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Returns `true` for the empty-document sentinel (or any empty object).
    pub fn is_empty(&self) -> bool {
        matches!(&self.0, Value::Object(m) if m.is_empty())
    }

    /// Looks up a top-level field of the document.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl Default for SourceDocument {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: Value) -> Entry {
        match value {
            Value::Object(map) => Entry::new(map),
            _ => panic!("test entry must be an object"),
        }
    }

    #[test]
    fn test_entry_preserves_field_order() {
        let e = entry(json!({"objectid": 7, "lokalita": "Modra", "hlbka": 12.5}));
        let names: Vec<&str> = e.field_names().collect();
        assert_eq!(names, vec!["objectid", "lokalita", "hlbka"]);
        assert_eq!(e.len(), 3);
    }

    #[test]
    fn test_dedup_key_numeric_normalization() {
        let a = entry(json!({"objectid": 1}));
        let b = entry(json!({"objectid": 1.0}));
        assert_eq!(a.dedup_key(), b.dedup_key());
        assert_eq!(a.dedup_key(), DedupKey::Int(1));
    }

    #[test]
    fn test_dedup_key_fractional_and_string() {
        let f = entry(json!({"objectid": 1.5}));
        assert_eq!(f.dedup_key(), DedupKey::Float(1.5f64.to_bits()));

        let s = entry(json!({"objectid": "1"}));
        assert_eq!(s.dedup_key(), DedupKey::Text("1".to_string()));
        assert_ne!(s.dedup_key(), DedupKey::Int(1));
    }

    #[test]
    fn test_dedup_key_missing_and_null() {
        let missing = entry(json!({"lokalita": "X"}));
        let null = entry(json!({"objectid": null}));
        assert_eq!(missing.dedup_key(), DedupKey::Missing);
        assert_eq!(null.dedup_key(), DedupKey::Missing);
        assert!(null.object_id().is_none());
    }

    #[test]
    fn test_empty_document_sentinel() {
        let doc = SourceDocument::empty();
        assert!(doc.is_empty());
        assert!(doc.field("features").is_none());
        assert_eq!(doc, SourceDocument::default());
    }

    #[test]
    fn test_entry_serializes_as_flat_object() {
        let e = entry(json!({"objectid": 3, "kod": null}));
        let text = serde_json::to_string(&e).expect("serialize");
        assert_eq!(text, r#"{"objectid":3,"kod":null}"#);
    }
}
