//! Configuration constants.
//!
//! Default paths and the field names that describe the survey export format.

/// Glob matched against the working directory when no pattern is given.
pub const DEFAULT_INPUT_PATTERN: &str = "input/*.json";

/// Output written by the command-line entry point.
pub const DEFAULT_OUTPUT_FILE: &str = "./output/geology-sk.csv";

/// Output used by [`crate::export::ExportOptions::default`].
pub const DEFAULT_EXPORT_OUTPUT: &str = "./output.json";

// Survey export document shape: { "features": [ { "attributes": { .. } } ] }
/// Top-level collection holding the features of a source document
pub const RECORDS_FIELD: &str = "features";
/// Per-feature field holding the entry's attributes
pub const ATTRIBUTES_FIELD: &str = "attributes";

/// Field used to collapse duplicate entries across files.
pub const DEDUP_KEY: &str = "objectid";

/// Indentation used by the pretty JSON serializer.
pub const JSON_INDENT: &[u8] = b"  ";
