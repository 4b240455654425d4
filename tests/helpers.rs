// Shared test helpers for building survey export fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

/// Wraps attribute objects in a survey export document.
pub fn survey_document(attributes: &[Value]) -> Value {
    let features: Vec<Value> = attributes
        .iter()
        .map(|a| json!({ "attributes": a, "geometry": { "x": 17.1, "y": 48.1 } }))
        .collect();
    json!({
        "displayFieldName": "lokalita",
        "geometryType": "esriGeometryPoint",
        "features": features,
    })
}

/// Writes a survey export with the given attributes into `dir/name`.
pub fn write_survey(dir: &Path, name: &str, attributes: &[Value]) -> PathBuf {
    write_raw(dir, name, &survey_document(attributes).to_string())
}

/// Writes arbitrary text into `dir/name`, creating `dir` if needed.
pub fn write_raw(dir: &Path, name: &str, contents: &str) -> PathBuf {
    std::fs::create_dir_all(dir).expect("Failed to create input directory");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write input file");
    path
}

/// Builds a glob matching every `.json` file directly in `dir`.
pub fn json_glob(dir: &Path) -> String {
    format!("{}/*.json", dir.display())
}
