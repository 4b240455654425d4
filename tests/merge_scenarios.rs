//! End-to-end merge scenarios: locate, load, dedupe, export.

use geosurvey_merge::export::ExportFormat;
use geosurvey_merge::{run_merge, Config, Entry};
use serde_json::json;
use tempfile::TempDir;

#[path = "helpers.rs"]
#[allow(dead_code)]
mod helpers;

use helpers::{json_glob, write_raw, write_survey};

fn json_config(dir: &TempDir) -> Config {
    Config {
        input_pattern: json_glob(&dir.path().join("input")),
        output_file: dir.path().join("output/merged.json"),
        format: ExportFormat::Json,
        ..Default::default()
    }
}

fn read_entries(config: &Config) -> Vec<Entry> {
    let text = std::fs::read_to_string(&config.output_file).expect("Failed to read output");
    serde_json::from_str(&text).expect("Output should be a JSON array of entries")
}

#[tokio::test]
async fn test_first_occurrence_wins_across_files() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = dir.path().join("input");
    write_survey(&input, "a.json", &[json!({"objectid": 1, "lokalita": "X"})]);
    write_survey(
        &input,
        "b.json",
        &[
            json!({"objectid": 1, "lokalita": "Y"}),
            json!({"objectid": 2, "lokalita": "Z"}),
        ],
    );

    let config = json_config(&dir);
    let report = run_merge(config.clone()).await.expect("merge should succeed");

    assert_eq!(report.files_located, 2);
    assert_eq!(report.records_extracted, 3);
    assert_eq!(report.duplicates_dropped, 1);
    assert_eq!(report.records_written, 2);

    let entries = read_entries(&config);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].get("objectid"), Some(&json!(1)));
    assert_eq!(entries[0].get("lokalita"), Some(&json!("X")));
    assert_eq!(entries[1].get("objectid"), Some(&json!(2)));
    assert_eq!(entries[1].get("lokalita"), Some(&json!("Z")));
}

#[tokio::test]
async fn test_output_count_equals_distinct_ids() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = dir.path().join("input");
    for file in 0..6 {
        let attributes: Vec<_> = (0..20)
            .map(|i| json!({"objectid": (file * 7 + i) % 25, "subor": file, "poradie": i}))
            .collect();
        write_survey(&input, &format!("part-{:02}.json", file), &attributes);
    }

    let config = json_config(&dir);
    let report = run_merge(config.clone()).await.expect("merge should succeed");

    let entries = read_entries(&config);
    assert_eq!(entries.len(), 25);
    assert_eq!(report.records_extracted, 120);
    assert_eq!(report.duplicates_dropped, 95);

    // Every surviving entry is the earliest occurrence of its id
    for entry in &entries {
        let id = entry.get("objectid").and_then(|v| v.as_i64()).expect("numeric id");
        let first = (0..6i64)
            .flat_map(|file| (0..20i64).map(move |i| (file, i)))
            .find(|(file, i)| (file * 7 + i) % 25 == id)
            .expect("id must come from some file");
        assert_eq!(entry.get("subor"), Some(&json!(first.0)));
        assert_eq!(entry.get("poradie"), Some(&json!(first.1)));
    }
}

#[tokio::test]
async fn test_malformed_file_does_not_abort() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = dir.path().join("input");
    write_raw(&input, "a-broken.json", "{\"features\": [ {\"attributes\": ");
    write_survey(&input, "b-good.json", &[json!({"objectid": 5, "lokalita": "Senec"})]);

    let config = json_config(&dir);
    let report = run_merge(config.clone()).await.expect("merge should succeed");

    assert_eq!(report.files_located, 2);
    assert_eq!(report.files_unparseable, 1);
    let entries = read_entries(&config);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].get("lokalita"), Some(&json!("Senec")));
}

#[tokio::test]
async fn test_documents_without_features_contribute_nothing() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = dir.path().join("input");
    write_raw(&input, "a.json", r#"{"error": {"code": 400}}"#);
    write_raw(&input, "b.json", r#"{"features": []}"#);
    write_raw(&input, "c.json", "[]");

    let config = json_config(&dir);
    let report = run_merge(config.clone()).await.expect("merge should succeed");

    assert_eq!(report.files_located, 3);
    assert_eq!(report.files_unparseable, 0);
    assert_eq!(report.records_written, 0);
    assert!(read_entries(&config).is_empty());
}

#[tokio::test]
async fn test_empty_input_directory_json() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::create_dir_all(dir.path().join("input")).expect("create input dir");

    let config = json_config(&dir);
    let report = run_merge(config.clone()).await.expect("merge should succeed");

    assert_eq!(report.files_located, 0);
    let text = std::fs::read_to_string(&config.output_file).expect("read output");
    assert_eq!(text, "[]");
}

#[tokio::test]
async fn test_empty_input_directory_csv() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::create_dir_all(dir.path().join("input")).expect("create input dir");

    let config = Config {
        output_file: dir.path().join("output/geology-sk.csv"),
        format: ExportFormat::Csv,
        ..json_config(&dir)
    };
    run_merge(config.clone()).await.expect("merge should succeed");

    let text = std::fs::read_to_string(&config.output_file).expect("read output");
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_non_matching_files_are_ignored() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = dir.path().join("input");
    write_survey(&input, "a.json", &[json!({"objectid": 1})]);
    write_survey(&input, "b.geojson", &[json!({"objectid": 2})]);
    write_survey(&input.join("archive"), "c.json", &[json!({"objectid": 3})]);

    let config = json_config(&dir);
    let report = run_merge(config.clone()).await.expect("merge should succeed");

    assert_eq!(report.files_located, 1);
    assert_eq!(read_entries(&config).len(), 1);
}

#[tokio::test]
async fn test_invalid_pattern_is_fatal() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = Config {
        input_pattern: format!("{}/input/[*.json", dir.path().display()),
        ..json_config(&dir)
    };

    let err = run_merge(config.clone()).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to locate input files"));
    assert!(!config.output_file.exists());
}
