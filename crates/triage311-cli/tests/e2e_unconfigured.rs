//! End-to-end run with no service configured
//!
//! In its own test binary so the cleared environment is seen by this
//! process's lazy client handles.

use triage311::driver;
use triage311_providers::{settings, RunStatus, TASK_NAME};

#[tokio::test]
async fn unconfigured_run_produces_error_record_with_full_schema() {
    for var in [
        settings::AZURE_OPENAI_ENDPOINT,
        settings::AZURE_OPENAI_API_KEY,
        settings::AZURE_OPENAI_DEPLOYMENT,
        settings::AZURE_CONTENT_SAFETY_ENDPOINT,
        settings::AZURE_CONTENT_SAFETY_KEY,
        settings::AZURE_AI_LANGUAGE_ENDPOINT,
        settings::AZURE_AI_LANGUAGE_KEY,
    ] {
        std::env::remove_var(var);
    }

    let record = driver::run("There's a huge pothole on Poplar Avenue").await;

    assert_eq!(record.task, TASK_NAME);
    assert_eq!(record.status, RunStatus::Error);
    assert!(record.outputs.classification.is_none());
    assert!(record.outputs.content_safety.is_none());
    assert!(record.outputs.key_phrases.is_none());
    assert_eq!(record.metadata.model, "gpt-4o");

    // The record still writes and carries every required top-level field
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.json");
    driver::write_record(&path, &record).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    for field in ["task", "status", "outputs", "metadata"] {
        assert!(value.get(field).is_some(), "missing field: {field}");
    }
    assert_eq!(value["status"], "error");
    assert!(value["outputs"]["classification"].is_null());
    assert!(value["outputs"]["content_safety"].is_null());
    assert!(value["outputs"]["key_phrases"].is_null());
}
