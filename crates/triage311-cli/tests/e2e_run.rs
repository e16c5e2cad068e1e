//! End-to-end run against mocked Azure endpoints
//!
//! All three services point at one mock server via environment variables.
//! The lazy client handles are process-lifetime, so this file holds a single
//! test covering the fully-configured path; the unconfigured path lives in
//! its own test binary.

use mockito::Matcher;
use triage311::driver;
use triage311_providers::{settings, Category, RunStatus};

#[tokio::test]
async fn configured_run_produces_success_record() {
    let mut server = mockito::Server::new_async().await;

    let _classify = server
        .mock("POST", "/openai/deployments/gpt-4o/chat/completions")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices": [{"message": {"role": "assistant",
                "content": "{\"category\": \"Pothole\", \"confidence\": 0.93, \"reasoning\": \"Road surface damage\"}"}}]}"#,
        )
        .create_async()
        .await;

    let _safety = server
        .mock("POST", "/contentsafety/text:analyze")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"categoriesAnalysis": [
                {"category": "Hate", "severity": 0},
                {"category": "SelfHarm", "severity": 0},
                {"category": "Sexual", "severity": 0},
                {"category": "Violence", "severity": 0}
            ]}"#,
        )
        .create_async()
        .await;

    let _phrases = server
        .mock("POST", "/language/:analyze-text")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"results": {"documents": [
                {"id": "1", "keyPhrases": ["huge pothole", "Poplar Avenue"]}
            ], "errors": []}}"#,
        )
        .create_async()
        .await;

    std::env::remove_var(settings::AZURE_OPENAI_DEPLOYMENT);
    std::env::set_var(settings::AZURE_OPENAI_ENDPOINT, server.url());
    std::env::set_var(settings::AZURE_OPENAI_API_KEY, "test-key");
    std::env::set_var(settings::AZURE_CONTENT_SAFETY_ENDPOINT, server.url());
    std::env::set_var(settings::AZURE_CONTENT_SAFETY_KEY, "test-key");
    std::env::set_var(settings::AZURE_AI_LANGUAGE_ENDPOINT, server.url());
    std::env::set_var(settings::AZURE_AI_LANGUAGE_KEY, "test-key");

    let complaint = "There's a huge pothole on Poplar Avenue near the Walgreens";
    let record = driver::run(complaint).await;

    assert_eq!(record.status, RunStatus::Success);
    let classification = record.outputs.classification.as_ref().unwrap();
    assert_eq!(classification.category, Category::Pothole);
    assert!(record.outputs.content_safety.as_ref().unwrap().safe);
    assert_eq!(
        record.outputs.key_phrases.as_deref().unwrap(),
        ["huge pothole", "Poplar Avenue"]
    );
    assert_eq!(record.metadata.model, "gpt-4o");

    // Persisted record keeps the full schema
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.json");
    driver::write_record(&path, &record).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["task"], "hello_azure_ai");
    assert_eq!(value["status"], "success");
    assert_eq!(value["outputs"]["classification"]["category"], "Pothole");
    assert!(value["metadata"]["timestamp"].is_string());
}
