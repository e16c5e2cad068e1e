//! Sequential driver for the three Azure AI calls
//!
//! Runs classification, content safety, and key-phrase extraction in fixed
//! order, each behind its own error boundary: a skipped or failed step never
//! prevents the others from running, and the run always yields a record.

use std::path::Path;

use tracing::warn;
use triage311_providers::{
    handles, settings, Classification, Metadata, Outputs, ProviderError, ResultRecord,
    SafetyResult,
};

use crate::json_store::{self, JsonStoreError};
use crate::output;

/// Run all three service calls against the complaint and assemble the record
pub async fn run(complaint: &str) -> ResultRecord {
    let outputs = Outputs {
        classification: step(1, "classification", classify(complaint).await, |c| {
            format!("classified as {}", c.category.as_str())
        }),
        content_safety: step(2, "content safety", check_safety(complaint).await, |s| {
            format!("content safety analyzed ({} categories)", s.categories.len())
        }),
        key_phrases: step(3, "key phrases", extract_phrases(complaint).await, |p| {
            format!("extracted {} key phrases", p.len())
        }),
    };

    ResultRecord::assemble(outputs, Metadata::now(settings::deployment_name()))
}

/// Write the record to disk, overwriting any previous run's file
pub fn write_record(path: &Path, record: &ResultRecord) -> Result<(), JsonStoreError> {
    json_store::save_json(path, record)
}

async fn classify(complaint: &str) -> Result<Classification, ProviderError> {
    handles::classifier()?.classify(complaint).await
}

async fn check_safety(complaint: &str) -> Result<SafetyResult, ProviderError> {
    handles::content_safety()?.analyze(complaint).await
}

async fn extract_phrases(complaint: &str) -> Result<Vec<String>, ProviderError> {
    handles::language()?.extract(complaint).await
}

/// Per-step error boundary: report the outcome on the console and map a
/// failure of any kind to an absent output.
fn step<T>(
    number: u8,
    label: &str,
    result: Result<T, ProviderError>,
    describe: impl FnOnce(&T) -> String,
) -> Option<T> {
    match result {
        Ok(value) => {
            output::print_success(&format!("Step {number} complete: {}", describe(&value)));
            Some(value)
        }
        Err(err) if err.is_not_configured() => {
            output::print_warning(&format!("Step {number} not configured -- skipping {label}"));
            None
        }
        Err(err) => {
            warn!("step {number} ({label}) failed: {err}");
            output::print_error(&format!("Step {number} error: {err}"));
            None
        }
    }
}
