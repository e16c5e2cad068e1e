//! Dispatch ticket rendering
//!
//! Fixed-width console summary of a result record. Purely cosmetic; the
//! record in `result.json` is the contract.

use triage311_providers::ResultRecord;

use crate::samples;

const WIDTH: usize = 60;
const PREVIEW_CHARS: usize = 70;

/// Placeholder for values a failed step never produced
const MISSING: &str = "—";

/// Render the record as a Memphis 311 dispatch ticket
pub fn render(complaint_text: &str, record: &ResultRecord) -> String {
    let classification = record.outputs.classification.as_ref();
    let safety = record.outputs.content_safety.as_ref();
    let key_phrases = record.outputs.key_phrases.as_deref().unwrap_or_default();

    let category = classification
        .map(|c| c.category.as_str().to_string())
        .unwrap_or_else(|| MISSING.to_string());
    let confidence = classification
        .map(|c| c.confidence.to_string())
        .unwrap_or_else(|| MISSING.to_string());
    let reasoning = classification
        .map(|c| c.reasoning.clone())
        .unwrap_or_else(|| MISSING.to_string());

    let safety_status = match safety.map(|s| s.safe) {
        Some(true) => "CLEAR",
        Some(false) => "FLAGGED",
        None => MISSING,
    };

    let phrases_str = if key_phrases.is_empty() {
        MISSING.to_string()
    } else {
        key_phrases.join(", ")
    };

    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let preview = samples::preview(complaint_text, PREVIEW_CHARS);

    let mut lines = Vec::new();
    lines.push(heavy.clone());
    lines.push("  MEMPHIS 311 -- AI DISPATCH TICKET".to_string());
    lines.push(heavy.clone());
    lines.push(format!("  Complaint: {preview}"));
    lines.push(light.clone());
    lines.push(format!("  Category:    {category}"));
    lines.push(format!("  Confidence:  {confidence}"));
    lines.push(format!("  Reasoning:   {reasoning}"));
    lines.push(format!("  Safety:      {safety_status}"));
    lines.push(format!("  Key phrases: {phrases_str}"));
    lines.push(light);
    lines.push(format!("  Status: {}", record.status.as_str().to_uppercase()));
    lines.push(heavy);
    lines.join("\n")
}

/// Print the ticket to stdout
pub fn print(complaint_text: &str, record: &ResultRecord) {
    println!("{}", render(complaint_text, record));
}
