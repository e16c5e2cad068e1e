//! Data models for the triage result record
//!
//! The record written to `result.json` after a run, plus the per-service
//! output types that feed into it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal task identifier stamped on every record
pub const TASK_NAME: &str = "hello_azure_ai";

/// Closed category set for 311 request classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Pothole,
    #[serde(rename = "Noise Complaint")]
    NoiseComplaint,
    #[serde(rename = "Trash/Litter")]
    TrashLitter,
    #[serde(rename = "Street Light")]
    StreetLight,
    #[serde(rename = "Water/Sewer")]
    WaterSewer,
    Other,
}

impl Category {
    /// Display names in the order the classifier prompt lists them
    pub const ALL: [&'static str; 6] = [
        "Pothole",
        "Noise Complaint",
        "Trash/Litter",
        "Street Light",
        "Water/Sewer",
        "Other",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pothole => "Pothole",
            Category::NoiseComplaint => "Noise Complaint",
            Category::TrashLitter => "Trash/Litter",
            Category::StreetLight => "Street Light",
            Category::WaterSewer => "Water/Sewer",
            Category::Other => "Other",
        }
    }
}

/// Classification output from Azure OpenAI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Category drawn from the closed set
    pub category: Category,
    /// Model confidence in [0, 1]
    pub confidence: f64,
    /// Short rationale for the chosen category
    pub reasoning: String,
}

/// Content safety output from Azure Content Safety
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyResult {
    /// True iff no harm category scored above zero
    pub safe: bool,
    /// Harm category name to severity score
    pub categories: BTreeMap<String, u8>,
}

/// Per-service outputs, null where the step did not complete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    pub classification: Option<Classification>,
    pub content_safety: Option<SafetyResult>,
    pub key_phrases: Option<Vec<String>>,
}

impl Outputs {
    /// Count of steps that produced a usable output.
    /// An empty key-phrase list counts as absent for roll-up purposes.
    pub fn present_count(&self) -> usize {
        let has_classification = self.classification.is_some();
        let has_safety = self.content_safety.is_some();
        let has_phrases = self
            .key_phrases
            .as_ref()
            .map(|p| !p.is_empty())
            .unwrap_or(false);
        [has_classification, has_safety, has_phrases]
            .iter()
            .filter(|b| **b)
            .count()
    }
}

/// Roll-up status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// All three outputs present and non-empty
    Success,
    /// At least one but not all outputs present
    Partial,
    /// No output present
    Error,
}

impl RunStatus {
    /// Status roll-up rule: success iff all three outputs are present,
    /// partial iff one or two, error iff none.
    pub fn from_outputs(outputs: &Outputs) -> Self {
        match outputs.present_count() {
            3 => RunStatus::Success,
            0 => RunStatus::Error,
            _ => RunStatus::Partial,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Success => "success",
            RunStatus::Partial => "partial",
            RunStatus::Error => "error",
        }
    }
}

/// Run metadata stamped on the record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// ISO-8601 UTC timestamp of record creation
    pub timestamp: DateTime<Utc>,
    /// Azure OpenAI deployment name used for classification
    pub model: String,
    /// Version of this crate, the analogue of the original's SDK probe
    pub sdk_version: String,
}

impl Metadata {
    pub fn now(model: String) -> Self {
        Self {
            timestamp: Utc::now(),
            model,
            sdk_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// The normalized record persisted to `result.json`, created once per run
/// and never mutated after being written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub task: String,
    pub status: RunStatus,
    pub outputs: Outputs,
    pub metadata: Metadata,
}

impl ResultRecord {
    /// Assemble a record from whatever outputs the run produced,
    /// computing the roll-up status.
    pub fn assemble(outputs: Outputs, metadata: Metadata) -> Self {
        let status = RunStatus::from_outputs(&outputs);
        Self {
            task: TASK_NAME.to_string(),
            status,
            outputs,
            metadata,
        }
    }
}
