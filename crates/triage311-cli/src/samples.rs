//! Sample 311 request loading
//!
//! `data/sample_requests.json` is a JSON array of `{id, text}` records.
//! A CLI index selects one modulo the array length; without an index, or
//! when the file is missing, the built-in complaint is used.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::json_store::{self, JsonStoreError};

/// Built-in complaint used when no sample is selected
pub const DEFAULT_COMPLAINT: &str = "There's a huge pothole on Poplar Avenue near the \
                                     Walgreens that damaged my tire";

/// One record of the sample requests file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRequest {
    pub id: u64,
    pub text: String,
}

/// Load the sample requests array from disk
pub fn load_samples(path: &Path) -> Result<Vec<SampleRequest>, JsonStoreError> {
    json_store::load_json(path)
}

/// Select a sample by index, wrapping modulo the array length.
/// Returns `None` for an empty array.
pub fn select(samples: &[SampleRequest], index: usize) -> Option<&SampleRequest> {
    if samples.is_empty() {
        return None;
    }
    samples.get(index % samples.len())
}

/// Resolve the complaint text for a run: the indexed sample when an index
/// was given and the file is readable, the built-in complaint otherwise.
/// Also returns the chosen sample's id for the console note.
pub fn resolve_complaint(index: Option<usize>, data_path: &Path) -> (String, Option<u64>) {
    if let Some(index) = index {
        if let Ok(samples) = load_samples(data_path) {
            if let Some(sample) = select(&samples, index) {
                return (sample.text.clone(), Some(sample.id));
            }
        }
    }
    (DEFAULT_COMPLAINT.to_string(), None)
}

/// Truncate a complaint for one-line console display
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample(id: u64, text: &str) -> SampleRequest {
        SampleRequest {
            id,
            text: text.to_string(),
        }
    }

    #[test]
    fn select_wraps_modulo_length() {
        let samples = vec![sample(1, "a"), sample(2, "b"), sample(3, "c")];
        assert_eq!(select(&samples, 0).unwrap().id, 1);
        assert_eq!(select(&samples, 4).unwrap().id, 2);
        assert_eq!(select(&samples, 300).unwrap().id, 1);
    }

    #[test]
    fn select_empty_returns_none() {
        assert!(select(&[], 0).is_none());
    }

    #[test]
    fn resolve_uses_default_without_index() {
        let (text, id) = resolve_complaint(None, Path::new("data/sample_requests.json"));
        assert_eq!(text, DEFAULT_COMPLAINT);
        assert!(id.is_none());
    }

    #[test]
    fn resolve_falls_back_when_file_missing() {
        let (text, id) = resolve_complaint(Some(2), Path::new("/nonexistent/samples.json"));
        assert_eq!(text, DEFAULT_COMPLAINT);
        assert!(id.is_none());
    }

    #[test]
    fn resolve_picks_indexed_sample() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 10, "text": "street light out"}}, {{"id": 11, "text": "loud music"}}]"#
        )
        .unwrap();

        let (text, id) = resolve_complaint(Some(1), file.path());
        assert_eq!(text, "loud music");
        assert_eq!(id, Some(11));

        // Index wraps around
        let (text, _) = resolve_complaint(Some(2), file.path());
        assert_eq!(text, "street light out");
    }

    #[test]
    fn preview_truncates_long_text() {
        assert_eq!(preview("short", 70), "short");
        let long = "x".repeat(80);
        let shown = preview(&long, 70);
        assert_eq!(shown.chars().count(), 73);
        assert!(shown.ends_with("..."));
    }
}
