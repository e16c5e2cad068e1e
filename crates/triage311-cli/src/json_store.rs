//! JSON persistence utilities
//!
//! Common patterns for loading and saving the JSON files this tool touches
//! (the sample requests array and the result record).

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// JSON store errors
#[derive(Debug, Error)]
pub enum JsonStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("File not found: {path}")]
    NotFound { path: String },
}

/// Load JSON from a file path
pub fn load_json<T, P>(path: P) -> Result<T, JsonStoreError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(JsonStoreError::NotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    Ok(value)
}

/// Save value as pretty-printed JSON, overwriting any existing file
pub fn save_json<T, P>(path: P, value: &T) -> Result<(), JsonStoreError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}
