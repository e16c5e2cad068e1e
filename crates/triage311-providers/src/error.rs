//! Error types for the Azure service clients

use thiserror::Error;

/// Errors that can occur when calling an Azure AI service
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    /// Required endpoint/key environment variables are missing.
    /// The driver treats this as "step skipped", not a hard failure.
    #[error("{0} is not configured: {1}")]
    NotConfigured(&'static str, String),

    /// Configuration was present but invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error occurred
    #[error("Network error: {0}")]
    Network(String),

    /// The service returned a non-success HTTP status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The service response could not be parsed or failed validation
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Network("Request timeout".to_string())
        } else if err.is_decode() {
            ProviderError::Parse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

impl ProviderError {
    /// Whether this error means the step was never attempted because the
    /// service credentials are absent from the environment.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, ProviderError::NotConfigured(..))
    }
}
