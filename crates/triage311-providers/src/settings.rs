//! Environment-driven service settings
//!
//! Endpoint URL + credential pairs are read from the process environment.
//! A missing variable yields `ProviderError::NotConfigured`, which the
//! driver reports as a skipped step rather than a failure.

use crate::error::ProviderError;

pub const AZURE_OPENAI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_OPENAI_API_KEY: &str = "AZURE_OPENAI_API_KEY";
pub const AZURE_OPENAI_DEPLOYMENT: &str = "AZURE_OPENAI_DEPLOYMENT";
pub const AZURE_CONTENT_SAFETY_ENDPOINT: &str = "AZURE_CONTENT_SAFETY_ENDPOINT";
pub const AZURE_CONTENT_SAFETY_KEY: &str = "AZURE_CONTENT_SAFETY_KEY";
pub const AZURE_AI_LANGUAGE_ENDPOINT: &str = "AZURE_AI_LANGUAGE_ENDPOINT";
pub const AZURE_AI_LANGUAGE_KEY: &str = "AZURE_AI_LANGUAGE_KEY";

/// Default Azure OpenAI deployment when none is configured
pub const DEFAULT_DEPLOYMENT: &str = "gpt-4o";

/// Read a required environment variable for the named service
pub(crate) fn require_env(service: &'static str, var: &str) -> Result<String, ProviderError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ProviderError::NotConfigured(service, var.to_string())),
    }
}

/// The configured Azure OpenAI deployment name, falling back to the default
pub fn deployment_name() -> String {
    std::env::var(AZURE_OPENAI_DEPLOYMENT)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string())
}
