//! Harmful-content screening via Azure Content Safety
//!
//! Analyzes the complaint text across the service's harm categories and
//! reduces the severity scores to a boolean verdict.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ProviderError;
use crate::models::SafetyResult;
use crate::settings;

const API_VERSION: &str = "2023-10-01";

const SERVICE: &str = "content-safety";

/// Azure Content Safety client
pub struct ContentSafetyClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl ContentSafetyClient {
    /// Create a new content safety client
    pub fn new(endpoint: String, api_key: String) -> Result<Self, ProviderError> {
        if endpoint.is_empty() {
            return Err(ProviderError::Config(
                "Content Safety endpoint is required".to_string(),
            ));
        }
        if api_key.is_empty() {
            return Err(ProviderError::Config(
                "Content Safety API key is required".to_string(),
            ));
        }

        Ok(Self {
            endpoint,
            api_key,
            client: Client::new(),
        })
    }

    /// Create a client from `AZURE_CONTENT_SAFETY_*` environment variables
    pub fn from_env() -> Result<Self, ProviderError> {
        let endpoint = settings::require_env(SERVICE, settings::AZURE_CONTENT_SAFETY_ENDPOINT)?;
        let api_key = settings::require_env(SERVICE, settings::AZURE_CONTENT_SAFETY_KEY)?;
        Self::new(endpoint, api_key)
    }

    fn analyze_url(&self) -> String {
        format!(
            "{}/contentsafety/text:analyze?api-version={}",
            self.endpoint.trim_end_matches('/'),
            API_VERSION
        )
    }

    /// Check text for harmful content
    pub async fn analyze(&self, text: &str) -> Result<SafetyResult, ProviderError> {
        debug!("Sending content safety request");

        let body = AnalyzeTextRequest { text };

        let response = self
            .client
            .post(self.analyze_url())
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Content Safety: {}", e);
                ProviderError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!("Content Safety API error: {} - {}", status, message);
            return Err(ProviderError::Api { status, message });
        }

        let analysis: AnalyzeTextResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Content Safety response: {}", e);
            ProviderError::Parse(e.to_string())
        })?;

        Ok(Self::convert_response(analysis))
    }

    /// Reduce the per-category severities to a verdict.
    /// The text is safe iff every category scored zero.
    fn convert_response(analysis: AnalyzeTextResponse) -> SafetyResult {
        let categories: BTreeMap<String, u8> = analysis
            .categories_analysis
            .into_iter()
            .map(|c| (c.category, c.severity))
            .collect();
        let safe = categories.values().all(|severity| *severity == 0);
        SafetyResult { safe, categories }
    }
}

/// Text analysis request body
#[derive(Serialize)]
struct AnalyzeTextRequest<'a> {
    text: &'a str,
}

/// Text analysis response body
#[derive(Deserialize)]
struct AnalyzeTextResponse {
    #[serde(rename = "categoriesAnalysis", default)]
    categories_analysis: Vec<CategoryAnalysis>,
}

#[derive(Deserialize)]
struct CategoryAnalysis {
    category: String,
    severity: u8,
}
