//! Key-phrase extraction via Azure AI Language
//!
//! Submits the complaint as a single English document to the synchronous
//! text-analysis endpoint and returns the extracted phrases.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ProviderError;
use crate::settings;

const API_VERSION: &str = "2023-04-01";

const SERVICE: &str = "key-phrases";

/// Azure AI Language client for key-phrase extraction
pub struct LanguageClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl LanguageClient {
    /// Create a new language client
    pub fn new(endpoint: String, api_key: String) -> Result<Self, ProviderError> {
        if endpoint.is_empty() {
            return Err(ProviderError::Config(
                "AI Language endpoint is required".to_string(),
            ));
        }
        if api_key.is_empty() {
            return Err(ProviderError::Config(
                "AI Language API key is required".to_string(),
            ));
        }

        Ok(Self {
            endpoint,
            api_key,
            client: Client::new(),
        })
    }

    /// Create a client from `AZURE_AI_LANGUAGE_*` environment variables
    pub fn from_env() -> Result<Self, ProviderError> {
        let endpoint = settings::require_env(SERVICE, settings::AZURE_AI_LANGUAGE_ENDPOINT)?;
        let api_key = settings::require_env(SERVICE, settings::AZURE_AI_LANGUAGE_KEY)?;
        Self::new(endpoint, api_key)
    }

    fn analyze_url(&self) -> String {
        format!(
            "{}/language/:analyze-text?api-version={}",
            self.endpoint.trim_end_matches('/'),
            API_VERSION
        )
    }

    /// Extract key phrases from text. The returned list may be empty.
    pub async fn extract(&self, text: &str) -> Result<Vec<String>, ProviderError> {
        debug!("Sending key phrase extraction request");

        let body = AnalyzeTextTask {
            kind: "KeyPhraseExtraction",
            analysis_input: AnalysisInput {
                documents: vec![Document {
                    id: "1",
                    language: "en",
                    text,
                }],
            },
        };

        let response = self
            .client
            .post(self.analyze_url())
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to AI Language: {}", e);
                ProviderError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!("AI Language API error: {} - {}", status, message);
            return Err(ProviderError::Api { status, message });
        }

        let task_result: AnalyzeTextTaskResult = response.json().await.map_err(|e| {
            error!("Failed to parse AI Language response: {}", e);
            ProviderError::Parse(e.to_string())
        })?;

        Self::convert_response(task_result)
    }

    /// Pull our single document's phrases out of the task result
    fn convert_response(task_result: AnalyzeTextTaskResult) -> Result<Vec<String>, ProviderError> {
        if let Some(doc_error) = task_result.results.errors.first() {
            return Err(ProviderError::Api {
                status: 200,
                message: format!(
                    "document error: {}",
                    doc_error.error.message.as_deref().unwrap_or("unknown")
                ),
            });
        }

        task_result
            .results
            .documents
            .into_iter()
            .next()
            .map(|d| d.key_phrases)
            .ok_or_else(|| ProviderError::Parse("No document in response".to_string()))
    }
}

/// Synchronous analyze-text task body
#[derive(Serialize)]
struct AnalyzeTextTask<'a> {
    kind: &'static str,
    #[serde(rename = "analysisInput")]
    analysis_input: AnalysisInput<'a>,
}

#[derive(Serialize)]
struct AnalysisInput<'a> {
    documents: Vec<Document<'a>>,
}

#[derive(Serialize)]
struct Document<'a> {
    id: &'static str,
    language: &'static str,
    text: &'a str,
}

/// Analyze-text task response body
#[derive(Deserialize)]
struct AnalyzeTextTaskResult {
    results: TaskResults,
}

#[derive(Deserialize)]
struct TaskResults {
    #[serde(default)]
    documents: Vec<DocumentResult>,
    #[serde(default)]
    errors: Vec<DocumentError>,
}

#[derive(Deserialize)]
struct DocumentResult {
    #[serde(rename = "keyPhrases", default)]
    key_phrases: Vec<String>,
}

#[derive(Deserialize)]
struct DocumentError {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}
