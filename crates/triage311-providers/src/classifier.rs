//! 311 request classification via Azure OpenAI
//!
//! Sends the complaint text to a chat-completions deployment with a JSON
//! response format and parses the reply into a [`Classification`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ProviderError;
use crate::models::{Category, Classification};
use crate::settings;

const API_VERSION: &str = "2024-10-21";

const SERVICE: &str = "classifier";

/// Azure OpenAI client for 311 request classification
pub struct ClassifierClient {
    endpoint: String,
    api_key: String,
    deployment: String,
    client: Client,
}

impl ClassifierClient {
    /// Create a new classifier client
    pub fn new(
        endpoint: String,
        api_key: String,
        deployment: String,
    ) -> Result<Self, ProviderError> {
        if endpoint.is_empty() {
            return Err(ProviderError::Config(
                "Azure OpenAI endpoint is required".to_string(),
            ));
        }
        if api_key.is_empty() {
            return Err(ProviderError::Config(
                "Azure OpenAI API key is required".to_string(),
            ));
        }
        if deployment.is_empty() {
            return Err(ProviderError::Config(
                "Azure OpenAI deployment name is required".to_string(),
            ));
        }

        Ok(Self {
            endpoint,
            api_key,
            deployment,
            client: Client::new(),
        })
    }

    /// Create a client from `AZURE_OPENAI_*` environment variables
    pub fn from_env() -> Result<Self, ProviderError> {
        let endpoint = settings::require_env(SERVICE, settings::AZURE_OPENAI_ENDPOINT)?;
        let api_key = settings::require_env(SERVICE, settings::AZURE_OPENAI_API_KEY)?;
        Self::new(endpoint, api_key, settings::deployment_name())
    }

    /// The deployment this client sends requests to
    pub fn deployment(&self) -> &str {
        &self.deployment
    }

    /// Build the chat completions URL
    fn chat_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            API_VERSION
        )
    }

    fn system_prompt() -> String {
        format!(
            "You classify Memphis 311 service requests. Respond with a JSON object \
             {{\"category\", \"confidence\", \"reasoning\"}} where category is exactly \
             one of: {}. confidence is a number between 0 and 1, and reasoning is one \
             short sentence.",
            Category::ALL.join(", ")
        )
    }

    /// Classify a 311 request into the fixed category set
    pub async fn classify(&self, request_text: &str) -> Result<Classification, ProviderError> {
        debug!("Sending classification request to deployment {}", self.deployment);

        let body = ChatCompletionsRequest {
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Self::system_prompt(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request_text.to_string(),
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat { kind: "json_object" },
        };

        let response = self
            .client
            .post(self.chat_url())
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Azure OpenAI: {}", e);
                ProviderError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!("Azure OpenAI API error: {} - {}", status, message);
            return Err(ProviderError::Api { status, message });
        }

        let completion: ChatCompletionsResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Azure OpenAI response: {}", e);
            ProviderError::Parse(e.to_string())
        })?;

        Self::parse_reply(&completion)
    }

    /// Extract and validate the classification JSON from the model reply
    fn parse_reply(completion: &ChatCompletionsResponse) -> Result<Classification, ProviderError> {
        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.as_ref())
            .map(|m| m.content.as_str())
            .ok_or_else(|| ProviderError::Parse("No content in response".to_string()))?;

        let classification: Classification = serde_json::from_str(content)?;

        if !(0.0..=1.0).contains(&classification.confidence) {
            return Err(ProviderError::Parse(format!(
                "confidence {} outside [0, 1]",
                classification.confidence
            )));
        }

        Ok(classification)
    }
}

/// Chat completions request body
#[derive(Serialize)]
struct ChatCompletionsRequest {
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Chat completions response body
#[derive(Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}
