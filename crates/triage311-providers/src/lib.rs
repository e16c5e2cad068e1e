//! triage311 Azure AI clients - the three service calls behind a uniform error type
//!
//! This crate holds the REST clients for Azure OpenAI (classification),
//! Azure Content Safety (harm screening), and Azure AI Language (key
//! phrases), plus the normalized result record they feed into.

pub mod classifier;
pub mod content_safety;
pub mod error;
pub mod handles;
pub mod key_phrases;
pub mod models;
pub mod settings;

// Re-export commonly used types
pub use classifier::ClassifierClient;
pub use content_safety::ContentSafetyClient;
pub use error::ProviderError;
pub use key_phrases::LanguageClient;
pub use models::{
    Category, Classification, Metadata, Outputs, ResultRecord, RunStatus, SafetyResult, TASK_NAME,
};
