//! Lazy process-lifetime client handles
//!
//! Each Azure client is constructed at most once, on first use, from the
//! process environment. A failed construction (missing credentials) leaves
//! the cell empty so nothing is cached for a service that never came up.

use once_cell::sync::OnceCell;

use crate::classifier::ClassifierClient;
use crate::content_safety::ContentSafetyClient;
use crate::error::ProviderError;
use crate::key_phrases::LanguageClient;

static CLASSIFIER: OnceCell<ClassifierClient> = OnceCell::new();
static CONTENT_SAFETY: OnceCell<ContentSafetyClient> = OnceCell::new();
static LANGUAGE: OnceCell<LanguageClient> = OnceCell::new();

/// Shared classifier handle, initialized from the environment on first use
pub fn classifier() -> Result<&'static ClassifierClient, ProviderError> {
    CLASSIFIER.get_or_try_init(ClassifierClient::from_env)
}

/// Shared content safety handle, initialized from the environment on first use
pub fn content_safety() -> Result<&'static ContentSafetyClient, ProviderError> {
    CONTENT_SAFETY.get_or_try_init(ContentSafetyClient::from_env)
}

/// Shared language handle, initialized from the environment on first use
pub fn language() -> Result<&'static LanguageClient, ProviderError> {
    LANGUAGE.get_or_try_init(LanguageClient::from_env)
}
