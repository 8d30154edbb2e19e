//! Language model provider abstraction
//!
//! The AI delegate only needs "prompt in, text out". Each hosted model API
//! gets its own provider behind this trait so the rest of the service never
//! sees provider-specific request shapes.

use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::{AiProvider, Config},
    error::AppResult,
};

pub mod huggingface;
pub mod openai;

pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAiProvider;

/// Placeholder key shipped in sample `.env` files
const PLACEHOLDER_OPENAI_KEY: &str = "your_openai_api_key_here";

/// Trait for text generation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate a completion for the prompt
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Builds the configured language model, if AI generation is usable
///
/// Returns `None` when AI is switched off, the provider is unknown, or its API
/// key is missing. Callers then go straight to the static project bank.
pub fn from_config(config: &Config) -> Option<Arc<dyn LanguageModel>> {
    if !config.use_ai {
        tracing::info!("AI generation disabled, using static project bank");
        return None;
    }

    let timeout = Duration::from_secs(config.ai_timeout_secs);

    match config.ai_provider {
        AiProvider::OpenAi => {
            let api_key = usable_key(config.openai_api_key.as_deref(), PLACEHOLDER_OPENAI_KEY);
            let Some(api_key) = api_key else {
                tracing::warn!("OPENAI_API_KEY not set, AI generation disabled");
                return None;
            };

            match OpenAiProvider::new(
                api_key,
                config.openai_api_url.clone(),
                config.openai_model.clone(),
                timeout,
            ) {
                Ok(provider) => Some(Arc::new(provider)),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to build OpenAI client");
                    None
                }
            }
        }
        AiProvider::HuggingFace => {
            let Some(api_key) = usable_key(config.huggingface_api_key.as_deref(), "") else {
                tracing::warn!("HUGGINGFACE_API_KEY not set, AI generation disabled");
                return None;
            };

            match HuggingFaceProvider::new(
                api_key,
                config.huggingface_api_url.clone(),
                config.huggingface_model.clone(),
                timeout,
            ) {
                Ok(provider) => Some(Arc::new(provider)),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to build Hugging Face client");
                    None
                }
            }
        }
        AiProvider::Unknown => {
            tracing::warn!("Unknown AI_PROVIDER, AI generation disabled");
            None
        }
    }
}

fn usable_key(key: Option<&str>, placeholder: &str) -> Option<String> {
    key.map(str::trim)
        .filter(|k| !k.is_empty() && *k != placeholder)
        .map(str::to_string)
}
