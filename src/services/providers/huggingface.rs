//! Hugging Face Inference API provider
//!
//! Text-generation models answer with `[{"generated_text": "..."}]`.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    services::providers::LanguageModel,
};

#[derive(Clone)]
pub struct HuggingFaceProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: String,
}

impl HuggingFaceProvider {
    pub fn new(api_key: String, api_url: String, model: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    fn model_url(&self) -> String {
        format!("{}/models/{}", self.api_url, self.model)
    }
}

/// Pulls the generated text out of an inference response
fn extract_text(body: serde_json::Value) -> String {
    match body {
        serde_json::Value::Array(items) => items
            .into_iter()
            .next()
            .and_then(|first| serde_json::from_value::<Generation>(first).ok())
            .map(|g| g.generated_text)
            .unwrap_or_default(),
        other => other.to_string(),
    }
}

#[async_trait::async_trait]
impl LanguageModel for HuggingFaceProvider {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let response = self
            .http_client
            .post(self.model_url())
            .bearer_auth(&self.api_key)
            .json(&json!({ "inputs": prompt }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Hugging Face API returned status {}: {}",
                status, body
            )));
        }

        let body: serde_json::Value = response.json().await?;
        let text = extract_text(body);

        tracing::debug!(
            model = %self.model,
            chars = text.len(),
            provider = "huggingface",
            "Completion received"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}
