//! HTTP client for the Gemini `generateContent` API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use super::types::{GenerateContentRequest, GenerateContentResponse};
use super::{ModelClient, ModelError};
use crate::config::Config;

/// Header carrying the API key, so it never appears in URLs or error text.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini text generation client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: SecretString,
    client: Client,
}

impl GeminiClient {
    /// Create with explicit configuration.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key,
            client,
        })
    }

    /// Build a client from process configuration.
    ///
    /// Returns `Ok(None)` when no live client should exist (no key, or demo mode).
    pub fn from_config(config: &Config) -> Result<Option<Self>, ModelError> {
        let Some(key) = config.live_api_key() else {
            return Ok(None);
        };

        Self::new(
            config.gemini_api_base.clone(),
            config.gemini_model.clone(),
            SecretString::new(key.to_string()),
            config.generation_timeout,
        )
        .map(Some)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<Option<String>, ModelError> {
        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, self.api_key.expose_secret().as_str())
            .json(&GenerateContentRequest::user_text(prompt))
            .send()
            .await
            .map_err(|e| ModelError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status { status, body });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Decode(e.without_url().to_string()))?;

        Ok(parsed.text())
    }
}
