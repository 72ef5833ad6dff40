use std::sync::Arc;

use async_trait::async_trait;

use super::classify::is_rate_limit_error;
use super::prompt::build_prompt;
use super::retry::{RetryPolicy, Sleeper, TokioSleeper};
use super::{GenerationOutcome, Recommender};
use crate::gemini::ModelClient;
use crate::models::ProjectDescription;

pub const NOT_CONFIGURED_MESSAGE: &str = "Gemini API is not configured. Please check your API key.";
pub const NO_RESPONSE_MESSAGE: &str = "No response generated from Gemini API.";
pub const GENERATION_ERROR_PREFIX: &str = "Error generating architecture recommendation: ";

/// Recommender backed by a real model, with bounded retry on rate limits.
///
/// Without a client every call fails fast as a configuration error.
pub struct LiveRecommender {
    client: Option<Arc<dyn ModelClient>>,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl LiveRecommender {
    pub fn new(client: Option<Arc<dyn ModelClient>>) -> Self {
        Self {
            client,
            policy: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }
}

#[async_trait]
impl Recommender for LiveRecommender {
    async fn recommend(&self, description: &ProjectDescription) -> GenerationOutcome {
        let Some(client) = &self.client else {
            tracing::warn!("Generation requested but Gemini client is not configured");
            return GenerationOutcome::failure(NOT_CONFIGURED_MESSAGE, false);
        };

        let prompt = build_prompt(description);
        let mut attempt: u32 = 0;

        loop {
            match client.generate_content(&prompt).await {
                Ok(Some(text)) if !text.is_empty() => {
                    tracing::info!(
                        attempt = attempt + 1,
                        response_len = text.len(),
                        "Generated architecture recommendation"
                    );
                    return GenerationOutcome::Success(text);
                }
                Ok(_) => {
                    return GenerationOutcome::failure(NO_RESPONSE_MESSAGE, false);
                }
                Err(err) => {
                    let detail = err.to_string();
                    let rate_limited = is_rate_limit_error(&detail);

                    if rate_limited && self.policy.should_retry(attempt) {
                        let delay = self.policy.backoff(attempt);
                        tracing::warn!(
                            attempt = attempt + 1,
                            max_attempts = self.policy.max_attempts(),
                            delay_ms = delay.as_millis() as u64,
                            error = %detail,
                            "Gemini call rate limited, backing off"
                        );
                        self.sleeper.sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return GenerationOutcome::failure(
                        format!("{GENERATION_ERROR_PREFIX}{detail}"),
                        rate_limited,
                    );
                }
            }
        }
    }
}
