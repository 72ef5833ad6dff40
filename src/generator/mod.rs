//! Recommendation Generator.
//!
//! Turns a validated [`ProjectDescription`] into exactly one
//! [`GenerationOutcome`]. Two interchangeable strategies implement
//! [`Recommender`], chosen once at startup by [`build_recommender`]:
//!
//! - [`DemoRecommender`]: fixed sample text, no network.
//! - [`LiveRecommender`]: templated prompt sent to a [`ModelClient`], retried
//!   with exponential backoff while the upstream reports rate limiting.
//!
//! Errors never escape a `recommend` call; they are folded into
//! [`GenerationOutcome::Failure`].

pub mod classify;
mod demo;
mod live;
mod prompt;
mod retry;

pub use classify::{classify_failure, is_rate_limit_error, FailureKind};
pub use demo::{DemoRecommender, DEMO_RECOMMENDATION};
pub use live::{
    LiveRecommender, GENERATION_ERROR_PREFIX, NOT_CONFIGURED_MESSAGE, NO_RESPONSE_MESSAGE,
};
pub use prompt::{build_prompt, ARCHITECTURE_PROMPT_TEMPLATE};
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::gemini::{GeminiClient, ModelClient, ModelError};
use crate::models::ProjectDescription;

/// Terminal result of one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success(String),
    Failure { message: String, rate_limited: bool },
}

impl GenerationOutcome {
    pub fn failure(message: impl Into<String>, rate_limited: bool) -> Self {
        Self::Failure {
            message: message.into(),
            rate_limited,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// The "generate a recommendation" capability.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, description: &ProjectDescription) -> GenerationOutcome;
}

/// Pick the recommender for this process.
///
/// Demo mode always wins. Otherwise a live recommender is built, with a
/// client only if an API key is configured.
pub fn build_recommender(config: &Config) -> Result<Arc<dyn Recommender>, ModelError> {
    if config.demo_mode {
        tracing::info!("Demo mode enabled: serving sample recommendations");
        return Ok(Arc::new(DemoRecommender));
    }

    let client = GeminiClient::from_config(config)?;
    match &client {
        Some(c) => tracing::info!(model = %c.model(), "Gemini client configured"),
        None => tracing::warn!("GEMINI_API_KEY not set: generation requests will fail"),
    }

    let client = client.map(|c| Arc::new(c) as Arc<dyn ModelClient>);
    Ok(Arc::new(LiveRecommender::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description() -> ProjectDescription {
        ProjectDescription::parse("A SaaS analytics dashboard").unwrap()
    }

    #[tokio::test]
    async fn demo_config_builds_demo_recommender() {
        let recommender = build_recommender(&Config::demo()).unwrap();
        let outcome = recommender.recommend(&description()).await;
        assert_eq!(outcome, GenerationOutcome::Success(DEMO_RECOMMENDATION.to_string()));
    }

    #[tokio::test]
    async fn missing_key_builds_unconfigured_live_recommender() {
        let config = Config::from_lookup(|_| None);
        let recommender = build_recommender(&config).unwrap();
        let outcome = recommender.recommend(&description()).await;
        assert_eq!(outcome, GenerationOutcome::failure(NOT_CONFIGURED_MESSAGE, false));
    }

    #[test]
    fn failure_constructor_sets_fields() {
        let outcome = GenerationOutcome::failure("boom", true);
        assert!(!outcome.is_success());
        assert_eq!(
            outcome,
            GenerationOutcome::Failure {
                message: "boom".to_string(),
                rate_limited: true
            }
        );
    }
}
