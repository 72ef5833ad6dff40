use async_trait::async_trait;

use super::{GenerationOutcome, Recommender};
use crate::models::ProjectDescription;

/// Sample recommendation served in demo mode.
pub const DEMO_RECOMMENDATION: &str = include_str!("../../assets/demo_recommendation.md");

/// Canned recommender for offline demos. Never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoRecommender;

#[async_trait]
impl Recommender for DemoRecommender {
    async fn recommend(&self, description: &ProjectDescription) -> GenerationOutcome {
        tracing::debug!(
            description_len = description.as_str().len(),
            "Demo mode: returning sample recommendation"
        );
        GenerationOutcome::Success(DEMO_RECOMMENDATION.to_string())
    }
}
