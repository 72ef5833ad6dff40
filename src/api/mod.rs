mod error;
mod handlers;

pub use error::*;
pub use handlers::parse_generate_request;

use std::{any::Any, sync::Arc, time::Duration};

use axum::{
    response::Response,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::gemini::ModelError;
use crate::generator::{build_recommender, Recommender};

/// Default wall-clock budget for one generation, retries included.
pub const DEFAULT_GENERATION_TIMEOUT: Duration =
    Duration::from_secs(crate::config::DEFAULT_GENERATION_TIMEOUT_SECS);

/// Shared, read-only state built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<dyn Recommender>,
    pub gemini_configured: bool,
    pub demo_mode: bool,
    pub generation_timeout: Duration,
}

impl AppState {
    pub fn new(
        recommender: Arc<dyn Recommender>,
        gemini_configured: bool,
        demo_mode: bool,
    ) -> Self {
        Self {
            recommender,
            gemini_configured,
            demo_mode,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    /// Build state from process configuration.
    pub fn from_config(config: &Config) -> Result<Self, ModelError> {
        let recommender = build_recommender(config)?;
        Ok(Self::new(recommender, config.gemini_configured(), config.demo_mode)
            .with_generation_timeout(config.generation_timeout))
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .route("/healthz", get(handlers::healthz))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    internal_error_response(format!("handler panicked: {}", detail))
}
