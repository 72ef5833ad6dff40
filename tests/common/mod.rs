//! Test doubles shared by the integration suites.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use cloud_architect::api::{create_router, AppState};
use cloud_architect::gemini::{ModelClient, ModelError};
use cloud_architect::generator::{
    DemoRecommender, GenerationOutcome, LiveRecommender, Recommender, Sleeper,
};
use cloud_architect::models::ProjectDescription;

pub const SAMPLE_DESCRIPTION: &str = "A web application for managing customer orders with user \
authentication, payment processing, and inventory management.";

/// Model client that replays scripted results in order; the last one repeats.
pub struct ScriptedModel {
    results: Mutex<VecDeque<Result<Option<String>, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(results: Vec<Result<Option<&str>, &str>>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(
                results
                    .into_iter()
                    .map(|r| r.map(|t| t.map(str::to_string)).map_err(str::to_string))
                    .collect(),
            ),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(vec![Ok(Some(text))])
    }

    pub fn failing(error: &str) -> Arc<Self> {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedModel {
    async fn generate_content(&self, prompt: &str) -> Result<Option<String>, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut results = self.results.lock().unwrap();
        let next = if results.len() > 1 {
            results.pop_front().unwrap()
        } else {
            results.front().cloned().expect("no scripted results")
        };
        next.map_err(ModelError::Upstream)
    }
}

/// Records requested delays instead of sleeping.
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}

/// Recommender that panics, standing in for an unexpected handler failure.
pub struct PanickingRecommender;

#[async_trait]
impl Recommender for PanickingRecommender {
    async fn recommend(&self, _description: &ProjectDescription) -> GenerationOutcome {
        panic!("recommender exploded");
    }
}

/// Recommender that never finishes within a test's time budget.
pub struct StalledRecommender;

#[async_trait]
impl Recommender for StalledRecommender {
    async fn recommend(&self, _description: &ProjectDescription) -> GenerationOutcome {
        tokio::time::sleep(Duration::from_secs(30)).await;
        GenerationOutcome::Success("too late".to_string())
    }
}

pub fn server_with(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

pub fn demo_server() -> TestServer {
    server_with(AppState::new(Arc::new(DemoRecommender), false, true))
}

/// Server backed by a live recommender over `model`, with zero-delay backoff.
pub fn live_server(model: Arc<ScriptedModel>) -> (TestServer, Arc<RecordingSleeper>) {
    let sleeper = Arc::new(RecordingSleeper::default());
    let recommender = LiveRecommender::new(Some(model as Arc<dyn ModelClient>))
        .with_sleeper(sleeper.clone());
    let server = server_with(AppState::new(Arc::new(recommender), true, false));
    (server, sleeper)
}

pub fn unconfigured_server() -> TestServer {
    server_with(AppState::new(
        Arc::new(LiveRecommender::new(None)),
        false,
        false,
    ))
}
