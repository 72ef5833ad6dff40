//! External model access.
//!
//! [`ModelClient`] is the seam between the generator and the network: the
//! live implementation is [`GeminiClient`], tests substitute scripted fakes.

mod client;
mod types;

pub use client::GeminiClient;
pub use types::*;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors from a single model call.
///
/// The `Display` text is what the generator inspects for rate limiting, so
/// non-success statuses keep their numeric code in the message.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse Gemini response: {0}")]
    Decode(String),

    #[error("{0}")]
    Upstream(String),
}

/// A generative model that turns a prompt into text.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Run one generation.
    ///
    /// `Ok(None)` means the call succeeded but produced no usable text.
    async fn generate_content(&self, prompt: &str) -> Result<Option<String>, ModelError>;
}
