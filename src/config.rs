//! Process configuration.
//!
//! Read once at startup and treated as immutable for the lifetime of the
//! process. Environment variables:
//! - `GEMINI_API_KEY` - credential for the Gemini API (empty counts as unset)
//! - `DEMO_MODE` - `true`, `1` or `yes` to serve the canned recommendation
//! - `GEMINI_MODEL` - model identifier (default: `gemini-2.0-flash`)
//! - `GEMINI_API_BASE` - API base URL (default: the public v1beta endpoint)
//! - `GENERATION_TIMEOUT_SECS` - wall-clock budget per generation (default: 60)
//! - `SECRET_KEY` - session signing key (default: `dev-secret-key`)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

/// Default model when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default Generative Language API endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_SECRET_KEY: &str = "dev-secret-key";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<SecretString>,
    pub demo_mode: bool,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub generation_timeout: Duration,
    /// Not used by the generation path; carried for session signing.
    pub secret_key: SecretString,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .map(SecretString::new);

        let demo_mode = lookup("DEMO_MODE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let gemini_model = lookup("GEMINI_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let gemini_api_base = lookup("GEMINI_API_BASE")
            .map(|b| b.trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let generation_timeout = lookup("GENERATION_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS));

        let secret_key = SecretString::new(
            lookup("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string()),
        );

        Self {
            gemini_api_key,
            demo_mode,
            gemini_model,
            gemini_api_base,
            generation_timeout,
            secret_key,
        }
    }

    /// Configuration for offline demos: canned responses, no credential.
    #[cfg(test)]
    pub fn demo() -> Self {
        Self {
            demo_mode: true,
            ..Self::from_lookup(|_| None)
        }
    }

    /// Whether a live Gemini client should be built.
    ///
    /// Demo mode wins over a present key: no external client exists while it is on.
    pub fn gemini_configured(&self) -> bool {
        !self.demo_mode && self.gemini_api_key.is_some()
    }

    /// The API key, if one should be used for live calls.
    pub fn live_api_key(&self) -> Option<&str> {
        if self.demo_mode {
            return None;
        }
        self.gemini_api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
