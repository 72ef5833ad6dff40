//! HTTP error taxonomy for the generation endpoint.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::generator::{classify_failure, FailureKind};
use crate::models::{GenerateResponse, ValidationError};

/// Seconds clients are told to wait after a rate-limited response.
pub const RETRY_AFTER_SECS: u64 = 60;

pub const CONFIGURATION_ERROR_MESSAGE: &str = "Service configuration error. Please try again later.";
pub const RATE_LIMITED_MESSAGE: &str =
    "Service temporarily unavailable due to high demand. Please try again in a few minutes.";
pub const UPSTREAM_ERROR_MESSAGE: &str =
    "Unable to generate architecture recommendation. Please try again.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Every way `/generate` can fail.
///
/// Only validation messages reach the client verbatim; the other variants
/// carry server-side detail that is logged and replaced by a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map a failed generation onto the taxonomy.
    pub fn from_failure(message: String, rate_limited: bool) -> Self {
        match classify_failure(&message, rate_limited) {
            FailureKind::Configuration => Self::Configuration(message),
            FailureKind::RateLimited => Self::RateLimited(message),
            FailureKind::Upstream => Self::Upstream(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message safe to show the client.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Configuration(_) => CONFIGURATION_ERROR_MESSAGE.to_string(),
            Self::RateLimited(_) => RATE_LIMITED_MESSAGE.to_string(),
            Self::Upstream(_) => UPSTREAM_ERROR_MESSAGE.to_string(),
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    fn log(&self) {
        match self {
            Self::Validation(e) => tracing::warn!("Validation error: {}", e),
            Self::Internal(detail) => tracing::error!("Unexpected error in /generate: {}", detail),
            other => tracing::error!("Generation failed: {}", other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status();
        let mut response =
            (status, Json(GenerateResponse::error(self.public_message()))).into_response();

        if status == StatusCode::TOO_MANY_REQUESTS {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(RETRY_AFTER_SECS));
        }

        response
    }
}

/// Generic 500 body for a handler that panicked.
pub fn internal_error_response(detail: impl std::fmt::Display) -> Response {
    ApiError::Internal(detail.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{NOT_CONFIGURED_MESSAGE, NO_RESPONSE_MESSAGE};

    #[test]
    fn validation_errors_are_bad_requests_with_their_own_message() {
        let err = ApiError::from(ValidationError::TooShort);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.public_message(),
            "Project description must be at least 10 characters long"
        );
    }

    #[test]
    fn unconfigured_client_maps_to_configuration_error() {
        let err = ApiError::from_failure(NOT_CONFIGURED_MESSAGE.to_string(), false);
        assert!(matches!(err, ApiError::Configuration(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.public_message().contains("configuration error"));
    }

    #[test]
    fn empty_response_maps_to_upstream_error() {
        let err = ApiError::from_failure(NO_RESPONSE_MESSAGE.to_string(), false);
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn rate_limited_response_carries_retry_after() {
        let response = ApiError::RateLimited("429".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "60");
    }

    #[test]
    fn other_errors_have_no_retry_after() {
        let response = ApiError::Upstream("boom".to_string()).into_response();
        assert!(response.headers().get(header::RETRY_AFTER).is_none());
    }

    #[test]
    fn details_are_not_exposed() {
        let err = ApiError::Upstream("secret upstream detail".to_string());
        assert!(!err.public_message().contains("secret"));
    }
}
