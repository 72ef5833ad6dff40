use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, FailedToBufferBody},
        State,
    },
    response::Html,
    Json,
};
use serde_json::Value;

use super::error::ApiError;
use super::AppState;
use crate::generator::{GenerationOutcome, GENERATION_ERROR_PREFIX};
use crate::models::{GenerateResponse, HealthResponse, ProjectDescription, ValidationError};

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

// ============================================================
// UI
// ============================================================

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ============================================================
// Health
// ============================================================

pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.gemini_configured, state.demo_mode))
}

// ============================================================
// Generation
// ============================================================

/// Generate an architecture recommendation for `{"prompt": "..."}`.
pub async fn generate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let body = body.map_err(body_rejection)?;
    let description = parse_generate_request(&body)?;

    let outcome = tokio::time::timeout(
        state.generation_timeout,
        state.recommender.recommend(&description),
    )
    .await
    .unwrap_or_else(|_| {
        GenerationOutcome::failure(
            format!(
                "{}exceeded the {}s generation budget",
                GENERATION_ERROR_PREFIX,
                state.generation_timeout.as_secs()
            ),
            false,
        )
    });

    tracing::debug!(success = outcome.is_success(), "Generation finished");

    match outcome {
        GenerationOutcome::Success(text) => Ok(Json(GenerateResponse::success(text))),
        GenerationOutcome::Failure {
            message,
            rate_limited,
        } => Err(ApiError::from_failure(message, rate_limited)),
    }
}

/// Map a body that could not be buffered onto the validation errors.
///
/// Anything over the body limit is necessarily over the description limit.
fn body_rejection(rejection: BytesRejection) -> ApiError {
    match rejection {
        BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(err)) => {
            tracing::warn!(error = %err, "Request body over the buffering limit");
            ValidationError::TooLong.into()
        }
        other => {
            tracing::warn!(error = %other, "Failed to read request body");
            ValidationError::NotJson.into()
        }
    }
}

/// Validate a raw request body into a description.
///
/// Rules apply in order, first failure wins: valid JSON, `prompt` present,
/// then the description rules. A `prompt` that is present but not a string
/// falls outside the rules and is reported as an internal error.
pub fn parse_generate_request(body: &[u8]) -> Result<ProjectDescription, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ValidationError::NotJson)?;

    let prompt = value
        .as_object()
        .and_then(|fields| fields.get("prompt"))
        .ok_or(ValidationError::MissingPrompt)?;

    let raw = prompt.as_str().ok_or_else(|| {
        ApiError::Internal(format!("prompt field is not a string: {}", json_kind(prompt)))
    })?;

    Ok(ProjectDescription::parse(raw)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
