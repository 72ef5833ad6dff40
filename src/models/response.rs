use serde::{Deserialize, Serialize};

/// Body of every `/generate` response.
///
/// Serializes as `{"status":"success","response":...}` or
/// `{"status":"error","error":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerateResponse {
    Success { response: String },
    Error { error: String },
}

impl GenerateResponse {
    pub fn success(response: impl Into<String>) -> Self {
        Self::Success {
            response: response.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
        }
    }
}

/// Body of `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub gemini_configured: bool,
    pub demo_mode: bool,
}

impl HealthResponse {
    pub fn ok(gemini_configured: bool, demo_mode: bool) -> Self {
        Self {
            status: "ok".to_string(),
            gemini_configured,
            demo_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_body_shape() {
        let body = serde_json::to_value(GenerateResponse::success("text")).unwrap();
        assert_eq!(body, json!({ "status": "success", "response": "text" }));
    }

    #[test]
    fn error_body_shape() {
        let body = serde_json::to_value(GenerateResponse::error("nope")).unwrap();
        assert_eq!(body, json!({ "status": "error", "error": "nope" }));
    }

    #[test]
    fn health_body_shape() {
        let body = serde_json::to_value(HealthResponse::ok(true, false)).unwrap();
        assert_eq!(
            body,
            json!({ "status": "ok", "gemini_configured": true, "demo_mode": false })
        );
    }
}
