//! Error types for a3s-ml-engine

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Generic message returned to callers when inference fails unexpectedly.
pub const PREDICTION_FAILED: &str = "An error occurred during prediction.";

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// No model is loaded for the requested capability
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Malformed or incomplete request input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unexpected failure while scoring input with a loaded model
    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Training failed: {0}")]
    Training(String),

    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// HTTP status this error surfaces as at the API boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            EngineError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            EngineError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            EngineError::ModelUnavailable(message) | EngineError::BadRequest(message) => {
                serde_json::json!({ "error": message })
            }
            EngineError::Inference(details) => {
                serde_json::json!({ "error": PREDICTION_FAILED, "details": details })
            }
            other => serde_json::json!({
                "error": PREDICTION_FAILED,
                "details": other.to_string(),
            }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 16)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            EngineError::ModelUnavailable("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            EngineError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EngineError::Inference("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            EngineError::Config("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_unavailable_body_has_only_error() {
        let response =
            EngineError::ModelUnavailable("Text classification model is not loaded.".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Text classification model is not loaded.");
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn test_inference_body_carries_details() {
        let response = EngineError::Inference("row length mismatch".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], PREDICTION_FAILED);
        assert_eq!(json["details"], "row length mismatch");
    }
}
