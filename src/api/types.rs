use serde::{Deserialize, Serialize};

/// Message returned by the user anomaly placeholder route.
pub const USER_ANOMALY_PLACEHOLDER: &str =
    "UEBA model endpoint placeholder. Model not yet implemented.";

/// Message returned when `text_content` is absent or the body is not an object.
pub const MISSING_TEXT_CONTENT: &str = "Missing 'text_content' in request body";

/// Message returned when `text_content` is present but not a string.
pub const TEXT_CONTENT_NOT_STRING: &str = "'text_content' must be a string";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Body of `POST /predict/document_sensitivity`. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub text_content: String,

    /// Caller-supplied context, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSensitivityResponse {
    pub prediction_label: String,
    pub probability: f64,
    pub model_version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserAnomalyResponse {
    pub message: String,
    pub received_data: serde_json::Value,
}
