use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::api::types::{
    ClassificationRequest, DocumentSensitivityResponse, UserAnomalyResponse,
    MISSING_TEXT_CONTENT, TEXT_CONTENT_NOT_STRING, USER_ANOMALY_PLACEHOLDER,
};
use crate::classifier::MODEL_NOT_LOADED;
use crate::error::{EngineError, Result};
use crate::server::state::AppState;

/// POST /predict/document_sensitivity - Classify one document.
///
/// Model availability is checked before the body is looked at, so an
/// unloaded model always answers 503.
pub async fn document_sensitivity_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DocumentSensitivityResponse>> {
    if !state.classifier.is_available() {
        return Err(EngineError::ModelUnavailable(MODEL_NOT_LOADED.to_string()));
    }

    let request = parse_classification_request(&body)?;

    let result = state
        .classifier
        .classify_one(&request.text_content)
        .inspect_err(|e| {
            tracing::error!("Error in /predict/document_sensitivity: {e}");
        })?;

    tracing::debug!(
        label = %result.label,
        probability = result.confidence,
        "Classified document"
    );

    Ok(Json(DocumentSensitivityResponse {
        prediction_label: result.label,
        probability: result.confidence,
        model_version: state.config.model_version.clone(),
    }))
}

/// POST /predict/user_anomaly - Placeholder; echoes the request body.
pub async fn user_anomaly_handler(body: Bytes) -> Json<UserAnomalyResponse> {
    let received_data = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    Json(UserAnomalyResponse {
        message: USER_ANOMALY_PLACEHOLDER.to_string(),
        received_data,
    })
}

/// Parse a request body into a [`ClassificationRequest`].
///
/// Anything that is not a JSON object carrying `text_content` is a bad request.
pub fn parse_classification_request(body: &[u8]) -> Result<ClassificationRequest> {
    let missing = || EngineError::BadRequest(MISSING_TEXT_CONTENT.to_string());

    let value: serde_json::Value = serde_json::from_slice(body).map_err(|_| missing())?;
    let serde_json::Value::Object(mut fields) = value else {
        return Err(missing());
    };

    let text_content = match fields.remove("text_content") {
        Some(serde_json::Value::String(text)) => text,
        Some(_) => return Err(EngineError::BadRequest(TEXT_CONTENT_NOT_STRING.to_string())),
        None => return Err(missing()),
    };

    Ok(ClassificationRequest {
        text_content,
        metadata: fields.remove("metadata"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bad_request_message(body: &[u8]) -> String {
        match parse_classification_request(body) {
            Err(EngineError::BadRequest(message)) => message,
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_valid_request() {
        let request = parse_classification_request(
            br#"{"text_content": "quarterly results", "metadata": {"filename": "q3.docx"}, "extra": 1}"#,
        )
        .unwrap();
        assert_eq!(request.text_content, "quarterly results");
        assert_eq!(request.metadata.unwrap()["filename"], "q3.docx");
    }

    #[test]
    fn test_parse_empty_text_is_valid() {
        let request = parse_classification_request(br#"{"text_content": ""}"#).unwrap();
        assert_eq!(request.text_content, "");
        assert!(request.metadata.is_none());
    }

    #[test]
    fn test_parse_missing_field() {
        assert_eq!(
            bad_request_message(br#"{"metadata": {"filename": "x"}}"#),
            MISSING_TEXT_CONTENT
        );
    }

    #[test]
    fn test_parse_non_object_bodies() {
        let bodies: [&[u8]; 6] = [b"", b"not json", b"[]", b"\"text\"", b"null", b"{}"];
        for body in bodies {
            assert_eq!(bad_request_message(body), MISSING_TEXT_CONTENT);
        }
    }

    #[test]
    fn test_parse_non_string_text() {
        assert_eq!(
            bad_request_message(br#"{"text_content": 42}"#),
            TEXT_CONTENT_NOT_STRING
        );
    }
}
