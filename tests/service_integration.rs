//! End-to-end tests: train an artifact on disk, load it the way the server
//! does, and drive the router in-process.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use a3s_ml_engine::server::router;
use a3s_ml_engine::server::state::AppState;
use a3s_ml_engine::training::{self, dataset};
use a3s_ml_engine::{text, EngineConfig, SensitivityClassifier};

fn app_for(model_path: &Path) -> Router {
    let config = EngineConfig {
        model_path: model_path.to_path_buf(),
        ..EngineConfig::default()
    };
    let classifier = SensitivityClassifier::load(&config.model_path)
        .with_normalization(config.normalize_input);
    router::build(AppState::new(Arc::new(classifier), Arc::new(config)))
}

fn trained_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models").join("sample_text_classifier.json");
    training::train_and_save(&dataset::sample_dataset(), &path).unwrap();
    let app = app_for(&path);
    (dir, app)
}

async fn call(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 64)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_health() {
    let (_dir, app) = trained_app();
    let (status, body) = call(app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "UP", "service": "ML Engine"}));
}

#[tokio::test]
async fn test_document_sensitivity_prediction() {
    let (_dir, app) = trained_app();
    let (status, body) = call(
        app,
        "POST",
        "/predict/document_sensitivity",
        Some(json!({
            "text_content": "This is a highly confidential internal document about financial results."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(["Confidential", "Internal", "Public"]
        .contains(&body["prediction_label"].as_str().unwrap()));
    let probability = body["probability"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&probability));
    assert_eq!(body["model_version"], "1.0.0");
}

#[tokio::test]
async fn test_missing_text_content() {
    let (_dir, app) = trained_app();
    let (status, body) = call(
        app,
        "POST",
        "/predict/document_sensitivity",
        Some(json!({"metadata": {"filename": "x"}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing 'text_content' in request body"}));
}

#[tokio::test]
async fn test_empty_text_content() {
    let (_dir, app) = trained_app();
    let (status, body) = call(
        app,
        "POST",
        "/predict/document_sensitivity",
        Some(json!({"text_content": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["prediction_label"].is_string());
}

#[tokio::test]
async fn test_missing_artifact_returns_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_for(&dir.path().join("absent.json"));

    let (status, body) = call(
        app.clone(),
        "POST",
        "/predict/document_sensitivity",
        Some(json!({"text_content": "anything"})),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());

    // The rest of the service stays up.
    let (status, _) = call(app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_user_anomaly_placeholder() {
    let (_dir, app) = trained_app();
    let (status, body) = call(app, "POST", "/predict/user_anomaly", Some(json!({"a": 1}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["received_data"], json!({"a": 1}));
    assert_eq!(
        body["message"],
        "UEBA model endpoint placeholder. Model not yet implemented."
    );
}

#[tokio::test]
async fn test_user_anomaly_without_body_echoes_null() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_for(&dir.path().join("absent.json"));
    let (status, body) = call(app, "POST", "/predict/user_anomaly", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["received_data"], Value::Null);
}

#[test]
fn test_batch_matches_single_predictions_on_trained_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    training::train_and_save(&dataset::sample_dataset(), &path).unwrap();
    let classifier = SensitivityClassifier::load(&path);

    let texts = [
        "User credentials for the production server.",
        "Press release for publication.",
        "",
    ];
    let batch = classifier.classify_batch(&texts).unwrap();
    for (text, result) in texts.iter().zip(&batch) {
        assert_eq!(&classifier.classify_one(text).unwrap(), result);
    }
}

#[test]
fn test_normalizer_is_idempotent_on_sample_data() {
    for sample in dataset::sample_dataset() {
        let once = text::normalize(&sample.text);
        assert_eq!(text::normalize(&once), once);
    }
}
