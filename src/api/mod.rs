pub mod health;
pub mod predict;
pub mod types;

use axum::routing::{get, post};
use axum::Router;

use crate::server::state::AppState;

/// Build the ML Engine API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::handler))
        .route(
            "/predict/document_sensitivity",
            post(predict::document_sensitivity_handler),
        )
        .route("/predict/user_anomaly", post(predict::user_anomaly_handler))
}
