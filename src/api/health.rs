use axum::extract::State;
use axum::Json;

use crate::api::types::HealthResponse;
use crate::server::state::AppState;

/// GET /health - Liveness probe; independent of model state.
pub async fn handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        service: state.config.service_name.clone(),
    })
}
