pub mod router;
pub mod state;

use std::sync::Arc;

use crate::classifier::SensitivityClassifier;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};

/// Start the HTTP server with the given configuration.
///
/// The model is loaded once here; a missing or broken artifact only disables
/// the prediction route.
pub async fn start(config: EngineConfig) -> Result<()> {
    let classifier = SensitivityClassifier::load(&config.model_path)
        .with_normalization(config.normalize_input);
    tracing::info!(
        available = classifier.is_available(),
        normalize_input = config.normalize_input,
        model_version = %config.model_version,
        "Initialized sensitivity classifier"
    );

    let bind_addr = config.bind_address();
    let app_state = state::AppState::new(Arc::new(classifier), Arc::new(config));

    let app = router::build(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| EngineError::Server(format!("Failed to bind to {bind_addr}: {e}")))?;

    tracing::info!("Server listening on {bind_addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| EngineError::Server(format!("Server error: {e}")))?;

    Ok(())
}
