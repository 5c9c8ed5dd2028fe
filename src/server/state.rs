use std::sync::Arc;

use crate::classifier::SensitivityClassifier;
use crate::config::EngineConfig;

/// Shared application state accessible to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<SensitivityClassifier>,
    pub config: Arc<EngineConfig>,
}

impl AppState {
    pub fn new(classifier: Arc<SensitivityClassifier>, config: Arc<EngineConfig>) -> Self {
        Self { classifier, config }
    }
}
