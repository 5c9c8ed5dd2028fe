//! Document sensitivity classification over a shared, read-only model.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::model::artifact::ModelArtifact;
use crate::model::TextClassifier;
use crate::text;

/// Message reported when no sensitivity model is loaded.
pub const MODEL_NOT_LOADED: &str = "Text classification model is not loaded.";

/// Label and confidence for one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,

    /// Maximum class probability, in `[0, 1]`
    pub confidence: f64,
}

/// Scores documents with a sensitivity model, or reports it unavailable.
#[derive(Clone)]
pub struct SensitivityClassifier {
    model: Option<Arc<dyn TextClassifier>>,
    normalize_input: bool,
}

impl SensitivityClassifier {
    pub fn new(model: Arc<dyn TextClassifier>) -> Self {
        Self {
            model: Some(model),
            normalize_input: false,
        }
    }

    /// A classifier without a model; every call reports `ModelUnavailable`.
    pub fn unavailable() -> Self {
        Self {
            model: None,
            normalize_input: false,
        }
    }

    /// Run [`text::normalize`] on every input before scoring.
    pub fn with_normalization(mut self, enabled: bool) -> Self {
        self.normalize_input = enabled;
        self
    }

    /// Load the model artifact at `path`.
    ///
    /// A missing or unreadable artifact is logged and yields an unavailable
    /// classifier instead of an error.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Text classification model not found; /predict/document_sensitivity will return 503"
            );
            return Self::unavailable();
        }

        match ModelArtifact::load(path) {
            Ok(artifact) => {
                tracing::info!(
                    path = %path.display(),
                    name = %artifact.name,
                    kind = %artifact.model,
                    classes = ?artifact.pipeline().classifier().classes(),
                    "Text classification model loaded"
                );
                Self::new(artifact.into_text_classifier())
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to load model artifact: {e}");
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    pub fn normalizes_input(&self) -> bool {
        self.normalize_input
    }

    /// Class labels of the loaded model, if any.
    pub fn classes(&self) -> Option<&[String]> {
        self.model.as_deref().map(|model| model.classes())
    }

    /// Classify each text, preserving input order.
    ///
    /// The label is the first class (in model class order) holding the
    /// maximum probability, and the confidence is that probability.
    pub fn classify_batch(&self, texts: &[&str]) -> Result<Vec<ClassificationResult>> {
        let model = self
            .model
            .as_deref()
            .ok_or_else(|| EngineError::ModelUnavailable(MODEL_NOT_LOADED.to_string()))?;

        let normalized: Vec<String>;
        let inputs: Vec<&str> = if self.normalize_input {
            normalized = texts.iter().map(|t| text::normalize(t)).collect();
            normalized.iter().map(String::as_str).collect()
        } else {
            texts.to_vec()
        };

        let probabilities = model.predict_proba(&inputs)?;
        if probabilities.len() != texts.len() {
            return Err(EngineError::Inference(format!(
                "model returned {} probability rows for {} inputs",
                probabilities.len(),
                texts.len()
            )));
        }

        let classes = model.classes();
        probabilities
            .iter()
            .map(|row| pick_label(classes, row))
            .collect()
    }

    /// Classify a single text.
    pub fn classify_one(&self, text: &str) -> Result<ClassificationResult> {
        self.classify_batch(&[text])?
            .pop()
            .ok_or_else(|| EngineError::Inference("model returned no result".to_string()))
    }
}

fn pick_label(classes: &[String], row: &[f64]) -> Result<ClassificationResult> {
    if row.len() != classes.len() || row.is_empty() {
        return Err(EngineError::Inference(format!(
            "probability row has {} entries for {} classes",
            row.len(),
            classes.len()
        )));
    }
    if let Some(bad) = row.iter().find(|p| !p.is_finite() || !(0.0..=1.0).contains(*p)) {
        return Err(EngineError::Inference(format!(
            "probability {bad} is outside [0, 1]"
        )));
    }

    let best = crate::model::naive_bayes::first_argmax(row);
    Ok(ClassificationResult {
        label: classes[best].clone(),
        confidence: row[best],
    })
}
