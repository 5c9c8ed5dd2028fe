use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::pipeline::TextClassificationPipeline;
use super::TextClassifier;
use crate::error::{EngineError, Result};

/// Artifact layout version written by this crate.
pub const FORMAT_VERSION: u32 = 1;

/// A persisted, versioned model together with its training metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,

    /// Human-readable model name, e.g. "sample_text_classifier"
    pub name: String,

    /// Timestamp when the model was trained
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Number of samples the model was fitted on
    pub trained_samples: usize,

    pub model: ArtifactModel,
}

/// The capability a stored model provides, fixed when the artifact is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pipeline", rename_all = "snake_case")]
pub enum ArtifactModel {
    TextClassifier(TextClassificationPipeline),
}

impl std::fmt::Display for ArtifactModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactModel::TextClassifier(_) => write!(f, "text_classifier"),
        }
    }
}

impl ModelArtifact {
    pub fn new(
        name: impl Into<String>,
        trained_samples: usize,
        pipeline: TextClassificationPipeline,
    ) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            name: name.into(),
            created_at: chrono::Utc::now(),
            trained_samples,
            model: ArtifactModel::TextClassifier(pipeline),
        }
    }

    /// Read and validate an artifact from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read(path).map_err(|e| {
            EngineError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read model artifact {}: {e}", path.display()),
            ))
        })?;
        let artifact: ModelArtifact = serde_json::from_slice(&content)
            .map_err(|e| EngineError::InvalidArtifact(format!("{}: {e}", path.display())))?;

        if artifact.format_version != FORMAT_VERSION {
            return Err(EngineError::InvalidArtifact(format!(
                "unsupported format version {} (expected {FORMAT_VERSION})",
                artifact.format_version
            )));
        }
        match &artifact.model {
            ArtifactModel::TextClassifier(pipeline) => pipeline.validate()?,
        }
        Ok(artifact)
    }

    /// Write the artifact as JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Register the stored model as a text classifier.
    pub fn into_text_classifier(self) -> Arc<dyn TextClassifier> {
        match self.model {
            ArtifactModel::TextClassifier(pipeline) => Arc::new(pipeline),
        }
    }

    pub fn pipeline(&self) -> &TextClassificationPipeline {
        match &self.model {
            ArtifactModel::TextClassifier(pipeline) => pipeline,
        }
    }
}

/// Compute the SHA-256 of a file, returned as a hex string.
pub fn sha256_file(path: &Path) -> Result<String> {
    let data = std::fs::read(path)?;
    Ok(compute_sha256(&data))
}

/// Compute SHA-256 hash of the given data, returned as a hex string.
pub fn compute_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}
