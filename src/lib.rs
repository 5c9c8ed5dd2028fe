//! # a3s-ml-engine
//!
//! Document sensitivity classification served over HTTP, plus an offline
//! trainer for the model it serves.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use a3s_ml_engine::{SensitivityClassifier, TextClassificationPipeline};
//!
//! # fn example() -> a3s_ml_engine::Result<()> {
//! let pipeline = TextClassificationPipeline::fit(
//!     &["strictly confidential merger details", "public product launch"],
//!     &["Confidential", "Public"],
//! )?;
//! let classifier = SensitivityClassifier::new(Arc::new(pipeline));
//!
//! let result = classifier.classify_one("merger details")?;
//! println!("{} ({:.2})", result.label, result.confidence);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **TextClassifier** trait — what a loaded model can do (classes, predict, predict_proba)
//! - **TextClassificationPipeline** — TF-IDF vectorizer + multinomial Naive Bayes
//! - **ModelArtifact** — versioned JSON file holding a trained model
//! - **SensitivityClassifier** — label + confidence per text, or "unavailable"
//! - **server** — axum router exposing `/health` and `/predict/*`

pub mod api;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod dirs;
pub mod error;
pub mod model;
pub mod server;
pub mod text;
pub mod training;

// Re-export core types
pub use classifier::{ClassificationResult, SensitivityClassifier};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use model::artifact::{ArtifactModel, ModelArtifact};
pub use model::pipeline::TextClassificationPipeline;
pub use model::TextClassifier;
