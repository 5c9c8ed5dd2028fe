use std::path::PathBuf;

use crate::classifier::SensitivityClassifier;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::model::artifact::ModelArtifact;

/// Execute the `predict` command: classify texts with a saved model.
pub fn execute(texts: &[String], model: Option<PathBuf>) -> Result<()> {
    let config = EngineConfig::load()?;
    let path = model.unwrap_or(config.model_path);

    // Load strictly here: a missing model is an error, not a degraded state.
    let artifact = ModelArtifact::load(&path)?;
    let classifier = SensitivityClassifier::new(artifact.into_text_classifier())
        .with_normalization(config.normalize_input);

    let inputs: Vec<&str> = texts.iter().map(String::as_str).collect();
    for (text, result) in texts.iter().zip(classifier.classify_batch(&inputs)?) {
        println!(
            "Text: '{text}' -> Predicted: {}, Probability: {:.4}",
            result.label, result.confidence
        );
    }

    Ok(())
}
