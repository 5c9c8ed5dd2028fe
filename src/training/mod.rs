//! Offline training of the document sensitivity model.

pub mod dataset;
pub mod report;
pub mod split;

use std::path::Path;

use crate::error::Result;
use crate::model::artifact::ModelArtifact;
use crate::model::pipeline::TextClassificationPipeline;
use crate::model::TextClassifier;

use dataset::LabeledSample;
use report::ClassificationReport;

/// Name recorded in artifacts produced by the trainer.
pub const MODEL_NAME: &str = "sample_text_classifier";

/// Fraction of each label held out for evaluation.
pub const TEST_SIZE: f64 = 0.25;

/// Seed for the train/test split.
pub const SPLIT_SEED: u64 = 42;

/// Texts classified after saving to check the artifact reloads.
pub const VERIFICATION_TEXTS: [&str; 2] = [
    "This is a secret project plan.",
    "Hello world, this is a public blog post.",
];

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub artifact: ModelArtifact,
    pub train_size: usize,
    pub test_size: usize,

    /// Evaluation on the held-out split; `None` when nothing was held out
    pub report: Option<ClassificationReport>,
}

/// Split, fit and evaluate a pipeline on `samples`.
pub fn train(samples: &[LabeledSample]) -> Result<TrainingOutcome> {
    for (label, count) in dataset::label_distribution(samples) {
        tracing::info!(label = %label, count, "Label distribution");
    }

    let split = split::stratified_split(samples, TEST_SIZE, SPLIT_SEED)?;
    tracing::info!(
        train = split.train.len(),
        test = split.test.len(),
        "Split dataset"
    );

    let texts: Vec<&str> = split.train.iter().map(|s| s.text.as_str()).collect();
    let labels: Vec<&str> = split.train.iter().map(|s| s.label.as_str()).collect();
    let pipeline = TextClassificationPipeline::fit(&texts, &labels)?;

    let report = if split.test.is_empty() {
        tracing::warn!("No samples held out; skipping evaluation");
        None
    } else {
        let test_texts: Vec<&str> = split.test.iter().map(|s| s.text.as_str()).collect();
        let y_true: Vec<&str> = split.test.iter().map(|s| s.label.as_str()).collect();
        let y_pred = pipeline.predict(&test_texts)?;
        let y_pred: Vec<&str> = y_pred.iter().map(String::as_str).collect();
        let report = ClassificationReport::new(&y_true, &y_pred);
        tracing::info!(accuracy = report.accuracy, "Evaluated model on test split");
        Some(report)
    };

    Ok(TrainingOutcome {
        artifact: ModelArtifact::new(MODEL_NAME, split.train.len(), pipeline),
        train_size: split.train.len(),
        test_size: split.test.len(),
        report,
    })
}

/// Train on `samples` and save the artifact to `output`.
pub fn train_and_save(samples: &[LabeledSample], output: &Path) -> Result<TrainingOutcome> {
    let outcome = train(samples)?;
    outcome.artifact.save(output)?;
    tracing::info!(path = %output.display(), "Saved model artifact");
    Ok(outcome)
}

/// Reload the artifact at `path` and classify the verification texts.
///
/// Returns `(text, label, probability)` for each text.
pub fn verify(path: &Path) -> Result<Vec<(String, String, f64)>> {
    let classifier = ModelArtifact::load(path)?.into_text_classifier();
    let labels = classifier.predict(&VERIFICATION_TEXTS)?;
    let probabilities = classifier.predict_proba(&VERIFICATION_TEXTS)?;

    Ok(VERIFICATION_TEXTS
        .iter()
        .zip(labels)
        .zip(probabilities)
        .map(|((text, label), row)| {
            let probability = classifier
                .classes()
                .iter()
                .position(|class| *class == label)
                .and_then(|index| row.get(index).copied())
                .unwrap_or(0.0);
            (text.to_string(), label, probability)
        })
        .collect())
}
