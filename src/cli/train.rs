use std::path::PathBuf;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::training::{self, dataset};

/// Execute the `train` command: fit, evaluate, save and verify a model.
pub fn execute(data: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let samples = match &data {
        Some(path) => dataset::load_dataset(path)?,
        None => dataset::sample_dataset(),
    };
    let output = match output {
        Some(path) => path,
        None => EngineConfig::load()?.model_path,
    };

    println!("Loaded data with {} samples.", samples.len());
    println!("Label distribution:");
    for (label, count) in dataset::label_distribution(&samples) {
        println!("  {label}: {count}");
    }

    let outcome = training::train_and_save(&samples, &output)?;

    println!("\nTraining set size: {}", outcome.train_size);
    println!("Test set size: {}", outcome.test_size);
    if let Some(report) = &outcome.report {
        println!("\nClassification Report on Test Set:");
        println!("{report}");
    }
    println!("Model saved to {}", output.display());

    println!("\nVerifying saved model...");
    for (text, label, probability) in training::verify(&output)? {
        println!("Text: '{text}' -> Predicted: {label}");
        println!("  Probability for {label}: {probability:.4}");
    }

    Ok(())
}
