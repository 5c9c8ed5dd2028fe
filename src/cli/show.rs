use std::path::PathBuf;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::model::artifact::{self, ModelArtifact};

/// Execute the `show` command: display details about a model artifact.
pub fn execute(model: Option<PathBuf>) -> Result<()> {
    let path = match model {
        Some(path) => path,
        None => EngineConfig::load()?.model_path,
    };
    let artifact = ModelArtifact::load(&path)?;
    let pipeline = artifact.pipeline();
    let vectorizer = pipeline.vectorizer();
    let classifier = pipeline.classifier();

    println!("Model: {}", artifact.name);
    println!("Kind: {}", artifact.model);
    println!("Format Version: {}", artifact.format_version);
    println!("SHA256: {}", artifact::sha256_file(&path)?);
    println!("Path: {}", path.display());
    println!(
        "Created: {}",
        artifact.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Trained Samples: {}", artifact.trained_samples);

    println!("\nClasses:");
    for (label, count) in classifier.classes().iter().zip(classifier.class_count()) {
        println!("  {label} ({count} samples)");
    }

    let config = vectorizer.config();
    println!("\nParameters:");
    println!("  Vocabulary Size: {}", vectorizer.n_features());
    println!(
        "  N-gram Range: ({}, {})",
        config.ngram_range.0, config.ngram_range.1
    );
    println!("  Max DF: {}", config.max_df);
    println!("  Min DF: {}", config.min_df);
    println!("  Stop Words: {}", if config.stop_words { "english" } else { "none" });
    println!("  Alpha: {}", classifier.alpha());

    Ok(())
}
