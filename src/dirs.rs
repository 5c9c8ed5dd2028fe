use std::path::PathBuf;

/// Relative location of the sensitivity model artifact.
pub const DEFAULT_MODEL_FILE: &str = "models/sample_text_classifier.json";

/// Returns the base directory for ML Engine data.
///
/// Uses `$A3S_ML_ENGINE_HOME` if set, otherwise defaults to `~/.a3s/ml-engine`.
pub fn engine_home() -> PathBuf {
    if let Ok(home) = std::env::var("A3S_ML_ENGINE_HOME") {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".a3s")
        .join("ml-engine")
}

/// Returns the path to the user configuration file.
pub fn config_path() -> PathBuf {
    engine_home().join("config.toml")
}

/// Returns the default model artifact path, relative to the working directory.
pub fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_FILE)
}
