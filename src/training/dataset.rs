use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One labeled training document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub text: String,
    pub label: String,
}

impl LabeledSample {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Built-in sensitivity dataset used when no data file is given.
pub fn sample_dataset() -> Vec<LabeledSample> {
    [
        ("This document contains highly confidential financial information.", "Confidential"),
        ("Project proposal for internal review only.", "Internal"),
        ("Public announcement about our new product launch.", "Public"),
        ("Employee handbook and company policies.", "Internal"),
        ("Strictly confidential merger and acquisition details.", "Confidential"),
        ("Customer support chat log regarding a billing issue.", "Internal"),
        ("Marketing material for the upcoming campaign.", "Public"),
        ("Personal email about weekend plans.", "Public"),
        ("Source code for a critical system module.", "Confidential"),
        ("Internal memo about office relocation.", "Internal"),
        ("Draft press release for immediate publication.", "Public"),
        ("Recipe for a chocolate cake.", "Public"),
        ("Meeting minutes - sensitive discussion on strategy.", "Confidential"),
        ("User credentials and access keys for server.", "Confidential"),
        ("General news article about technology trends.", "Public"),
    ]
    .into_iter()
    .map(|(text, label)| LabeledSample::new(text, label))
    .collect()
}

/// Load a JSON array of `{"text": ..., "label": ...}` objects.
pub fn load_dataset(path: &Path) -> Result<Vec<LabeledSample>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        EngineError::Training(format!("Failed to read dataset {}: {e}", path.display()))
    })?;
    let samples: Vec<LabeledSample> = serde_json::from_str(&content)?;
    if samples.is_empty() {
        return Err(EngineError::Training(format!(
            "dataset {} contains no samples",
            path.display()
        )));
    }
    if let Some(sample) = samples.iter().find(|s| s.label.trim().is_empty()) {
        return Err(EngineError::Training(format!(
            "sample {:?} has an empty label",
            sample.text
        )));
    }
    Ok(samples)
}

/// Sample count per label, sorted by label.
pub fn label_distribution(samples: &[LabeledSample]) -> Vec<(String, usize)> {
    let mut counts = std::collections::BTreeMap::new();
    for sample in samples {
        *counts.entry(sample.label.clone()).or_insert(0usize) += 1;
    }
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_distribution() {
        let samples = sample_dataset();
        assert_eq!(samples.len(), 15);
        assert_eq!(
            label_distribution(&samples),
            vec![
                ("Confidential".to_string(), 5),
                ("Internal".to_string(), 4),
                ("Public".to_string(), 6),
            ]
        );
    }

    #[test]
    fn test_load_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"[{"text": "secret", "label": "Confidential"}, {"text": "hello", "label": "Public"}]"#,
        )
        .unwrap();
        let samples = load_dataset(&path).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0], LabeledSample::new("secret", "Confidential"));
    }

    #[test]
    fn test_load_dataset_rejects_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.json");
        std::fs::write(&empty, "[]").unwrap();
        assert!(matches!(load_dataset(&empty), Err(EngineError::Training(_))));

        let blank = dir.path().join("blank.json");
        std::fs::write(&blank, r#"[{"text": "x", "label": " "}]"#).unwrap();
        assert!(matches!(load_dataset(&blank), Err(EngineError::Training(_))));

        let malformed = dir.path().join("bad.json");
        std::fs::write(&malformed, r#"{"text": "x"}"#).unwrap();
        assert!(matches!(
            load_dataset(&malformed),
            Err(EngineError::Serialization(_))
        ));

        assert!(matches!(
            load_dataset(&dir.path().join("absent.json")),
            Err(EngineError::Training(_))
        ));
    }
}
