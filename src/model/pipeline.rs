use serde::{Deserialize, Serialize};

use super::naive_bayes::MultinomialNb;
use super::vectorizer::{TfidfConfig, TfidfVectorizer};
use super::TextClassifier;
use crate::error::{EngineError, Result};

/// Smoothing used by the sensitivity model.
pub const DEFAULT_ALPHA: f64 = 0.1;

/// TF-IDF vectorization followed by multinomial Naive Bayes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextClassificationPipeline {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
}

impl TextClassificationPipeline {
    /// Fit with the default vectorizer settings and smoothing.
    pub fn fit(texts: &[&str], labels: &[&str]) -> Result<Self> {
        Self::fit_with(TfidfConfig::default(), DEFAULT_ALPHA, texts, labels)
    }

    pub fn fit_with(
        config: TfidfConfig,
        alpha: f64,
        texts: &[&str],
        labels: &[&str],
    ) -> Result<Self> {
        if texts.len() != labels.len() {
            return Err(EngineError::Training(format!(
                "got {} texts but {} labels",
                texts.len(),
                labels.len()
            )));
        }
        if texts.is_empty() {
            return Err(EngineError::Training(
                "training set is empty".to_string(),
            ));
        }

        let vectorizer = TfidfVectorizer::fit(config, texts)?;
        let rows = vectorizer.transform(texts);
        let classifier = MultinomialNb::fit(alpha, &rows, labels, vectorizer.n_features())?;

        tracing::info!(
            samples = texts.len(),
            classes = classifier.classes().len(),
            features = vectorizer.n_features(),
            "Trained text classification pipeline"
        );

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &MultinomialNb {
        &self.classifier
    }

    /// Check that the vectorizer and classifier agree with each other.
    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;
        self.classifier.validate(self.vectorizer.n_features())
    }
}

impl TextClassifier for TextClassificationPipeline {
    fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    fn predict(&self, texts: &[&str]) -> Result<Vec<String>> {
        self.classifier.predict(&self.vectorizer.transform(texts))
    }

    fn predict_proba(&self, texts: &[&str]) -> Result<Vec<Vec<f64>>> {
        self.classifier
            .predict_proba(&self.vectorizer.transform(texts))
    }
}
