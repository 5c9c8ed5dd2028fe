pub mod artifact;
pub mod naive_bayes;
pub mod pipeline;
pub mod stop_words;
pub mod vectorizer;

use crate::error::Result;

/// A trained model that assigns one of a fixed set of labels to free text.
///
/// Implementations are immutable after construction and shared across
/// request handlers.
pub trait TextClassifier: Send + Sync {
    /// Class labels in canonical order; probability rows follow this order.
    fn classes(&self) -> &[String];

    /// Most likely label for each text.
    fn predict(&self, texts: &[&str]) -> Result<Vec<String>>;

    /// Per-class probabilities for each text.
    fn predict_proba(&self, texts: &[&str]) -> Result<Vec<Vec<f64>>>;
}
