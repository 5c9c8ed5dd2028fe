//! Multinomial Naive Bayes over sparse TF-IDF rows.

use serde::{Deserialize, Serialize};

use super::vectorizer::SparseRow;
use crate::error::{EngineError, Result};

/// A fitted multinomial Naive Bayes classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Additive (Lidstone) smoothing parameter
    alpha: f64,

    /// Class labels in canonical (sorted) order
    classes: Vec<String>,

    /// Number of training samples per class
    class_count: Vec<usize>,

    class_log_prior: Vec<f64>,

    /// `feature_log_prob[c][j]` = log P(feature j | class c)
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit the classifier on feature rows and their labels.
    pub fn fit(alpha: f64, rows: &[SparseRow], labels: &[&str], n_features: usize) -> Result<Self> {
        if alpha.is_nan() || alpha <= 0.0 {
            return Err(EngineError::Training(format!(
                "alpha must be positive, got {alpha}"
            )));
        }
        if rows.len() != labels.len() {
            return Err(EngineError::Training(format!(
                "got {} feature rows but {} labels",
                rows.len(),
                labels.len()
            )));
        }
        if rows.is_empty() {
            return Err(EngineError::Training(
                "cannot fit a classifier on zero samples".to_string(),
            ));
        }

        let mut classes: Vec<String> = labels.iter().map(|label| label.to_string()).collect();
        classes.sort();
        classes.dedup();

        let mut class_count = vec![0usize; classes.len()];
        let mut feature_count = vec![vec![0.0f64; n_features]; classes.len()];
        for (row, label) in rows.iter().zip(labels) {
            let class = classes
                .binary_search_by(|c| c.as_str().cmp(label))
                .map_err(|_| EngineError::Training(format!("unknown label {label:?}")))?;
            class_count[class] += 1;
            for &(feature, weight) in row {
                let slot = feature_count[class].get_mut(feature).ok_or_else(|| {
                    EngineError::Training(format!(
                        "feature index {feature} out of range for {n_features} features"
                    ))
                })?;
                *slot += weight;
            }
        }

        let total = rows.len() as f64;
        let class_log_prior = class_count
            .iter()
            .map(|&count| (count as f64 / total).ln())
            .collect();

        let smoothing = alpha * n_features as f64;
        let feature_log_prob = feature_count
            .iter()
            .map(|counts| {
                let denominator = (counts.iter().sum::<f64>() + smoothing).ln();
                counts
                    .iter()
                    .map(|count| (count + alpha).ln() - denominator)
                    .collect()
            })
            .collect();

        Ok(Self {
            alpha,
            classes,
            class_count,
            class_log_prior,
            feature_log_prob,
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn class_count(&self) -> &[usize] {
        &self.class_count
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Unnormalized joint log likelihood per class.
    fn joint_log_likelihood(&self, row: &SparseRow) -> Result<Vec<f64>> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                row.iter().try_fold(*prior, |acc, &(feature, weight)| {
                    log_probs
                        .get(feature)
                        .map(|log_prob| acc + weight * log_prob)
                        .ok_or_else(|| {
                            EngineError::Inference(format!("feature index {feature} out of range"))
                        })
                })
            })
            .collect()
    }

    /// Posterior class probabilities, one row per input in class order.
    pub fn predict_proba(&self, rows: &[SparseRow]) -> Result<Vec<Vec<f64>>> {
        rows.iter()
            .map(|row| {
                let jll = self.joint_log_likelihood(row)?;
                let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let log_norm = max + jll.iter().map(|v| (v - max).exp()).sum::<f64>().ln();
                Ok(jll.iter().map(|v| (v - log_norm).exp()).collect())
            })
            .collect()
    }

    /// Most likely class per input; ties go to the earliest class.
    ///
    /// Picks from the same probability rows `predict_proba` returns.
    pub fn predict(&self, rows: &[SparseRow]) -> Result<Vec<String>> {
        Ok(self
            .predict_proba(rows)?
            .iter()
            .map(|proba| self.classes[first_argmax(proba)].clone())
            .collect())
    }

    /// Check internal consistency after deserialization.
    pub fn validate(&self, n_features: usize) -> Result<()> {
        let n_classes = self.classes.len();
        if n_classes == 0 {
            return Err(EngineError::InvalidArtifact(
                "classifier has no classes".to_string(),
            ));
        }
        if self.class_log_prior.len() != n_classes
            || self.class_count.len() != n_classes
            || self.feature_log_prob.len() != n_classes
        {
            return Err(EngineError::InvalidArtifact(
                "classifier parameters disagree on the number of classes".to_string(),
            ));
        }
        if self
            .feature_log_prob
            .iter()
            .any(|log_probs| log_probs.len() != n_features)
        {
            return Err(EngineError::InvalidArtifact(format!(
                "classifier expects a different feature count than the vectorizer ({n_features})"
            )));
        }
        if self.classes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(EngineError::InvalidArtifact(
                "classes must be unique and sorted".to_string(),
            ));
        }
        Ok(())
    }
}

/// Index of the first maximum value.
pub(crate) fn first_argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (index, value) in values.iter().enumerate().skip(1) {
        if *value > values[best] {
            best = index;
        }
    }
    best
}
