//! TF-IDF text vectorizer.
//!
//! Documents are lowercased, split into word tokens of two or more
//! characters, filtered against the English stop word list and expanded into
//! n-grams. Each document becomes an L2-normalized sparse row of
//! `count * idf` weights over a lexicographically ordered vocabulary.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::stop_words;
use crate::error::{EngineError, Result};

/// A sparse feature row: `(feature index, weight)` pairs sorted by index.
pub type SparseRow = Vec<(usize, f64)>;

/// Vectorizer hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfConfig {
    pub lowercase: bool,

    /// Drop English stop words before building n-grams
    pub stop_words: bool,

    /// Inclusive `(min_n, max_n)` n-gram range
    pub ngram_range: (usize, usize),

    /// Ignore terms that appear in more than this fraction of documents
    pub max_df: f64,

    /// Ignore terms that appear in fewer than this many documents
    pub min_df: usize,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            stop_words: true,
            ngram_range: (1, 2),
            max_df: 0.95,
            min_df: 1,
        }
    }
}

/// A fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    config: TfidfConfig,

    /// Term -> feature index, in lexicographic term order
    vocabulary: BTreeMap<String, usize>,

    /// Smoothed inverse document frequency per feature
    idf: Vec<f64>,
}

/// Cached regex for word tokens of two or more characters
fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w\w+\b").unwrap())
}

impl TfidfVectorizer {
    /// Learn the vocabulary and idf weights from `documents`.
    pub fn fit(config: TfidfConfig, documents: &[&str]) -> Result<Self> {
        let (min_n, max_n) = config.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(EngineError::Training(format!(
                "invalid n-gram range ({min_n}, {max_n})"
            )));
        }
        if !(0.0..=1.0).contains(&config.max_df) {
            return Err(EngineError::Training(format!(
                "max_df must be within [0, 1], got {}",
                config.max_df
            )));
        }
        if documents.is_empty() {
            return Err(EngineError::Training(
                "cannot fit a vectorizer on zero documents".to_string(),
            ));
        }

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for document in documents {
            let unique: BTreeSet<String> = analyze(&config, document).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }
        if document_frequency.is_empty() {
            return Err(EngineError::Training(
                "empty vocabulary; documents contain only stop words or short tokens".to_string(),
            ));
        }

        let n_documents = documents.len();
        let max_count = config.max_df * n_documents as f64;
        let kept: BTreeMap<String, usize> = document_frequency
            .into_iter()
            .filter(|(_, df)| (*df as f64) <= max_count && *df >= config.min_df)
            .collect();
        if kept.is_empty() {
            return Err(EngineError::Training(
                "after pruning, no terms remain; try a lower min_df or a higher max_df"
                    .to_string(),
            ));
        }

        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(kept.len());
        for (index, (term, df)) in kept.into_iter().enumerate() {
            idf.push(((1.0 + n_documents as f64) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        tracing::debug!(
            documents = n_documents,
            features = vocabulary.len(),
            "Fitted TF-IDF vocabulary"
        );

        Ok(Self {
            config,
            vocabulary,
            idf,
        })
    }

    /// Map each document to an L2-normalized TF-IDF row.
    ///
    /// Terms outside the vocabulary are ignored; a document without any known
    /// term becomes an empty row.
    pub fn transform(&self, documents: &[&str]) -> Vec<SparseRow> {
        documents
            .iter()
            .map(|document| self.transform_one(document))
            .collect()
    }

    fn transform_one(&self, document: &str) -> SparseRow {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in analyze(&self.config, document) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseRow = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();

        let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut row {
                *weight /= norm;
            }
        }
        row
    }

    /// Number of features (vocabulary size).
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    pub fn config(&self) -> &TfidfConfig {
        &self.config
    }

    /// Check internal consistency after deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(EngineError::InvalidArtifact(format!(
                "vocabulary has {} terms but idf has {} weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if self.vocabulary.values().any(|&index| index >= self.idf.len()) {
            return Err(EngineError::InvalidArtifact(
                "vocabulary index out of range".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tokenize a document and expand it into n-gram terms.
fn analyze(config: &TfidfConfig, document: &str) -> Vec<String> {
    let text = if config.lowercase {
        document.to_lowercase()
    } else {
        document.to_string()
    };

    let tokens: Vec<&str> = token_regex()
        .find_iter(&text)
        .map(|m| m.as_str())
        .filter(|token| !config.stop_words || !stop_words::is_stop_word(token))
        .collect();

    let (min_n, max_n) = config.ngram_range;
    let mut terms = Vec::new();
    for n in min_n..=max_n.min(tokens.len()) {
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(documents: &[&str]) -> TfidfVectorizer {
        TfidfVectorizer::fit(TfidfConfig::default(), documents).unwrap()
    }

    #[test]
    fn test_analyze_unigrams_and_bigrams() {
        let terms = analyze(&TfidfConfig::default(), "The Secret merger plan!");
        assert_eq!(
            terms,
            vec!["secret", "merger", "plan", "secret merger", "merger plan"]
        );
    }

    #[test]
    fn test_token_regex_is_cached() {
        let tokens: Vec<&str> = token_regex()
            .find_iter("a bc déjà 42")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(tokens, vec!["bc", "déjà", "42"]);
        assert!(std::ptr::eq(token_regex(), token_regex()));
    }

    #[test]
    fn test_analyze_drops_single_char_tokens() {
        let terms = analyze(&TfidfConfig::default(), "x y zz");
        assert_eq!(terms, vec!["zz"]);
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let vectorizer = fit(&["zebra apple", "mango"]);
        let terms: Vec<&String> = vectorizer.vocabulary().keys().collect();
        assert_eq!(terms, vec!["apple", "mango", "zebra", "zebra apple"]);
        assert_eq!(vectorizer.vocabulary()["apple"], 0);
        assert_eq!(vectorizer.n_features(), 4);
    }

    #[test]
    fn test_max_df_prunes_ubiquitous_terms() {
        let vectorizer = fit(&["report alpha", "report beta", "report gamma"]);
        assert!(!vectorizer.vocabulary().contains_key("report"));
        assert!(vectorizer.vocabulary().contains_key("alpha"));
    }

    #[test]
    fn test_rows_are_l2_normalized() {
        let vectorizer = fit(&["secret plan secret", "public blog post"]);
        for row in vectorizer.transform(&["secret plan", "public post secret"]) {
            let norm: f64 = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unknown_terms_yield_empty_row() {
        let vectorizer = fit(&["secret plan", "public blog"]);
        let rows = vectorizer.transform(&["", "completely unrelated words"]);
        assert!(rows[0].is_empty());
        assert!(rows[1].is_empty());
    }

    #[test]
    fn test_idf_smoothing() {
        let vectorizer = fit(&["alpha beta", "alpha gamma", "delta"]);
        let alpha = vectorizer.vocabulary()["alpha"];
        let delta = vectorizer.vocabulary()["delta"];
        assert!((vectorizer.idf[alpha] - ((4.0_f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
        assert!((vectorizer.idf[delta] - ((4.0_f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_fit_rejects_stop_word_only_corpus() {
        let err = TfidfVectorizer::fit(TfidfConfig::default(), &["the and of", "a"]).unwrap_err();
        assert!(matches!(err, EngineError::Training(_)));
    }

    #[test]
    fn test_fit_rejects_empty_corpus() {
        let err = TfidfVectorizer::fit(TfidfConfig::default(), &[]).unwrap_err();
        assert!(matches!(err, EngineError::Training(_)));
    }

    #[test]
    fn test_validate_detects_mismatch() {
        let mut vectorizer = fit(&["secret plan", "public blog"]);
        vectorizer.idf.pop();
        assert!(matches!(
            vectorizer.validate(),
            Err(EngineError::InvalidArtifact(_))
        ));
    }
}
