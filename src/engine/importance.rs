//! Corpus-wide importance scores and their merge into the word index.

use std::collections::HashMap;

use crate::engine::vectorizer::{CorpusVectorizer, TfIdfVectorizer};
use crate::index::{CorpusSnapshot, WordIndex};
use crate::types::{IndexError, IndexResult};

/// Decimal digits kept when a score is merged into the index.
pub const SCORE_DECIMALS: i32 = 8;

/// Turns per-document term weights into one importance score per term.
pub struct ImportanceAggregator<V: CorpusVectorizer = TfIdfVectorizer> {
    vectorizer: V,
}

impl ImportanceAggregator<TfIdfVectorizer> {
    /// Aggregator backed by the default TF-IDF vectorizer.
    pub fn new() -> Self {
        Self::with_vectorizer(TfIdfVectorizer::new())
    }
}

impl Default for ImportanceAggregator<TfIdfVectorizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: CorpusVectorizer> ImportanceAggregator<V> {
    pub fn with_vectorizer(vectorizer: V) -> Self {
        Self { vectorizer }
    }

    /// Score every term of a corpus snapshot. See [`Self::compute_texts`].
    pub fn compute(&self, corpus: &CorpusSnapshot) -> IndexResult<HashMap<String, f64>> {
        self.compute_texts(corpus.texts())
    }

    /// Score every vocabulary term as the mean of its nonzero per-document
    /// weights.
    ///
    /// A zero weight means the term is absent from that document and is left
    /// out of the mean. Terms with no nonzero weight anywhere have no score
    /// and are omitted from the result. Fails if the vectorizer fails or its
    /// output does not have one row per document.
    pub fn compute_texts(&self, documents: &[String]) -> IndexResult<HashMap<String, f64>> {
        let term_weights = self.vectorizer.fit(documents)?;

        if term_weights.num_documents() != documents.len() {
            return Err(IndexError::ShapeMismatch {
                expected: documents.len(),
                actual: term_weights.num_documents(),
            });
        }
        let num_terms = term_weights.num_terms();
        if let Some((row, weights)) = term_weights
            .weights
            .iter()
            .enumerate()
            .find(|(_, weights)| weights.len() != num_terms)
        {
            return Err(IndexError::RaggedWeights {
                row,
                expected: num_terms,
                actual: weights.len(),
            });
        }

        let mut scores = HashMap::with_capacity(term_weights.num_terms());
        for (term_idx, term) in term_weights.vocabulary.iter().enumerate() {
            let (sum, nonzero) = term_weights
                .column(term_idx)
                .filter(|&w| w != 0.0)
                .fold((0.0f64, 0u32), |(sum, n), w| (sum + w, n + 1));
            if nonzero > 0 {
                scores.insert(term.clone(), sum / nonzero as f64);
            }
        }

        log::info!(
            "Scored {} of {} terms across {} documents",
            scores.len(),
            term_weights.num_terms(),
            documents.len()
        );

        Ok(scores)
    }
}

/// Round a score to [`SCORE_DECIMALS`] decimal digits.
pub fn round_score(score: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DECIMALS);
    (score * scale).round() / scale
}

/// Set the rounded score on every indexed word that has one. Words without a
/// score keep their unset importance. Returns the number of words updated.
pub fn merge(index: &mut WordIndex, scores: &HashMap<String, f64>) -> usize {
    let mut merged = 0;
    for word in index.words_mut() {
        let Some(&score) = scores.get(word.canonical_form()) else {
            continue;
        };
        let rounded = round_score(score);
        if rounded >= 0.0 && word.set_importance(rounded) {
            merged += 1;
        }
    }

    log::debug!("Merged importance scores into {} of {} words", merged, index.len());
    merged
}
