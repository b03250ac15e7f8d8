//! Per-document term weighting over a whole corpus.

use std::collections::{BTreeMap, HashMap};

use crate::engine::tokenizer::Tokenizer;
use crate::types::{IndexError, IndexResult};

/// Shortest term kept by [`TfIdfVectorizer`], in characters.
pub const MIN_TERM_CHARS: usize = 2;

/// Dense term weights: one row per document, one column per vocabulary term.
#[derive(Debug, Clone)]
pub struct TermWeights {
    /// Terms in column order.
    pub vocabulary: Vec<String>,
    /// `weights[doc][term]`, rows in the same order as the input documents.
    pub weights: Vec<Vec<f64>>,
}

impl TermWeights {
    pub fn num_documents(&self) -> usize {
        self.weights.len()
    }

    pub fn num_terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column of weights for the term at `term_idx`.
    pub fn column(&self, term_idx: usize) -> impl Iterator<Item = f64> + '_ {
        self.weights.iter().map(move |row| row[term_idx])
    }
}

/// Anything that can weight terms across a set of whole-document texts.
pub trait CorpusVectorizer {
    /// Fit over `documents` and return one weight row per document, in order.
    fn fit(&self, documents: &[String]) -> IndexResult<TermWeights>;
}

/// Smoothed TF-IDF with L2-normalized rows.
///
/// tf is the raw term count in a document, idf is `ln((1 + n) / (1 + df)) + 1`
/// and each document row is scaled to unit length, so every weight lies in
/// `[0, 1]`. Terms are runs of two or more word characters, lowercased,
/// with the tokenizer's stop words removed.
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Tokenize a document into vectorizer terms.
    pub fn terms(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|token| token.chars().count() >= MIN_TERM_CHARS)
            .filter(|token| !self.tokenizer.is_stop_word(token))
            .map(|s| s.to_string())
            .collect()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusVectorizer for TfIdfVectorizer {
    fn fit(&self, documents: &[String]) -> IndexResult<TermWeights> {
        if documents.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }

        let counts: Vec<HashMap<String, u32>> = documents
            .iter()
            .map(|doc| {
                let mut freqs = HashMap::new();
                for term in self.terms(doc) {
                    *freqs.entry(term).or_insert(0) += 1;
                }
                freqs
            })
            .collect();

        // term → document frequency, sorted for a deterministic column order
        let mut doc_freqs: BTreeMap<&str, u32> = BTreeMap::new();
        for freqs in &counts {
            for term in freqs.keys() {
                *doc_freqs.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if doc_freqs.is_empty() {
            return Err(IndexError::EmptyVocabulary(documents.len()));
        }

        let n = documents.len() as f64;
        let vocabulary: Vec<String> = doc_freqs.keys().map(|t| t.to_string()).collect();
        let idf: Vec<f64> = doc_freqs
            .values()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let weights = counts
            .iter()
            .map(|freqs| {
                let mut row: Vec<f64> = vocabulary
                    .iter()
                    .zip(&idf)
                    .map(|(term, idf)| freqs.get(term).copied().unwrap_or(0) as f64 * idf)
                    .collect();
                let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    row.iter_mut().for_each(|w| *w /= norm);
                }
                row
            })
            .collect();

        Ok(TermWeights {
            vocabulary,
            weights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_terms_match_word_runs() {
        let v = TfIdfVectorizer::new();
        assert_eq!(
            v.terms("The cat's snake_case x 42!"),
            vec!["cat", "snake_case", "42"]
        );
    }

    #[test]
    fn test_fit_shape_and_sorted_vocabulary() {
        let v = TfIdfVectorizer::new();
        let tw = v.fit(&docs(&["the cat sat", "dogs run"])).unwrap();
        assert_eq!(tw.vocabulary, vec!["cat", "dogs", "run", "sat"]);
        assert_eq!(tw.num_documents(), 2);
        assert!(tw.weights.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_rows_are_unit_length() {
        let v = TfIdfVectorizer::new();
        let tw = v.fit(&docs(&["cat cat dog", "dog bird"])).unwrap();
        for row in &tw.weights {
            let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
            assert!(row.iter().all(|w| (0.0..=1.0).contains(w)));
        }
    }

    #[test]
    fn test_absent_terms_weigh_zero() {
        let v = TfIdfVectorizer::new();
        let tw = v.fit(&docs(&["alpha beta", "gamma"])).unwrap();
        let gamma = tw.vocabulary.iter().position(|t| t == "gamma").unwrap();
        assert_eq!(tw.weights[0][gamma], 0.0);
        assert!((tw.weights[1][gamma] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        let v = TfIdfVectorizer::new();
        let tw = v.fit(&docs(&["common rare", "common other"])).unwrap();
        let common = tw.vocabulary.iter().position(|t| t == "common").unwrap();
        let rare = tw.vocabulary.iter().position(|t| t == "rare").unwrap();
        assert!(tw.weights[0][rare] > tw.weights[0][common]);
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let v = TfIdfVectorizer::new();
        assert!(matches!(v.fit(&[]), Err(IndexError::EmptyCorpus)));
    }

    #[test]
    fn test_stop_words_are_not_terms() {
        let v = TfIdfVectorizer::new();
        assert_eq!(v.terms("It is what it is, and the rest."), vec!["rest"]);
    }

    #[test]
    fn test_stop_word_only_corpus_is_an_error() {
        let v = TfIdfVectorizer::new();
        let err = v.fit(&docs(&["The and of.", "It is what it is."])).unwrap_err();
        assert!(matches!(err, IndexError::EmptyVocabulary(2)));
    }

    #[test]
    fn test_no_vocabulary_is_an_error() {
        let v = TfIdfVectorizer::new();
        let err = v.fit(&docs(&["a b c", "!"])).unwrap_err();
        assert!(matches!(err, IndexError::EmptyVocabulary(2)));
    }
}
