//! The set of whole-document texts scored by the importance aggregator.

use crate::types::document_name;

/// Documents ingested so far, in ingestion order.
#[derive(Debug, Default)]
pub struct Corpus {
    names: Vec<String>,
    texts: Vec<String>,
}

/// Immutable copy of the corpus taken when aggregation starts.
#[derive(Debug, Clone)]
pub struct CorpusSnapshot {
    names: Vec<String>,
    texts: Vec<String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document's full text under its normalized name.
    pub fn add_document(&mut self, path: &str, text: &str) {
        self.names.push(document_name(path));
        self.texts.push(text.to_string());
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Freeze the current documents for scoring.
    pub fn snapshot(&self) -> CorpusSnapshot {
        CorpusSnapshot {
            names: self.names.clone(),
            texts: self.texts.clone(),
        }
    }
}

impl CorpusSnapshot {
    /// Document names in ingestion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Document texts in ingestion order.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
