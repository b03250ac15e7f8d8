//! Error types for indexing, scoring and report output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Cannot compute importance scores over an empty corpus")]
    EmptyCorpus,

    #[error("Vectorizer produced an empty vocabulary ({0} documents, all stop words or empty)")]
    EmptyVocabulary(usize),

    #[error("Vectorizer returned {actual} weight rows for {expected} documents")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Vectorizer weight row {row} has {actual} columns for {expected} vocabulary terms")]
    RaggedWeights {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Importance scores were already merged into this index")]
    AlreadyScored,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type IndexResult<T> = Result<T, IndexError>;
