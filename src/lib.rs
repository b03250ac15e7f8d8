//! Interesting words: a scored word index over a folder of text documents.
//!
//! Documents are split into sentences and words, every word occurrence is
//! recorded in a [`WordIndex`], words are scored across the whole corpus by
//! their mean nonzero TF-IDF weight, and the index is rendered as an HTML
//! table with each occurrence highlighted in its sentence.

pub mod config;
pub mod engine;
pub mod index;
pub mod reader;
pub mod types;

pub use config::ReportConfig;
pub use engine::{
    highlight, locate, merge, sort, sort_by_name, CorpusVectorizer, HtmlRenderer,
    ImportanceAggregator, Marker, SortPolicy, SpliceMode, TermWeights, TfIdfVectorizer,
    Tokenizer, REPORT_COLUMNS,
};
pub use index::{Corpus, CorpusSnapshot, WordIndex};
pub use reader::DocumentReader;
pub use types::{
    document_name, IndexError, IndexResult, Occurrence, OccurrencePolicy, Span, Word,
    UNSET_IMPORTANCE,
};
