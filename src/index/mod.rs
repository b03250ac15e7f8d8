//! In-memory index structures built during ingestion.

pub mod corpus;
pub mod word_index;

pub use corpus::{Corpus, CorpusSnapshot};
pub use word_index::WordIndex;
