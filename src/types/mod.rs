//! Core data types for the word index.

pub mod error;
pub mod word;

pub use error::{IndexError, IndexResult};
pub use word::{document_name, Occurrence, OccurrencePolicy, Span, Word, UNSET_IMPORTANCE};
