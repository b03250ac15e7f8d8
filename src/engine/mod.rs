//! Processing stages: tokenize, locate, vectorize, score, sort and render.

pub mod importance;
pub mod locator;
pub mod render;
pub mod sort;
pub mod tokenizer;
pub mod vectorizer;

pub use importance::{merge, round_score, ImportanceAggregator, SCORE_DECIMALS};
pub use locator::locate;
pub use render::{highlight, to_json, HtmlRenderer, Marker, SpliceMode, REPORT_COLUMNS};
pub use sort::{sort, sort_by_name, SortPolicy};
pub use tokenizer::Tokenizer;
pub use vectorizer::{CorpusVectorizer, TermWeights, TfIdfVectorizer};
