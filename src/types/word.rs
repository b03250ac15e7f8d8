//! Word and occurrence records stored in the word index.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::locator;

/// Importance value reported for words the aggregator never scored.
pub const UNSET_IMPORTANCE: f64 = -1.0;

/// Character offsets `[start, end)` of a word inside its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Number of characters covered by the span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What to do when an occurrence identical to one already recorded is appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrencePolicy {
    /// Record every occurrence, identical or not.
    #[default]
    KeepAll,
    /// Skip occurrences whose sentence, document and span all match an existing one.
    DropIdentical,
}

/// Normalize a path into a document identity: its basename without extension.
///
/// `"/a/b/report.txt"` and `"report.txt"` both become `"report"`. Inputs
/// without a file stem (such as an empty string) are returned unchanged.
pub fn document_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// One instance of a word found in one sentence of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub sentence: String,
    pub document_name: String,
    /// Location of the word in `sentence`; `None` when it could not be located.
    pub span: Option<Span>,
}

impl Occurrence {
    /// Build an occurrence, locating `word` inside `sentence`.
    pub fn new(word: &str, sentence: &str, document: &str) -> Self {
        Self {
            sentence: sentence.to_string(),
            document_name: document_name(document),
            span: locator::locate(sentence, word),
        }
    }

    pub fn is_located(&self) -> bool {
        self.span.is_some()
    }

    /// Start offset, or `None` when the word was not located.
    pub fn start_index(&self) -> Option<usize> {
        self.span.map(|s| s.start)
    }

    /// End offset (exclusive), or `None` when the word was not located.
    pub fn end_index(&self) -> Option<usize> {
        self.span.map(|s| s.end)
    }

    /// Plain, unhighlighted representation: `"<document> CONTAINS <sentence>"`.
    pub fn plain_text(&self) -> String {
        format!("{} CONTAINS {}", self.document_name, self.sentence)
    }
}

/// A distinct canonical word with every occurrence found across the corpus.
#[derive(Debug, Clone, Serialize)]
pub struct Word {
    #[serde(rename = "word")]
    canonical: String,
    count: usize,
    importance: Option<f64>,
    occurrences: Vec<Occurrence>,
}

impl Word {
    /// Create an empty word. The canonical form is the lowercased input.
    pub fn new(word: &str) -> Self {
        Self {
            canonical: word.to_lowercase(),
            count: 0,
            importance: None,
            occurrences: Vec::new(),
        }
    }

    pub fn canonical_form(&self) -> &str {
        &self.canonical
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Number of occurrences appended so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn importance(&self) -> Option<f64> {
        self.importance
    }

    /// Importance score, or [`UNSET_IMPORTANCE`] when none was assigned.
    pub fn importance_or_unset(&self) -> f64 {
        self.importance.unwrap_or(UNSET_IMPORTANCE)
    }

    /// Assign an importance score. Negative and NaN scores are rejected;
    /// `-0.0` is stored as `0.0`.
    pub fn set_importance(&mut self, score: f64) -> bool {
        if score.is_nan() || score < 0.0 {
            return false;
        }
        self.importance = Some(score + 0.0);
        true
    }

    /// Whether an occurrence with identical content is already recorded.
    pub fn contains_occurrence(&self, occurrence: &Occurrence) -> bool {
        self.occurrences.iter().any(|o| o == occurrence)
    }

    /// Append an occurrence and bump the count. Returns `false` if the policy
    /// suppressed it.
    pub fn push_occurrence(&mut self, occurrence: Occurrence, policy: OccurrencePolicy) -> bool {
        if policy == OccurrencePolicy::DropIdentical && self.contains_occurrence(&occurrence) {
            return false;
        }
        self.occurrences.push(occurrence);
        self.count += 1;
        true
    }

    /// Distinct document names this word occurs in.
    pub fn documents(&self) -> BTreeSet<&str> {
        self.occurrences
            .iter()
            .map(|o| o.document_name.as_str())
            .collect()
    }
}
