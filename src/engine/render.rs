//! HTML report and JSON export of the word index.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::engine::locator::char_slice;
use crate::index::WordIndex;
use crate::types::{IndexResult, Occurrence, Span, Word};

/// Column labels of the report table, in order.
pub const REPORT_COLUMNS: [&str; 4] = [
    "Word (Total Occurrences)",
    "Documents",
    "td-idf",
    "Sentences containing the word",
];

/// Markup placed between the occurrences of one word.
pub const OCCURRENCE_SEPARATOR: &str = "<hr>";

/// How a sentence is re-spliced around a highlighted word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpliceMode {
    /// Keep every character of the sentence.
    #[default]
    Exact,
    /// Reproduce older reports: drop the character just before the word and
    /// the one just after it. A word at offset 0 is preceded by the sentence
    /// minus its last character.
    Legacy,
}

/// Highlight markers wrapped around a located word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `<b>` and `</b>`.
    Html,
    /// The same string on both sides, e.g. `*`.
    Custom(String),
}

impl Marker {
    fn open(&self) -> &str {
        match self {
            Self::Html => "<b>",
            Self::Custom(m) => m,
        }
    }

    fn close(&self) -> &str {
        match self {
            Self::Html => "</b>",
            Self::Custom(m) => m,
        }
    }
}

/// Split a sentence into the text before, at and after the span.
fn splice(sentence: &str, span: Span, mode: SpliceMode) -> (&str, &str, &str) {
    let len = sentence.chars().count();
    let word = char_slice(sentence, span.start, span.end);
    match mode {
        SpliceMode::Exact => (
            char_slice(sentence, 0, span.start),
            word,
            char_slice(sentence, span.end, len),
        ),
        SpliceMode::Legacy => {
            let prefix_end = if span.start == 0 {
                len.saturating_sub(1)
            } else {
                span.start - 1
            };
            (
                char_slice(sentence, 0, prefix_end),
                word,
                char_slice(sentence, span.end + 1, len),
            )
        }
    }
}

/// `"<document> CONTAINS <sentence>"` with the located word wrapped in
/// `marker`, or the plain form when the word was never located.
pub fn highlight(occurrence: &Occurrence, marker: &Marker, mode: SpliceMode) -> String {
    highlight_with(occurrence, marker, mode, str::to_string)
}

/// Shared by [`highlight`] and the HTML renderer; `text` is applied to every
/// piece of document text but never to the markers.
fn highlight_with(
    occurrence: &Occurrence,
    marker: &Marker,
    mode: SpliceMode,
    text: fn(&str) -> String,
) -> String {
    let Some(span) = occurrence.span else {
        return text(&occurrence.plain_text());
    };
    let (before, word, after) = splice(&occurrence.sentence, span, mode);
    format!(
        "{} CONTAINS {}{}{}{}{}",
        text(&occurrence.document_name),
        text(before),
        marker.open(),
        text(word),
        marker.close(),
        text(after)
    )
}

/// Escape text for inclusion in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a word index as a self-contained HTML document.
pub struct HtmlRenderer {
    title: String,
    splice: SpliceMode,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            title: "Word Index".to_string(),
            splice: SpliceMode::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_splice(mut self, splice: SpliceMode) -> Self {
        self.splice = splice;
        self
    }

    /// One `<html>` document with one table row per word, in index order.
    pub fn render(&self, index: &WordIndex) -> String {
        let mut html = String::new();
        html.push_str("<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.title));
        html.push_str("</head>\n<body>\n<table border=\"1\">\n<tr>");
        for column in REPORT_COLUMNS {
            let _ = write!(html, "<th>{}</th>", column);
        }
        html.push_str("</tr>\n");

        for word in index {
            self.render_row(&mut html, word);
        }

        html.push_str("</table>\n</body>\n</html>\n");
        html
    }

    fn render_row(&self, html: &mut String, word: &Word) {
        let documents: Vec<String> = word.documents().into_iter().map(escape_html).collect();
        let occurrences: Vec<String> = word
            .occurrences()
            .iter()
            .map(|o| self.render_occurrence(o))
            .collect();

        let _ = writeln!(
            html,
            "<tr><td>{} ({})</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(word.canonical_form()),
            word.count(),
            documents.join(", "),
            word.importance_or_unset(),
            occurrences.join(OCCURRENCE_SEPARATOR)
        );
    }

    fn render_occurrence(&self, occurrence: &Occurrence) -> String {
        highlight_with(occurrence, &Marker::Html, self.splice, escape_html)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// The index as pretty-printed JSON, in index order.
pub fn to_json(index: &WordIndex) -> IndexResult<String> {
    Ok(serde_json::to_string_pretty(index.words())?)
}
