//! Deduplicated index of canonical words and their occurrences.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{Occurrence, OccurrencePolicy, Word};

/// Words keyed by canonical (lowercase) form, iterated in insertion order
/// until a sort is applied.
pub struct WordIndex {
    /// Words in iteration order.
    words: Vec<Word>,
    /// canonical form → position in `words`
    positions: HashMap<String, usize>,
    /// How identical occurrences of the same word are handled.
    policy: OccurrencePolicy,
}

impl WordIndex {
    /// Create an empty index that keeps every occurrence.
    pub fn new() -> Self {
        Self::with_policy(OccurrencePolicy::default())
    }

    /// Create an empty index with an explicit occurrence policy.
    pub fn with_policy(policy: OccurrencePolicy) -> Self {
        Self {
            words: Vec::new(),
            positions: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> OccurrencePolicy {
        self.policy
    }

    /// Record one occurrence of `word` in `sentence` of `document`.
    ///
    /// Creates the word on first sight, otherwise appends to the existing
    /// entry. Never fails: an occurrence whose word cannot be located in the
    /// sentence is stored unlocated.
    pub fn insert(&mut self, word: &str, sentence: &str, document: &str) {
        let occurrence = Occurrence::new(word, sentence, document);
        let policy = self.policy;

        match self.lookup(word) {
            Some(pos) => {
                self.words[pos].push_occurrence(occurrence, policy);
            }
            None => {
                let mut entry = Word::new(word);
                entry.push_occurrence(occurrence, policy);
                self.push_new(entry);
            }
        }
    }

    /// Insert a prebuilt word if its canonical form is not already indexed.
    /// Returns `false` when an entry with the same form exists.
    pub fn insert_word(&mut self, word: Word) -> bool {
        if self.positions.contains_key(word.canonical_form()) {
            return false;
        }
        self.push_new(word);
        true
    }

    /// Case-insensitive lookup. Returns the word's position in iteration order.
    pub fn lookup(&self, word: &str) -> Option<usize> {
        self.positions.get(&word.to_lowercase()).copied()
    }

    /// Get a word by any casing of its canonical form.
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.lookup(word).map(|pos| &self.words[pos])
    }

    /// All words in current iteration order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> impl Iterator<Item = &mut Word> {
        self.words.iter_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total occurrences across all words.
    pub fn occurrence_count(&self) -> usize {
        self.words.iter().map(Word::count).sum()
    }

    /// Reorder words in place and refresh the position map.
    pub(crate) fn reorder_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Word, &Word) -> Ordering,
    {
        self.words.sort_by(compare);
        for (pos, word) in self.words.iter().enumerate() {
            self.positions.insert(word.canonical_form().to_string(), pos);
        }
    }

    fn push_new(&mut self, word: Word) {
        self.positions
            .insert(word.canonical_form().to_string(), self.words.len());
        self.words.push(word);
    }
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a WordIndex {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedups_by_case() {
        let mut index = WordIndex::new();
        index.insert("Cat", "The Cat sat.", "a.txt");
        index.insert("cat", "The cat ran.", "a.txt");
        index.insert("CAT", "CAT!", "b.txt");

        assert_eq!(index.len(), 1);
        let cat = index.get("cat").unwrap();
        assert_eq!(cat.count(), 3);
        assert_eq!(cat.occurrences().len(), 3);
        assert_eq!(cat.canonical_form(), "cat");
    }

    #[test]
    fn test_lookup_returns_insertion_position() {
        let mut index = WordIndex::new();
        index.insert("dogs", "Dogs run fast.", "b");
        index.insert("run", "Dogs run fast.", "b");
        assert_eq!(index.lookup("DOGS"), Some(0));
        assert_eq!(index.lookup("run"), Some(1));
        assert_eq!(index.lookup("fast"), None);
    }

    #[test]
    fn test_insert_empty_inputs_does_not_fail() {
        let mut index = WordIndex::new();
        index.insert("word", "", "");
        let word = index.get("word").unwrap();
        assert_eq!(word.count(), 1);
        assert!(!word.occurrences()[0].is_located());
        assert_eq!(word.occurrences()[0].document_name, "");
    }

    #[test]
    fn test_document_names_normalized() {
        let mut index = WordIndex::new();
        index.insert("report", "A report.", "/a/b/report.txt");
        index.insert("report", "A report.", "report.txt");
        let word = index.get("report").unwrap();
        assert_eq!(word.occurrences()[0].document_name, "report");
        assert_eq!(word.occurrences()[1].document_name, "report");
        assert_eq!(word.documents().len(), 1);
    }

    #[test]
    fn test_identical_occurrences_kept_by_default() {
        let mut index = WordIndex::new();
        index.insert("cat", "The cat sat.", "a");
        index.insert("cat", "The cat sat.", "a");
        assert_eq!(index.get("cat").unwrap().count(), 2);

        let mut strict = WordIndex::with_policy(OccurrencePolicy::DropIdentical);
        strict.insert("cat", "The cat sat.", "a");
        strict.insert("cat", "The cat sat.", "a");
        assert_eq!(strict.get("cat").unwrap().count(), 1);
        assert_eq!(strict.get("cat").unwrap().occurrences().len(), 1);
    }

    #[test]
    fn test_insert_word_only_when_absent() {
        let mut index = WordIndex::new();
        assert!(index.insert_word(Word::new("Liberty")));
        assert!(!index.insert_word(Word::new("liberty")));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("LIBERTY").unwrap().count(), 0);
    }

    #[test]
    fn test_reorder_refreshes_positions() {
        let mut index = WordIndex::new();
        index.insert("alpha", "alpha", "d");
        index.insert("beta", "beta", "d");
        index.reorder_by(|a, b| b.canonical_form().cmp(a.canonical_form()));
        assert_eq!(index.lookup("beta"), Some(0));
        assert_eq!(index.lookup("alpha"), Some(1));
        index.insert("alpha", "alpha again", "d");
        assert_eq!(index.words()[1].count(), 2);
    }
}
