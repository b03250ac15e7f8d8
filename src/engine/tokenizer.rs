//! Sentence and word tokenizer used during ingestion.

use std::collections::HashSet;

/// English stop words excluded from the index.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Characters that end a sentence when followed by whitespace or end of text.
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// Closing punctuation that stays attached to the sentence it ends.
const SENTENCE_CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];

/// Deterministic tokenizer: text into sentences, sentences into index words.
pub struct Tokenizer {
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    /// Create a new tokenizer with the default English stop word list.
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Whether `word` (already lowercase) is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Split text into sentences with internal whitespace collapsed.
    ///
    /// A sentence ends at `.`, `!` or `?` (plus any closing quotes or
    /// brackets) followed by whitespace or the end of the text.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            current.push(c);
            i += 1;

            if SENTENCE_TERMINATORS.contains(&c) {
                while i < chars.len() && SENTENCE_CLOSERS.contains(&chars[i]) {
                    current.push(chars[i]);
                    i += 1;
                }
                if i >= chars.len() || chars[i].is_whitespace() {
                    push_sentence(&mut sentences, &current);
                    current.clear();
                }
            }
        }
        push_sentence(&mut sentences, &current);

        sentences
    }

    /// Lowercase, purely alphabetic, non-stop-word tokens of a sentence.
    pub fn words(&self, sentence: &str) -> Vec<String> {
        sentence
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .filter(|token| token.chars().all(char::is_alphabetic))
            .filter(|token| !self.stop_words.contains(token))
            .map(|s| s.to_string())
            .collect()
    }

    /// Every `(word, sentence)` pair in a document, in reading order.
    pub fn word_sentence_pairs(&self, text: &str) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for sentence in self.sentences(text) {
            for word in self.words(&sentence) {
                pairs.push((word, sentence.clone()));
            }
        }
        pairs
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !normalized.is_empty() {
        sentences.push(normalized);
    }
}
