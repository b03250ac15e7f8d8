//! Locate a word inside the sentence it was extracted from.

use crate::types::Span;

/// Find the first case-insensitive, whole-token match of `word` in `sentence`.
///
/// Offsets are character (not byte) positions. A match only counts when the
/// characters on either side are not alphanumeric, so `"cat"` is not found
/// inside `"concatenate"`. Returns `None` when there is no such match.
pub fn locate(sentence: &str, word: &str) -> Option<Span> {
    let needle: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }
    let hay: Vec<char> = sentence.chars().collect();

    for start in 0..hay.len() {
        if start > 0 && hay[start - 1].is_alphanumeric() {
            continue;
        }
        let Some(end) = match_at(&hay, start, &needle) else {
            continue;
        };
        if end < hay.len() && hay[end].is_alphanumeric() {
            continue;
        }
        return Some(Span { start, end });
    }

    None
}

/// Case-folded comparison of `needle` against `hay[start..]`. Returns the
/// exclusive end offset in `hay` when the whole needle matched on a char boundary.
fn match_at(hay: &[char], start: usize, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    let mut pos = start;

    while matched < needle.len() {
        let c = *hay.get(pos)?;
        for lower in c.to_lowercase() {
            if matched >= needle.len() || needle[matched] != lower {
                return None;
            }
            matched += 1;
        }
        pos += 1;
    }

    Some(pos)
}

/// Slice `text` by character offsets.
pub(crate) fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let byte_at = |idx: usize| {
        text.char_indices()
            .nth(idx)
            .map(|(b, _)| b)
            .unwrap_or(text.len())
    };
    let (s, e) = (byte_at(start), byte_at(end));
    if s >= e {
        ""
    } else {
        &text[s..e]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_simple() {
        let span = locate("The cat sat on the mat.", "cat").unwrap();
        assert_eq!(span, Span { start: 4, end: 7 });
        assert_eq!(
            char_slice("The cat sat on the mat.", span.start, span.end).to_lowercase(),
            "cat"
        );
    }

    #[test]
    fn test_locate_is_case_insensitive() {
        let span = locate("Freedom rings.", "freedom").unwrap();
        assert_eq!(span, Span { start: 0, end: 7 });
    }

    #[test]
    fn test_locate_first_match_only() {
        let span = locate("cat and cat", "cat").unwrap();
        assert_eq!(span.start, 0);
    }

    #[test]
    fn test_locate_respects_token_boundaries() {
        assert_eq!(locate("Please concatenate them.", "cat"), None);
        let span = locate("Concatenate the cat.", "cat").unwrap();
        assert_eq!(span, Span { start: 16, end: 19 });
    }

    #[test]
    fn test_locate_at_sentence_end() {
        let span = locate("Dogs run", "run").unwrap();
        assert_eq!(span, Span { start: 5, end: 8 });
    }

    #[test]
    fn test_locate_not_found() {
        assert_eq!(locate("He ran home.", "running"), None);
        assert_eq!(locate("", "cat"), None);
        assert_eq!(locate("The cat.", ""), None);
    }

    #[test]
    fn test_locate_uses_char_offsets() {
        let sentence = "Café société rules.";
        let span = locate(sentence, "société").unwrap();
        assert_eq!(span, Span { start: 5, end: 12 });
        assert_eq!(char_slice(sentence, span.start, span.end), "société");
    }

    #[test]
    fn test_char_slice_out_of_range() {
        assert_eq!(char_slice("abc", 1, 10), "bc");
        assert_eq!(char_slice("abc", 5, 10), "");
    }
}
