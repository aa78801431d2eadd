//! Sentence tokenization for similarity scoring.

use crate::matching::stopwords::is_stop_word;

/// Suffixes clipped from longer tokens, longest first.
const SUFFIXES: &[&str] = &["ing", "ed", "es", "s"];

/// Extracts the content tokens of a sentence.
///
/// The sentence is lowercased, stripped to ASCII letters, digits, and
/// whitespace, and split on whitespace. Stop words are dropped and the
/// survivors have one common suffix clipped. If that leaves nothing but
/// the sentence did contain words (all stop words, say "it was just so"),
/// the raw words are returned instead so the sentence still compares as
/// itself rather than as empty.
///
/// # Examples
///
/// ```
/// use prose_tools::matching::content_tokens;
///
/// assert_eq!(content_tokens("I walked to the gym."), vec!["walk", "gym"]);
/// assert_eq!(content_tokens("It was just so!"), vec!["it", "was", "just", "so"]);
/// ```
#[must_use]
pub fn content_tokens(text: &str) -> Vec<String> {
    let clean: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let words: Vec<&str> = clean.split_whitespace().collect();

    let mut tokens: Vec<String> = words
        .iter()
        .filter(|word| !is_stop_word(word))
        .map(|word| clip_suffix(word))
        .collect();

    if tokens.is_empty() && !words.is_empty() {
        tokens = words.iter().map(ToString::to_string).collect();
    }

    tokens
}

/// Clips one trailing suffix from tokens longer than three characters.
///
/// This is not a stemmer; it only folds the most common inflections
/// ("walks"/"walked"/"walking" -> "walk") so that minor edits do not read
/// as new vocabulary. Short tokens are left alone to avoid mangling words
/// like "bus" or "is".
fn clip_suffix(word: &str) -> String {
    if word.len() > 3 {
        for suffix in SUFFIXES {
            if let Some(stripped) = word.strip_suffix(suffix) {
                return stripped.to_string();
            }
        }
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(content_tokens("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_stop_words_removed() {
        assert_eq!(content_tokens("I went to the gym"), vec!["went", "gym"]);
    }

    #[test]
    fn test_suffix_clipping() {
        assert_eq!(
            content_tokens("running walked boxes cats"),
            vec!["runn", "walk", "box", "cat"]
        );
    }

    #[test]
    fn test_longest_suffix_wins() {
        // "goes" loses "es", not just "s".
        assert_eq!(content_tokens("goes"), vec!["go"]);
    }

    #[test]
    fn test_short_tokens_not_clipped() {
        assert_eq!(content_tokens("the bus was gas"), vec!["bus", "gas"]);
    }

    #[test]
    fn test_all_stop_words_falls_back_to_raw_words() {
        // Without the fallback this sentence would tokenize as empty and
        // match any other empty sentence perfectly.
        assert_eq!(
            content_tokens("It was just so."),
            vec!["it", "was", "just", "so"]
        );
    }

    #[test]
    fn test_fallback_keeps_words_unclipped() {
        // The fallback returns words as written, without suffix clipping.
        assert_eq!(content_tokens("these those"), vec!["these", "those"]);
    }

    #[test]
    fn test_non_ascii_text_yields_no_tokens() {
        assert!(content_tokens("귀멸의 칼날").is_empty());
        assert!(content_tokens("...").is_empty());
        assert!(content_tokens("").is_empty());
    }

    #[test]
    fn test_digits_survive() {
        assert_eq!(content_tokens("from 1 to 6 p.m."), vec!["1", "6", "pm"]);
    }
}
