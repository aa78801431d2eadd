//! Jaccard similarity over content tokens.

use std::collections::HashSet;

use crate::matching::tokens::content_tokens;

/// Compute the similarity of two sentences as the Jaccard index of their
/// content-token sets.
///
/// Two sentences with no tokens at all (empty, punctuation-only, or
/// entirely non-ASCII script) compare as identical, which keeps such
/// lines pairing with each other instead of scoring as unrelated.
///
/// # Examples
///
/// ```
/// use prose_tools::matching::sentence_similarity;
///
/// let sim = sentence_similarity("I went to the gym.", "I go to the gym.");
/// assert!(sim > 0.0 && sim < 1.0);
/// assert_eq!(sentence_similarity("Same thing.", "Same thing."), 1.0);
/// ```
#[must_use]
pub fn sentence_similarity(a: &str, b: &str) -> f64 {
    let tokens_a: HashSet<String> = content_tokens(a).into_iter().collect();
    let tokens_b: HashSet<String> = content_tokens(b).into_iter().collect();

    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 1.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.union(&tokens_b).count();

    if union > 0 {
        intersection as f64 / union as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sentences() {
        assert_eq!(
            sentence_similarity("I went to the gym.", "I went to the gym."),
            1.0
        );
    }

    #[test]
    fn test_unrelated_sentences() {
        assert_eq!(
            sentence_similarity("I went to the gym.", "She cooked dinner late."),
            0.0
        );
    }

    #[test]
    fn test_partial_overlap() {
        // Tokens: {went, gym} vs {go, gym} -> 1 shared of 3 total.
        let sim = sentence_similarity("I went to the gym.", "I go to the gym.");
        assert!((sim - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rewrite_keeps_half_overlap() {
        // Heavy rewording still shares "help" and "medicine".
        let sim = sentence_similarity(
            "I was helped by diet medicine.",
            "I actually got some help from the medicine; wegovy.",
        );
        assert!((sim - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_both_token_free_sentences_match() {
        assert_eq!(sentence_similarity("", ""), 1.0);
        assert_eq!(sentence_similarity("...", "!!!"), 1.0);
        assert_eq!(sentence_similarity("귀멸의 칼날", "진격의 거인"), 1.0);
    }

    #[test]
    fn test_one_token_free_sentence_is_unrelated() {
        assert_eq!(sentence_similarity("", "I went to the gym."), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = "My company allow to remote work.";
        let b = "My company allows me to work remotely.";
        assert_eq!(sentence_similarity(a, b), sentence_similarity(b, a));
    }

    #[test]
    fn test_inflection_folds_together() {
        // "allow" vs "allows" clip to the same token.
        let sim = sentence_similarity("They allow it.", "They allows it.");
        assert_eq!(sim, 1.0);
    }
}
