//! Splitting normalized text into sentences.

use super::normalize::normalize_text;

/// Split text into an ordered sequence of trimmed, non-empty sentences.
///
/// The input is normalized first, so this accepts raw journal text as well
/// as already-normalized text and applies the same abbreviation-aware
/// sentence-boundary rule either way. Empty or whitespace-only input yields
/// an empty vector.
///
/// # Examples
///
/// ```
/// use prose_tools::text::split_sentences;
///
/// let sentences = split_sentences("I went home. I slept early");
/// assert_eq!(sentences, vec!["I went home.", "I slept early."]);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    normalize_text(text)
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
