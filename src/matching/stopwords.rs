//! Stop words ignored when comparing sentences.
//!
//! The list targets conversational English journal prose: pronouns,
//! auxiliaries, articles, and a handful of filler words ("just", "really",
//! "literally") that carry no content. Removing them keeps short everyday
//! sentences from matching on grammar alone.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Function and filler words excluded from similarity tokens.
const STOP_WORDS: &[&str] = &[
    // Articles and pronouns
    "a", "an", "the", "i", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them",
    // Copulas and auxiliaries
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did",
    // Prepositions
    "to", "of", "in", "for", "on", "with", "at", "by", "from", "up", "about",
    "into", "over", "after",
    // Conjunctions
    "and", "but", "or", "so", "if", "because", "as", "until", "while",
    // Demonstratives
    "that", "this", "these", "those",
    // Conversational filler
    "just", "very", "really", "got", "get", "some", "any", "actually",
    "basically", "literal", "literally",
];

/// Returns the stop-word set, built once on first use.
pub fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Checks whether a lowercased word is a stop word.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    stop_words().contains(word)
}
