//! Text canonicalization and sentence segmentation.
//!
//! Raw journal text arrives bullet-listed, inconsistently line-broken, and
//! often missing terminal punctuation. This module turns it into a canonical
//! one-sentence-per-line form so the diff layers can operate on stable
//! sentence sequences.

pub mod normalize;
pub mod segment;

pub use normalize::normalize_text;
pub use segment::split_sentences;
