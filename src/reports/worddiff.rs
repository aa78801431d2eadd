//! Word-level sub-diff for modified rows.
//!
//! The sentence aligner decides which sentences correspond; this module
//! shows what changed inside a pair. It is plain textual diffing over
//! words, shared by the terminal and HTML renderers.

use similar::{ChangeTag, TextDiff};

/// Classification of a span within a modified sentence pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Present in both sentences.
    Equal,
    /// Present only in the original sentence.
    Removed,
    /// Present only in the corrected sentence.
    Added,
}

/// A run of words sharing one classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub kind: SpanKind,
    pub text: String,
}

/// Diff two sentences into word spans.
///
/// Spans appear in reading order with removals before the insertions that
/// replaced them. Adjacent tokens with the same classification are fused
/// into one span, so whitespace rides along with the words it separates.
/// Concatenating the `Equal` and `Removed` spans reproduces the original
/// sentence; `Equal` and `Added` reproduce the corrected one.
#[must_use]
pub fn word_spans(original: &str, corrected: &str) -> Vec<WordSpan> {
    let diff = TextDiff::from_words(original, corrected);

    let mut spans: Vec<WordSpan> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SpanKind::Equal,
            ChangeTag::Delete => SpanKind::Removed,
            ChangeTag::Insert => SpanKind::Added,
        };
        match spans.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => spans.push(WordSpan {
                kind,
                text: change.value().to_string(),
            }),
        }
    }

    spans
}
