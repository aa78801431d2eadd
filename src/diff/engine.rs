//! The diff engine tying normalization, segmentation, and alignment together.

use crate::diff::blocks::diff_rows;
use crate::diff::result::DiffResult;
use crate::diff::score::ScoreModel;
use crate::text::split_sentences;

/// Sentence-level diff engine.
///
/// Holds the scoring model and runs the full pipeline: both inputs are
/// normalized and segmented, then coarse-diffed and aligned. The engine is
/// stateless between calls and cheap to share.
///
/// # Examples
///
/// ```
/// use prose_tools::diff::DiffEngine;
///
/// let engine = DiffEngine::new();
/// let result = engine.diff("i go gym", "I went to the gym.");
/// assert_eq!(result.summary.modified, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    model: ScoreModel,
}

impl DiffEngine {
    /// Create an engine with the balanced scoring model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a specific scoring model.
    #[must_use]
    pub const fn with_score_model(model: ScoreModel) -> Self {
        Self { model }
    }

    /// The scoring model in use.
    #[must_use]
    pub const fn score_model(&self) -> &ScoreModel {
        &self.model
    }

    /// Diff two raw texts into aligned sentence rows.
    ///
    /// Accepts any free-form text on either side; empty or whitespace-only
    /// input simply contributes no sentences.
    pub fn diff(&self, original: &str, corrected: &str) -> DiffResult {
        let original_sentences = split_sentences(original);
        let corrected_sentences = split_sentences(corrected);

        tracing::debug!(
            original_sentences = original_sentences.len(),
            corrected_sentences = corrected_sentences.len(),
            "aligning sentence sequences"
        );

        let rows = diff_rows(&original_sentences, &corrected_sentences, &self.model);
        DiffResult::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::result::DiffRow;

    #[test]
    fn test_empty_inputs_produce_empty_result() {
        let result = DiffEngine::new().diff("", "");
        assert!(result.rows.is_empty());
        assert!(!result.has_changes());
    }

    #[test]
    fn test_identical_text_is_all_unchanged() {
        let text = "I woke up late. The coffee was cold. Work went fine anyway.";
        let result = DiffEngine::new().diff(text, text);
        assert_eq!(result.summary.total_rows, 3);
        assert_eq!(result.summary.unchanged, 3);
        assert_eq!(result.summary.total_changes, 0);
    }

    #[test]
    fn test_single_edit_is_one_modified_row() {
        let result = DiffEngine::new().diff(
            "Today I go to the gym. It was crowded.",
            "Today I went to the gym. It was crowded.",
        );
        assert_eq!(result.summary.modified, 1);
        assert_eq!(result.summary.unchanged, 1);
        assert!(result.has_changes());
    }

    #[test]
    fn test_inputs_are_normalized_before_diffing() {
        // Bullets are stripped and missing periods appended on both sides,
        // so the only difference left is the capitalization fix.
        let result = DiffEngine::new().diff(
            "- i like cats\n- i like dogs",
            "- I like cats.\n- I like dogs.",
        );
        assert_eq!(result.summary.total_rows, 2);
        assert_eq!(result.summary.modified, 2);
        assert_eq!(
            result.rows[0],
            DiffRow::Modified {
                original: "i like cats.".to_string(),
                corrected: "I like cats.".to_string(),
            }
        );
    }

    #[test]
    fn test_threshold_controls_merge_aggressiveness() {
        // The merged pair shares two tokens in nine, which clears the
        // balanced threshold but not the strict one.
        let original = "I visited the dentist clinic. My tooth hurt badly yesterday.";
        let corrected = "I visited the dentist office.";

        let balanced = DiffEngine::new().diff(original, corrected);
        assert_eq!(balanced.summary.total_rows, 1);
        assert_eq!(balanced.summary.modified, 1);

        let strict = DiffEngine::with_score_model(ScoreModel::strict()).diff(original, corrected);
        assert_eq!(strict.summary.total_rows, 2);
        assert_eq!(strict.summary.modified, 1);
        assert_eq!(strict.summary.removed, 1);
    }
}
