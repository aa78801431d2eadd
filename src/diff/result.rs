//! Diff result structures.

use serde::{Deserialize, Serialize};

/// One row of an aligned sentence diff.
///
/// Every row carries whole sentences from the original text, the corrected
/// text, or both. Merges and splits are folded into `Modified`: the joined
/// side holds its sentences glued with a single space, so concatenating the
/// `original` fields of all rows always reproduces the segmented original
/// text, and likewise for `corrected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffRow {
    /// Sentence is identical on both sides.
    Unchanged {
        original: String,
        corrected: String,
    },
    /// Sentence was edited, merged, or split.
    Modified {
        original: String,
        corrected: String,
    },
    /// Sentence exists only in the corrected text.
    Added { corrected: String },
    /// Sentence exists only in the original text.
    Removed { original: String },
}

impl DiffRow {
    /// The original-side text, if this row has one.
    #[must_use]
    pub fn original(&self) -> Option<&str> {
        match self {
            Self::Unchanged { original, .. }
            | Self::Modified { original, .. }
            | Self::Removed { original } => Some(original),
            Self::Added { .. } => None,
        }
    }

    /// The corrected-side text, if this row has one.
    #[must_use]
    pub fn corrected(&self) -> Option<&str> {
        match self {
            Self::Unchanged { corrected, .. }
            | Self::Modified { corrected, .. }
            | Self::Added { corrected } => Some(corrected),
            Self::Removed { .. } => None,
        }
    }

    /// Short label for the row kind, matching the serialized tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unchanged { .. } => "unchanged",
            Self::Modified { .. } => "modified",
            Self::Added { .. } => "added",
            Self::Removed { .. } => "removed",
        }
    }

    /// Whether this row represents an edit of any kind.
    #[must_use]
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}

/// Complete result of a sentence diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Aligned rows in document order.
    pub rows: Vec<DiffRow>,
    /// Summary statistics.
    pub summary: DiffSummary,
}

impl DiffResult {
    /// Build a result from rows, computing the summary.
    pub fn from_rows(rows: Vec<DiffRow>) -> Self {
        let summary = DiffSummary::from_rows(&rows);
        Self { rows, summary }
    }

    /// Check if any row differs between the two texts.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.summary.total_changes > 0
    }
}

impl Default for DiffResult {
    fn default() -> Self {
        Self::from_rows(Vec::new())
    }
}

/// Summary statistics for the diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub total_rows: usize,
    pub unchanged: usize,
    pub modified: usize,
    pub added: usize,
    pub removed: usize,
    /// Rows that are not `unchanged`.
    pub total_changes: usize,
}

impl DiffSummary {
    /// Count rows by kind.
    #[must_use]
    pub fn from_rows(rows: &[DiffRow]) -> Self {
        let mut summary = Self {
            total_rows: rows.len(),
            ..Self::default()
        };

        for row in rows {
            match row {
                DiffRow::Unchanged { .. } => summary.unchanged += 1,
                DiffRow::Modified { .. } => summary.modified += 1,
                DiffRow::Added { .. } => summary.added += 1,
                DiffRow::Removed { .. } => summary.removed += 1,
            }
        }
        summary.total_changes = summary.modified + summary.added + summary.removed;

        summary
    }
}
