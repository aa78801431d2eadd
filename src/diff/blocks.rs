//! Coarse diff over sentence sequences.
//!
//! The first pass treats sentences as opaque items and runs a standard
//! list diff. Runs of exactly equal sentences become `unchanged` rows;
//! each replaced run is handed to the fine-grained aligner; removed or
//! added runs with no counterpart become plain `removed`/`added` rows.

use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::diff::align::align_sentences;
use crate::diff::result::DiffRow;
use crate::diff::score::ScoreModel;

/// Diff two sentence sequences into aligned rows.
#[must_use]
pub fn diff_rows(original: &[String], corrected: &[String], model: &ScoreModel) -> Vec<DiffRow> {
    let ops = capture_diff_slices(Algorithm::Myers, original, corrected);

    let mut rows = Vec::new();
    let mut idx = 0;
    while idx < ops.len() {
        match ops[idx] {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                for offset in 0..len {
                    rows.push(DiffRow::Unchanged {
                        original: original[old_index + offset].clone(),
                        corrected: corrected[new_index + offset].clone(),
                    });
                }
                idx += 1;
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                rows.extend(align_sentences(
                    &original[old_index..old_index + old_len],
                    &corrected[new_index..new_index + new_len],
                    model,
                ));
                idx += 1;
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                // A removed run directly followed by an added run is really
                // one replacement; align the two runs against each other.
                if let Some(&DiffOp::Insert {
                    new_index, new_len, ..
                }) = ops.get(idx + 1)
                {
                    rows.extend(align_sentences(
                        &original[old_index..old_index + old_len],
                        &corrected[new_index..new_index + new_len],
                        model,
                    ));
                    idx += 2;
                } else {
                    for sentence in &original[old_index..old_index + old_len] {
                        rows.push(DiffRow::Removed {
                            original: sentence.clone(),
                        });
                    }
                    idx += 1;
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for sentence in &corrected[new_index..new_index + new_len] {
                    rows.push(DiffRow::Added {
                        corrected: sentence.clone(),
                    });
                }
                idx += 1;
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn rows_for(original: &[&str], corrected: &[&str]) -> Vec<DiffRow> {
        diff_rows(
            &sentences(original),
            &sentences(corrected),
            &ScoreModel::balanced(),
        )
    }

    #[test]
    fn test_both_empty() {
        assert!(rows_for(&[], &[]).is_empty());
    }

    #[test]
    fn test_identical_sequences_are_unchanged() {
        let rows = rows_for(
            &["I woke up at seven.", "Breakfast was toast."],
            &["I woke up at seven.", "Breakfast was toast."],
        );
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| !row.is_change()));
    }

    #[test]
    fn test_pure_insertion() {
        let rows = rows_for(&[], &["A new start.", "Another line."]);
        assert_eq!(
            rows,
            vec![
                DiffRow::Added {
                    corrected: "A new start.".to_string()
                },
                DiffRow::Added {
                    corrected: "Another line.".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_pure_deletion() {
        let rows = rows_for(&["A old start.", "Another line."], &[]);
        assert_eq!(
            rows,
            vec![
                DiffRow::Removed {
                    original: "A old start.".to_string()
                },
                DiffRow::Removed {
                    original: "Another line.".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_edit_between_unchanged_neighbors() {
        let rows = rows_for(
            &["Hello from my desk.", "I go gym today.", "See you tomorrow."],
            &[
                "Hello from my desk.",
                "I went to the gym today.",
                "See you tomorrow.",
            ],
        );
        assert_eq!(rows.len(), 3);
        assert!(matches!(rows[0], DiffRow::Unchanged { .. }));
        assert_eq!(
            rows[1],
            DiffRow::Modified {
                original: "I go gym today.".to_string(),
                corrected: "I went to the gym today.".to_string(),
            }
        );
        assert!(matches!(rows[2], DiffRow::Unchanged { .. }));
    }

    #[test]
    fn test_insertion_between_unchanged_neighbors() {
        let rows = rows_for(
            &["The trip starts Monday.", "We return Friday."],
            &[
                "The trip starts Monday.",
                "Packing is almost done.",
                "We return Friday.",
            ],
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[1],
            DiffRow::Added {
                corrected: "Packing is almost done.".to_string()
            }
        );
    }

    #[test]
    fn test_trailing_removal() {
        let rows = rows_for(
            &["The first part stays.", "This part got cut."],
            &["The first part stays."],
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            DiffRow::Removed {
                original: "This part got cut.".to_string()
            }
        );
    }

    #[test]
    fn test_rows_cover_both_sides_in_order() {
        let original = sentences(&[
            "Monday was slow.",
            "I skipped the gym.",
            "Dinner was ramen.",
            "Sleep came late.",
        ]);
        let corrected = sentences(&[
            "Monday was slow.",
            "I finally visited the gym.",
            "Dinner was instant ramen.",
            "I also read a chapter.",
            "Sleep came late.",
        ]);
        let rows = diff_rows(&original, &corrected, &ScoreModel::balanced());

        let originals: Vec<&str> = rows.iter().filter_map(DiffRow::original).collect();
        let correcteds: Vec<&str> = rows.iter().filter_map(DiffRow::corrected).collect();
        assert_eq!(originals.join(" "), original.join(" "));
        assert_eq!(correcteds.join(" "), corrected.join(" "));
    }
}
