//! Sentence alignment within a replaced block.
//!
//! When the coarse pass reports "these original sentences became those
//! corrected sentences", this module decides how they correspond. A small
//! dynamic program permits one-to-one pairings, two-into-one merges, and
//! one-into-two splits alongside plain insertions and deletions, scored by
//! token similarity.

use crate::diff::result::DiffRow;
use crate::diff::score::ScoreModel;
use crate::matching::sentence_similarity;

/// One transition in the alignment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Pair one original sentence with one corrected sentence.
    Match,
    /// Pair two original sentences with one corrected sentence.
    Merge,
    /// Pair one original sentence with two corrected sentences.
    Split,
    /// Consume one original sentence with no counterpart.
    Delete,
    /// Consume one corrected sentence with no counterpart.
    Insert,
}

/// Align the sentences of a replaced block.
///
/// Produces rows covering every input sentence exactly once, in document
/// order. Paired sentences come out as [`DiffRow::Modified`] regardless of
/// how weak the pairing is; only explicit gap steps produce
/// [`DiffRow::Removed`] and [`DiffRow::Added`]. Merged originals and split
/// corrections are joined with a single space in their row.
#[must_use]
pub fn align_sentences(removed: &[String], added: &[String], model: &ScoreModel) -> Vec<DiffRow> {
    let n = removed.len();
    let m = added.len();

    // dp[i][j] is the best score pairing the first i removed sentences with
    // the first j added ones. Gaps touching the block edges are free: the
    // block boundaries came from the coarse diff and are not up for debate.
    let mut dp = vec![vec![f64::NEG_INFINITY; m + 1]; n + 1];
    let mut steps: Vec<Vec<Option<Step>>> = vec![vec![None; m + 1]; n + 1];
    for (i, dp_row) in dp.iter_mut().enumerate() {
        dp_row[0] = 0.0;
        if i == 0 {
            dp_row.fill(0.0);
        }
    }

    for i in 1..=n {
        for j in 1..=m {
            // Candidates in preference order; strictly-greater comparison
            // keeps the earliest candidate on ties, so equal scores resolve
            // as match over merge over split over delete over insert.
            let mut best =
                dp[i - 1][j - 1] + model.pair_score(sentence_similarity(&removed[i - 1], &added[j - 1]));
            let mut step = Step::Match;

            if i >= 2 {
                let merged = format!("{} {}", removed[i - 2], removed[i - 1]);
                let score =
                    dp[i - 2][j - 1] + model.pair_score(sentence_similarity(&merged, &added[j - 1]));
                if score > best {
                    best = score;
                    step = Step::Merge;
                }
            }

            if j >= 2 {
                let split = format!("{} {}", added[j - 2], added[j - 1]);
                let score =
                    dp[i - 1][j - 2] + model.pair_score(sentence_similarity(&removed[i - 1], &split));
                if score > best {
                    best = score;
                    step = Step::Split;
                }
            }

            let delete = dp[i - 1][j] + model.gap_penalty;
            if delete > best {
                best = delete;
                step = Step::Delete;
            }

            let insert = dp[i][j - 1] + model.gap_penalty;
            if insert > best {
                best = insert;
                step = Step::Insert;
            }

            dp[i][j] = best;
            steps[i][j] = Some(step);
        }
    }

    // Walk back from the full alignment, emitting rows in reverse. At the
    // table edges only one move is legal, whatever the step table says.
    let mut rows = Vec::new();
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        let step = if j == 0 {
            Step::Delete
        } else if i == 0 {
            Step::Insert
        } else {
            steps[i][j].unwrap_or(Step::Delete)
        };

        match step {
            Step::Match => {
                rows.push(DiffRow::Modified {
                    original: removed[i - 1].clone(),
                    corrected: added[j - 1].clone(),
                });
                i -= 1;
                j -= 1;
            }
            Step::Merge => {
                rows.push(DiffRow::Modified {
                    original: format!("{} {}", removed[i - 2], removed[i - 1]),
                    corrected: added[j - 1].clone(),
                });
                i -= 2;
                j -= 1;
            }
            Step::Split => {
                rows.push(DiffRow::Modified {
                    original: removed[i - 1].clone(),
                    corrected: format!("{} {}", added[j - 2], added[j - 1]),
                });
                i -= 1;
                j -= 2;
            }
            Step::Delete => {
                rows.push(DiffRow::Removed {
                    original: removed[i - 1].clone(),
                });
                i -= 1;
            }
            Step::Insert => {
                rows.push(DiffRow::Added {
                    corrected: added[j - 1].clone(),
                });
                j -= 1;
            }
        }
    }

    rows.reverse();
    rows
}
