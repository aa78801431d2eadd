//! Sentence-level diff between original and corrected prose.
//!
//! The pipeline has two passes. A coarse list diff finds runs of exactly
//! equal sentences and blocks that were replaced wholesale; a fine
//! dynamic-programming aligner then pairs the sentences inside each
//! replaced block, allowing merges and splits. The result is a flat list
//! of rows that covers every sentence of both texts exactly once.

pub mod align;
pub mod blocks;
pub mod engine;
pub mod result;
pub mod score;

pub use align::align_sentences;
pub use blocks::diff_rows;
pub use engine::DiffEngine;
pub use result::{DiffResult, DiffRow, DiffSummary};
pub use score::ScoreModel;
