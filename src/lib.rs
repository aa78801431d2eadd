//! **A sentence-level semantic diff library for edited prose.**
//!
//! `prose-tools` compares two versions of a text, typically a draft and its
//! corrected form, and reports what happened to every sentence: kept as-is,
//! reworded, merged with a neighbor, split in two, added, or removed. It is
//! built for proofreading workflows (journal entries, essays, translated
//! drafts) where a word-level diff is too noisy and a line-level diff too
//! coarse.
//!
//! The library powers both a command-line interface (CLI) and a Rust API for
//! embedding the diff in your own applications.
//!
//! ## Key Features
//!
//! - **Normalization**: Cleans up raw text (bullet markers, missing periods,
//!   stray blank lines) into one sentence per line before comparing.
//! - **Sentence Alignment**: Pairs original and corrected sentences by
//!   content-word similarity, so a reworded sentence lines up with its
//!   revision instead of producing an unrelated delete/insert pair.
//! - **Merge & Split Detection**: Recognizes when two sentences were joined
//!   into one or one was split into two, and reports them as single edits.
//! - **Flexible Reporting**: Renders results as a colored terminal summary, a
//!   side-by-side view, JSON, or a standalone HTML page.
//!
//! ## Core Concepts & Modules
//!
//! - **[`text`]**: Normalization and sentence segmentation. Everything
//!   downstream operates on the sentences produced here.
//! - **[`matching`]**: Content-word tokenization and the Jaccard similarity
//!   score used to decide whether two sentences are revisions of each other.
//! - **[`diff`]**: Home of the [`DiffEngine`], which aligns the two sentence
//!   lists and emits [`DiffRow`]s plus a [`DiffSummary`].
//! - **[`reports`]**: Report generators for every output format.
//! - **[`pipeline`]**: File reading, format auto-detection, and output
//!   routing shared by the CLI handlers.
//!
//! ## Getting Started: Diffing Two Texts
//!
//! ```
//! use prose_tools::DiffEngine;
//!
//! let engine = DiffEngine::new();
//! let result = engine.diff(
//!     "I go to the gym. It was great.",
//!     "I went to the gym. It was great.",
//! );
//!
//! assert_eq!(result.summary.modified, 1);
//! assert_eq!(result.summary.unchanged, 1);
//!
//! for row in &result.rows {
//!     println!("{}: {:?} -> {:?}", row.kind(), row.original(), row.corrected());
//! }
//! ```
//!
//! ## Rendering a Report
//!
//! Reporters implement [`ReportGenerator`] and are constructed through
//! [`reports::create_reporter`]:
//!
//! ```
//! use prose_tools::reports::{create_reporter, ReportConfig, ReportFormat};
//! use prose_tools::DiffEngine;
//!
//! let result = DiffEngine::new().diff("One here.", "One here. Two now.");
//! let reporter = create_reporter(ReportFormat::Json);
//! let report = reporter.generate_diff_report(&result, &ReportConfig::default())?;
//! assert!(report.contains("\"added\": 1"));
//! # Ok::<(), prose_tools::reports::ReportError>(())
//! ```
//!
//! ## Tuning the Alignment
//!
//! The pairing threshold comes from a [`ScoreModel`] preset (`strict`,
//! `balanced`, `permissive`). Stricter presets demand more shared vocabulary
//! before two sentences count as a revision pair:
//!
//! ```
//! use prose_tools::{DiffEngine, ScoreModel};
//!
//! let model = ScoreModel::from_preset("strict").unwrap();
//! let engine = DiffEngine::with_score_model(model);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `prose-tools` library crate. If you are
//! looking for the command-line tool, please refer to the project's README
//! or install it via `cargo install prose-tools`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize->f64 casts appear in similarity and scoring math;
    // sentence and token counts are far below the precision limit
    clippy::cast_precision_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `original`/`corrected` recur across signatures
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod matching;
pub mod pipeline;
pub mod reports;
pub mod text;

// Re-export main types for convenience
pub use config::{AlignmentConfig, AppConfig, AppConfigBuilder, OutputConfig};
pub use config::{BehaviorConfig, DiffConfig, DiffPaths, FilterConfig};
pub use config::{ConfigError, NormalizeConfig, SegmentConfig, Validatable};
pub use diff::{DiffEngine, DiffResult, DiffRow, DiffSummary, ScoreModel};
pub use error::{ErrorContext, OptionContext, ProseDiffError, Result};
pub use matching::sentence_similarity;
pub use reports::{ReportFormat, ReportGenerator};
pub use text::{normalize_text, split_sentences};
