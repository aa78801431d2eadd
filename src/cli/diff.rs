//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two versions of a text.

use crate::config::DiffConfig;
use crate::diff::{DiffEngine, DiffResult};
use crate::pipeline::{exit_codes, output_report, read_text};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    super::ensure_valid(&config)?;

    let quiet = config.behavior.quiet;

    let original = read_text(&config.paths.original)?;
    let corrected = read_text(&config.paths.corrected)?;

    let engine = DiffEngine::with_score_model(config.alignment.to_score_model());
    let result = engine.diff(&original, &corrected);

    if !quiet {
        tracing::info!(
            "Aligned {} rows ({} changed)",
            result.summary.total_rows,
            result.summary.total_changes
        );
    }

    let exit_code = determine_exit_code(&config, &result);

    output_report(&config, &result)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
const fn determine_exit_code(config: &DiffConfig, result: &DiffResult) -> i32 {
    if config.behavior.fail_on_change && result.summary.total_changes > 0 {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
