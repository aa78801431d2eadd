//! Normalize command handler.
//!
//! Implements the `normalize` subcommand for cleaning up raw journal text
//! without diffing it against anything.

use crate::config::NormalizeConfig;
use crate::pipeline::{exit_codes, read_text, write_output, OutputTarget};
use crate::text::normalize_text;
use anyhow::Result;

/// Run the normalize command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_normalize(config: NormalizeConfig) -> Result<i32> {
    super::ensure_valid(&config)?;

    let input = read_text(&config.input)?;
    let normalized = normalize_text(&input);

    let target = OutputTarget::from_option(config.output);
    write_output(&normalized, &target, false)?;

    Ok(exit_codes::SUCCESS)
}
