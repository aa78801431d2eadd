//! Segment command handler.
//!
//! Implements the `segment` subcommand for splitting a text into the
//! sentences the diff operates on, one per line or as a JSON array.

use crate::config::SegmentConfig;
use crate::pipeline::{exit_codes, read_text, write_output, OutputTarget};
use crate::text::split_sentences;
use anyhow::Result;

/// Run the segment command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_segment(config: SegmentConfig) -> Result<i32> {
    super::ensure_valid(&config)?;

    let input = read_text(&config.input)?;
    let sentences = split_sentences(&input);

    let rendered = if config.json {
        serde_json::to_string_pretty(&sentences)?
    } else {
        sentences.join("\n")
    };

    let target = OutputTarget::from_option(config.output);
    write_output(&rendered, &target, false)?;

    Ok(exit_codes::SUCCESS)
}
