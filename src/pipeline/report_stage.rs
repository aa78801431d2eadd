//! Report output stage.
//!
//! Handles generating and writing diff reports to the configured destination.

use anyhow::Result;

use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::reports::{create_reporter_with_options, ReportConfig};

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Output a diff report to the configured destination.
///
/// Handles format auto-detection, color control, and writing to file or
/// stdout.
pub fn output_report(config: &DiffConfig, result: &DiffResult) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_format = auto_detect_format(config.output.format, &output_target);

    let report_config = ReportConfig {
        only_changes: config.filtering.only_changes,
        stats_only: config.filtering.stats_only,
        ..ReportConfig::with_paths(
            config.paths.original.to_string_lossy(),
            config.paths.corrected.to_string_lossy(),
        )
    };

    let use_color = should_use_color(config.output.no_color) && output_target.is_terminal();
    let reporter = create_reporter_with_options(effective_format, use_color);
    let report = reporter.generate_diff_report(result, &report_config)?;

    write_output(&report, &output_target, config.behavior.quiet)
}
