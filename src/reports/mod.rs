//! Report generation for diff results.
//!
//! This module provides multiple output formats for sentence diff results:
//! - Summary: Compact shell-friendly output with word-level change marks
//! - JSON: Structured data for programmatic integration
//! - Side-by-side: Terminal diff output like difftastic
//! - HTML: Standalone page for sharing a marked-up comparison
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Diffed text is user-written prose and must be escaped before it is
//! embedded in an HTML report.

pub mod escape;
pub mod worddiff;

mod html;
mod json;
mod sidebyside;
mod summary;
mod types;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use sidebyside::SideBySideReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat};

use std::io::Write;

use thiserror::Error;

use crate::diff::DiffResult;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::SideBySide => {
            if use_color {
                Box::new(SideBySideReporter::new())
            } else {
                Box::new(SideBySideReporter::new().no_colors())
            }
        }
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
