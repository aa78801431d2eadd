//! Pipeline orchestration for diff operations.
//!
//! This module provides shared orchestration logic for read → diff → report
//! workflows, reducing duplication across CLI command handlers.

mod input;
mod output;
mod report_stage;

pub use input::read_text;
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::output_report;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or no --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}
