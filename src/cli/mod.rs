//! CLI command handlers.
//!
//! Each subcommand gets a testable `run_*` handler that is invoked by
//! `main.rs`. Handlers take a fully resolved config struct, validate it,
//! and return the process exit code for the caller to apply.

mod diff;
mod normalize;
mod segment;

pub use diff::run_diff;
pub use normalize::run_normalize;
pub use segment::run_segment;

// Re-export config types for convenience
pub use crate::config::{DiffConfig, NormalizeConfig, SegmentConfig};

use crate::config::Validatable;
use anyhow::Result;

/// Bail with every validation error joined into one message.
fn ensure_valid(config: &impl Validatable) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow::bail!("Invalid configuration:\n  {}", details.join("\n  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DiffConfig, DiffPaths};
    use std::path::PathBuf;

    #[test]
    fn test_ensure_valid_collects_all_errors() {
        let config = DiffConfig {
            paths: DiffPaths {
                original: PathBuf::from("/nonexistent/a.txt"),
                corrected: PathBuf::from("/nonexistent/b.txt"),
            },
            output: crate::config::OutputConfig::default(),
            alignment: crate::config::AlignmentConfig::default(),
            filtering: crate::config::FilterConfig::default(),
            behavior: crate::config::BehaviorConfig::default(),
        };
        let err = ensure_valid(&config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("paths.original"));
        assert!(message.contains("paths.corrected"));
    }

    #[test]
    fn test_ensure_valid_passes_clean_config() {
        let config = crate::config::AppConfig::default();
        assert!(ensure_valid(&config).is_ok());
    }
}
