//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for diff reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Auto-detect: summary if stdout is a terminal, JSON otherwise
    #[default]
    Auto,
    /// Compact human-readable summary with inline word highlights
    Summary,
    /// Structured JSON output
    Json,
    /// Two-column terminal view
    SideBySide,
    /// Standalone HTML report
    Html,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::SideBySide => write!(f, "side-by-side"),
            ReportFormat::Html => write!(f, "html"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path of the original text, shown in report headers
    pub original_path: Option<String>,
    /// Path of the corrected text, shown in report headers
    pub corrected_path: Option<String>,
    /// Title override for titled formats
    pub title: Option<String>,
    /// Omit unchanged rows from row listings
    pub only_changes: bool,
    /// Emit counts only, no row listings
    pub stats_only: bool,
}

impl ReportConfig {
    /// Create a config carrying the two input paths.
    #[must_use]
    pub fn with_paths(original: impl Into<String>, corrected: impl Into<String>) -> Self {
        Self {
            original_path: Some(original.into()),
            corrected_path: Some(corrected.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_cli_names() {
        assert_eq!(ReportFormat::Auto.to_string(), "auto");
        assert_eq!(ReportFormat::SideBySide.to_string(), "side-by-side");
        assert_eq!(ReportFormat::Html.to_string(), "html");
    }

    #[test]
    fn test_format_serializes_kebab_case() {
        let json = serde_json::to_string(&ReportFormat::SideBySide).unwrap();
        assert_eq!(json, r#""side-by-side""#);
        let back: ReportFormat = serde_json::from_str(r#""summary""#).unwrap();
        assert_eq!(back, ReportFormat::Summary);
    }

    #[test]
    fn test_with_paths() {
        let config = ReportConfig::with_paths("a.txt", "b.txt");
        assert_eq!(config.original_path.as_deref(), Some("a.txt"));
        assert_eq!(config.corrected_path.as_deref(), Some("b.txt"));
        assert!(!config.only_changes);
    }
}
