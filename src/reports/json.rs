//! JSON report generator.
//!
//! Produces structured output for programmatic consumers: the summary
//! counts, the aligned rows with their `kind` tags, and tool metadata.

use chrono::Utc;
use serde::Serialize;

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DiffRow, DiffSummary};

/// Top-level JSON report structure.
#[derive(Serialize)]
struct JsonReport<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    corrected_path: Option<&'a str>,
    summary: &'a DiffSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<&'a DiffRow>>,
}

/// Tool identification block.
#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

impl ToolInfo {
    fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// JSON reporter
pub struct JsonReporter {
    /// Pretty-print the output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter with pretty-printing enabled
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit compact single-line JSON instead
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let rows = if config.stats_only {
            None
        } else if config.only_changes {
            Some(result.rows.iter().filter(|row| row.is_change()).collect())
        } else {
            Some(result.rows.iter().collect())
        };

        let report = JsonReport {
            tool: ToolInfo::current(),
            generated_at: Utc::now().to_rfc3339(),
            original_path: config.original_path.as_deref(),
            corrected_path: config.corrected_path.as_deref(),
            summary: &result.summary,
            rows,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;

        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;

    fn report_value(config: &ReportConfig) -> serde_json::Value {
        let result = DiffEngine::new().diff(
            "I go to the gym. The rest stays.",
            "I went to the gym. The rest stays.",
        );
        let json = JsonReporter::new()
            .generate_diff_report(&result, config)
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_report_structure() {
        let value = report_value(&ReportConfig::with_paths("a.txt", "b.txt"));

        assert_eq!(value["tool"]["name"], "prose-tools");
        assert_eq!(value["tool"]["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["original_path"], "a.txt");
        assert_eq!(value["corrected_path"], "b.txt");
        assert_eq!(value["summary"]["total_rows"], 2);
        assert_eq!(value["summary"]["modified"], 1);

        let rows = value["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["kind"], "modified");
        assert_eq!(rows[1]["kind"], "unchanged");
    }

    #[test]
    fn test_stats_only_drops_rows() {
        let config = ReportConfig {
            stats_only: true,
            ..ReportConfig::default()
        };
        let value = report_value(&config);
        assert!(value.get("rows").is_none());
        assert_eq!(value["summary"]["total_rows"], 2);
    }

    #[test]
    fn test_only_changes_filters_rows() {
        let config = ReportConfig {
            only_changes: true,
            ..ReportConfig::default()
        };
        let value = report_value(&config);
        let rows = value["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["kind"], "modified");
    }

    #[test]
    fn test_absent_paths_are_omitted() {
        let value = report_value(&ReportConfig::default());
        assert!(value.get("original_path").is_none());
        assert!(value.get("corrected_path").is_none());
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let result = DiffEngine::new().diff("Same here.", "Same here.");
        let json = JsonReporter::new()
            .compact()
            .generate_diff_report(&result, &ReportConfig::default())
            .unwrap();
        assert_eq!(json.lines().count(), 1);
    }

    #[test]
    fn test_generated_at_is_rfc3339() {
        let value = report_value(&ReportConfig::default());
        let stamp = value["generated_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}
