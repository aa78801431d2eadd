//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable listing for terminal usage:
//! one line per sentence with a change marker, word-level highlights
//! inside modified sentences, and a totals block at the end.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DiffRow};
use crate::reports::worddiff::{word_spans, SpanKind};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Render a modified pair as one line with inline word highlights.
    ///
    /// Without color, removed words appear as `[-word]` and added words
    /// as `[+word]` so the output stays readable in logs and pipes.
    fn render_modified(&self, original: &str, corrected: &str) -> String {
        let mut out = String::new();
        for span in word_spans(original, corrected) {
            match span.kind {
                SpanKind::Equal => out.push_str(&span.text),
                SpanKind::Removed => {
                    if self.colored {
                        out.push_str(&self.color(&span.text, "red"));
                    } else {
                        out.push_str(&format!("[-{}]", span.text));
                    }
                }
                SpanKind::Added => {
                    if self.colored {
                        out.push_str(&self.color(&span.text, "green"));
                    } else {
                        out.push_str(&format!("[+{}]", span.text));
                    }
                }
            }
        }
        out
    }

    fn render_row(&self, row: &DiffRow) -> String {
        match row {
            DiffRow::Unchanged { original, .. } => {
                format!("  {} {}", self.color("=", "dim"), original)
            }
            DiffRow::Modified {
                original,
                corrected,
            } => format!(
                "  {} {}",
                self.color("~", "yellow"),
                self.render_modified(original, corrected)
            ),
            DiffRow::Added { corrected } => format!(
                "  {} {}",
                self.color("+", "green"),
                self.color(corrected, "green")
            ),
            DiffRow::Removed { original } => format!(
                "  {} {}",
                self.color("-", "red"),
                self.color(original, "red")
            ),
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Prose Diff Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if let (Some(original), Some(corrected)) =
            (&config.original_path, &config.corrected_path)
        {
            lines.push(format!(
                "{}  {} → {}",
                self.color("Files:", "cyan"),
                original,
                corrected
            ));
        }

        lines.push(format!(
            "{}  {} sentences, {} changed",
            self.color("Rows:", "cyan"),
            result.summary.total_rows,
            result.summary.total_changes
        ));

        // Row listing
        if !config.stats_only && !result.rows.is_empty() {
            lines.push(String::new());
            for row in &result.rows {
                if config.only_changes && !row.is_change() {
                    continue;
                }
                lines.push(self.render_row(row));
            }
        }

        // Totals
        lines.push(String::new());
        lines.push(self.color("Changes:", "bold"));

        let added = result.summary.added;
        let removed = result.summary.removed;
        let modified = result.summary.modified;

        if added > 0 {
            lines.push(format!(
                "  {} {} added",
                self.color(&format!("+{added}"), "green"),
                if added == 1 { "sentence" } else { "sentences" }
            ));
        }
        if removed > 0 {
            lines.push(format!(
                "  {} {} removed",
                self.color(&format!("-{removed}"), "red"),
                if removed == 1 { "sentence" } else { "sentences" }
            ));
        }
        if modified > 0 {
            lines.push(format!(
                "  {} {} modified",
                self.color(&format!("~{modified}"), "yellow"),
                if modified == 1 { "sentence" } else { "sentences" }
            ));
        }
        if added == 0 && removed == 0 && modified == 0 {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
