//! Side-by-side sentence diff output similar to difftastic.

use std::fmt::Write;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DiffRow};

/// ANSI color codes
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const LINE_NUM: &str = "\x1b[38;5;242m"; // Gray for line numbers
}

/// Side-by-side diff reporter
pub struct SideBySideReporter {
    /// Total output width
    width: usize,
    /// Use colors
    use_colors: bool,
}

impl SideBySideReporter {
    /// Create a new side-by-side reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: 120,
            use_colors: true,
        }
    }

    /// Set output width
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Disable colors
    #[must_use]
    pub const fn no_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    const fn col(&self, code: &'static str) -> &'static str {
        if self.use_colors {
            code
        } else {
            ""
        }
    }

    /// Text width of one pane, excluding the number gutter and separator.
    const fn half_width(&self) -> usize {
        self.width.saturating_sub(11) / 2
    }

    fn format_header(&self, old_name: &str, new_name: &str) -> String {
        let pane_width = self.half_width() + 4;
        format!(
            "{}{:<pane_width$}{} │ {}{}{}\n",
            self.col(colors::BOLD),
            truncate_display(old_name, pane_width),
            self.col(colors::RESET),
            self.col(colors::BOLD),
            truncate_display(new_name, pane_width),
            self.col(colors::RESET),
        )
    }

    fn format_line_num(&self, num: Option<usize>, color: &'static str) -> String {
        let num_width = 3;
        match num {
            Some(n) => format!(
                "{}{:>num_width$}{}",
                self.col(color),
                n,
                self.col(colors::RESET)
            ),
            None => format!(
                "{}{:>num_width$}{}",
                self.col(colors::DIM),
                ".",
                self.col(colors::RESET)
            ),
        }
    }

    fn format_row(
        &self,
        left_num: Option<usize>,
        right_num: Option<usize>,
        row: &DiffRow,
    ) -> String {
        let half_width = self.half_width();

        let (num_color, left_text, right_text) = match row {
            DiffRow::Unchanged {
                original,
                corrected,
            } => (
                colors::LINE_NUM,
                truncate_display(original, half_width),
                truncate_display(corrected, half_width),
            ),
            DiffRow::Modified {
                original,
                corrected,
            } => (
                colors::YELLOW,
                format!(
                    "{}{}{}",
                    self.col(colors::RED),
                    truncate_display(original, half_width),
                    self.col(colors::RESET)
                ),
                format!(
                    "{}{}{}",
                    self.col(colors::GREEN),
                    truncate_display(corrected, half_width),
                    self.col(colors::RESET)
                ),
            ),
            DiffRow::Removed { original } => (
                colors::RED,
                format!(
                    "{}{}{}",
                    self.col(colors::RED),
                    truncate_display(original, half_width),
                    self.col(colors::RESET)
                ),
                format!(
                    "{}{}{}",
                    self.col(colors::DIM),
                    "...",
                    self.col(colors::RESET)
                ),
            ),
            DiffRow::Added { corrected } => (
                colors::GREEN,
                format!(
                    "{}{}{}",
                    self.col(colors::DIM),
                    "...",
                    self.col(colors::RESET)
                ),
                format!(
                    "{}{}{}",
                    self.col(colors::GREEN),
                    truncate_display(corrected, half_width),
                    self.col(colors::RESET)
                ),
            ),
        };

        let left_padding = half_width.saturating_sub(strip_ansi(&left_text).width());
        let right_padding = half_width.saturating_sub(strip_ansi(&right_text).width());

        format!(
            "{} {}{} │ {} {}{}\n",
            self.format_line_num(left_num, num_color),
            left_text,
            " ".repeat(left_padding),
            self.format_line_num(right_num, num_color),
            right_text,
            " ".repeat(right_padding),
        )
    }
}

impl Default for SideBySideReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SideBySideReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(
            out,
            "{}prose-tools{} --- {}",
            self.col(colors::CYAN),
            self.col(colors::RESET),
            config.title.as_deref().unwrap_or("sentence diff"),
        )?;

        let old_name = config.original_path.as_deref().unwrap_or("original");
        let new_name = config.corrected_path.as_deref().unwrap_or("corrected");
        out.push_str(&self.format_header(old_name, new_name));

        let pane_width = self.half_width() + 5;
        writeln!(
            out,
            "{}{}┼{}{}",
            self.col(colors::DIM),
            "─".repeat(pane_width),
            "─".repeat(pane_width),
            self.col(colors::RESET)
        )?;

        if !config.stats_only {
            let mut original_num = 0;
            let mut corrected_num = 0;

            for row in &result.rows {
                // Numbers follow the documents even when a row is filtered out
                let (left_num, right_num) = match row {
                    DiffRow::Unchanged { .. } | DiffRow::Modified { .. } => {
                        original_num += 1;
                        corrected_num += 1;
                        (Some(original_num), Some(corrected_num))
                    }
                    DiffRow::Removed { .. } => {
                        original_num += 1;
                        (Some(original_num), None)
                    }
                    DiffRow::Added { .. } => {
                        corrected_num += 1;
                        (None, Some(corrected_num))
                    }
                };

                if config.only_changes && !row.is_change() {
                    continue;
                }

                out.push_str(&self.format_row(left_num, right_num, row));
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "  {}Sentences:{} {}+{}{} added, {}-{}{} removed, {}~{}{} modified",
            self.col(colors::BOLD),
            self.col(colors::RESET),
            self.col(colors::GREEN),
            result.summary.added,
            self.col(colors::RESET),
            self.col(colors::RED),
            result.summary.removed,
            self.col(colors::RESET),
            self.col(colors::YELLOW),
            result.summary.modified,
            self.col(colors::RESET),
        )?;

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::SideBySide
    }
}

/// Truncate to a display width, ending with an ellipsis when cut.
fn truncate_display(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Strip ANSI escape codes for width calculation
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> DiffResult {
        DiffResult::from_rows(vec![
            DiffRow::Unchanged {
                original: "The sky stayed clear.".to_string(),
                corrected: "The sky stayed clear.".to_string(),
            },
            DiffRow::Modified {
                original: "I go to the gym.".to_string(),
                corrected: "I went to the gym.".to_string(),
            },
            DiffRow::Removed {
                original: "That part is gone.".to_string(),
            },
            DiffRow::Added {
                corrected: "A fresh line lands.".to_string(),
            },
        ])
    }

    fn plain_report(config: &ReportConfig) -> String {
        SideBySideReporter::new()
            .no_colors()
            .width(60)
            .generate_diff_report(&sample_result(), config)
            .unwrap()
    }

    #[test]
    fn test_panes_hold_both_documents() {
        let report = plain_report(&ReportConfig::default());

        assert!(report.contains("I go to the gym."));
        assert!(report.contains("I went to the gym."));
        assert!(report.contains("original"));
        assert!(report.contains("corrected"));
        assert!(report.contains("+1 added, -1 removed, ~1 modified"));
    }

    #[test]
    fn test_line_numbers_track_each_side() {
        let report = plain_report(&ReportConfig::default());

        let removed_line = report
            .lines()
            .find(|line| line.contains("That part is gone."))
            .unwrap();
        let added_line = report
            .lines()
            .find(|line| line.contains("A fresh line lands."))
            .unwrap();

        assert!(removed_line.starts_with("  3 "));
        assert!(removed_line.contains("│   . ..."));
        assert!(added_line.starts_with("  . ..."));
        assert!(added_line.contains("│   3 "));
    }

    #[test]
    fn test_separator_column_is_aligned() {
        let report = plain_report(&ReportConfig::default());

        let columns: Vec<usize> = report
            .lines()
            .filter(|line| line.contains('│'))
            .map(|line| {
                line.split('│')
                    .next()
                    .map(UnicodeWidthStr::width)
                    .unwrap_or(0)
            })
            .collect();

        assert!(!columns.is_empty());
        assert!(columns.iter().all(|&c| c == columns[0]));
    }

    #[test]
    fn test_wide_characters_keep_alignment() {
        let result = DiffResult::from_rows(vec![DiffRow::Unchanged {
            original: "나는 체육관에 갔다.".to_string(),
            corrected: "나는 체육관에 갔다.".to_string(),
        }]);
        let report = SideBySideReporter::new()
            .no_colors()
            .width(60)
            .generate_diff_report(&result, &ReportConfig::default())
            .unwrap();

        let row = report
            .lines()
            .find(|line| line.contains("체육관"))
            .unwrap();
        let before = row.split('│').next().unwrap();
        assert_eq!(before.width(), 29);
    }

    #[test]
    fn test_long_sentences_are_truncated() {
        let long = "This sentence keeps going well past the pane it was given to live in.";
        let result = DiffResult::from_rows(vec![DiffRow::Unchanged {
            original: long.to_string(),
            corrected: long.to_string(),
        }]);
        let report = SideBySideReporter::new()
            .no_colors()
            .width(40)
            .generate_diff_report(&result, &ReportConfig::default())
            .unwrap();

        assert!(report.contains('…'));
        assert!(!report.contains("live in."));
    }

    #[test]
    fn test_only_changes_skips_unchanged_rows() {
        let config = ReportConfig {
            only_changes: true,
            ..ReportConfig::default()
        };
        let report = plain_report(&config);

        assert!(!report.contains("The sky stayed clear."));
        // Numbering still reflects the full documents
        let modified_line = report
            .lines()
            .find(|line| line.contains("I go to the gym."))
            .unwrap();
        assert!(modified_line.starts_with("  2 "));
    }

    #[test]
    fn test_stats_only_keeps_summary() {
        let config = ReportConfig {
            stats_only: true,
            ..ReportConfig::default()
        };
        let report = plain_report(&config);

        assert!(!report.contains("I go to the gym."));
        assert!(report.contains("+1 added, -1 removed, ~1 modified"));
    }

    #[test]
    fn test_colored_rows_use_ansi_codes() {
        let report = SideBySideReporter::new()
            .width(60)
            .generate_diff_report(&sample_result(), &ReportConfig::default())
            .unwrap();

        assert!(report.contains("\x1b[31m"));
        assert!(report.contains("\x1b[32m"));
    }
}
