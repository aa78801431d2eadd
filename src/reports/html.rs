//! HTML report generator.

use std::fmt::Write;

use super::escape::escape_html;
use super::worddiff::{word_spans, SpanKind};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DiffRow};

/// HTML report generator
pub struct HtmlReporter {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlReporter {
    /// Create a new HTML reporter
    pub fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    fn get_styles(&self) -> &'static str {
        r#"
        <style>
            :root {
                --bg-color: #1e1e2e;
                --text-color: #cdd6f4;
                --accent-color: #89b4fa;
                --success-color: #a6e3a1;
                --warning-color: #f9e2af;
                --error-color: #f38ba8;
                --border-color: #45475a;
                --card-bg: #313244;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.6;
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
            }

            h1, h2, h3 {
                color: var(--accent-color);
            }

            .header {
                border-bottom: 2px solid var(--border-color);
                padding-bottom: 20px;
                margin-bottom: 30px;
            }

            .summary-cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 20px;
                margin-bottom: 30px;
            }

            .card {
                background-color: var(--card-bg);
                border-radius: 8px;
                padding: 20px;
                border: 1px solid var(--border-color);
            }

            .card-title {
                font-size: 0.9em;
                color: #a6adc8;
                margin-bottom: 10px;
            }

            .card-value {
                font-size: 2em;
                font-weight: bold;
            }

            .card-value.added { color: var(--success-color); }
            .card-value.removed { color: var(--error-color); }
            .card-value.modified { color: var(--warning-color); }

            table {
                width: 100%;
                border-collapse: collapse;
                margin-bottom: 30px;
                background-color: var(--card-bg);
                border-radius: 8px;
                overflow: hidden;
            }

            th, td {
                padding: 12px 15px;
                text-align: left;
                border-bottom: 1px solid var(--border-color);
            }

            th {
                background-color: #45475a;
                font-weight: 600;
            }

            tr:hover {
                background-color: #3b3d4d;
            }

            .badge {
                display: inline-block;
                padding: 2px 8px;
                border-radius: 4px;
                font-size: 0.85em;
                font-weight: 500;
            }

            .badge-added { background-color: rgba(166, 227, 161, 0.2); color: var(--success-color); }
            .badge-removed { background-color: rgba(243, 139, 168, 0.2); color: var(--error-color); }
            .badge-modified { background-color: rgba(249, 226, 175, 0.2); color: var(--warning-color); }
            .badge-unchanged { background-color: rgba(110, 118, 129, 0.3); color: #8b949e; }

            .word-del {
                background-color: rgba(243, 139, 168, 0.25);
                color: var(--error-color);
                text-decoration: line-through;
                border-radius: 3px;
                padding: 0 2px;
            }

            .word-ins {
                background-color: rgba(166, 227, 161, 0.25);
                color: var(--success-color);
                border-radius: 3px;
                padding: 0 2px;
            }

            .section {
                margin-bottom: 40px;
            }

            .footer {
                margin-top: 40px;
                padding-top: 20px;
                border-top: 1px solid var(--border-color);
                font-size: 0.9em;
                color: #a6adc8;
            }
        </style>
        "#
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut html = String::new();

        let title = config
            .title
            .clone()
            .unwrap_or_else(|| "Prose Diff Report".to_string());

        // HTML header
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{}</title>", escape_html(&title))?;
        if self.include_styles {
            writeln!(html, "{}", self.get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        // Header
        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <h1>{}</h1>", escape_html(&title))?;
        if let (Some(original), Some(corrected)) =
            (&config.original_path, &config.corrected_path)
        {
            writeln!(
                html,
                "    <p>Comparing: {} → {}</p>",
                escape_html(original),
                escape_html(corrected)
            )?;
        }
        writeln!(
            html,
            "    <p>Generated by prose-tools v{} on {}</p>",
            env!("CARGO_PKG_VERSION"),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(html, "</div>")?;

        // Summary cards
        writeln!(html, "<div class=\"summary-cards\">")?;
        writeln!(html, "    <div class=\"card\">")?;
        writeln!(html, "        <div class=\"card-title\">Sentences</div>")?;
        writeln!(
            html,
            "        <div class=\"card-value\">{}</div>",
            result.summary.total_rows
        )?;
        writeln!(html, "    </div>")?;

        writeln!(html, "    <div class=\"card\">")?;
        writeln!(html, "        <div class=\"card-title\">Added</div>")?;
        writeln!(
            html,
            "        <div class=\"card-value added\">+{}</div>",
            result.summary.added
        )?;
        writeln!(html, "    </div>")?;

        writeln!(html, "    <div class=\"card\">")?;
        writeln!(html, "        <div class=\"card-title\">Removed</div>")?;
        writeln!(
            html,
            "        <div class=\"card-value removed\">-{}</div>",
            result.summary.removed
        )?;
        writeln!(html, "    </div>")?;

        writeln!(html, "    <div class=\"card\">")?;
        writeln!(html, "        <div class=\"card-title\">Modified</div>")?;
        writeln!(
            html,
            "        <div class=\"card-value modified\">~{}</div>",
            result.summary.modified
        )?;
        writeln!(html, "    </div>")?;
        writeln!(html, "</div>")?;

        // Sentence table
        if !config.stats_only && !result.rows.is_empty() {
            writeln!(html, "<div class=\"section\">")?;
            writeln!(html, "    <h2>Sentence Changes</h2>")?;
            writeln!(html, "    <table>")?;
            writeln!(html, "        <thead>")?;
            writeln!(html, "            <tr>")?;
            writeln!(html, "                <th>Status</th>")?;
            writeln!(html, "                <th>Original</th>")?;
            writeln!(html, "                <th>Corrected</th>")?;
            writeln!(html, "            </tr>")?;
            writeln!(html, "        </thead>")?;
            writeln!(html, "        <tbody>")?;

            for row in &result.rows {
                if config.only_changes && !row.is_change() {
                    continue;
                }

                let (badge_class, label, left_cell, right_cell) = match row {
                    DiffRow::Unchanged {
                        original,
                        corrected,
                    } => (
                        "badge-unchanged",
                        "Unchanged",
                        escape_html(original),
                        escape_html(corrected),
                    ),
                    DiffRow::Modified {
                        original,
                        corrected,
                    } => {
                        let (left, right) = word_marked_cells(original, corrected);
                        ("badge-modified", "Modified", left, right)
                    }
                    DiffRow::Added { corrected } => (
                        "badge-added",
                        "Added",
                        "-".to_string(),
                        escape_html(corrected),
                    ),
                    DiffRow::Removed { original } => (
                        "badge-removed",
                        "Removed",
                        escape_html(original),
                        "-".to_string(),
                    ),
                };

                writeln!(html, "            <tr>")?;
                writeln!(
                    html,
                    "                <td><span class=\"badge {}\">{}</span></td>",
                    badge_class, label
                )?;
                writeln!(html, "                <td>{}</td>", left_cell)?;
                writeln!(html, "                <td>{}</td>", right_cell)?;
                writeln!(html, "            </tr>")?;
            }

            writeln!(html, "        </tbody>")?;
            writeln!(html, "    </table>")?;
            writeln!(html, "</div>")?;
        }

        // Footer
        writeln!(html, "<div class=\"footer\">")?;
        writeln!(html, "    <p>Generated by prose-tools</p>")?;
        writeln!(html, "</div>")?;

        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}

/// Render both cells of a modified row with word-level change marks.
fn word_marked_cells(original: &str, corrected: &str) -> (String, String) {
    let mut left = String::new();
    let mut right = String::new();

    for span in word_spans(original, corrected) {
        let text = escape_html(&span.text);
        match span.kind {
            SpanKind::Equal => {
                left.push_str(&text);
                right.push_str(&text);
            }
            SpanKind::Removed => {
                left.push_str(&format!("<span class=\"word-del\">{}</span>", text));
            }
            SpanKind::Added => {
                right.push_str(&format!("<span class=\"word-ins\">{}</span>", text));
            }
        }
    }

    (left, right)
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
            DiffRow::Added {
                corrected: "A fresh line lands.".to_string(),
            },
        ])
    }

    fn render(config: &ReportConfig) -> String {
        HtmlReporter::new()
            .generate_diff_report(&sample_result(), config)
            .unwrap()
    }

    #[test]
    fn test_report_is_standalone_html() {
        let html = render(&ReportConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<title>Prose Diff Report</title>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_summary_cards_show_counts() {
        let html = render(&ReportConfig::default());

        assert!(html.contains("<div class=\"card-value\">3</div>"));
        assert!(html.contains("<div class=\"card-value added\">+1</div>"));
        assert!(html.contains("<div class=\"card-value removed\">-0</div>"));
        assert!(html.contains("<div class=\"card-value modified\">~1</div>"));
    }

    #[test]
    fn test_modified_rows_mark_words() {
        let html = render(&ReportConfig::default());

        assert!(html.contains("<span class=\"word-del\">go</span>"));
        assert!(html.contains("<span class=\"word-ins\">went</span>"));
    }

    #[test]
    fn test_sentence_text_is_escaped() {
        let result = DiffResult::from_rows(vec![DiffRow::Removed {
            original: "<script>alert(\"x\")</script> & more.".to_string(),
        }]);
        let html = HtmlReporter::new()
            .generate_diff_report(&result, &ReportConfig::default())
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more."));
    }

    #[test]
    fn test_title_and_paths_come_from_config() {
        let config = ReportConfig {
            title: Some("Tuesday entry".to_string()),
            ..ReportConfig::with_paths("draft.txt", "edited.txt")
        };
        let html = render(&config);

        assert!(html.contains("<title>Tuesday entry</title>"));
        assert!(html.contains("Comparing: draft.txt → edited.txt"));
    }

    #[test]
    fn test_only_changes_hides_unchanged_rows() {
        let config = ReportConfig {
            only_changes: true,
            ..ReportConfig::default()
        };
        let html = render(&config);

        assert!(!html.contains("The sky stayed clear."));
        assert!(html.contains("badge-modified"));
    }

    #[test]
    fn test_stats_only_drops_the_table() {
        let config = ReportConfig {
            stats_only: true,
            ..ReportConfig::default()
        };
        let html = render(&config);

        assert!(!html.contains("<table>"));
        assert!(html.contains("summary-cards"));
    }
}
