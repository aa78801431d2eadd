//! Configuration types for prose-tools operations.
//!
//! Provides structured configuration for the diff, normalize, and segment
//! commands.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diff::ScoreModel;
use crate::reports::ReportFormat;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct that aggregates all configuration
/// options. It can be constructed from CLI arguments, config files, or both
/// (with CLI overriding file settings).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Alignment configuration (scoring preset, threshold)
    pub alignment: AlignmentConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Filtering options
    pub filtering: FilterConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the alignment scoring preset.
    pub fn alignment_preset(mut self, preset: impl Into<String>) -> Self {
        self.config.alignment.preset = preset.into();
        self
    }

    /// Set the similarity threshold.
    pub const fn threshold(mut self, threshold: f64) -> Self {
        self.config.alignment.threshold = Some(threshold);
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Only show sentences with changes.
    pub const fn only_changes(mut self, only: bool) -> Self {
        self.config.filtering.only_changes = only;
        self
    }

    /// Only print the summary counts.
    pub const fn stats_only(mut self, stats: bool) -> Self {
        self.config.filtering.stats_only = stats;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Alignment configuration
    pub alignment: AlignmentConfig,
    /// Filtering options
    pub filtering: FilterConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Paths for diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the original text, `-` for stdin
    pub original: PathBuf,
    /// Path to the corrected text, `-` for stdin
    pub corrected: PathBuf,
}

/// Configuration for normalize operations
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    /// Path to the input text, `-` for stdin
    pub input: PathBuf,
    /// Output file path (None for stdout)
    pub output: Option<PathBuf>,
}

/// Configuration for segment operations
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// Path to the input text, `-` for stdin
    pub input: PathBuf,
    /// Output file path (None for stdout)
    pub output: Option<PathBuf>,
    /// Emit sentences as a JSON array instead of one per line
    pub json: bool,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Alignment and scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Scoring preset name
    pub preset: String,
    /// Custom similarity threshold (overrides preset)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub threshold: Option<f64>,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            preset: "balanced".to_string(),
            threshold: None,
        }
    }
}

impl AlignmentConfig {
    /// Convert preset name to a `ScoreModel`
    #[must_use]
    pub fn to_score_model(&self) -> ScoreModel {
        let mut model = ScoreModel::from_preset(&self.preset).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown scoring preset '{}', using 'balanced'. Valid: strict, balanced, permissive",
                self.preset
            );
            ScoreModel::balanced()
        });

        // Apply custom threshold if specified
        if let Some(threshold) = self.threshold {
            model = model.with_threshold(threshold);
        }

        model
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Filtering options for diff output
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterConfig {
    /// Only show sentences with changes
    pub only_changes: bool,
    /// Only print the summary counts
    pub stats_only: bool,
}

/// Behavior flags for diff operations
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Tests
// ============================================================================
