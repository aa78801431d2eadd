//! Configuration validation for prose-tools.
//!
//! Provides validation traits and implementations for all configuration types.

use std::path::Path;

use super::types::*;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.alignment.validate());
        errors.extend(self.output.validate());
        errors.extend(self.filtering.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for AlignmentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let valid_presets = ["strict", "balanced", "permissive"];
        if !valid_presets.contains(&self.preset.as_str()) {
            errors.push(ConfigError {
                field: "alignment.preset".to_string(),
                message: format!(
                    "Invalid preset '{}'. Valid options: {}",
                    self.preset,
                    valid_presets.join(", ")
                ),
            });
        }

        if let Some(threshold) = self.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                errors.push(ConfigError {
                    field: "alignment.threshold".to_string(),
                    message: format!("Threshold must be between 0.0 and 1.0, got {}", threshold),
                });
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for FilterConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // FilterConfig contains only boolean flags that don't need validation
        Vec::new()
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // BehaviorConfig contains only boolean flags that don't need validation
        Vec::new()
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate paths exist, `-` reads stdin
        if path_missing(&self.paths.original) {
            errors.push(ConfigError {
                field: "paths.original".to_string(),
                message: format!("File not found: {}", self.paths.original.display()),
            });
        }
        if path_missing(&self.paths.corrected) {
            errors.push(ConfigError {
                field: "paths.corrected".to_string(),
                message: format!("File not found: {}", self.paths.corrected.display()),
            });
        }
        if self.paths.original == Path::new("-") && self.paths.corrected == Path::new("-") {
            errors.push(ConfigError {
                field: "paths".to_string(),
                message: "Only one side can read from stdin".to_string(),
            });
        }

        // Validate nested configs
        errors.extend(self.alignment.validate());
        errors.extend(self.output.validate());

        errors
    }
}

impl Validatable for NormalizeConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if path_missing(&self.input) {
            errors.push(ConfigError {
                field: "input".to_string(),
                message: format!("File not found: {}", self.input.display()),
            });
        }
        errors
    }
}

impl Validatable for SegmentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if path_missing(&self.input) {
            errors.push(ConfigError {
                field: "input".to_string(),
                message: format!("File not found: {}", self.input.display()),
            });
        }
        errors
    }
}

fn path_missing(path: &Path) -> bool {
    path != Path::new("-") && !path.exists()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_alignment_config_validation() {
        let config = AlignmentConfig {
            preset: "balanced".to_string(),
            threshold: None,
        };
        assert!(config.is_valid());

        let invalid = AlignmentConfig {
            preset: "invalid".to_string(),
            threshold: None,
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_alignment_config_threshold_validation() {
        let valid = AlignmentConfig {
            preset: "balanced".to_string(),
            threshold: Some(0.3),
        };
        assert!(valid.is_valid());

        let invalid = AlignmentConfig {
            preset: "balanced".to_string(),
            threshold: Some(1.5),
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError {
            field: "test_field".to_string(),
            message: "test error message".to_string(),
        };
        assert_eq!(error.to_string(), "test_field: test error message");
    }

    #[test]
    fn test_app_config_validation() {
        let valid = AppConfig::default();
        assert!(valid.is_valid());

        let mut invalid = AppConfig::default();
        invalid.alignment.preset = "invalid".to_string();
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_diff_config_allows_stdin() {
        let tmp = TempDir::new().unwrap();
        let existing = tmp.path().join("draft.txt");
        std::fs::write(&existing, "Some text.").unwrap();

        let config = DiffConfig {
            paths: DiffPaths {
                original: PathBuf::from("-"),
                corrected: existing,
            },
            output: OutputConfig::default(),
            alignment: AlignmentConfig::default(),
            filtering: FilterConfig::default(),
            behavior: BehaviorConfig::default(),
        };
        assert!(config.is_valid());
    }

    #[test]
    fn test_diff_config_rejects_stdin_on_both_sides() {
        let config = DiffConfig {
            paths: DiffPaths {
                original: PathBuf::from("-"),
                corrected: PathBuf::from("-"),
            },
            output: OutputConfig::default(),
            alignment: AlignmentConfig::default(),
            filtering: FilterConfig::default(),
            behavior: BehaviorConfig::default(),
        };

        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "paths");
    }

    #[test]
    fn test_diff_config_reports_missing_files() {
        let config = DiffConfig {
            paths: DiffPaths {
                original: PathBuf::from("/nonexistent/a.txt"),
                corrected: PathBuf::from("/nonexistent/b.txt"),
            },
            output: OutputConfig::default(),
            alignment: AlignmentConfig::default(),
            filtering: FilterConfig::default(),
            behavior: BehaviorConfig::default(),
        };

        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "paths.original");
        assert_eq!(errors[1].field, "paths.corrected");
    }
}
