//! Configuration module for prose-tools.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use prose_tools::config::AppConfig;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .alignment_preset("strict")
//!     .threshold(0.3)
//!     .fail_on_change(true)
//!     .build();
//!
//! // Load from file
//! use prose_tools::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.prose-tools.yaml` file in your project root or `~/.config/prose-tools/`:
//!
//! ```yaml
//! alignment:
//!   preset: strict
//!   threshold: 0.3
//! behavior:
//!   fail_on_change: true
//! ```

pub mod file;
mod types;
mod validation;

// Re-export main types
pub use types::{
    AlignmentConfig, AppConfig, AppConfigBuilder, BehaviorConfig, DiffConfig, DiffPaths,
    FilterConfig, NormalizeConfig, OutputConfig, SegmentConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.prose-tools.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
