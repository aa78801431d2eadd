//! Unified error types for prose-tools.
//!
//! The diff core itself is a total function over in-memory strings and has
//! no failure modes; errors arise only at the boundaries (reading input,
//! loading configuration, rendering reports). This module provides that
//! boundary hierarchy, with rich context for debugging and user-friendly
//! messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for prose-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProseDiffError {
    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("Template rendering failed: {0}")]
    TemplateError(String),

    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for prose-tools operations
pub type Result<T> = std::result::Result<T, ProseDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ProseDiffError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ProseDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ProseDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// This trait provides methods to add context information to errors,
/// creating a chain of context that helps trace the source of problems.
///
/// # Example
///
/// ```ignore
/// use prose_tools::error::ErrorContext;
///
/// fn load_entry(path: &Path) -> Result<String> {
///     read_text(path).with_context(|| format!("loading entry from {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context,
    /// creating a chain that shows the path through the code.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error,
    /// which is more efficient when the context string is expensive to compute.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ProseDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ProseDiffError, new_ctx: &str) -> ProseDiffError {
    match err {
        ProseDiffError::Report {
            context: existing,
            source,
        } => ProseDiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ProseDiffError::Io {
            path,
            message,
            source,
        } => ProseDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ProseDiffError::Config(msg) => ProseDiffError::Config(chain_context(new_ctx, &msg)),
        ProseDiffError::Validation(msg) => ProseDiffError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| ProseDiffError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| ProseDiffError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProseDiffError::config("threshold out of range");
        assert!(err.to_string().contains("Invalid configuration"));

        let err = ProseDiffError::report(
            "rendering summary",
            ReportErrorKind::TemplateError("broken".to_string()),
        );
        let display = err.to_string();
        assert!(
            display.contains("Report") || display.contains("rendering"),
            "Error message should mention report generation: {}",
            display
        );
    }

    #[test]
    fn test_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ProseDiffError::io("/path/to/entry.txt", io_err);

        assert!(err.to_string().contains("/path/to/entry.txt"));
    }

    #[test]
    fn test_context_chaining() {
        // Create an initial error
        let initial_err: Result<()> = Err(ProseDiffError::validation("initial context"));

        // Add context - it should chain, not replace
        let err_with_context = initial_err.context("outer context");

        match err_with_context {
            Err(ProseDiffError::Validation(msg)) => {
                assert!(
                    msg.contains("outer context"),
                    "Should contain outer context: {}",
                    msg
                );
                assert!(
                    msg.contains("initial context"),
                    "Should contain initial context: {}",
                    msg
                );
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(ProseDiffError::config("base"))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        let result = outer();
        match result {
            Err(ProseDiffError::Config(msg)) => {
                // Context should be chained: "outer layer: middle layer: base"
                assert!(msg.contains("outer layer"), "Missing outer: {}", msg);
                assert!(msg.contains("middle layer"), "Missing middle: {}", msg);
                assert!(msg.contains("base"), "Missing base: {}", msg);
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        // This should NOT call the closure
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        // This SHOULD call the closure
        let err_result: Result<i32> = Err(ProseDiffError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context() {
        let some_value: Option<i32> = Some(42);
        let result = some_value.context_none("missing value");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);

        let none_value: Option<i32> = None;
        let result = none_value.context_none("missing value");
        assert!(result.is_err());
        match result {
            Err(ProseDiffError::Validation(msg)) => {
                assert_eq!(msg, "missing value");
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
        assert_eq!(
            chain_context("outer", "middle: inner"),
            "outer: middle: inner"
        );
    }
}
