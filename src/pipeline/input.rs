//! Input reading for the diff and text commands.

use std::io::Read;
use std::path::Path;

use crate::error::{ErrorContext, ProseDiffError, Result};

/// Read input text from a file, or from stdin when the path is `-`.
pub fn read_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading from stdin")?;
        return Ok(buffer);
    }

    tracing::debug!("Reading input from {}", path.display());
    std::fs::read_to_string(path).map_err(|e| ProseDiffError::io(path, e))
}
