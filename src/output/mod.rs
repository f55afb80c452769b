//! Report writers.
//!
//! Reports go to any `Write` sink through [`GraphPrinter::print`](crate::printer::GraphPrinter::print); this
//! module adds the file and in-memory conveniences.

pub mod text;

pub use text::{render_to_string, write_report};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
