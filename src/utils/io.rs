//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to a file, replacing what was there.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        Error::internal_io(
            format!("{}: {}", path.display(), e),
            Some(operation.to_string()),
        )
    })
}

/// Copy a file, mapping failures to `Error::internal_io` with the paths involved.
pub fn copy_file(from: &Path, to: &Path, operation: &str) -> Result<()> {
    fs::copy(from, to).map(|_| ()).map_err(|e| {
        Error::internal_io(
            format!("{} -> {}: {}", from.display(), to.display(), e),
            Some(operation.to_string()),
        )
    })
}

/// Remove a single file with standardized error handling.
pub fn remove_file(path: &Path, operation: &str) -> Result<()> {
    fs::remove_file(path).map_err(|e| {
        Error::internal_io(
            format!("{}: {}", path.display(), e),
            Some(operation.to_string()),
        )
    })
}
