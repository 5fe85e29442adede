//! Error conversion utilities for CLI.
//!
//! Converts zip-handler-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow).

use anyhow::anyhow;
use std::path::Path;
use zip_handler_core::ArchiveError;

/// The operation an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Creating an archive.
    Pack,
    /// Extracting an archive.
    Unpack,
}

/// Converts `ArchiveError` to a user-friendly anyhow error.
///
/// `input` is the path the user passed: the pack source or the archive.
pub fn convert_archive_error(err: ArchiveError, op: Operation, input: &Path) -> anyhow::Error {
    match err {
        ArchiveError::NotFound { path } => match op {
            Operation::Pack => anyhow!("Source path not found: {}", path.display()),
            Operation::Unpack => anyhow!("Zip file not found: {}", path.display()),
        },
        ArchiveError::InvalidPath { path, reason } => match op {
            Operation::Pack => anyhow!("Cannot pack '{}': {reason}", path.display()),
            Operation::Unpack => anyhow!("Path is not a file: {} ({reason})", path.display()),
        },
        ArchiveError::InvalidArchive { path, reason } => anyhow!(
            "Invalid zip file: {} ({reason})\n\
             HINT: The file may be corrupted or may not be a ZIP archive.",
            path.display()
        ),
        ArchiveError::InvalidCompressionLevel { level } => anyhow!(
            "Invalid compression level {level}\n\
             HINT: Use a level between 1 (fastest) and 9 (smallest)."
        ),
        ArchiveError::Io(io_err) => match op {
            Operation::Pack => anyhow!("I/O error while packing '{}': {io_err}", input.display()),
            Operation::Unpack => {
                anyhow!("I/O error while unpacking '{}': {io_err}", input.display())
            }
        },
    }
}

/// Adds user-facing context to a core result.
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    op: Operation,
    input: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, op, input))
}
