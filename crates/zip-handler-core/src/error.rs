//! Error types for pack and unpack operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while packing or unpacking an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Source path (pack) or archive path (unpack) does not exist.
    #[error("path not found: {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Path exists but cannot be used for the requested operation.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// File is not a well-formed ZIP archive.
    #[error("invalid zip archive {}: {reason}", path.display())]
    InvalidArchive {
        /// The archive path.
        path: PathBuf,
        /// Reason reported by the reader.
        reason: String,
    },

    /// Deflate compression level outside 1-9.
    #[error("invalid compression level {level}: must be between 1 and 9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// Any other filesystem or I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArchiveError {
    /// Returns `true` if the input path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use zip_handler_core::ArchiveError;
    /// use std::path::PathBuf;
    ///
    /// let err = ArchiveError::NotFound {
    ///     path: PathBuf::from("missing"),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the path this error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path }
            | Self::InvalidPath { path, .. }
            | Self::InvalidArchive { path, .. } => Some(path.as_path()),
            Self::InvalidCompressionLevel { .. } | Self::Io(_) => None,
        }
    }
}

impl From<walkdir::Error> for ArchiveError {
    fn from(err: walkdir::Error) -> Self {
        let message = err.to_string();
        match err.into_io_error() {
            Some(io_err) => Self::Io(io_err),
            // Filesystem loops carry no io::Error
            None => Self::Io(std::io::Error::other(message)),
        }
    }
}
