//! Removal of partially written archives.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Deletes the archive at `path` on drop unless committed.
///
/// Created right after the output file, so every early return from a pack
/// operation removes what was written so far.
#[derive(Debug)]
pub struct PartialArchive {
    path: PathBuf,
    committed: bool,
}

impl PartialArchive {
    /// Starts guarding `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            committed: false,
        }
    }

    /// Returns the guarded path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keeps the archive on disk.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for PartialArchive {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}
