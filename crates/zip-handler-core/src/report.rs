//! Pack and unpack operation reporting.

use std::path::PathBuf;
use std::time::Duration;

/// Report of a pack operation.
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Path of the archive that was written.
    pub archive_path: PathBuf,

    /// Number of regular files added to the archive.
    pub files_added: usize,

    /// Total bytes read from source files (uncompressed).
    pub bytes_read: u64,

    /// Size of the finished archive on disk.
    pub archive_size: u64,

    /// Duration of the pack operation.
    pub duration: Duration,
}

impl PackReport {
    /// Returns the compression ratio (uncompressed / archive size).
    ///
    /// Returns 0.0 if either size is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use zip_handler_core::PackReport;
    ///
    /// let mut report = PackReport::default();
    /// report.bytes_read = 1000;
    /// report.archive_size = 250;
    /// assert_eq!(report.compression_ratio(), 4.0);
    /// ```
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_read == 0 || self.archive_size == 0 {
            return 0.0;
        }
        self.bytes_read as f64 / self.archive_size as f64
    }
}

/// Report of an unpack operation.
#[derive(Debug, Clone, Default)]
pub struct UnpackReport {
    /// Directory the archive was extracted into.
    pub output_dir: PathBuf,

    /// Number of entries in the archive, directories included.
    pub entries_total: usize,

    /// Number of regular files written.
    pub files_extracted: usize,

    /// Number of directory entries recreated.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the unpack operation.
    pub duration: Duration,
}
