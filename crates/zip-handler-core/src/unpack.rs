//! ZIP archive extraction.
//!
//! [`Unpacker::open`] validates the archive path and reads the central
//! directory before anything is created on disk. [`Unpacker::extract`] then
//! creates the destination and writes every entry beneath it. A failure
//! part-way leaves already extracted files in place.

use crate::ArchiveError;
use crate::ProgressCallback;
use crate::Result;
use crate::UnpackReport;
use crate::naming::resolve_output_dir;
use std::fs;
use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use zip::ZipArchive;
use zip::result::ZipError;

/// Copy buffer size for entry data.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// An opened archive ready to be extracted.
///
/// # Examples
///
/// ```no_run
/// use zip_handler_core::NoopProgress;
/// use zip_handler_core::Unpacker;
/// use std::path::Path;
///
/// let unpacker = Unpacker::open(Path::new("archive.zip"), None)?;
/// println!("Files to extract: {}", unpacker.entry_count());
/// let report = unpacker.extract(&mut NoopProgress)?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok::<(), zip_handler_core::ArchiveError>(())
/// ```
#[derive(Debug)]
pub struct Unpacker {
    archive_path: PathBuf,
    output_dir: PathBuf,
    zip: ZipArchive<File>,
}

impl Unpacker {
    /// Opens `archive` and resolves the destination directory.
    ///
    /// The destination is not created yet.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Archive path does not exist
    /// - Archive path is not a regular file
    /// - File is not a well-formed ZIP archive
    pub fn open(archive: &Path, output: Option<&Path>) -> Result<Self> {
        let metadata = match fs::metadata(archive) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ArchiveError::NotFound {
                    path: archive.to_path_buf(),
                });
            }
            Err(e) => return Err(ArchiveError::Io(e)),
        };
        if !metadata.is_file() {
            return Err(ArchiveError::InvalidPath {
                path: archive.to_path_buf(),
                reason: "not a file".into(),
            });
        }

        let output_dir = resolve_output_dir(archive, output)?;
        let file = File::open(archive)?;
        let zip = ZipArchive::new(file).map_err(|e| zip_error(archive, e))?;

        Ok(Self {
            archive_path: archive.to_path_buf(),
            output_dir,
            zip,
        })
    }

    /// Returns the archive path.
    #[must_use]
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Returns the destination directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the number of entries in the archive, directories included.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.zip.len()
    }

    /// Extracts every entry into the destination directory.
    ///
    /// The destination and any missing parents are created first. Existing
    /// files with the same names are overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry is corrupt, an entry name would escape
    /// the destination, or writing to disk fails.
    pub fn extract(mut self, progress: &mut dyn ProgressCallback) -> Result<UnpackReport> {
        let start = Instant::now();
        fs::create_dir_all(&self.output_dir)?;

        let total = self.zip.len();
        let mut report = UnpackReport {
            entries_total: total,
            ..UnpackReport::default()
        };
        let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

        for index in 0..total {
            let mut entry = self
                .zip
                .by_index(index)
                .map_err(|e| zip_error(&self.archive_path, e))?;

            let Some(relative) = entry.enclosed_name() else {
                return Err(ArchiveError::InvalidArchive {
                    path: self.archive_path.clone(),
                    reason: format!("entry '{}' escapes the destination", entry.name()),
                });
            };
            let target = self.output_dir.join(&relative);
            progress.on_entry_start(&relative, total, index + 1);

            if entry.is_dir() {
                fs::create_dir_all(&target)?;
                report.directories_created += 1;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut out = File::create(&target)?;
                loop {
                    let n = entry
                        .read(&mut buffer)
                        .map_err(|e| read_error(&self.archive_path, e))?;
                    if n == 0 {
                        break;
                    }
                    out.write_all(&buffer[..n])?;
                    report.bytes_written += n as u64;
                    progress.on_bytes_written(n as u64);
                }
                report.files_extracted += 1;
            }

            progress.on_entry_complete(&relative);
        }

        report.output_dir = self.output_dir;
        report.duration = start.elapsed();
        progress.on_complete();

        Ok(report)
    }
}

/// Extracts `archive` into `output`, or into a directory named after the
/// archive when `output` is `None`.
///
/// Convenience wrapper for [`Unpacker::open`] followed by
/// [`Unpacker::extract`].
///
/// # Errors
///
/// See [`Unpacker::open`] and [`Unpacker::extract`].
pub fn unpack_archive(
    archive: &Path,
    output: Option<&Path>,
    progress: &mut dyn ProgressCallback,
) -> Result<UnpackReport> {
    Unpacker::open(archive, output)?.extract(progress)
}

/// Maps a reader error to `InvalidArchive` unless it is a plain I/O failure.
fn zip_error(archive: &Path, err: ZipError) -> ArchiveError {
    match err {
        ZipError::Io(e) => read_error(archive, e),
        other => ArchiveError::InvalidArchive {
            path: archive.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

/// Classifies an I/O error raised while decoding archive data.
///
/// Truncated data and checksum or decompression failures mean the archive is
/// malformed rather than the disk failing.
fn read_error(archive: &Path, err: io::Error) -> ArchiveError {
    match err.kind() {
        io::ErrorKind::UnexpectedEof | io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => {
            ArchiveError::InvalidArchive {
                path: archive.to_path_buf(),
                reason: err.to_string(),
            }
        }
        _ => ArchiveError::Io(err),
    }
}
