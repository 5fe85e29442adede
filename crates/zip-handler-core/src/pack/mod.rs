//! ZIP archive creation from a file or directory tree.
//!
//! Packing runs in two steps: [`Packer::prepare`] validates the source and
//! resolves the archive path without touching the filesystem, then
//! [`Packer::run`] walks the source and writes the archive. Any failure
//! during the run removes the partially written archive.

pub mod cleanup;
pub mod walker;

use crate::ArchiveError;
use crate::PackConfig;
use crate::PackReport;
use crate::ProgressCallback;
use crate::Result;
use crate::naming::resolve_archive_path;
use cleanup::PartialArchive;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use walker::PackEntry;
use walker::collect_entries;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Copy buffer size for entry data.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// A validated pack operation.
///
/// # Examples
///
/// ```no_run
/// use zip_handler_core::NoopProgress;
/// use zip_handler_core::PackConfig;
/// use zip_handler_core::Packer;
/// use std::path::Path;
///
/// let packer = Packer::prepare(Path::new("my_folder"), None, PackConfig::default())?;
/// println!("Creating {}", packer.archive_path().display());
/// let report = packer.run(&mut NoopProgress)?;
/// println!("Packed {} files", report.files_added);
/// # Ok::<(), zip_handler_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Packer {
    source: PathBuf,
    archive_path: PathBuf,
    config: PackConfig,
}

impl Packer {
    /// Validates the source and resolves the output archive path.
    ///
    /// Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Source path does not exist
    /// - Configuration is invalid
    /// - No archive name can be derived from the source
    /// - The archive path points at the source itself
    pub fn prepare(source: &Path, output: Option<&Path>, config: PackConfig) -> Result<Self> {
        if !source.exists() {
            return Err(ArchiveError::NotFound {
                path: source.to_path_buf(),
            });
        }
        config.validate()?;
        let archive_path = resolve_archive_path(source, output)?;

        let target = fs::canonicalize(&archive_path)
            .ok()
            .or_else(|| canonical_target(&archive_path));
        if let Some(target) = target
            && fs::canonicalize(source).is_ok_and(|canonical| canonical == target)
        {
            return Err(ArchiveError::InvalidPath {
                path: source.to_path_buf(),
                reason: "output would overwrite the source".into(),
            });
        }

        Ok(Self {
            source: source.to_path_buf(),
            archive_path,
            config,
        })
    }

    /// Returns the source path.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the archive path that [`Packer::run`] writes.
    #[must_use]
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Writes the archive.
    ///
    /// Emits one progress event pair per entry. On error the archive file is
    /// deleted before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be created, the source cannot be
    /// walked or read, or writing the archive fails.
    pub fn run(self, progress: &mut dyn ProgressCallback) -> Result<PackReport> {
        let start = Instant::now();

        let skip = canonical_target(&self.archive_path);
        let entries = collect_entries(&self.source, skip.as_deref())?;

        let file = File::create(&self.archive_path)?;
        let guard = PartialArchive::new(&self.archive_path);
        let mut report = write_entries(file, &entries, &self.config, progress)?;
        report.archive_size = fs::metadata(guard.path())?.len();
        guard.commit();

        report.archive_path = self.archive_path;
        report.duration = start.elapsed();
        progress.on_complete();

        Ok(report)
    }
}

/// Packs `source` into a ZIP archive.
///
/// Convenience wrapper for [`Packer::prepare`] followed by [`Packer::run`].
///
/// # Errors
///
/// See [`Packer::prepare`] and [`Packer::run`].
pub fn pack_path(
    source: &Path,
    output: Option<&Path>,
    config: &PackConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<PackReport> {
    Packer::prepare(source, output, config.clone())?.run(progress)
}

/// Returns the canonical location of `path`, which need not exist yet.
fn canonical_target(path: &Path) -> Option<PathBuf> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(fs::canonicalize(parent).ok()?.join(path.file_name()?))
}

/// Writes `entries` as a Deflate-compressed ZIP into `writer`.
///
/// The writer is consumed and dropped before returning, so the caller can
/// remove the file on error.
fn write_entries<W: Write + Seek>(
    writer: W,
    entries: &[PackEntry],
    config: &PackConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<PackReport> {
    let mut zip = ZipWriter::new(writer);
    let mut report = PackReport::default();

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(i64::from(config.deflate_level())));

    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let total = entries.len();

    for (idx, entry) in entries.iter().enumerate() {
        let name = Path::new(&entry.name);
        progress.on_entry_start(name, total, idx + 1);

        let file_options = options.large_file(entry.size >= u64::from(u32::MAX));
        zip.start_file(entry.name.as_str(), file_options)
            .map_err(|e| std::io::Error::other(format!("failed to start file in ZIP: {e}")))?;

        let mut file = File::open(&entry.path)?;
        let mut bytes_read = 0u64;
        loop {
            let n = file.read(&mut buffer)?;
            if n == 0 {
                break;
            }
            zip.write_all(&buffer[..n])?;
            bytes_read += n as u64;
            progress.on_bytes_written(n as u64);
        }

        report.files_added += 1;
        report.bytes_read += bytes_read;
        progress.on_entry_complete(name);
    }

    zip.finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish ZIP archive: {e}")))?;

    Ok(report)
}
