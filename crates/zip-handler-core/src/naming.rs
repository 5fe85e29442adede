//! Output name resolution for pack and unpack.

use crate::ArchiveError;
use crate::Result;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Extension appended to archive names.
pub const ZIP_EXTENSION: &str = ".zip";

/// Resolves the archive path a pack operation writes to.
///
/// Without an explicit output the name is the source's final path segment,
/// relative to the current directory. `.zip` is appended unless the name
/// already ends with it.
///
/// # Errors
///
/// Returns an error if no output is given and the source has no final path
/// segment even after canonicalization (the filesystem root).
///
/// # Examples
///
/// ```
/// use zip_handler_core::resolve_archive_path;
/// use std::path::Path;
/// use std::path::PathBuf;
///
/// let path = resolve_archive_path(Path::new("data/my_folder"), None)?;
/// assert_eq!(path, PathBuf::from("my_folder.zip"));
///
/// let path = resolve_archive_path(Path::new("my_folder"), Some(Path::new("report")))?;
/// assert_eq!(path, PathBuf::from("report.zip"));
/// # Ok::<(), zip_handler_core::ArchiveError>(())
/// ```
pub fn resolve_archive_path(source: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let name = match output {
        Some(output) => output.as_os_str().to_os_string(),
        None => source_name(source)?,
    };
    Ok(with_zip_extension(name))
}

/// Resolves the directory an unpack operation extracts into.
///
/// Without an explicit output the directory is the archive's file name with
/// its extension stripped, relative to the current directory.
///
/// # Errors
///
/// Returns an error if no output is given and the archive path has no file
/// name.
///
/// # Examples
///
/// ```
/// use zip_handler_core::resolve_output_dir;
/// use std::path::Path;
/// use std::path::PathBuf;
///
/// let dir = resolve_output_dir(Path::new("downloads/archive.zip"), None)?;
/// assert_eq!(dir, PathBuf::from("archive"));
/// # Ok::<(), zip_handler_core::ArchiveError>(())
/// ```
pub fn resolve_output_dir(archive: &Path, output: Option<&Path>) -> Result<PathBuf> {
    if let Some(output) = output {
        return Ok(output.to_path_buf());
    }

    archive
        .file_stem()
        .map(PathBuf::from)
        .ok_or_else(|| ArchiveError::InvalidPath {
            path: archive.to_path_buf(),
            reason: "cannot derive an output directory from the archive name".into(),
        })
}

/// Returns the final path segment of `source`.
///
/// Paths such as `.` or `dir/..` have no segment of their own, so they are
/// canonicalized first.
pub(crate) fn source_name(source: &Path) -> Result<OsString> {
    if let Some(name) = source.file_name() {
        return Ok(name.to_os_string());
    }

    let canonical = fs::canonicalize(source)?;
    canonical
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .ok_or_else(|| ArchiveError::InvalidPath {
            path: source.to_path_buf(),
            reason: "path has no name to archive under".into(),
        })
}

fn with_zip_extension(mut name: OsString) -> PathBuf {
    if !name.to_string_lossy().ends_with(ZIP_EXTENSION) {
        name.push(ZIP_EXTENSION);
    }
    PathBuf::from(name)
}
