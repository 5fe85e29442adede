//! Source enumeration for packing.
//!
//! A single file becomes one entry named by its base name. A directory is
//! walked recursively and every regular file becomes an entry named relative
//! to the directory's parent, so the directory name stays as a prefix.

use crate::ArchiveError;
use crate::Result;
use crate::naming::source_name;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A regular file scheduled for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackEntry {
    /// Full filesystem path to the file.
    pub path: PathBuf,

    /// Entry name inside the archive, `/`-separated.
    pub name: String,

    /// Size in bytes at enumeration time.
    pub size: u64,
}

/// Collects the entries to pack from `source`.
///
/// Symlinks and directories are not entries of their own. `skip` excludes
/// one path (canonical form), used to keep the archive being written out of
/// its own contents. Directory traversal is sorted by file name.
///
/// # Errors
///
/// Returns an error if:
/// - Source path does not exist
/// - Source is neither a regular file nor a directory
/// - Directory traversal fails
/// - An entry name is not valid UTF-8
pub fn collect_entries(source: &Path, skip: Option<&Path>) -> Result<Vec<PackEntry>> {
    let metadata = fs::metadata(source).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ArchiveError::NotFound {
                path: source.to_path_buf(),
            }
        } else {
            ArchiveError::Io(e)
        }
    })?;

    if metadata.is_file() {
        let name = source_name(source)?;
        let name = entry_name(Path::new(&name))?;
        return Ok(vec![PackEntry {
            path: source.to_path_buf(),
            name,
            size: metadata.len(),
        }]);
    }

    if !metadata.is_dir() {
        return Err(ArchiveError::InvalidPath {
            path: source.to_path_buf(),
            reason: "not a regular file or directory".into(),
        });
    }

    // The prefix is the name as given, so a symlinked directory keeps the
    // link's name rather than its target's.
    let prefix = PathBuf::from(source_name(source)?);
    let root = fs::canonicalize(source)?;

    let mut entries = Vec::new();
    for entry in WalkDir::new(&root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if skip.is_some_and(|skip| skip == entry.path()) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&root)
            .map_err(|_| ArchiveError::InvalidPath {
                path: entry.path().to_path_buf(),
                reason: format!("not under {}", root.display()),
            })?;
        let size = entry.metadata()?.len();

        entries.push(PackEntry {
            name: entry_name(&prefix.join(relative))?,
            path: entry.path().to_path_buf(),
            size,
        });
    }

    Ok(entries)
}

/// Converts a relative filesystem path into a ZIP entry name.
///
/// ZIP names always use forward slashes, whatever the host separator.
pub(crate) fn entry_name(relative: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| ArchiveError::InvalidPath {
                    path: relative.to_path_buf(),
                    reason: "path is not valid UTF-8".into(),
                })?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => {
                return Err(ArchiveError::InvalidPath {
                    path: relative.to_path_buf(),
                    reason: "entry name must be a plain relative path".into(),
                });
            }
        }
    }
    Ok(parts.join("/"))
}
