//! Integration tests for zip-handler-core.
//!
//! These tests verify end-to-end pack/unpack workflows with real filesystem
//! operations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use walkdir::WalkDir;
use zip_handler_core::ArchiveError;
use zip_handler_core::NoopProgress;
use zip_handler_core::PackConfig;
use zip_handler_core::PackReport;
use zip_handler_core::ProgressCallback;
use zip_handler_core::pack_path;
use zip_handler_core::unpack_archive;

/// Reads every regular file under `root` keyed by its `/`-separated relative
/// path.
fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e.path().strip_prefix(root).unwrap();
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_str().unwrap())
                .collect::<Vec<_>>()
                .join("/");
            (key, fs::read(e.path()).unwrap())
        })
        .collect()
}

fn pack_default(source: &Path, archive: &Path) -> PackReport {
    pack_path(source, Some(archive), &PackConfig::default(), &mut NoopProgress).unwrap()
}

fn build_tree(root: &Path) {
    fs::create_dir_all(root.join("docs/guides")).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::write(root.join("README.md"), "# readme\n").unwrap();
    fs::write(root.join("docs/intro.txt"), "introduction ".repeat(50)).unwrap();
    fs::write(root.join("docs/guides/setup.txt"), "setup steps").unwrap();
    fs::write(root.join("binary.bin"), (0..=255u8).collect::<Vec<_>>()).unwrap();
    fs::write(root.join("zero.txt"), "").unwrap();
}

#[test]
fn test_directory_round_trip() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("my_folder");
    build_tree(&source);
    let archive = temp.path().join("my_folder.zip");
    let dest = temp.path().join("restored");

    let packed = pack_default(&source, &archive);
    let unpacked = unpack_archive(&archive, Some(dest.as_path()), &mut NoopProgress).unwrap();

    assert_eq!(packed.files_added, 5);
    assert_eq!(unpacked.files_extracted, 5);

    // Top-level directory name survives as a prefix
    let entries = fs::read_dir(&dest).unwrap().collect::<Vec<_>>();
    assert_eq!(entries.len(), 1);
    assert!(dest.join("my_folder").is_dir());

    assert_eq!(snapshot(&source), snapshot(&dest.join("my_folder")));
}

#[test]
fn test_single_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a/b/c");
    fs::create_dir_all(&nested).unwrap();
    let source = nested.join("document.txt");
    fs::write(&source, "single file contents").unwrap();
    let archive = temp.path().join("doc");
    let dest = temp.path().join("out");

    let packed = pack_default(&source, &archive);
    assert_eq!(packed.archive_path, temp.path().join("doc.zip"));

    let unpacked =
        unpack_archive(&packed.archive_path, Some(dest.as_path()), &mut NoopProgress).unwrap();
    assert_eq!(unpacked.files_extracted, 1);

    let files = snapshot(&dest);
    assert_eq!(files.len(), 1);
    assert_eq!(
        files.get("document.txt").map(Vec::as_slice),
        Some(b"single file contents".as_slice())
    );
}

#[test]
fn test_every_compression_level_round_trips() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("tree");
    build_tree(&source);

    for level in 1..=9 {
        let archive = temp.path().join(format!("level{level}.zip"));
        let dest = temp.path().join(format!("level{level}"));
        let config = PackConfig::default().with_compression_level(level);

        pack_path(&source, Some(archive.as_path()), &config, &mut NoopProgress).unwrap();
        unpack_archive(&archive, Some(dest.as_path()), &mut NoopProgress).unwrap();

        assert_eq!(snapshot(&source), snapshot(&dest.join("tree")));
    }
}

#[test]
fn test_missing_source_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("out.zip");

    let err = pack_path(
        &temp.path().join("does-not-exist"),
        Some(archive.as_path()),
        &PackConfig::default(),
        &mut NoopProgress,
    )
    .unwrap_err();

    assert!(matches!(err, ArchiveError::NotFound { .. }));
    assert!(!archive.exists());
}

#[test]
fn test_corrupt_archive_is_rejected() {
    let temp = TempDir::new().unwrap();
    let fake = temp.path().join("renamed.zip");
    fs::write(&fake, "just some text that was renamed to .zip\n").unwrap();

    let err = unpack_archive(&fake, Some(temp.path().join("dest").as_path()), &mut NoopProgress)
        .unwrap_err();
    assert!(matches!(err, ArchiveError::InvalidArchive { .. }));
}

#[test]
fn test_truncated_archive_is_rejected() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("tree");
    build_tree(&source);
    let archive = temp.path().join("tree.zip");
    pack_default(&source, &archive);

    let bytes = fs::read(&archive).unwrap();
    let truncated = temp.path().join("truncated.zip");
    fs::write(&truncated, &bytes[..bytes.len() / 2]).unwrap();

    let dest = temp.path().join("dest");
    let err = unpack_archive(&truncated, Some(dest.as_path()), &mut NoopProgress).unwrap_err();
    assert!(matches!(err, ArchiveError::InvalidArchive { .. }));
}

/// Removes a file when another entry starts, so the next read fails.
struct DeleteOnStart {
    trigger: &'static str,
    victim: PathBuf,
    started: Vec<PathBuf>,
}

impl ProgressCallback for DeleteOnStart {
    fn on_entry_start(&mut self, path: &Path, _total: usize, _current: usize) {
        if path == Path::new(self.trigger) {
            fs::remove_file(&self.victim).unwrap();
        }
        self.started.push(path.to_path_buf());
    }

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {
        panic!("pack should not complete");
    }
}

#[test]
fn test_failed_pack_removes_partial_archive() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("tree");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.txt"), "first").unwrap();
    fs::write(source.join("b.txt"), "second").unwrap();
    let archive = temp.path().join("tree.zip");

    let mut progress = DeleteOnStart {
        trigger: "tree/a.txt",
        victim: source.join("b.txt"),
        started: Vec::new(),
    };
    let err = pack_path(&source, Some(archive.as_path()), &PackConfig::default(), &mut progress)
        .unwrap_err();

    assert!(matches!(err, ArchiveError::Io(_)));
    assert_eq!(progress.started.len(), 2);
    assert!(!archive.exists(), "partial archive must be removed");
}

#[test]
fn test_failed_pack_keeps_nothing_even_if_output_existed() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("tree");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.txt"), "first").unwrap();
    fs::write(source.join("b.txt"), "second").unwrap();
    let archive = temp.path().join("tree.zip");
    fs::write(&archive, "stale archive from an earlier run").unwrap();

    let mut progress = DeleteOnStart {
        trigger: "tree/a.txt",
        victim: source.join("b.txt"),
        started: Vec::new(),
    };
    pack_path(&source, Some(archive.as_path()), &PackConfig::default(), &mut progress).unwrap_err();

    assert!(!archive.exists());
}

#[test]
fn test_reported_counts_match_files_on_disk() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("tree");
    build_tree(&source);
    let archive = temp.path().join("tree.zip");
    let dest = temp.path().join("dest");

    let packed = pack_default(&source, &archive);
    let unpacked = unpack_archive(&archive, Some(dest.as_path()), &mut NoopProgress).unwrap();

    let on_disk = snapshot(&dest).len();
    assert_eq!(packed.files_added, on_disk);
    assert_eq!(unpacked.files_extracted, on_disk);
    assert_eq!(unpacked.entries_total, on_disk);
    assert_eq!(
        packed.bytes_read,
        snapshot(&source).values().map(|v| v.len() as u64).sum::<u64>()
    );
}

#[test]
fn test_empty_directory_packs_to_empty_archive() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("nothing");
    fs::create_dir_all(&source).unwrap();
    let archive = temp.path().join("nothing.zip");
    let dest = temp.path().join("dest");

    let packed = pack_default(&source, &archive);
    assert_eq!(packed.files_added, 0);
    assert!(packed.archive_size > 0);

    let unpacked = unpack_archive(&archive, Some(dest.as_path()), &mut NoopProgress).unwrap();
    assert_eq!(unpacked.files_extracted, 0);
    assert!(dest.is_dir());
}
