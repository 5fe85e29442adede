//! Progress reporting for pack and unpack operations.

use std::path::Path;

/// Callback trait for progress reporting during archive operations.
///
/// Implement this trait to receive an event per entry. The library itself
/// never writes to stdout; front ends turn these events into trace lines.
///
/// # Examples
///
/// ```
/// use zip_handler_core::ProgressCallback;
/// use std::path::Path;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("[{current}/{total}] {}", path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback {
    /// Called before an entry is processed.
    ///
    /// `path` is the entry name inside the archive; `current` is 1-indexed.
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called after each chunk of entry data is copied.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called after an entry is fully written.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once after the whole operation succeeds.
    fn on_complete(&mut self);
}

/// Progress callback that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
