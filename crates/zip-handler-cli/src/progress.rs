//! Per-entry trace lines for CLI operations.

use crate::output::Reporter;
use std::path::Path;
use zip_handler_core::ProgressCallback;

/// Prints one line per completed entry, e.g. `  Added: my_folder/a.txt`.
pub struct TraceProgress<'a> {
    reporter: &'a Reporter,
    verb: &'static str,
    enabled: bool,
}

impl<'a> TraceProgress<'a> {
    /// Creates a trace printer using `verb` as the line label.
    ///
    /// When `enabled` is false nothing is printed.
    #[must_use]
    pub fn new(reporter: &'a Reporter, verb: &'static str, enabled: bool) -> Self {
        Self {
            reporter,
            verb,
            enabled,
        }
    }
}

impl ProgressCallback for TraceProgress<'_> {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, path: &Path) {
        if self.enabled {
            self.reporter.entry(self.verb, path);
        }
    }

    fn on_complete(&mut self) {}
}
