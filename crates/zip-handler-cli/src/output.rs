//! Human-readable terminal output.

use console::Term;
use console::style;
use std::path::Path;
use std::path::PathBuf;
use zip_handler_core::PackReport;
use zip_handler_core::UnpackReport;

/// Writes progress and summary lines to stdout.
///
/// Quiet mode drops everything; errors go through `main`'s error return and
/// are never routed here.
pub struct Reporter {
    verbose: bool,
    quiet: bool,
    term: Term,
}

impl Reporter {
    /// Creates a reporter writing to stdout.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            term: Term::stdout(),
        }
    }

    /// Returns whether verbose output is enabled.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Returns whether all output is suppressed.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn line(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(message);
    }

    fn success(&self, message: &str) {
        self.line(&format!("{} {message}", style("✓").green().bold()));
    }

    /// Prints one trace line for a processed entry.
    pub fn entry(&self, verb: &str, name: &Path) {
        self.line(&format!("  {verb}: {}", name.display()));
    }

    /// Prints the header of a pack run.
    pub fn pack_started(&self, archive: &Path, source: &Path) {
        self.line(&format!("Creating zip file: {}", absolute(archive).display()));
        self.line(&format!("Source: {}", absolute(source).display()));
    }

    /// Prints the summary of a finished pack run.
    pub fn pack_finished(&self, report: &PackReport) {
        self.success(&format!(
            "Successfully created {}",
            absolute(&report.archive_path).display()
        ));
        self.success(&format!("Total files packed: {}", report.files_added));
        self.success(&format!(
            "Zip file size: {}",
            format_archive_size(report.archive_size)
        ));

        if self.is_verbose() {
            self.line(&format!(
                "  Uncompressed size: {}",
                format_archive_size(report.bytes_read)
            ));
            self.line(&format!(
                "  Compression ratio: {:.2}",
                report.compression_ratio()
            ));
            self.line(&format!("  Duration: {:?}", report.duration));
        }
    }

    /// Prints the header of an unpack run.
    pub fn unpack_started(&self, archive: &Path, output_dir: &Path, entries: usize) {
        self.line(&format!("Extracting: {}", archive.display()));
        self.line(&format!("Destination: {}", absolute(output_dir).display()));
        self.line(&format!("Files to extract: {entries}"));
    }

    /// Prints the summary of a finished unpack run.
    pub fn unpack_finished(&self, report: &UnpackReport) {
        self.success(&format!(
            "Successfully extracted {} files to {}",
            report.files_extracted,
            absolute(&report.output_dir).display()
        ));

        if self.is_verbose() {
            self.line(&format!("  Directories: {}", report.directories_created));
            self.line(&format!(
                "  Total size: {}",
                format_archive_size(report.bytes_written)
            ));
            self.line(&format!("  Duration: {:?}", report.duration));
        }
    }
}

/// Renders a byte count as bytes, KB or MB.
///
/// Below 1024 the exact count is shown; below 1024² kilobytes with two
/// decimals; otherwise megabytes with two decimals.
#[must_use]
pub fn format_archive_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes < KB {
        format!("{bytes} bytes")
    } else if bytes < MB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
