//! Unpack command implementation.

use crate::cli::UnpackCli;
use crate::error::Operation;
use crate::error::add_archive_context;
use crate::output::Reporter;
use crate::progress::TraceProgress;
use anyhow::Result;
use zip_handler_core::Unpacker;

/// Runs `unpack`: opens the archive, extracts it and prints a summary.
pub fn execute(args: &UnpackCli, reporter: &Reporter) -> Result<()> {
    let unpacker = add_archive_context(
        Unpacker::open(&args.zip, args.output.as_deref()),
        Operation::Unpack,
        &args.zip,
    )?;

    reporter.unpack_started(
        unpacker.archive_path(),
        unpacker.output_dir(),
        unpacker.entry_count(),
    );

    // Per-entry lines only in verbose mode
    let mut progress = TraceProgress::new(reporter, "Extracted", reporter.is_verbose());
    let report = add_archive_context(
        unpacker.extract(&mut progress),
        Operation::Unpack,
        &args.zip,
    )?;

    reporter.unpack_finished(&report);

    Ok(())
}
