//! Pack command implementation.

use crate::cli::PackCli;
use crate::error::Operation;
use crate::error::add_archive_context;
use crate::output::Reporter;
use crate::progress::TraceProgress;
use anyhow::Result;
use zip_handler_core::PackConfig;
use zip_handler_core::Packer;

/// Runs `pack`: resolves the archive name, writes it and prints a summary.
pub fn execute(args: &PackCli, reporter: &Reporter) -> Result<()> {
    let mut config = PackConfig::default();
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }

    let packer = add_archive_context(
        Packer::prepare(&args.source, args.output.as_deref(), config),
        Operation::Pack,
        &args.source,
    )?;

    reporter.pack_started(packer.archive_path(), packer.source());

    let mut progress = TraceProgress::new(reporter, "Added", !reporter.is_quiet());
    let report = add_archive_context(packer.run(&mut progress), Operation::Pack, &args.source)?;

    reporter.pack_finished(&report);

    Ok(())
}
