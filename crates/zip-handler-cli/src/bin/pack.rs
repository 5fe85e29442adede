//! `pack` - compress a file or directory into a ZIP archive.

use anyhow::Result;
use clap::Parser;
use zip_handler_cli::cli::PackCli;
use zip_handler_cli::commands;
use zip_handler_cli::output::Reporter;

fn main() -> Result<()> {
    let cli = PackCli::parse();
    let reporter = Reporter::new(cli.verbosity.verbose, cli.verbosity.quiet);
    commands::pack::execute(&cli, &reporter)
}
