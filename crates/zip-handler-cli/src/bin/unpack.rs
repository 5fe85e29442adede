//! `unpack` - extract a ZIP archive into a directory.

use anyhow::Result;
use clap::Parser;
use zip_handler_cli::cli::UnpackCli;
use zip_handler_cli::commands;
use zip_handler_cli::output::Reporter;

fn main() -> Result<()> {
    let cli = UnpackCli::parse();
    let reporter = Reporter::new(cli.verbosity.verbose, cli.verbosity.quiet);
    commands::unpack::execute(&cli, &reporter)
}
