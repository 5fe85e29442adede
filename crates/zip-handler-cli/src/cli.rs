//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

const PACK_EXAMPLES: &str = "\
Examples:
  # Zip a folder (creates my_folder.zip)
  pack my_folder

  # Zip a single file (creates document.txt.zip)
  pack document.txt

  # Create zip with custom name
  pack my_folder -o archive.zip

  # Create zip with custom name (without .zip extension)
  pack my_folder -o archive";

const UNPACK_EXAMPLES: &str = "\
Examples:
  # Extract to a directory named after the zip file
  unpack archive.zip

  # Extract to a specific directory
  unpack archive.zip -o my_output_folder";

/// Arguments for the `pack` binary.
#[derive(Parser, Debug)]
#[command(name = "pack")]
#[command(author, version, long_about = None)]
#[command(about = "Pack/compress a folder or file into a zip archive")]
#[command(after_help = PACK_EXAMPLES)]
pub struct PackCli {
    /// Path to the folder or file to zip
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output zip file name (default: source name + .zip)
    #[arg(short, long, value_name = "OUTPUT_ZIP")]
    pub output: Option<PathBuf>,

    /// Deflate compression level (1-9, default 6)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

/// Arguments for the `unpack` binary.
#[derive(Parser, Debug)]
#[command(name = "unpack")]
#[command(author, version, long_about = None)]
#[command(about = "Unpack/extract contents from a zip file")]
#[command(after_help = UNPACK_EXAMPLES)]
pub struct UnpackCli {
    /// Path to the zip file to extract
    #[arg(value_name = "ZIP")]
    pub zip: PathBuf,

    /// Output directory (default: zip file name without extension)
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

/// Output flags shared by both binaries.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct VerbosityArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_commands_are_well_formed() {
        PackCli::command().debug_assert();
        UnpackCli::command().debug_assert();
    }

    #[test]
    fn test_pack_args() {
        let cli =
            PackCli::try_parse_from(["pack", "my_folder", "-o", "report", "-l", "9"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("my_folder"));
        assert_eq!(cli.output, Some(PathBuf::from("report")));
        assert_eq!(cli.compression_level, Some(9));
        assert!(!cli.verbosity.quiet);
    }

    #[test]
    fn test_pack_long_output_flag() {
        let cli = PackCli::try_parse_from(["pack", "src", "--output", "out.zip"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.zip")));
        assert_eq!(cli.compression_level, None);
    }

    #[test]
    fn test_pack_rejects_out_of_range_level() {
        assert!(PackCli::try_parse_from(["pack", "src", "-l", "0"]).is_err());
        assert!(PackCli::try_parse_from(["pack", "src", "-l", "10"]).is_err());
    }

    #[test]
    fn test_pack_requires_source() {
        assert!(PackCli::try_parse_from(["pack"]).is_err());
    }

    #[test]
    fn test_unpack_args() {
        let cli = UnpackCli::try_parse_from(["unpack", "archive.zip", "-q"]).unwrap();
        assert_eq!(cli.zip, PathBuf::from("archive.zip"));
        assert_eq!(cli.output, None);
        assert!(cli.verbosity.quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(UnpackCli::try_parse_from(["unpack", "a.zip", "-q", "-v"]).is_err());
    }
}
