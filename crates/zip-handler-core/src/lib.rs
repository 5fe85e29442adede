//! Pack files and directory trees into ZIP archives and unpack them again.
//!
//! `zip-handler-core` is the library behind the `pack` and `unpack`
//! commands. Packing a directory keeps its name as the top-level prefix of
//! every entry, so unpacking reproduces the same tree. A failed pack never
//! leaves a truncated archive on disk.
//!
//! # Examples
//!
//! ```no_run
//! use zip_handler_core::NoopProgress;
//! use zip_handler_core::PackConfig;
//! use zip_handler_core::pack_path;
//! use zip_handler_core::unpack_archive;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackConfig::default();
//! let report = pack_path(Path::new("my_folder"), None, &config, &mut NoopProgress)?;
//! println!("Packed {} files into {}", report.files_added, report.archive_path.display());
//!
//! let report = unpack_archive(&report.archive_path, None, &mut NoopProgress)?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod naming;
pub mod pack;
pub mod progress;
pub mod report;
pub mod unpack;

// Re-export main API types
pub use config::PackConfig;
pub use error::ArchiveError;
pub use error::Result;
pub use naming::resolve_archive_path;
pub use naming::resolve_output_dir;
pub use pack::Packer;
pub use pack::pack_path;
pub use progress::NoopProgress;
pub use progress::ProgressCallback;
pub use report::PackReport;
pub use report::UnpackReport;
pub use unpack::Unpacker;
pub use unpack::unpack_archive;
