//! Command-line front end for `zip-handler-core`.
//!
//! Shared by the `pack` and `unpack` binaries: argument parsing, terminal
//! output and user-facing error messages.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod progress;
