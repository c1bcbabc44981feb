// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The surface is deliberately tiny:
//!
//! ```text
//! fswatch [-t FILE-EXTENSION] DIRECTORIES...
//! fswatch [-t FILE-EXTENSION] -- DIRECTORIES...
//! ```
//!
//! Anything else (unknown flags, zero directories) prints [`USAGE`] to
//! stderr and exits with status 1. The automatic `--help`/`--version` flags
//! are disabled so every unrecognized leading-`-` argument takes that path.

use std::path::PathBuf;

use clap::Parser;

/// Usage text printed on malformed invocations.
pub const USAGE: &str = "\
Usage: fswatch [-t FILE-EXTENSION] DIRECTORIES...
This will print one line to stdout for every change.";

/// Command-line arguments for `fswatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fswatch",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Only report changes to non-hidden files ending in `.EXTENSION`.
    #[arg(short = 't', value_name = "FILE-EXTENSION")]
    pub extension: Option<String>,

    /// Directories to watch, recursively. `--` ends option parsing, so
    /// directory names starting with `-` are accepted after it.
    #[arg(value_name = "DIRECTORIES", required = true, num_args = 1..)]
    pub directories: Vec<PathBuf>,
}

/// Parse process arguments, enforcing the usage/exit-1 policy.
pub fn parse() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(_) => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    }
}
