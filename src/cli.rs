// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::loader::default_config_path;
use crate::types::{DuplicatePolicy, NegativeIncrementPolicy};

/// Command-line arguments for `pacetrack`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pacetrack",
    version,
    about = "Compare a cumulative training log against a daily plan and a straight-line goal.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Pacetrack.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Read actual observations from this CSV instead of `[actual].file`.
    #[arg(long, value_name = "PATH")]
    pub actual: Option<PathBuf>,

    /// Write CSV tables here instead of `[output].dir`.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Override `[policy].duplicate_dates` ("sum" or "reject").
    #[arg(long, value_name = "POLICY")]
    pub duplicate_dates: Option<DuplicatePolicy>,

    /// Override `[policy].negative_increments` ("allow" or "reject").
    #[arg(long, value_name = "POLICY")]
    pub negative_increments: Option<NegativeIncrementPolicy>,

    /// Print the summary only; do not write CSV tables.
    #[arg(long)]
    pub no_write: bool,

    /// Parse + validate the config, print it, but don't read any data.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PACETRACK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
