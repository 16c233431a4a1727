// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `fschange`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fschange",
    version,
    about = "Run shell commands when watched files change.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the watch config file.
    ///
    /// Default: `.fs-change` in your home directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append log output to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FSCHANGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Debounce window in milliseconds.
    ///
    /// The first change event on a watched file runs its command
    /// immediately; further events within the window are suppressed.
    #[arg(long, value_name = "MS", default_value_t = 2500)]
    pub debounce_ms: u64,
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
