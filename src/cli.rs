// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dagorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagorder",
    version,
    about = "Detect cycles in a DAG and print its execution order.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a graph file (TOML).
    ///
    /// If omitted, the built-in demo chain `1 -> 2 -> 3` is used.
    #[arg(long, value_name = "PATH")]
    pub graph: Option<String>,

    /// Reject duplicate node IDs and edges naming unknown nodes,
    /// regardless of the file's `[config].policy`.
    #[arg(long)]
    pub strict: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the graph, but don't sort it.
    #[arg(long)]
    pub dry_run: bool,
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
