// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::manifest::DEFAULT_MANIFEST_PATH;
use crate::script::{DEFAULT_INTERPRETER, DEFAULT_SCRIPT_PATH};
use crate::types::ManifestFormat;

/// Command-line arguments for `tasksort`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tasksort",
    version,
    about = "Order tasks by their dependencies and write them out as a runnable script.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task manifest (JSON or TOML).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,

    /// Where to write the generated script.
    #[arg(long, short, value_name = "PATH", default_value = DEFAULT_SCRIPT_PATH)]
    pub output: PathBuf,

    /// Manifest format. Inferred from the file extension when omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<ManifestFormat>,

    /// Resolve only this task and its prerequisites.
    #[arg(long, value_name = "NAME")]
    pub task: Option<String>,

    /// Interpreter written on the script's `#!` line.
    #[arg(long, value_name = "CMD", default_value = DEFAULT_INTERPRETER)]
    pub interpreter: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKSORT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the command order, but don't write a script.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dependency graph in Graphviz DOT format and exit.
    #[arg(long, conflicts_with = "dry_run")]
    pub graph: bool,
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
