//! CLI argument definitions for the clinical submission reporter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "clinical-report",
    version,
    about = "Clinical submission reporting - summarize validation errors and completion stats",
    long_about = "Summarize clinical submission snapshots from the terminal.\n\n\
                  Reads a JSON snapshot of a clinicalData query result, aggregates\n\
                  per-donor validation errors into a deduplicated report, and renders\n\
                  entity tables with per-donor core-completion columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the deduplicated validation error report.
    Errors(ErrorsArgs),

    /// Print one entity's merged data table.
    Table(TableArgs),

    /// List the known clinical entity types and their aliases.
    Entities,
}

#[derive(Parser)]
pub struct ErrorsArgs {
    /// Path to a JSON snapshot of the clinicalData query result.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Restrict the report to one entity (wire name or alias).
    #[arg(long = "entity", value_name = "NAME")]
    pub entity: Option<String>,
}

#[derive(Parser)]
pub struct TableArgs {
    /// Path to a JSON snapshot of the clinicalData query result.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Entity table to render (wire name or alias).
    #[arg(long = "entity", value_name = "NAME", default_value = "donor")]
    pub entity: String,

    /// Sort by a completion column code, e.g. "DO" or "-TS" (descending).
    ///
    /// Donors with validation errors always sort first.
    #[arg(long = "sort", value_name = "CODE")]
    pub sort: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
