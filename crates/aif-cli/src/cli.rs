//! CLI argument definitions for the AIF filing projector.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aif-filing",
    version,
    about = "AIF Filing Projector - Project raw applicant records into canonical filing documents",
    long_about = "Project flat CRM applicant records into the canonical Authorised\n\
                  Individual Filing document.\n\n\
                  Condition flags, picklist resolution, and conditional sections follow\n\
                  the builtin picklist pack unless an external pack directory is given."
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

    /// Allow applicant field values (PII) in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Project a raw applicant record into a canonical filing document.
    Project(ProjectArgs),

    /// List the picklist tables available to the projector.
    Picklists(PicklistArgs),

    /// Verify a picklist pack directory against its manifest.
    Verify(VerifyArgs),
}

#[derive(Parser)]
pub struct ProjectArgs {
    /// Path to the raw applicant record (JSON).
    #[arg(value_name = "RECORD_JSON")]
    pub record: PathBuf,

    /// Write the canonical document to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Use a verified picklist pack directory instead of the builtin pack.
    #[arg(long = "pack-dir", value_name = "DIR")]
    pub pack_dir: Option<PathBuf>,

    /// Suppress the section summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
pub struct PicklistArgs {
    /// Use a verified picklist pack directory instead of the builtin pack.
    #[arg(long = "pack-dir", value_name = "DIR")]
    pub pack_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// Picklist pack directory containing manifest.toml.
    #[arg(value_name = "PACK_DIR")]
    pub pack_dir: PathBuf,
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
