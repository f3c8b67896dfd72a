//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sentistream - streaming sentiment classification pipeline
#[derive(Parser, Debug)]
#[command(
    name = "sentistream",
    author,
    version,
    about = "Streaming sentiment classification pipeline with Prometheus metrics",
    long_about = "Classifies a stream of text records into positive/neutral/negative\n\
                  labels and aggregates counts in a dedicated metrics task that serves\n\
                  a Prometheus pull endpoint. Production and aggregation run in\n\
                  separate execution contexts coordinated through a bounded event\n\
                  channel with a sentinel-based shutdown handshake."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "SENTISTREAM_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "SENTISTREAM_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the classification pipeline
    Run(RunArgs),

    /// Validate configuration file without running
    Validate(ValidateArgs),

    /// Display configuration information
    Info(InfoArgs),
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, default_value = "config.toml", env = "SENTISTREAM_CONFIG")]
    pub config: PathBuf,

    /// Override input file path from configuration
    #[arg(short, long, env = "SENTISTREAM_INPUT")]
    pub input: Option<PathBuf>,

    /// Override metrics endpoint port from configuration (0 = disabled)
    #[arg(long, env = "SENTISTREAM_METRICS_PORT")]
    pub metrics_port: Option<u16>,

    /// Maximum number of records to process (0 = unlimited)
    #[arg(long, default_value = "0", env = "SENTISTREAM_MAX_RECORDS")]
    pub max_records: u64,

    /// Keep serving the metrics endpoint after processing completes
    /// (until Ctrl+C)
    #[arg(long)]
    pub serve: bool,

    /// Validate configuration and exit without running pipeline
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LogFormat {
    /// Structured JSON logs
    Json,
    /// Human-readable multi-line logs
    Pretty,
    /// Compact single-line logs
    Compact,
}
