//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "foodshare",
    version,
    about = "Register and browse food-sharing events",
    long_about = "Validate and register food-sharing events, and browse the events,\n\
                  image map and statistics published by the backend."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow contact data (name, email, phone) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: the platform config folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides the settings file).
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a draft without sending it.
    Validate(ValidateArgs),

    /// Check a draft and register it.
    Submit(SubmitArgs),

    /// List registered events, one page at a time.
    Events(EventsArgs),

    /// Show every detail of one event.
    Event(EventArgs),

    /// Show the most recently registered events.
    Latest,

    /// Show the statistics chart series.
    Stats(StatsArgs),

    /// Show the image map markers.
    Map(MapArgs),

    /// Score how similar two names are.
    Similarity(SimilarityArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Draft file (TOML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Reference data as JSON instead of fetching it from the backend.
    #[arg(long = "reference", value_name = "JSON")]
    pub reference: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SubmitArgs {
    /// Draft file (TOML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Send without asking for confirmation.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,
}

#[derive(Parser)]
pub struct EventsArgs {
    /// Page to show, starting at 1.
    #[arg(long = "page", default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,
}

#[derive(Parser)]
pub struct EventArgs {
    /// Event id, or a link carrying `event-id`.
    #[arg(value_name = "ID|LINK")]
    pub event: String,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Print the series as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Comuna coordinates as JSON instead of the backend dataset.
    #[arg(long = "coordinates", value_name = "JSON")]
    pub coordinates: Option<PathBuf>,

    /// Print the map as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SimilarityArgs {
    pub first: String,

    pub second: String,

    /// Score the names must exceed to count as similar.
    #[arg(long = "threshold", value_name = "T")]
    pub threshold: Option<f64>,
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
