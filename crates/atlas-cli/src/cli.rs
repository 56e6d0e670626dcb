//! CLI argument definitions for the indicator atlas.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "atlas",
    version,
    about = "Indicator atlas - compare countries and indicators over time",
    long_about = "Compare socio-economic indicators across countries and years.\n\n\
                  Reads from the atlas backend API or from an offline JSON directory\n\
                  and prints chart-ready tables, correlations and map snapshots."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub source: SourceArgs,

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
}

/// Where data comes from; see `atlas.toml` for persistent settings.
#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// Config file (default: ./atlas.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides ATLAS_API_BASE_URL and the config file).
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Offline data directory (takes precedence over the API).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the indicator catalog.
    Catalog(OutputArgs),

    /// Compare one indicator across countries, year by year.
    Series(SeriesArgs),

    /// Compare one or two indicators for a country, with their correlation.
    Indicators(IndicatorsArgs),

    /// Latest value of an indicator for every country, with map legend buckets.
    Latest(LatestArgs),

    /// Indicators with enough data and backend correlations for a country.
    Insights(InsightsArgs),
}

#[derive(Args, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print chart-ready JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct SeriesArgs {
    /// Primary country.
    #[arg(value_name = "COUNTRY")]
    pub country: String,

    /// Indicator code (see `atlas catalog`).
    #[arg(short = 'i', long = "indicator", default_value = "gdp")]
    pub indicator: String,

    /// Country to compare with; repeat for several.
    #[arg(short = 'c', long = "compare", value_name = "COUNTRY")]
    pub compare: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct IndicatorsArgs {
    #[arg(value_name = "COUNTRY")]
    pub country: String,

    /// Indicator code; give one or two.
    #[arg(short = 'i', long = "indicator", required = true)]
    pub indicators: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct LatestArgs {
    #[arg(short = 'i', long = "indicator", default_value = "gdp")]
    pub indicator: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct InsightsArgs {
    #[arg(value_name = "COUNTRY")]
    pub country: String,

    /// Indicator used for the record request.
    #[arg(short = 'i', long = "indicator", default_value = "gdp")]
    pub indicator: String,

    #[command(flatten)]
    pub output: OutputArgs,
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
