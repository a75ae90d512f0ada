//! CLI argument definitions for drip.
//!
//! The plan itself (basket, dates, amounts) is fixed at build time; the
//! surface here only controls which events are valued and how the result
//! is rendered.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// drip - simulate a dollar-cost-averaging plan against historical prices
///
/// Builds the plan's buy schedule, prices the basket on each buy date via
/// CoinGecko, and emits cumulative invested capital against portfolio value
/// as an ordered chart series.
#[derive(Debug, Parser)]
#[command(
    name = "drip",
    author,
    version,
    about = "DCA schedule and portfolio valuation CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the plan's full buy schedule without touching the network.
    ///
    /// # Examples
    ///
    ///   drip schedule
    ///   drip schedule --format json --pretty
    Schedule,

    /// Fetch historical prices for the planned buys and emit the chart
    /// series.
    ///
    /// By default only the checkpoint buys are valued, bounding the number
    /// of rate-limited price lookups.
    ///
    /// # Examples
    ///
    ///   drip run
    ///   drip run --checkpoints 0,6,13,25
    ///   drip run --full --format json
    ///   drip run --offline --price 2.5
    Run(RunArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Schedule indices to value (the 0-, 3-, 6- and 12-month marks by
    /// default). Indices past the schedule length are skipped silently.
    #[arg(long, value_delimiter = ',', default_values_t = [0usize, 6, 13, 25])]
    pub checkpoints: Vec<usize>,

    /// Value every scheduled buy instead of the checkpoint subset.
    #[arg(long, default_value_t = false)]
    pub full: bool,

    /// Skip the network and quote a fixed price for every asset and date.
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Price used with --offline.
    #[arg(long, default_value_t = 1.0)]
    pub price: f64,
}
