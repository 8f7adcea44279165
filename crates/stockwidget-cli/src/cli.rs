//! CLI argument definitions for `stock-widget`.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Fetch and render the latest quote for a symbol |
//! | `log-path` | Print the resolved log file path |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--api-key` | `$STOCK_WIDGET_API_KEY` | Alpha Vantage API key |
//! | `--endpoint` | Alpha Vantage | Quote endpoint base URL |
//! | `--timeout-ms` | transport default | Request timeout in ms |
//! | `--data-dir` | `$XDG_DATA_HOME` | Directory holding `plasma-stock-widget/` |
//!
//! # Examples
//!
//! ```bash
//! stock-widget quote AAPL
//! stock-widget --format json --pretty quote MSFT
//! stock-widget log-path
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Stock widget driver: fetch one quote and render it like the desktop widget.
#[derive(Debug, Parser)]
#[command(name = "stock-widget", author, version, about)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Alpha Vantage API key. Falls back to STOCK_WIDGET_API_KEY.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Quote endpoint base URL. Falls back to STOCK_WIDGET_ENDPOINT.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in milliseconds. Falls back to STOCK_WIDGET_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Application data directory; the log lives in `<dir>/plasma-stock-widget/`.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Widget-style text lines.
    Table,
    /// Single JSON object.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the latest quote for a symbol.
    ///
    /// # Examples
    ///
    ///   stock-widget quote AAPL
    ///   stock-widget quote msft --format json
    Quote(QuoteArgs),

    /// Print the log file path.
    LogPath,
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Ticker symbol (e.g., AAPL).
    pub symbol: String,
}
