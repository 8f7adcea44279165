mod log_path;
mod quote;

use std::path::PathBuf;

use serde::Serialize;
use stockwidget_core::{log_sink, ConfigReader, EnvConfig, LogSinkError, StaticConfig};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub use quote::QuoteReport;

/// Result of a single CLI command, ready for rendering.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CommandResult {
    Quote(QuoteReport),
    LogPath { log_path: PathBuf },
}

impl CommandResult {
    /// Whether the widget ended in its error state.
    pub fn is_error(&self) -> bool {
        match self {
            Self::Quote(report) => report.display.status.is_error(),
            Self::LogPath { .. } => false,
        }
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    match &cli.command {
        Command::Quote(args) => {
            let config = resolve_config(cli, &EnvConfig);
            let log_path = resolve_log_path(cli)?;
            quote::run(args, config, log_path).await.map(CommandResult::Quote)
        }
        Command::LogPath => Ok(log_path::run(resolve_log_path(cli)?)),
    }
}

/// Command-line values win over the environment.
fn resolve_config(cli: &Cli, fallback: &dyn ConfigReader) -> StaticConfig {
    StaticConfig {
        api_key: cli.api_key.clone().or_else(|| fallback.api_key()),
        endpoint: cli.endpoint.clone().unwrap_or_else(|| fallback.endpoint()),
        timeout_ms: cli.timeout_ms.or_else(|| fallback.timeout_ms()),
    }
}

fn resolve_log_path(cli: &Cli) -> Result<PathBuf, LogSinkError> {
    match &cli.data_dir {
        Some(dir) => Ok(log_sink::log_path_in(dir)),
        None => log_sink::default_log_path(),
    }
}
