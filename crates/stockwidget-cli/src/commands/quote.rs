use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use stockwidget_core::{
    DisplaySnapshot, DisplayState, FileLogSink, QuoteFetcher, ReqwestHttpClient, StaticConfig,
    Symbol,
};

use crate::cli::QuoteArgs;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct QuoteReport {
    pub symbol: Symbol,
    pub display: DisplaySnapshot,
    pub log_path: PathBuf,
}

pub async fn run(
    args: &QuoteArgs,
    config: StaticConfig,
    log_path: PathBuf,
) -> Result<QuoteReport, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    let display = Arc::new(DisplayState::new());
    let fetcher = QuoteFetcher::new(
        Arc::new(config),
        display.clone(),
        Arc::new(FileLogSink::new(&log_path)),
        Arc::new(ReqwestHttpClient::new()),
    );
    fetcher.initialize();
    fetcher.refresh(symbol.as_str()).await;

    Ok(QuoteReport {
        symbol,
        display: display.snapshot(),
        log_path,
    })
}
