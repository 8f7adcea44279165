use thiserror::Error;

use crate::http_client::HttpError;

pub const MISSING_API_KEY_MESSAGE: &str =
    "Please set your Alpha Vantage API key in the widget settings.";
pub const LOADING_MESSAGE: &str = "Loading stock data...";
pub const INVALID_SYMBOL_MESSAGE: &str = "Invalid stock symbol. Please check and try again.";
pub const CONNECTIVITY_MESSAGE: &str =
    "Failed to connect to the stock service. Please check your internet connection.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while fetching stock data. Please try again later.";

/// Validation errors exposed by `stockwidget-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
}

/// Failure of a single quote refresh.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API key not set")]
    MissingApiKey,

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("failed to parse quote response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid stock symbol - {symbol}")]
    InvalidSymbol { symbol: String },

    #[error("field '{field}' is not a number: '{value}'")]
    MalformedField { field: &'static str, value: String },
}

impl FetchError {
    /// Whether the failure came from a non-success HTTP status.
    pub const fn is_http_error(&self) -> bool {
        matches!(self, Self::HttpStatus { .. })
    }

    /// Canned message shown to the user for this failure.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingApiKey => MISSING_API_KEY_MESSAGE,
            Self::HttpStatus { .. } => CONNECTIVITY_MESSAGE,
            Self::InvalidSymbol { .. } => INVALID_SYMBOL_MESSAGE,
            Self::Transport(_) | Self::Parse(_) | Self::MalformedField { .. } => {
                GENERIC_FAILURE_MESSAGE
            }
        }
    }

    /// Line written to the log sink for this failure.
    pub fn log_line(&self) -> String {
        if self.is_http_error() {
            format!("Error: HTTP error - {self}")
        } else {
            format!("Error: {self}")
        }
    }
}

/// Errors raised while opening the file-backed log sink.
#[derive(Debug, Error)]
pub enum LogSinkError {
    #[error("failed to create log directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot resolve application data directory: neither XDG_DATA_HOME nor HOME is set")]
    NoDataDir,
}
