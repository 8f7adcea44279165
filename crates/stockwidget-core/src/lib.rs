//! # Stock Widget Core
//!
//! Fetches a single stock quote from Alpha Vantage and renders it into a
//! widget's display fields, logging every step to an append-only file.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Alpha Vantage `GLOBAL_QUOTE` adapter |
//! | [`config`] | Settings seam (API key, endpoint, timeout) |
//! | [`display`] | Display bindings seam and in-memory display |
//! | [`domain`] | Symbol, quote formatting, widget status, timestamps |
//! | [`error`] | Error types and user-facing messages |
//! | [`fetcher`] | The fetch-and-render cycle |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`log_sink`] | Timestamped append-only log |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockwidget_core::{
//!     DisplayState, EnvConfig, FileLogSink, QuoteFetcher, ReqwestHttpClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let display = Arc::new(DisplayState::new());
//!     let fetcher = QuoteFetcher::new(
//!         Arc::new(EnvConfig),
//!         display.clone(),
//!         Arc::new(FileLogSink::new(stockwidget_core::log_sink::default_log_path()?)),
//!         Arc::new(ReqwestHttpClient::new()),
//!     );
//!     fetcher.initialize();
//!     fetcher.refresh("AAPL").await;
//!     println!("{}", display.snapshot().price_text);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure ends in the error status with one of a fixed set of
//! messages; the underlying error text only goes to the log.
//!
//! ```rust
//! use stockwidget_core::FetchError;
//!
//! let error = FetchError::HttpStatus { status: 500 };
//! assert_eq!(
//!     error.user_message(),
//!     "Failed to connect to the stock service. Please check your internet connection."
//! );
//! ```

pub mod adapters;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod log_sink;

pub use adapters::AlphaVantageAdapter;

pub use config::{ConfigReader, EnvConfig, StaticConfig};

pub use display::{DisplaySink, DisplaySnapshot, DisplayState};

pub use domain::{
    format_two_decimals, parse_leading_float, ChangeColor, QuoteDisplay, QuoteResult,
    StatusPhase, Symbol, UtcDateTime, WidgetStatus,
};

pub use error::{FetchError, LogSinkError, ValidationError};

pub use fetcher::{QuoteFetcher, UpdateOutcome};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use log_sink::{FileLogSink, LogSink, MemoryLogSink};
