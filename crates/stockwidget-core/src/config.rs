//! Widget settings seam.
//!
//! The host owns settings storage; the fetcher only reads through
//! [`ConfigReader`]. [`EnvConfig`] backs standalone use.

use crate::adapters::alphavantage::DEFAULT_ENDPOINT;

pub const API_KEY_ENV: &str = "STOCK_WIDGET_API_KEY";
pub const ENDPOINT_ENV: &str = "STOCK_WIDGET_ENDPOINT";
pub const TIMEOUT_ENV: &str = "STOCK_WIDGET_TIMEOUT_MS";

/// Read access to widget settings. Values are re-read on every refresh.
pub trait ConfigReader: Send + Sync {
    /// API key; `None` or empty means not configured.
    fn api_key(&self) -> Option<String>;

    fn endpoint(&self) -> String {
        String::from(DEFAULT_ENDPOINT)
    }

    /// Per-request timeout; `None` leaves the transport default.
    fn timeout_ms(&self) -> Option<u64> {
        None
    }
}

/// Settings read from `STOCK_WIDGET_*` environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl ConfigReader for EnvConfig {
    fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV).ok()
    }

    fn endpoint(&self) -> String {
        std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_ENDPOINT))
    }

    fn timeout_ms(&self) -> Option<u64> {
        std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|value| value.trim().parse().ok())
    }
}

/// Fixed settings supplied by the embedder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout_ms: Option<u64>,
}

impl StaticConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn without_api_key() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: String::from(DEFAULT_ENDPOINT),
            timeout_ms: None,
        }
    }
}

impl ConfigReader for StaticConfig {
    fn api_key(&self) -> Option<String> {
        self.api_key.clone()
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }
}
