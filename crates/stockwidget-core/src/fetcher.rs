//! Fetch-and-render cycle for a single quote.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::adapters::AlphaVantageAdapter;
use crate::config::ConfigReader;
use crate::display::DisplaySink;
use crate::error::FetchError;
use crate::http_client::HttpClient;
use crate::log_sink::LogSink;
use crate::{QuoteResult, Symbol, WidgetStatus};

/// How a refresh ended.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// Display fields now show this quote; status is idle.
    Updated(QuoteResult),
    /// Status is error with `error.user_message()`.
    Failed(FetchError),
    /// A newer refresh was issued before this one settled; nothing applied.
    Stale,
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}

/// Reads settings, fetches one quote, writes the display and logs each step.
///
/// Every refresh takes a generation number when it is issued. A response
/// that resolves after a newer refresh was issued is discarded, so the
/// display always reflects the most recently requested symbol.
pub struct QuoteFetcher {
    config: Arc<dyn ConfigReader>,
    display: Arc<dyn DisplaySink>,
    log: Arc<dyn LogSink>,
    adapter: AlphaVantageAdapter,
    generation: AtomicU64,
    /// Held across the generation check and the display writes it guards.
    publish: Mutex<()>,
}

impl QuoteFetcher {
    pub fn new(
        config: Arc<dyn ConfigReader>,
        display: Arc<dyn DisplaySink>,
        log: Arc<dyn LogSink>,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            config,
            display,
            log,
            adapter: AlphaVantageAdapter::new(http_client),
            generation: AtomicU64::new(0),
            publish: Mutex::new(()),
        }
    }

    /// Opens the log sink and records startup. Sink failures are not fatal.
    pub fn initialize(&self) {
        if let Err(error) = self.log.open() {
            tracing::warn!(%error, "log sink unavailable, continuing without file log");
        }
        self.log.log("Widget initialized");
    }

    /// Starts a refresh on the current tokio runtime and returns immediately.
    ///
    /// The handle may be dropped. Must be called from within a runtime.
    pub fn update_quote(self: &Arc<Self>, symbol: &str) -> JoinHandle<UpdateOutcome> {
        let generation = self.next_generation();
        let this = Arc::clone(self);
        let symbol = symbol.to_owned();
        tokio::spawn(async move { this.run(generation, &symbol).await })
    }

    /// Runs a full refresh and waits for it to settle.
    pub async fn refresh(&self, symbol: &str) -> UpdateOutcome {
        let generation = self.next_generation();
        self.run(generation, symbol).await
    }

    /// Generation of the most recently issued refresh.
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn run(&self, generation: u64, raw_symbol: &str) -> UpdateOutcome {
        self.log
            .log(&format!("Updating stock for symbol: {raw_symbol}"));

        let Some(api_key) = self.config.api_key().filter(|key| !key.is_empty()) else {
            return self.fail(generation, raw_symbol, FetchError::MissingApiKey);
        };

        let Ok(symbol) = Symbol::parse(raw_symbol) else {
            return self.fail(
                generation,
                raw_symbol,
                FetchError::InvalidSymbol {
                    symbol: raw_symbol.to_owned(),
                },
            );
        };

        let started = self.publish(generation, || {
            self.display.set_status(WidgetStatus::loading());
            self.log.log("Fetching stock data...");
        });
        if !started {
            return self.discard(generation, symbol.as_str());
        }

        let endpoint = self.config.endpoint();
        let result = self
            .adapter
            .global_quote(&endpoint, &symbol, &api_key, self.config.timeout_ms())
            .await;

        match result {
            Ok(quote) => self.apply(generation, symbol.as_str(), quote),
            Err(error) => self.fail(generation, symbol.as_str(), error),
        }
    }

    /// Runs `write` only if `generation` is still the latest refresh.
    ///
    /// The check and the write happen under one lock, so a refresh issued
    /// concurrently either lands after `write` or makes it a no-op.
    fn publish(&self, generation: u64, write: impl FnOnce()) -> bool {
        let _guard = self
            .publish
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.current_generation() != generation {
            return false;
        }
        write();
        true
    }

    fn discard(&self, generation: u64, symbol: &str) -> UpdateOutcome {
        tracing::debug!(generation, symbol, "dropping superseded quote refresh");
        self.log
            .log(&format!("Discarding stale response for symbol: {symbol}"));
        UpdateOutcome::Stale
    }

    fn apply(&self, generation: u64, symbol: &str, quote: QuoteResult) -> UpdateOutcome {
        let applied = self.publish(generation, || {
            let display = quote.display();
            self.display.set_price_text(&display.price_text);
            self.display.set_change_text(&display.change_text);
            self.display.set_change_color(display.change_color);
            self.display.set_status(WidgetStatus::idle());
            self.log.log(&format!(
                "Stock data updated - Price: ${}, Change: {} ({}%)",
                quote.price, quote.change, quote.change_percent
            ));
        });
        if applied {
            UpdateOutcome::Updated(quote)
        } else {
            self.discard(generation, symbol)
        }
    }

    fn fail(&self, generation: u64, symbol: &str, error: FetchError) -> UpdateOutcome {
        let applied = self.publish(generation, || {
            self.display
                .set_status(WidgetStatus::error(error.user_message()));
            self.log.log(&error.log_line());
        });
        if applied {
            UpdateOutcome::Failed(error)
        } else {
            self.discard(generation, symbol)
        }
    }
}
