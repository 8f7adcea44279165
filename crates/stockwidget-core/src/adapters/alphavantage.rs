use std::sync::Arc;

use serde::Deserialize;

use crate::error::FetchError;
use crate::http_client::{HttpClient, HttpRequest};
use crate::{parse_leading_float, QuoteResult, Symbol};

pub const DEFAULT_ENDPOINT: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage `GLOBAL_QUOTE` client.
#[derive(Clone)]
pub struct AlphaVantageAdapter {
    http_client: Arc<dyn HttpClient>,
}

impl AlphaVantageAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    pub fn quote_request(
        endpoint: &str,
        symbol: &Symbol,
        api_key: &str,
        timeout_ms: Option<u64>,
    ) -> HttpRequest {
        HttpRequest::get(endpoint)
            .with_query("function", "GLOBAL_QUOTE")
            .with_query("symbol", symbol.as_str())
            .with_query("apikey", api_key)
            .with_timeout_ms(timeout_ms)
    }

    /// Fetches and formats the latest quote for `symbol`.
    pub async fn global_quote(
        &self,
        endpoint: &str,
        symbol: &Symbol,
        api_key: &str,
        timeout_ms: Option<u64>,
    ) -> Result<QuoteResult, FetchError> {
        let request = Self::quote_request(endpoint, symbol, api_key, timeout_ms);
        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(FetchError::HttpStatus {
                status: response.status,
            });
        }

        parse_global_quote(&response.body, symbol)
    }
}

/// Parses a `GLOBAL_QUOTE` body.
///
/// A missing or empty `"Global Quote"` object is reported as an invalid
/// symbol; the provider uses the same shape for rate-limit notes.
pub fn parse_global_quote(body: &str, symbol: &Symbol) -> Result<QuoteResult, FetchError> {
    let response: GlobalQuoteResponse = serde_json::from_str(body)?;

    let quote = response
        .quote
        .filter(|quote| !quote.is_empty())
        .ok_or_else(|| FetchError::InvalidSymbol {
            symbol: symbol.to_string(),
        })?;

    Ok(QuoteResult::from_values(
        numeric_field("05. price", quote.price.as_deref())?,
        numeric_field("09. change", quote.change.as_deref())?,
        numeric_field("10. change percent", quote.change_percent.as_deref())?,
    ))
}

fn numeric_field(field: &'static str, raw: Option<&str>) -> Result<f64, FetchError> {
    let raw = raw.unwrap_or_default();
    parse_leading_float(raw).ok_or_else(|| FetchError::MalformedField {
        field,
        value: raw.to_owned(),
    })
}

#[derive(Debug, Clone, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote", default)]
    quote: Option<GlobalQuoteData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GlobalQuoteData {
    #[serde(rename = "05. price", default)]
    price: Option<String>,
    #[serde(rename = "09. change", default)]
    change: Option<String>,
    #[serde(rename = "10. change percent", default)]
    change_percent: Option<String>,
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

impl GlobalQuoteData {
    fn is_empty(&self) -> bool {
        self.price.is_none()
            && self.change.is_none()
            && self.change_percent.is_none()
            && self.other.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::{HttpError, HttpResponse};
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    const AAPL_BODY: &str = r#"{
        "Global Quote": {
            "01. symbol": "AAPL",
            "05. price": "189.4000",
            "09. change": "-1.2345",
            "10. change percent": "0.6500%"
        }
    }"#;

    #[derive(Debug)]
    struct RecordingHttpClient {
        response: Result<HttpResponse, HttpError>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingHttpClient {
        fn returning(response: Result<HttpResponse, HttpError>) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn recorded_requests(&self) -> Vec<HttpRequest> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .clone()
        }
    }

    impl HttpClient for RecordingHttpClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request);
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    fn symbol(raw: &str) -> Symbol {
        Symbol::parse(raw).expect("valid symbol")
    }

    #[tokio::test]
    async fn quote_request_carries_function_symbol_and_key() {
        let client = Arc::new(RecordingHttpClient::returning(Ok(HttpResponse::ok_json(
            AAPL_BODY,
        ))));
        let adapter = AlphaVantageAdapter::new(client.clone());

        adapter
            .global_quote(DEFAULT_ENDPOINT, &symbol("aapl"), "alpha-key", None)
            .await
            .expect("quote should succeed");

        let requests = client.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].full_url(),
            "https://www.alphavantage.co/query?function=GLOBAL_QUOTE&symbol=AAPL&apikey=alpha-key"
        );
        assert_eq!(requests[0].timeout_ms, None);
    }

    #[tokio::test]
    async fn non_success_status_is_an_http_error() {
        let client = Arc::new(RecordingHttpClient::returning(Ok(HttpResponse::new(
            500, AAPL_BODY,
        ))));
        let adapter = AlphaVantageAdapter::new(client);

        let error = adapter
            .global_quote(DEFAULT_ENDPOINT, &symbol("AAPL"), "k", Some(250))
            .await
            .expect_err("status 500 must fail");
        assert!(matches!(error, FetchError::HttpStatus { status: 500 }));
    }

    #[tokio::test]
    async fn transport_failure_is_not_an_http_error() {
        let client = Arc::new(RecordingHttpClient::returning(Err(HttpError::new(
            "connection failed: refused",
        ))));
        let adapter = AlphaVantageAdapter::new(client);

        let error = adapter
            .global_quote(DEFAULT_ENDPOINT, &symbol("AAPL"), "k", None)
            .await
            .expect_err("transport must fail");
        assert!(matches!(error, FetchError::Transport(_)));
        assert!(!error.is_http_error());
    }

    #[test]
    fn parses_and_rounds_global_quote() {
        let quote = parse_global_quote(AAPL_BODY, &symbol("AAPL")).expect("valid body");
        assert_eq!(quote.price, "189.40");
        assert_eq!(quote.change, "-1.23");
        assert_eq!(quote.change_percent, "0.65");
        assert!(!quote.is_positive);
    }

    #[test]
    fn missing_global_quote_is_invalid_symbol() {
        for body in ["{}", r#"{"Note": "rate limited"}"#, r#"{"Global Quote": {}}"#] {
            let error = parse_global_quote(body, &symbol("ZZZZ")).expect_err("must fail");
            assert!(
                matches!(&error, FetchError::InvalidSymbol { symbol } if symbol == "ZZZZ"),
                "unexpected error for {body}: {error:?}"
            );
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = parse_global_quote("<html>", &symbol("AAPL")).expect_err("must fail");
        assert!(matches!(error, FetchError::Parse(_)));
    }

    #[test]
    fn non_numeric_field_is_reported_by_name() {
        let body = r#"{"Global Quote": {"05. price": "n/a", "09. change": "1", "10. change percent": "1%"}}"#;
        let error = parse_global_quote(body, &symbol("AAPL")).expect_err("must fail");
        assert!(matches!(
            error,
            FetchError::MalformedField { field: "05. price", .. }
        ));
    }
}
