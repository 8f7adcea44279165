//! Behavior-driven tests for the file-backed log sink and widget startup.

use std::sync::Arc;

use stockwidget_core::{
    log_sink::{log_path_in, LOG_DIR_NAME, LOG_FILE_NAME},
    DisplayState, FileLogSink, HttpClient, HttpError, HttpRequest, HttpResponse, LogSink,
    QuoteFetcher, StaticConfig,
};

struct OfflineHttpClient;

impl HttpClient for OfflineHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>,
    > {
        Box::pin(async { Err(HttpError::new("connection failed: offline")) })
    }
}

fn fetcher_with(log: Arc<dyn LogSink>, config: StaticConfig) -> QuoteFetcher {
    QuoteFetcher::new(
        Arc::new(config),
        Arc::new(DisplayState::new()),
        log,
        Arc::new(OfflineHttpClient),
    )
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("log file should be readable")
        .lines()
        .map(str::to_owned)
        .collect()
}

fn assert_timestamped(line: &str) {
    // [YYYY-MM-DDTHH:MM:SS.mmmZ] message
    let bytes = line.as_bytes();
    assert_eq!(bytes[0], b'[', "line: {line}");
    assert_eq!(&line[25..27], "] ", "line: {line}");
    assert_eq!(bytes[11], b'T', "line: {line}");
    assert_eq!(bytes[20], b'.', "line: {line}");
    assert_eq!(bytes[24], b'Z', "line: {line}");
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn initialize_creates_nested_directory_and_writes_startup_line() {
    // Given: A data directory without the widget folder
    let data_dir = tempfile::tempdir().expect("tempdir");
    let path = log_path_in(data_dir.path());
    let sink = Arc::new(FileLogSink::new(&path));

    // When: The widget initializes
    fetcher_with(sink.clone(), StaticConfig::new("key")).initialize();

    // Then: The folder exists and holds one timestamped line
    assert!(data_dir.path().join(LOG_DIR_NAME).is_dir());
    assert!(path.ends_with(format!("{LOG_DIR_NAME}/{LOG_FILE_NAME}")));
    assert!(sink.is_open());
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert_timestamped(&lines[0]);
    assert!(lines[0].ends_with("] Widget initialized"));
}

#[test]
fn initialize_is_idempotent_and_appends_across_restarts() {
    let data_dir = tempfile::tempdir().expect("tempdir");
    let path = log_path_in(data_dir.path());

    fetcher_with(Arc::new(FileLogSink::new(&path)), StaticConfig::new("key")).initialize();
    fetcher_with(Arc::new(FileLogSink::new(&path)), StaticConfig::new("key")).initialize();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.ends_with("Widget initialized")));
}

#[test]
fn initialize_survives_an_unwritable_log_location() {
    // Given: The log directory path is occupied by a regular file
    let data_dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(data_dir.path().join(LOG_DIR_NAME), b"not a directory").expect("write");
    let sink = Arc::new(FileLogSink::new(log_path_in(data_dir.path())));

    // When / Then: Startup completes and logging degrades to a no-op
    fetcher_with(sink.clone(), StaticConfig::new("key")).initialize();
    assert!(!sink.is_open());
    assert!(sink.open().is_err());
}

// =============================================================================
// Refresh logging
// =============================================================================

#[tokio::test]
async fn every_refresh_step_is_flushed_to_the_file() {
    let data_dir = tempfile::tempdir().expect("tempdir");
    let path = log_path_in(data_dir.path());
    let fetcher = fetcher_with(Arc::new(FileLogSink::new(&path)), StaticConfig::new("key"));
    fetcher.initialize();

    fetcher.refresh("AAPL").await;

    // Read while the sink is still alive: lines must already be on disk.
    let lines = read_lines(&path);
    let messages: Vec<_> = lines
        .iter()
        .inspect(|line| assert_timestamped(line))
        .map(|line| &line[27..])
        .collect();
    assert_eq!(
        messages,
        vec![
            "Widget initialized",
            "Updating stock for symbol: AAPL",
            "Fetching stock data...",
            "Error: connection failed: offline",
        ]
    );
}

#[tokio::test]
async fn missing_api_key_is_logged_without_fetching() {
    let data_dir = tempfile::tempdir().expect("tempdir");
    let path = log_path_in(data_dir.path());
    let fetcher = fetcher_with(
        Arc::new(FileLogSink::new(&path)),
        StaticConfig::without_api_key(),
    );
    fetcher.initialize();

    fetcher.refresh("AAPL").await;

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with("Updating stock for symbol: AAPL"));
    assert!(lines[2].ends_with("Error: API key not set"));
}
