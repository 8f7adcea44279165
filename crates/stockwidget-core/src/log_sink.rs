//! Append-only diagnostic log.
//!
//! Each entry is one line, `[<timestamp>] <message>\n`, flushed as soon as
//! it is written. Logging is best-effort: write failures are reported
//! through `tracing` and otherwise ignored.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::LogSinkError;
use crate::UtcDateTime;

pub const LOG_DIR_NAME: &str = "plasma-stock-widget";
pub const LOG_FILE_NAME: &str = "stock-widget.log";

/// Destination for fetcher log lines.
pub trait LogSink: Send + Sync {
    /// Prepares the sink for writing. Called once by `QuoteFetcher::initialize`.
    fn open(&self) -> Result<(), LogSinkError> {
        Ok(())
    }

    /// Appends exactly one timestamped line.
    fn log(&self, message: &str);
}

/// Renders a log line with its trailing newline.
pub fn format_line(timestamp: UtcDateTime, message: &str) -> String {
    format!("[{timestamp}] {message}\n")
}

/// `$XDG_DATA_HOME`, falling back to `$HOME/.local/share`.
pub fn app_data_dir() -> Result<PathBuf, LogSinkError> {
    if let Some(dir) = std::env::var_os("XDG_DATA_HOME").filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(|home| PathBuf::from(home).join(".local").join("share"))
        .ok_or(LogSinkError::NoDataDir)
}

pub fn default_log_path() -> Result<PathBuf, LogSinkError> {
    Ok(log_path_in(&app_data_dir()?))
}

pub fn log_path_in(base_dir: &Path) -> PathBuf {
    base_dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME)
}

/// File-backed sink. Lines logged before [`LogSink::open`] succeeds are dropped.
#[derive(Debug)]
pub struct FileLogSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileLogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: Mutex::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        self.file
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for FileLogSink {
    fn open(&self) -> Result<(), LogSinkError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| LogSinkError::CreateDir {
                path: dir.display().to_string(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| LogSinkError::Open {
                path: self.path.display().to_string(),
                source,
            })?;

        *self.lock() = Some(file);
        Ok(())
    }

    fn log(&self, message: &str) {
        tracing::debug!(target: "stockwidget::log", "{message}");

        let mut guard = self.lock();
        let Some(file) = guard.as_mut() else {
            return;
        };

        let line = format_line(UtcDateTime::now(), message);
        if let Err(error) = file.write_all(line.as_bytes()).and_then(|()| file.flush()) {
            tracing::warn!(path = %self.path.display(), %error, "failed to append log line");
        }
    }
}

/// Sink that keeps lines in memory.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full lines, timestamp prefix and newline included.
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Messages with the `[timestamp] ` prefix and newline stripped.
    pub fn messages(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|line| {
                let trimmed = line.trim_end_matches('\n');
                trimmed
                    .split_once("] ")
                    .map_or(trimmed, |(_, message)| message)
                    .to_owned()
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemoryLogSink {
    fn log(&self, message: &str) {
        tracing::debug!(target: "stockwidget::log", "{message}");
        self.lock().push(format_line(UtcDateTime::now(), message));
    }
}
