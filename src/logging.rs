//! Log level handling and tracing setup.

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Where tracing output goes.
pub enum LogTarget<'a> {
    /// Standard error, for the line-oriented commands.
    Stderr,
    /// A file, for the full-screen dashboard.
    File(&'a Path),
    /// Nowhere: the dashboard draws over stderr.
    Silent,
}

/// A `--log-file` that cannot be written to.
#[derive(Debug, Error)]
pub enum LogFileError {
    #[error("{} does not name a log file", .0.display())]
    BadFileName(PathBuf),

    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: InitError },
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides `default_directive`.
///
/// Keep the returned guard alive for as long as file output should be flushed.
pub fn init_tracing(
    target: LogTarget<'_>,
    default_directive: &str,
) -> Result<Option<WorkerGuard>, LogFileError> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
    };

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
            Ok(None)
        }
        LogTarget::File(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| LogFileError::BadFileName(path.to_path_buf()))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name)
                .build(dir.unwrap_or(Path::new(".")))
                .map_err(|source| LogFileError::Open {
                    path: path.to_path_buf(),
                    source,
                })?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
            Ok(Some(guard))
        }
        LogTarget::Silent => Ok(None),
    }
}
