//! Logging initialisation for the mazegen binary.
//!
//! Installs a global `tracing` subscriber filtered by `RUST_LOG` (default
//! `info`). Events go to stderr so that stdout only carries status lines, or
//! to a file through a non-blocking writer.

use std::{
    fs::OpenOptions,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while initialising logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Another global subscriber is already installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installs the global subscriber.
///
/// With `log_file`, events are appended to that file by a background worker.
/// The returned guard flushes it on drop and must be held until exit.
///
/// # Errors
/// Returns [`LoggingError`] if the log file cannot be opened or a subscriber
/// is already installed.
pub fn init_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>, LoggingError> {
    let registry = tracing_subscriber::registry().with(env_filter());
    let install = |source| LoggingError::InstallFailed { source };

    match log_file {
        None => {
            registry
                .with(fmt::layer().with_writer(io::stderr))
                .try_init()
                .map_err(install)?;
            Ok(None)
        }
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::OpenLogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
                .map_err(install)?;
            Ok(Some(guard))
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
