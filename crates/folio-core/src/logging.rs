//! Tracing subscriber setup.
//!
//! The filter comes from `FOLIO_LOG` (same syntax as `RUST_LOG`). The TUI owns
//! the terminal, so it logs to a file through a non-blocking writer; other
//! commands log to stderr.

use std::fs;
use std::io::stderr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV: &str = "FOLIO_LOG";
pub const LOG_FILE_NAME: &str = "folio.log";

/// Where log records go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Human-readable records on stderr; quiet by default.
    Stderr,
    /// Append to `<dir>/folio.log`.
    File(PathBuf),
}

impl LogTarget {
    fn default_directive(&self) -> &'static str {
        match self {
            LogTarget::Stderr => "warn",
            LogTarget::File(_) => "info",
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the program. Installing twice is not an error; the first
/// subscriber stays.
pub fn init(target: &LogTarget) -> Result<Option<WorkerGuard>> {
    let filter = env_filter(target.default_directive());

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(stderr)
                        .with_target(false),
                )
                .try_init();
            Ok(None)
        }
        LogTarget::File(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init();
            Ok(Some(guard))
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_file_target_creates_directory() {
        let dir = tempdir().unwrap();
        let logs = dir.path().join("logs");
        let guard = init(&LogTarget::File(logs.clone())).unwrap();
        assert!(guard.is_some());
        assert!(logs.is_dir());
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(LogTarget::Stderr.default_directive(), "warn");
        assert_eq!(LogTarget::File(PathBuf::new()).default_directive(), "info");
    }
}
