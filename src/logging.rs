//! Tracing setup
//!
//! The interactive TUI owns stdout and stderr, so while it runs log lines go
//! to a file in the config directory. The one-shot command line mode logs to
//! stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{TrackerError, TrackerResult};

static TRACING_INIT: Once = Once::new();

/// Where log output is written
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Append to the given file
    File(PathBuf),
}

/// Build the filter: `RUST_LOG` wins, otherwise this crate at `level`
pub fn build_filter(level: &str) -> TrackerResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let level: LevelFilter = level
        .trim()
        .parse()
        .map_err(|e| TrackerError::Config(format!("Invalid log level '{}': {}", level, e)))?;
    Ok(EnvFilter::new(format!("expense_tracker={}", level)))
}

/// Initialize the global tracing subscriber once
///
/// Later calls are no-ops, including calls with a different target.
pub fn init_tracing(target: LogTarget, level: &str) -> TrackerResult<()> {
    let filter = build_filter(level)?;

    let mut result = Ok(());
    TRACING_INIT.call_once(|| {
        result = match target {
            LogTarget::Stderr => {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init();
                Ok(())
            }
            LogTarget::File(path) => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map(|file| {
                    let _ = fmt()
                        .with_env_filter(filter)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                })
                .map_err(|e| {
                    TrackerError::Io(format!(
                        "Failed to open log file {}: {}",
                        path.display(),
                        e
                    ))
                }),
        };
    });

    result
}
