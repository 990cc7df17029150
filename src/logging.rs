//! Logging configuration using tracing
//!
//! The terminal belongs to the finder while a session runs, so log output
//! goes to a daily rolling file instead of stderr.

use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "FZPICK_LOG";

/// Filter used when `FZPICK_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "fzpick=info,warn";

/// Prefix of the log file names
pub const LOG_FILE: &str = "fzpick.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/fzpick/logs/`.
/// Log level is controlled by the `FZPICK_LOG` environment variable.
/// Returns the log directory.
///
/// # Examples
/// ```bash
/// FZPICK_LOG=debug fzpick < items.txt
/// FZPICK_LOG=fzpick::finder=trace fzpick < items.txt
/// ```
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global
/// subscriber is already installed.
pub fn init() -> io::Result<PathBuf> {
    let log_dir = log_directory();
    init_in(&log_dir)?;
    Ok(log_dir)
}

/// Initialize logging into `log_dir`
///
/// # Errors
///
/// Returns an error if the directory or the log file cannot be created, or
/// a global subscriber is already installed. Never panics.
pub fn init_in(log_dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE)
        .build(log_dir)
        .map_err(io::Error::other)?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fzpick starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Filter from `FZPICK_LOG`, falling back to [`DEFAULT_FILTER`]
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Get the log directory path
#[must_use]
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("fzpick").join("logs")
}
