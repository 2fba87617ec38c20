//! Logging setup for the cleaner.
//!
//! Console output goes to stderr so the table preview on stdout stays clean.
//! When a log directory is given, everything is also written to a daily-rotating
//! `sales-cleaner.<date>.log` file there.
//!
//! ```no_run
//! sales_cleaner::logging::init(None).expect("Failed to initialize logging");
//! tracing::info!("Cleaner started");
//! ```

use anyhow::{Context as _, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

const LOG_FILE_PREFIX: &str = "sales-cleaner";
const MAX_LOG_FILES: usize = 10;

/// Creates the log directory if it doesn't exist yet
pub fn prepare_log_dir(log_dir: &Path) -> Result<()> {
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }
    Ok(())
}

/// Initializes the global subscriber.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`.
///
/// # Errors
///
/// Returns error if the log directory or file appender cannot be created, or
/// if a global subscriber is already installed.
pub fn init(log_dir: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let file_layer = match log_dir {
        Some(dir) => {
            prepare_log_dir(dir)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(MAX_LOG_FILES)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix("log")
                .build(dir)
                .context("Failed to create log file appender")?;
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_ansi(false)
                    .with_writer(appender),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(dir) = log_dir {
        tracing::debug!("Logging initialized, log directory: {}", dir.display());
    }

    Ok(())
}
