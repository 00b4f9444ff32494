//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Default filter when `GELATO_LOG` is unset: our crates at info, rest at warn.
const DEFAULT_FILTER: &str = "gelato=info,gelato_core=info,gelato_menu=info,gelato_app=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/gelato/logs/`. Nothing is ever
/// written to stdout or stderr; the terminal belongs to the TUI.
/// Log level is controlled by the `GELATO_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GELATO_LOG=debug cargo run
/// GELATO_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "gelato.log");

    tracing_subscriber::registry()
        .with(default_env_filter())
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
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("gelato starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Build the env filter: `GELATO_LOG` if set and valid, default otherwise
fn default_env_filter() -> EnvFilter {
    EnvFilter::try_from_env("GELATO_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("gelato").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("gelato.log"))
}
