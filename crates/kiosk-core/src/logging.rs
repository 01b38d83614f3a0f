//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/kiosk-presenter/logs/`.
/// Stdout is never used: it belongs to the terminal UI or the headless bridge.
/// Log level is controlled by the `KIOSK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// KIOSK_LOG=debug kiosk
/// KIOSK_LOG=kiosk_submit=trace kiosk --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "kiosk.log");

    // Default to info for our crates, allow override via KIOSK_LOG
    let env_filter = EnvFilter::try_from_env("KIOSK_LOG").unwrap_or_else(|_| {
        EnvFilter::new("kiosk_presenter=info,kiosk_app=info,kiosk_submit=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
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
    tracing::info!("Kiosk presenter starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("kiosk-presenter").join("logs"))
}
