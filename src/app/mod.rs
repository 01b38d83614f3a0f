//! Application entry points - process-wide setup around the runners

use std::path::Path;

use kiosk_core::prelude::*;

/// Run the terminal UI for a kiosk directory
pub async fn run_with_kiosk(kiosk_path: &Path) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    kiosk_core::logging::init()?;

    info!("Kiosk directory: {}", kiosk_path.display());

    let result = kiosk_tui::run_with_kiosk(kiosk_path).await;

    match &result {
        Err(e) if e.is_fatal() => error!("Cannot start the terminal UI: {}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }

    info!("Kiosk presenter exiting");
    result
}

/// Run the NDJSON host bridge for a kiosk directory
pub async fn run_headless(kiosk_path: &Path) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Stdout carries the NDJSON stream; logs go to file only
    kiosk_core::logging::init()?;

    let result = crate::headless::runner::run_headless(kiosk_path).await;

    if let Err(ref e) = result {
        error!("Headless bridge error: {:?}", e);
    }
    result
}
