//! Terminal setup and restoration

use kiosk_core::prelude::*;

/// Enter raw mode and the alternate screen
///
/// ratatui installs its own panic hook here that restores the terminal.
/// On failure whatever was already switched on is switched back off.
pub fn init() -> Result<ratatui::DefaultTerminal> {
    ratatui::try_init().map_err(|e| {
        ratatui::restore();
        init_error(e)
    })
}

pub fn restore() {
    ratatui::restore();
}

/// Raw mode or the alternate screen could not be set up
fn init_error(e: std::io::Error) -> Error {
    Error::TerminalInit(format!("{} (is stdout a terminal?)", e))
}
