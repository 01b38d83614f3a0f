//! Main TUI runner - entry point and event loop
//!
//! - `run_with_kiosk`: builds the Engine, owns the terminal
//! - `run_loop`: drains engine messages, renders, polls the keyboard

use std::path::Path;

use kiosk_app::Engine;
use kiosk_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI for a kiosk directory
pub async fn run_with_kiosk(kiosk_path: &Path) -> Result<()> {
    // Engine handles config loading, the submission client and signals
    let mut engine = Engine::new(kiosk_path.to_path_buf());
    info!(
        "Loaded settings: video={}, feedback={}, clips={}",
        engine.state.settings.capabilities.has_video,
        engine.state.settings.capabilities.has_feedback,
        engine.state.settings.videos.len()
    );

    let mut term = match terminal::init() {
        Ok(term) => term,
        Err(e) => {
            engine.shutdown();
            return Err(e);
        }
    };
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::restore();

    result
}

/// Main event loop
///
/// Runs on the tokio runtime thread; tasks spawned by the engine (timers,
/// sends, playback) report back through its message channel.
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Timers, submission results, playback completion, signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
