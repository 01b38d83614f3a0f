//! Shared helpers for engine-level integration tests

use std::path::Path;
use std::time::Duration;

use kiosk_app::config::Settings;
use kiosk_app::{Engine, Message, PlaybackObserver, VideoClip, VideoPlayer};
use kiosk_core::FieldId;

/// Player that never finishes a clip on its own
pub struct SilentPlayer;

impl VideoPlayer for SilentPlayer {
    fn play(&mut self, _clip: &VideoClip, _observer: PlaybackObserver) {}

    fn stop(&mut self) {}
}

/// Engine over `dir` with explicit settings and no signal handler
pub fn engine(dir: &Path, settings: Settings) -> Engine {
    Engine::from_parts(dir.to_path_buf(), settings, Box::new(SilentPlayer))
}

/// Process channel messages until `done` holds
///
/// Panics if that takes more than ten (possibly virtual) seconds.
pub async fn pump_until(engine: &mut Engine, mut done: impl FnMut(&Engine) -> bool) {
    tokio::time::timeout(Duration::from_secs(10), async {
        while !done(&*engine) {
            let msg = engine.msg_rx.recv().await.expect("message channel closed");
            engine.process_message(msg);
        }
    })
    .await
    .expect("condition not reached in time");
}

/// Type a complete, valid contact form (with stray whitespace)
pub fn fill_valid_form(engine: &mut Engine) {
    for (field, text) in [
        (FieldId::Name, "  Ada Lovelace "),
        (FieldId::CompanyName, "Analytical Engines"),
        (FieldId::Designation, "Analyst"),
        (FieldId::PhoneNumber, "0123456789"),
        (FieldId::Email, " ada@engines.io"),
    ] {
        engine.process_message(Message::SetFieldText {
            field,
            text: text.to_string(),
        });
    }
}
