//! Headless mode runner - main event loop without TUI
//!
//! Reads host commands from stdin on a dedicated thread, feeds them to the
//! Engine, and forwards every EngineEvent to stdout as NDJSON.

use std::path::Path;
use std::sync::{Arc, Mutex};

use kiosk_app::{Engine, EngineEvent, Message, PlaybackObserver, VideoClip, VideoPlayer};
use kiosk_core::prelude::*;
use tokio::sync::{broadcast, mpsc};

use super::{HeadlessEvent, HostCommand};

/// Observer for the clip the host is playing, shared with the stdin reader
pub type ObserverSlot = Arc<Mutex<Option<PlaybackObserver>>>;

/// Video player whose screen is the host
///
/// Play/stop instructions reach the host as `play_video`/`stop_video` events;
/// the host reports the end of a clip with a `video_finished` command.
#[derive(Debug, Default)]
pub struct HostPlayer {
    slot: ObserverSlot,
}

impl HostPlayer {
    pub fn new(slot: ObserverSlot) -> Self {
        Self { slot }
    }

    fn replace(&self, observer: Option<PlaybackObserver>) {
        match self.slot.lock() {
            Ok(mut guard) => *guard = observer,
            Err(_) => error!("Playback observer lock poisoned"),
        }
    }
}

impl VideoPlayer for HostPlayer {
    fn play(&mut self, clip: &VideoClip, observer: PlaybackObserver) {
        debug!("Host playback of {} (token {})", clip.id, observer.token());
        self.replace(Some(observer));
    }

    fn stop(&mut self) {
        self.replace(None);
    }
}

/// Run in headless mode - NDJSON in, NDJSON out
pub async fn run_headless(kiosk_path: &Path) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Kiosk presenter starting in HEADLESS mode");
    info!("Kiosk directory: {}", kiosk_path.display());
    info!("═══════════════════════════════════════════════════════");

    let slot = ObserverSlot::default();
    let mut engine = Engine::with_player(
        kiosk_path.to_path_buf(),
        Box::new(HostPlayer::new(slot.clone())),
    );
    let mut events = engine.subscribe();

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx, slot);
    });

    HeadlessEvent::ready(kiosk_path).emit();
    engine.start();
    forward_events(&mut events);

    headless_event_loop(&mut engine, &mut events).await;

    engine.shutdown();
    forward_events(&mut events);

    info!("Kiosk presenter headless mode exiting");
    Ok(())
}

/// Main headless event loop
async fn headless_event_loop(engine: &mut Engine, events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => {
                engine.process_message(msg);
                forward_events(events);
            }
            None => {
                info!("Message channel closed");
                break;
            }
        }
    }
}

/// Write every buffered engine event to stdout
fn forward_events(events: &mut broadcast::Receiver<EngineEvent>) {
    for event in collect_events(events) {
        HeadlessEvent::from_engine_event(&event).emit();
    }
}

/// Drain the subscription without waiting
fn collect_events(events: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
    let mut out = Vec::new();
    loop {
        match events.try_recv() {
            Ok(event) => out.push(event),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless bridge lagged, {} event(s) dropped", skipped);
                HeadlessEvent::error(format!("{skipped} event(s) dropped"), false).emit();
            }
            Err(_) => break,
        }
    }
    out
}

/// Handle one stdin line; returns false once the reader should stop
fn dispatch_line(line: &str, msg_tx: &mpsc::Sender<Message>, slot: &ObserverSlot) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return true;
    }

    let command = match HostCommand::parse(trimmed) {
        Ok(command) => command,
        Err(e) => {
            warn!("Stdin: {}", e);
            HeadlessEvent::error(e, false).emit();
            return true;
        }
    };

    if command == HostCommand::VideoFinished {
        let observer = slot.lock().ok().and_then(|mut guard| guard.take());
        match observer {
            Some(observer) => observer.finished_blocking(),
            None => debug!("Stdin: video_finished with nothing playing"),
        }
        return true;
    }

    let quitting = command == HostCommand::Quit;
    match command.into_message() {
        Ok(Some(message)) => {
            if msg_tx.blocking_send(message).is_err() {
                return false;
            }
        }
        Ok(None) => {}
        Err(e) => {
            warn!("Stdin: {}", e);
            HeadlessEvent::error(e, false).emit();
        }
    }
    !quitting
}

/// Stdin reader that sends commands to the message channel (blocking thread)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>, slot: ObserverSlot) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if !dispatch_line(&line, &msg_tx, &slot) {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    // Host closed stdin: nothing can drive the kiosk any more
    let _ = msg_tx.blocking_send(Message::Quit);
    info!("Stdin reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip() -> VideoClip {
        VideoClip {
            id: "intro.mp4".into(),
            title: "Introduction".into(),
            duration_secs: 30,
        }
    }

    #[test]
    fn test_host_player_holds_observer_until_stop() {
        let (tx, _rx) = mpsc::channel(4);
        let slot = ObserverSlot::default();
        let mut player = HostPlayer::new(slot.clone());

        player.play(&clip(), PlaybackObserver::new(7, tx));
        assert_eq!(slot.lock().unwrap().as_ref().map(|o| o.token()), Some(7));

        player.stop();
        assert!(slot.lock().unwrap().is_none());
    }

    #[test]
    fn test_video_finished_reports_current_token() {
        let (tx, mut rx) = mpsc::channel(4);
        let slot = ObserverSlot::default();
        let mut player = HostPlayer::new(slot.clone());
        player.play(&clip(), PlaybackObserver::new(3, tx.clone()));

        assert!(dispatch_line(r#"{"cmd":"video_finished"}"#, &tx, &slot));
        assert!(matches!(
            rx.try_recv(),
            Ok(Message::VideoFinished { token: 3 })
        ));

        // A second report has no observer left
        assert!(dispatch_line(r#"{"cmd":"video_finished"}"#, &tx, &slot));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_commands_become_messages() {
        let (tx, mut rx) = mpsc::channel(4);
        let slot = ObserverSlot::default();

        assert!(dispatch_line(r#"{"cmd":"select_rating","stars":4}"#, &tx, &slot));
        assert!(matches!(rx.try_recv(), Ok(Message::SelectRating(4))));

        assert!(dispatch_line("   ", &tx, &slot));
        assert!(dispatch_line("not json", &tx, &slot));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_quit_stops_reader() {
        let (tx, mut rx) = mpsc::channel(4);
        let slot = ObserverSlot::default();

        assert!(!dispatch_line(r#"{"cmd":"quit"}"#, &tx, &slot));
        assert!(matches!(rx.try_recv(), Ok(Message::Quit)));
    }

    #[tokio::test]
    async fn test_collect_events_drains_buffer() {
        let (tx, mut rx) = broadcast::channel(8);
        tx.send(EngineEvent::VideoStopped).unwrap();
        tx.send(EngineEvent::Shutdown).unwrap();

        let events = collect_events(&mut rx);
        assert_eq!(events, vec![EngineEvent::VideoStopped, EngineEvent::Shutdown]);
        assert!(collect_events(&mut rx).is_empty());
    }
}
