//! Engine - shared orchestration state for the terminal and headless runners
//!
//! Owns the model, the message channel, the submission client, message timers
//! and the video player, and broadcasts [`EngineEvent`]s derived from
//! before/after state snapshots.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use kiosk_core::{FieldId, FormFields, Screen};
use kiosk_submit::SubmissionClient;
use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};

use crate::actions::{ActionContext, MessageTimers};
use crate::config::{self, Settings};
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::video::{TimedPlayer, VideoPlayer};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    screen: Option<Screen>,
    fields: FormFields,
    messages: BTreeMap<FieldId, String>,
    /// Only tracked while the form is visible
    focus: Option<FieldId>,
    stars: u8,
    playing: Option<(usize, u64)>,
    failed: u64,
    pending: usize,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        let on_form = state.screens.is_active(Screen::Form);
        Self {
            screen: state.active_screen(),
            fields: state.form.fields.clone(),
            messages: state
                .form
                .messages
                .iter()
                .map(|(f, m)| (f, m.to_string()))
                .collect(),
            focus: if on_form { state.form.focus() } else { None },
            stars: state.feedback.rating().stars(),
            playing: state.video.now_playing().map(|p| (p.clip_index, p.token)),
            failed: state.diagnostics.failed,
            pending: state.diagnostics.pending,
        }
    }
}

/// Orchestration engine for the kiosk.
///
/// Encapsulates all shared state between the terminal and headless runners:
/// - TEA state management
/// - Message channel
/// - Submission client and message timers
/// - Video player
/// - Event broadcasting for external consumers
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, key reader, host bridge).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Kiosk directory holding `.kiosk/`
    pub kiosk_path: PathBuf,

    client: Arc<SubmissionClient>,

    timers: MessageTimers,

    player: Box<dyn VideoPlayer>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an Engine for a kiosk directory, with the built-in timed player.
    ///
    /// Performs all shared initialization:
    /// - Initializes the .kiosk directory
    /// - Loads and validates settings
    /// - Builds the submission client
    /// - Spawns signal handler
    pub fn new(kiosk_path: PathBuf) -> Self {
        Self::with_player(kiosk_path, Box::new(TimedPlayer::new()))
    }

    /// Like [`new`](Self::new), with a host-provided video player
    pub fn with_player(kiosk_path: PathBuf, player: Box<dyn VideoPlayer>) -> Self {
        if let Err(e) = config::init_kiosk_directory(&kiosk_path) {
            warn!("Failed to initialize .kiosk directory: {}", e);
        }
        let settings = config::load_validated_settings(&kiosk_path);

        let engine = Self::from_parts(kiosk_path, settings, player);
        signals::spawn_signal_handler(engine.msg_tx.clone());
        engine
    }

    /// Build an Engine from already-loaded settings (no signal handler)
    pub fn from_parts(kiosk_path: PathBuf, settings: Settings, player: Box<dyn VideoPlayer>) -> Self {
        let client = Arc::new(build_client(&kiosk_path, &settings));

        let mut state = AppState::with_settings(kiosk_path.clone(), settings);
        state.diagnostics.pending = client.queue().len();

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            kiosk_path,
            client,
            timers: MessageTimers::new(),
            player,
            event_tx,
        }
    }

    /// Show Home and start background work (retry queue)
    pub fn start(&mut self) {
        info!(
            "Kiosk starting in {:?} (video: {}, feedback: {}, remote: {})",
            self.kiosk_path,
            self.state.settings.capabilities.has_video,
            self.state.settings.capabilities.has_feedback,
            self.client.sends_remotely()
        );
        self.process_message(Message::Start);
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        let mut ctx = ActionContext {
            msg_tx: &self.msg_tx,
            timers: &mut self.timers,
            client: &self.client,
            player: self.player.as_mut(),
        };
        process::process_message(&mut self.state, msg, &mut ctx);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn client(&self) -> &Arc<SubmissionClient> {
        &self.client
    }

    /// Field clears that have not fired yet
    pub fn pending_message_clears(&self) -> usize {
        self.timers.pending()
    }

    /// Stop playback and timers. In-flight sends are left to finish.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        self.player.stop();
        self.timers.shutdown();
        info!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if let (true, Some(to)) = (pre.screen != post.screen, post.screen) {
            self.emit(EngineEvent::ScreenChanged {
                from: pre.screen,
                to,
            });
        }

        // Playback changes
        if pre.playing != post.playing {
            if pre.playing.is_some() {
                self.emit(EngineEvent::VideoStopped);
            }
            if let Some(clip) = post
                .playing
                .and_then(|(index, _)| self.state.settings.videos.get(index))
            {
                self.emit(EngineEvent::VideoStarted { clip: clip.clone() });
            }
        }

        for field in FieldId::ALL {
            let text = post.fields.get(field);
            if pre.fields.get(field) != text {
                self.emit(EngineEvent::FieldTextChanged {
                    field,
                    text: text.to_string(),
                });
            }

            let message = post.messages.get(&field);
            if pre.messages.get(&field) != message {
                self.emit(EngineEvent::FieldMessageChanged {
                    field,
                    message: message.cloned(),
                });
            }
        }

        if let (true, Some(field)) = (pre.focus != post.focus, post.focus) {
            self.emit(EngineEvent::KeyboardRequested { field });
        }

        if pre.stars != post.stars {
            self.emit(EngineEvent::RatingChanged { stars: post.stars });
        }

        if post.failed > pre.failed {
            if let Some(failure) = &self.state.diagnostics.last_failure {
                self.emit(EngineEvent::SubmissionFailed {
                    kind: failure.kind,
                    error: failure.error.clone(),
                    queued: failure.queued,
                });
            }
        }

        if pre.pending != post.pending {
            self.emit(EngineEvent::PendingChanged {
                pending: post.pending,
            });
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// `send()` fails only when nobody is subscribed, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Submission client for the configured capabilities
///
/// Falls back to local-only delivery if the HTTP client cannot be built.
fn build_client(kiosk_path: &std::path::Path, settings: &Settings) -> SubmissionClient {
    let client_config = config::client_config(kiosk_path, settings);
    match SubmissionClient::from_config(&client_config) {
        Ok(client) => client,
        Err(e) => {
            warn!("Remote submission disabled: {}", e);
            SubmissionClient::new(&client_config, None)
        }
    }
}
