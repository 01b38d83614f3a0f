//! Video playback seam
//!
//! The engine never waits on a player. Starting playback registers a token
//! and hands the player a [`PlaybackObserver`] carrying it; the observer posts
//! `Message::VideoFinished` when the clip ends. Stopping playback or leaving
//! the screen releases the token, so a completion arriving afterwards is
//! ignored.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::VideoClip;
use crate::message::Message;

/// One-shot completion notifier handed to a [`VideoPlayer`]
#[derive(Debug)]
pub struct PlaybackObserver {
    token: u64,
    tx: mpsc::Sender<Message>,
}

impl PlaybackObserver {
    pub fn new(token: u64, tx: mpsc::Sender<Message>) -> Self {
        Self { token, tx }
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    /// Report that the clip played to the end
    pub async fn finished(self) {
        let _ = self
            .tx
            .send(Message::VideoFinished { token: self.token })
            .await;
    }

    /// Same as [`finished`](Self::finished), from a non-async thread
    pub fn finished_blocking(self) {
        let _ = self
            .tx
            .blocking_send(Message::VideoFinished { token: self.token });
    }
}

/// Something that can play a clip and report its end
pub trait VideoPlayer: Send {
    /// Start `clip`, replacing whatever is playing
    fn play(&mut self, clip: &VideoClip, observer: PlaybackObserver);

    /// Stop playback; the pending observer must not fire
    fn stop(&mut self);
}

/// Plays nothing; "finishes" each clip after its configured duration
///
/// Used by the terminal front-end, which cannot show video.
#[derive(Debug, Default)]
pub struct TimedPlayer {
    task: Option<JoinHandle<()>>,
}

impl TimedPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VideoPlayer for TimedPlayer {
    fn play(&mut self, clip: &VideoClip, observer: PlaybackObserver) {
        self.stop();
        let duration = clip.duration();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            observer.finished().await;
        }));
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TimedPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The clip currently registered as playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NowPlaying {
    pub clip_index: usize,
    pub token: u64,
    pub started_at: Instant,
}

/// Video selection screen state
#[derive(Debug, Clone, Default)]
pub struct VideoState {
    /// Highlighted clip on the selection screen
    pub cursor: usize,
    now_playing: Option<NowPlaying>,
    next_token: u64,
}

impl VideoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.now_playing.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.now_playing.is_some()
    }

    /// Register a new playback, returning its observer token
    pub fn register(&mut self, clip_index: usize) -> u64 {
        self.next_token += 1;
        self.now_playing = Some(NowPlaying {
            clip_index,
            token: self.next_token,
            started_at: Instant::now(),
        });
        self.next_token
    }

    /// Drop the current registration
    pub fn release(&mut self) -> Option<NowPlaying> {
        self.now_playing.take()
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.now_playing.is_some_and(|p| p.token == token)
    }

    /// Move the highlight by `delta`, clamped to `0..len`
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let max = (len - 1) as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
    }
}
