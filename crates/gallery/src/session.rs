//! Page session: the state the whole invitation page shares.
//!
//! Holds whether the guest has opened the invitation gate and the handle to
//! the page's background music. It is constructed once by the page layer and
//! passed explicitly to the components that need it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

/// Control over the page-level background audio.
pub trait AudioControl: Send + Sync {
    fn play(&self);
    fn pause(&self);
    fn is_playing(&self) -> bool;
}

/// Background-music player state for one page.
#[derive(Debug)]
pub struct AudioPlayer {
    url: String,
    playing: AtomicBool,
}

impl AudioPlayer {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            playing: AtomicBool::new(false),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Flip between playing and paused, returning the new playing flag.
    pub fn toggle(&self) -> bool {
        let was_playing = self.playing.fetch_xor(true, Ordering::SeqCst);
        tracing::debug!(url = %self.url, playing = !was_playing, "Background audio toggled");
        !was_playing
    }
}

impl AudioControl for AudioPlayer {
    fn play(&self) {
        self.playing.store(true, Ordering::SeqCst);
    }

    fn pause(&self) {
        self.playing.store(false, Ordering::SeqCst);
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

/// Shared page state, cheap to clone.
#[derive(Clone)]
pub struct PageSession {
    opened: Arc<watch::Sender<bool>>,
    audio: Arc<dyn AudioControl>,
}

impl PageSession {
    pub fn new(audio: Arc<dyn AudioControl>) -> Self {
        let (opened, _) = watch::channel(false);
        Self {
            opened: Arc::new(opened),
            audio,
        }
    }

    pub fn is_open(&self) -> bool {
        *self.opened.borrow()
    }

    /// Open the invitation gate and start the background music.
    pub fn open_invitation(&self) {
        let was_open = self.opened.send_replace(true);
        self.audio.play();
        if !was_open {
            tracing::info!("Invitation opened");
        }
    }

    /// Observe the gate flag.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.opened.subscribe()
    }

    pub fn audio(&self) -> &Arc<dyn AudioControl> {
        &self.audio
    }

    /// The audio toggle is only shown once the invitation is open.
    pub fn audio_controls_visible(&self) -> bool {
        self.is_open()
    }
}
