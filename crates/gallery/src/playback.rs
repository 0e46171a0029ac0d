//! Per-video playback state machine.
//!
//! Pure transitions only: each input returns the [`PlaybackCommand`] the
//! owner must carry out on the media element. Visibility, not selection,
//! drives playback.
//!
//! ```text
//! Idle ──enter──▶ Buffering ──ready──▶ Playing
//!   │                 │                  │
//!   │ (ready on       └──leave──┐  leave │
//!   │  entry)                   ▼        ▼
//!   └──────────▶ Playing      Paused ◀───┘
//!                               │
//!                      enter ───┴──▶ Buffering | Playing
//!
//! any ──unmount──▶ Idle (release)
//! ```

/// Playback state of one video item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Not observed in view, or torn down.
    #[default]
    Idle,
    /// In view, waiting for enough data to play through.
    Buffering,
    /// In view and playing.
    Playing,
    /// Left the view (or playback was refused) after having been in view.
    Paused,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// The item shows a loading indicator.
    pub fn is_buffering(self) -> bool {
        matches!(self, Self::Buffering)
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    None,
    /// Start playback.
    Play,
    /// Pause playback; the buffered data is kept.
    Pause,
    /// Wait for the element to report it can play through.
    AwaitReady,
    /// Stop playback and release the source binding.
    Release,
}

/// Transition logic for one video, with its mount guard.
#[derive(Debug, Default)]
pub struct VideoPlayback {
    state: PlaybackState,
    unmounted: bool,
}

impl VideoPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        !self.unmounted
    }

    /// The element entered or left the viewport.
    ///
    /// `ready` is whether the element can already play through; when it can,
    /// entering goes straight to `Playing`.
    pub fn on_visibility(&mut self, in_view: bool, ready: bool) -> PlaybackCommand {
        if self.unmounted {
            return PlaybackCommand::None;
        }
        match (self.state, in_view) {
            (PlaybackState::Idle | PlaybackState::Paused, true) => {
                if ready {
                    self.state = PlaybackState::Playing;
                    PlaybackCommand::Play
                } else {
                    self.state = PlaybackState::Buffering;
                    PlaybackCommand::AwaitReady
                }
            }
            (PlaybackState::Buffering | PlaybackState::Playing, false) => {
                self.state = PlaybackState::Paused;
                PlaybackCommand::Pause
            }
            _ => PlaybackCommand::None,
        }
    }

    /// The element reported it can play through.
    ///
    /// Only meaningful while buffering; a late notification after the item
    /// left the view is ignored.
    pub fn on_ready(&mut self) -> PlaybackCommand {
        if self.unmounted || self.state != PlaybackState::Buffering {
            return PlaybackCommand::None;
        }
        self.state = PlaybackState::Playing;
        PlaybackCommand::Play
    }

    /// Starting playback was refused. The item stays on a static frame until
    /// it next re-enters the view; there is no automatic retry.
    pub fn on_play_failed(&mut self) {
        if !self.unmounted && self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Tear down. Returns `Release` exactly once.
    pub fn on_unmount(&mut self) -> PlaybackCommand {
        if self.unmounted {
            return PlaybackCommand::None;
        }
        self.unmounted = true;
        self.state = PlaybackState::Idle;
        PlaybackCommand::Release
    }
}
