//! Seam between the controller and the host's video element.

use async_trait::async_trait;

use crate::error::PlaybackError;

/// How much media data the element has, mirroring the HTML `readyState`
/// levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    HaveNothing = 0,
    HaveMetadata = 1,
    HaveCurrentData = 2,
    HaveFutureData = 3,
    HaveEnoughData = 4,
}

impl ReadyState {
    /// Enough data buffered to start playing without an immediate stall.
    pub fn can_play(self) -> bool {
        self >= Self::HaveFutureData
    }
}

/// Element attributes every gallery video carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackAttributes {
    pub muted: bool,
    pub looping: bool,
    pub inline: bool,
}

impl PlaybackAttributes {
    /// Muted, looping, inline. Sound belongs to the page-level audio player.
    pub const REQUIRED: Self = Self {
        muted: true,
        looping: true,
        inline: true,
    };
}

/// A video element owned by exactly one [`VideoController`](crate::VideoController).
#[async_trait]
pub trait MediaElement: Send + Sync {
    fn apply_attributes(&mut self, attributes: PlaybackAttributes);

    fn ready_state(&self) -> ReadyState;

    /// Resolve once the element can play through. Must be cancel-safe: the
    /// controller drops this future whenever another event wins the race.
    async fn wait_until_ready(&self);

    /// Start playback. The host may refuse.
    async fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    /// Drop the source binding so the host stops fetching data.
    fn release(&mut self);
}
