use invitation_core::media::MediaId;

/// Failure starting or continuing video playback.
///
/// Never propagated past the media item it happened on; the controller logs
/// it and leaves the item on a static frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// The host refused to start playback (e.g. an autoplay policy).
    #[error("Playback rejected: {0}")]
    Rejected(String),

    /// The source could not be loaded or decoded.
    #[error("Media source failed: {0}")]
    Source(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("Media item {0} is not part of this gallery")]
    UnknownItem(MediaId),

    #[error("Media item {0} is not a video")]
    NotAVideo(MediaId),
}
