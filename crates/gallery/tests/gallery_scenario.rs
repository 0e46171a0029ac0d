//! End-to-end gallery flow: gate, grid, overlay, dock and video playback
//! wired together the way the page layer uses them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use invitation_core::media::{MediaCatalog, MediaId, MediaItem, MediaKind};
use invitation_gallery::controller::PlaybackStatus;
use invitation_gallery::element::{MediaElement, PlaybackAttributes, ReadyState};
use invitation_gallery::visibility::{Rect, VisibilityOptions};
use invitation_gallery::{
    AudioControl, AudioPlayer, Gallery, GalleryMessage, PageSession, PlaybackError,
    PlaybackState, Selection, VideoController, VideoHandle,
};

const A: MediaId = MediaId(1);
const B: MediaId = MediaId(2);

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);
const ON_SCREEN: Rect = Rect::new(0.0, 300.0, 400.0, 300.0);
const OFF_SCREEN: Rect = Rect::new(0.0, 2000.0, 400.0, 300.0);

/// A video that is always buffered and counts what happens to it.
#[derive(Clone, Default)]
struct BufferedVideo {
    plays: Arc<AtomicUsize>,
    releases: Arc<AtomicUsize>,
}

#[async_trait]
impl MediaElement for BufferedVideo {
    fn apply_attributes(&mut self, _attributes: PlaybackAttributes) {}

    fn ready_state(&self) -> ReadyState {
        ReadyState::HaveEnoughData
    }

    async fn wait_until_ready(&self) {}

    async fn play(&mut self) -> Result<(), PlaybackError> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn pause(&mut self) {}

    fn release(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

fn catalog() -> MediaCatalog {
    MediaCatalog::new(vec![
        MediaItem {
            id: A,
            kind: MediaKind::Image,
            url: "https://cdn.example.com/gallery/a.jpg".to_string(),
            span: "col-span-2 row-span-3".to_string(),
        },
        MediaItem {
            id: B,
            kind: MediaKind::Video,
            url: "https://cdn.example.com/gallery/b.mp4".to_string(),
            span: "col-span-2 row-span-6".to_string(),
        },
    ])
    .unwrap()
}

async fn wait_for_state(handle: &VideoHandle, state: PlaybackState) -> PlaybackStatus {
    let mut rx = handle.subscribe();
    tokio::time::timeout(Duration::from_secs(5), async move {
        *rx.wait_for(|s| s.state == state).await.unwrap()
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_gallery_selection_does_not_drive_video_playback() {
    let audio = Arc::new(AudioPlayer::new("https://cdn.example.com/song.mp3"));
    let session = PageSession::new(audio.clone());
    let mut gallery = Gallery::new(catalog(), session.clone());

    // Gate closed: grid clicks do nothing.
    assert_eq!(gallery.update(GalleryMessage::Select(B)).unwrap(), None);
    assert!(!audio.is_playing());

    session.open_invitation();
    assert!(audio.is_playing());
    assert!(session.audio_controls_visible());

    let video = BufferedVideo::default();
    let item_b = gallery.catalog().get(B).unwrap().clone();
    let handle = VideoController::new(&item_b, video.clone(), VisibilityOptions::default())
        .unwrap()
        .mount();

    // B scrolled into view plays on its own, before anything is selected.
    handle.report_layout(VIEWPORT, ON_SCREEN);
    wait_for_state(&handle, PlaybackState::Playing).await;

    // Grid click on B, then dock click on A.
    gallery.update(GalleryMessage::Select(B)).unwrap();
    gallery.update(GalleryMessage::Select(A)).unwrap();
    assert_eq!(gallery.selection(), Selection::Focused(A));
    assert_eq!(gallery.focused_item().unwrap().kind, MediaKind::Image);

    let entries = gallery.dock_entries();
    assert!(entries.iter().find(|e| e.id == A).unwrap().emphasized);
    assert!(!entries.iter().find(|e| e.id == B).unwrap().emphasized);

    // B keeps following its own visibility.
    assert_eq!(handle.status().state, PlaybackState::Playing);
    handle.report_layout(VIEWPORT, OFF_SCREEN);
    wait_for_state(&handle, PlaybackState::Paused).await;

    gallery.update(GalleryMessage::Close).unwrap();
    assert_eq!(gallery.selection(), Selection::Grid);

    assert_eq!(handle.unmount().await, PlaybackState::Idle);
    assert_eq!(video.plays.load(Ordering::SeqCst), 1);
    assert_eq!(video.releases.load(Ordering::SeqCst), 1);
}
