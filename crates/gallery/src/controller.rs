//! Async owner of one gallery video.
//!
//! A [`VideoController`] takes exclusive ownership of a video element and
//! its visibility observer. Mounting it spawns a task that reacts to the
//! latest layout report and to readiness notifications; the returned [`VideoHandle`] is the
//! scoped resource the page layer holds. Unmounting (or dropping the handle)
//! cancels the mount guard, after which the task pauses and releases the
//! element exactly once and never starts playback again.

use invitation_core::media::{MediaId, MediaItem};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::element::{MediaElement, PlaybackAttributes};
use crate::error::GalleryError;
use crate::playback::{PlaybackCommand, PlaybackState, VideoPlayback};
use crate::visibility::{Rect, VisibilityObserver, VisibilityOptions};

/// Layout report from the host: where the viewport and the element are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub viewport: Rect,
    pub element: Rect,
}

/// Snapshot of a controller, published after every event it handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackStatus {
    pub state: PlaybackState,
    pub in_view: bool,
    pub mounted: bool,
    pub layouts_seen: u64,
    pub play_attempts: u64,
}

enum Event {
    Layout(Layout),
    Ready,
    Unmount,
}

#[derive(Debug)]
pub struct VideoController<E> {
    item: MediaId,
    element: E,
    playback: VideoPlayback,
    observer: VisibilityObserver,
    status: watch::Sender<PlaybackStatus>,
    layouts_seen: u64,
    play_attempts: u64,
}

impl<E: MediaElement + 'static> VideoController<E> {
    /// Take ownership of `element` for a video item. Images have no playback
    /// and are rejected.
    pub fn new(
        item: &MediaItem,
        element: E,
        options: VisibilityOptions,
    ) -> Result<Self, GalleryError> {
        if !item.is_video() {
            return Err(GalleryError::NotAVideo(item.id));
        }
        let (status, _) = watch::channel(PlaybackStatus {
            mounted: true,
            ..PlaybackStatus::default()
        });
        Ok(Self {
            item: item.id,
            element,
            playback: VideoPlayback::new(),
            observer: VisibilityObserver::new(options),
            status,
            layouts_seen: 0,
            play_attempts: 0,
        })
    }

    /// Spawn the controller task. Must be called within a tokio runtime.
    pub fn mount(self) -> VideoHandle {
        // Only the latest layout matters; reports made while the task is busy
        // collapse into one.
        let (layouts_tx, layouts_rx) = watch::channel(None);
        let mounted = CancellationToken::new();
        let status = self.status.subscribe();
        let item = self.item;
        let task = tokio::spawn(self.run(layouts_rx, mounted.clone()));

        VideoHandle {
            item,
            layouts: layouts_tx,
            mounted,
            status,
            task: Some(task),
        }
    }

    async fn run(
        mut self,
        mut layouts: watch::Receiver<Option<Layout>>,
        mounted: CancellationToken,
    ) -> PlaybackState {
        self.element.apply_attributes(PlaybackAttributes::REQUIRED);
        tracing::debug!(item = %self.item, "Gallery video mounted");

        loop {
            let buffering = self.playback.state().is_buffering();
            let event = tokio::select! {
                biased;
                () = mounted.cancelled() => Event::Unmount,
                changed = layouts.changed() => match changed {
                    Ok(()) => match *layouts.borrow_and_update() {
                        Some(layout) => Event::Layout(layout),
                        None => continue,
                    },
                    Err(_) => Event::Unmount,
                },
                () = self.element.wait_until_ready(), if buffering => Event::Ready,
            };

            match event {
                Event::Unmount => break,
                Event::Layout(layout) => {
                    self.layouts_seen += 1;
                    let command = match self.observer.observe(&layout.viewport, &layout.element) {
                        Some(change) => {
                            let ready = self.element.ready_state().can_play();
                            self.playback.on_visibility(change.in_view, ready)
                        }
                        None => PlaybackCommand::None,
                    };
                    self.execute(command, &mounted).await;
                }
                Event::Ready => {
                    let command = self.playback.on_ready();
                    self.execute(command, &mounted).await;
                }
            }
        }

        self.teardown();
        self.playback.state()
    }

    async fn execute(&mut self, command: PlaybackCommand, mounted: &CancellationToken) {
        match command {
            PlaybackCommand::None | PlaybackCommand::AwaitReady => {}
            PlaybackCommand::Play => {
                // Mount guard: nothing may start playback once unmount began,
                // and a pending start is abandoned as soon as it does.
                if !mounted.is_cancelled() {
                    self.play_attempts += 1;
                    let result = tokio::select! {
                        biased;
                        () = mounted.cancelled() => {
                            tracing::debug!(item = %self.item, "Unmounted while playback was starting");
                            Ok(())
                        }
                        result = self.element.play() => result,
                    };
                    if let Err(err) = result {
                        tracing::warn!(item = %self.item, error = %err, "Video playback failed");
                        self.playback.on_play_failed();
                    }
                }
            }
            PlaybackCommand::Pause => self.element.pause(),
            PlaybackCommand::Release => self.release(),
        }
        self.publish();
    }

    fn teardown(&mut self) {
        self.observer.disconnect();
        if self.playback.on_unmount() == PlaybackCommand::Release {
            self.release();
        }
        self.publish();
        tracing::debug!(
            item = %self.item,
            play_attempts = self.play_attempts,
            "Gallery video released"
        );
    }

    fn release(&mut self) {
        self.element.pause();
        self.element.release();
    }

    fn publish(&self) {
        self.status.send_replace(PlaybackStatus {
            state: self.playback.state(),
            in_view: self.observer.in_view().unwrap_or(false),
            mounted: self.playback.is_mounted(),
            layouts_seen: self.layouts_seen,
            play_attempts: self.play_attempts,
        });
    }
}

/// Scoped handle to a mounted video.
///
/// Dropping the handle unmounts the video; [`unmount`](Self::unmount) does the
/// same and additionally waits for the release to finish.
pub struct VideoHandle {
    item: MediaId,
    layouts: watch::Sender<Option<Layout>>,
    mounted: CancellationToken,
    status: watch::Receiver<PlaybackStatus>,
    task: Option<JoinHandle<PlaybackState>>,
}

impl VideoHandle {
    pub fn item(&self) -> MediaId {
        self.item
    }

    /// Report the current layout, replacing any report not yet handled.
    /// Returns `false` once the controller is gone.
    pub fn report_layout(&self, viewport: Rect, element: Rect) -> bool {
        self.layouts.send(Some(Layout { viewport, element })).is_ok()
    }

    pub fn status(&self) -> PlaybackStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlaybackStatus> {
        self.status.clone()
    }

    /// Unmount and wait for the element to be released.
    pub async fn unmount(mut self) -> PlaybackState {
        self.mounted.cancel();
        let Some(task) = self.task.take() else {
            return PlaybackState::Idle;
        };
        match task.await {
            Ok(state) => state,
            Err(err) => {
                tracing::error!(item = %self.item, error = %err, "Gallery video task failed");
                PlaybackState::Idle
            }
        }
    }
}

impl Drop for VideoHandle {
    fn drop(&mut self) {
        self.mounted.cancel();
    }
}
