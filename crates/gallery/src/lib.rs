//! Media gallery controller.
//!
//! Drives the invitation's photo/video gallery:
//! - [`visibility`]: viewport intersection with a lookahead margin
//! - [`playback`]: the per-video `Idle -> Buffering -> Playing -> Paused` machine
//! - [`controller`]: the async task that owns one video element and its observer
//! - [`selection`] and [`dock`]: the grid/overlay focus state and quick-select dock
//! - [`session`]: the page session (invitation gate + background audio) injected
//!   into the gallery at construction

pub mod controller;
pub mod dock;
pub mod element;
pub mod error;
pub mod playback;
pub mod selection;
pub mod session;
pub mod visibility;

pub use controller::{VideoController, VideoHandle};
pub use error::{GalleryError, PlaybackError};
pub use playback::{PlaybackCommand, PlaybackState};
pub use selection::{Gallery, GalleryMessage, Selection, SelectionChange};
pub use session::{AudioControl, AudioPlayer, PageSession};
