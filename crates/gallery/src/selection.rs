//! Grid / focused-overlay selection.
//!
//! The [`Gallery`] owns the selection; grid cells, the overlay and the dock
//! only send [`GalleryMessage`]s and never mutate it themselves.

use invitation_core::media::{MediaCatalog, MediaId, MediaItem};

use crate::dock::{dock_entries, Dock, DockEntry};
use crate::error::GalleryError;
use crate::session::PageSession;

/// What the gallery is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// The grid, nothing focused.
    #[default]
    Grid,
    /// The overlay, showing one item.
    Focused(MediaId),
}

impl Selection {
    pub fn focused(self) -> Option<MediaId> {
        match self {
            Self::Grid => None,
            Self::Focused(id) => Some(id),
        }
    }
}

/// Requests from the gallery's child views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryMessage {
    /// A grid cell or dock entry was clicked.
    Select(MediaId),
    /// The overlay background or close button was clicked.
    Close,
    /// A dock drag gesture ended with this offset.
    DragDock { dx: f32, dy: f32 },
}

/// A selection transition, reported to the page layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub from: Selection,
    pub to: Selection,
}

pub struct Gallery {
    catalog: MediaCatalog,
    session: PageSession,
    selection: Selection,
    dock: Dock,
}

impl Gallery {
    pub fn new(catalog: MediaCatalog, session: PageSession) -> Self {
        Self {
            catalog,
            session,
            selection: Selection::Grid,
            dock: Dock::default(),
        }
    }

    pub fn catalog(&self) -> &MediaCatalog {
        &self.catalog
    }

    pub fn session(&self) -> &PageSession {
        &self.session
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn focused_item(&self) -> Option<&MediaItem> {
        self.selection.focused().and_then(|id| self.catalog.get(id))
    }

    /// Dock offset for the current overlay session; `None` on the grid.
    pub fn dock(&self) -> Option<Dock> {
        self.selection.focused().map(|_| self.dock)
    }

    /// Dock layout for the current overlay; empty on the grid.
    pub fn dock_entries(&self) -> Vec<DockEntry> {
        match self.selection {
            Selection::Grid => Vec::new(),
            Selection::Focused(id) => dock_entries(&self.catalog, id),
        }
    }

    /// Apply a message. Returns the transition if the selection changed.
    ///
    /// Selecting while the invitation gate is still closed is ignored: the
    /// gallery is not reachable until the guest opens the invitation.
    pub fn update(&mut self, message: GalleryMessage) -> Result<Option<SelectionChange>, GalleryError> {
        match message {
            GalleryMessage::Select(id) => {
                if !self.catalog.contains(id) {
                    return Err(GalleryError::UnknownItem(id));
                }
                if !self.session.is_open() {
                    tracing::debug!(item = %id, "Ignoring gallery selection before the invitation is open");
                    return Ok(None);
                }
                if self.selection == Selection::Grid {
                    // A new overlay session starts with the dock in place.
                    self.dock.reset();
                }
                Ok(self.transition(Selection::Focused(id)))
            }
            GalleryMessage::Close => Ok(self.transition(Selection::Grid)),
            GalleryMessage::DragDock { dx, dy } => {
                if self.selection != Selection::Grid {
                    self.dock.drag_by(dx, dy);
                }
                Ok(None)
            }
        }
    }

    fn transition(&mut self, to: Selection) -> Option<SelectionChange> {
        if self.selection == to {
            return None;
        }
        let change = SelectionChange {
            from: self.selection,
            to,
        };
        self.selection = to;
        tracing::debug!(from = ?change.from, to = ?change.to, "Gallery selection changed");
        Some(change)
    }
}
