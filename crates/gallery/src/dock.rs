//! Quick-select dock shown under the focused overlay.

use invitation_core::media::{MediaCatalog, MediaId};

/// z-index of the selected dock entry; always above every other entry.
pub const SELECTED_Z_INDEX: i32 = 30;

/// Scale of the selected entry.
pub const SELECTED_SCALE: f32 = 1.2;

/// Vertical lift of the selected entry, in pixels (negative is up).
pub const SELECTED_LIFT: f32 = -8.0;

/// Tilt, in degrees, of unselected entries; alternates sign by position.
pub const IDLE_ROTATION: f32 = 15.0;

/// Free-form drag offset of the dock, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dock {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Dock {
    /// Accumulate the offset of a finished drag gesture.
    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Presentation of one dock entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockEntry {
    pub id: MediaId,
    pub emphasized: bool,
    pub z_index: i32,
    pub scale: f32,
    pub rotation: f32,
    pub lift: f32,
}

/// Lay out the dock: a function of list order and the selected id only.
pub fn dock_entries(catalog: &MediaCatalog, selected: MediaId) -> Vec<DockEntry> {
    let len = catalog.len() as i32;
    catalog
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let emphasized = item.id == selected;
            let index = index as i32;
            if emphasized {
                DockEntry {
                    id: item.id,
                    emphasized,
                    z_index: SELECTED_Z_INDEX,
                    scale: SELECTED_SCALE,
                    rotation: 0.0,
                    lift: SELECTED_LIFT,
                }
            } else {
                DockEntry {
                    id: item.id,
                    emphasized,
                    z_index: (len - index).min(SELECTED_Z_INDEX - 1),
                    scale: 1.0,
                    rotation: if index % 2 == 0 { -IDLE_ROTATION } else { IDLE_ROTATION },
                    lift: 0.0,
                }
            }
        })
        .collect()
}
