//! Gallery media catalogue.
//!
//! The gallery shows a fixed list of images and videos configured per page.
//! The list is loaded once, validated, and shared read-only afterwards; there
//! is no way to add or remove items at runtime.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identifier of a media item, assigned in the page configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MediaId(pub u32);

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of asset a media item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MediaKind {
    Image,
    Video,
}

/// One entry of the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MediaItem {
    pub id: MediaId,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    /// Grid sizing hint, passed through to the page layer untouched.
    #[serde(default)]
    pub span: String,
}

impl MediaItem {
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// A validated, immutable media list.
///
/// Cloning is cheap: all clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct MediaCatalog {
    items: Arc<[MediaItem]>,
}

impl MediaCatalog {
    /// Build a catalogue, rejecting duplicate ids and empty urls.
    pub fn new(items: Vec<MediaItem>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CoreError::Conflict(format!(
                    "Duplicate media id {} in gallery configuration",
                    item.id
                )));
            }
            if item.url.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "Media item {} has an empty url",
                    item.id
                )));
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    /// An empty catalogue (a page without a gallery).
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    /// Parse the page-content JSON (an array of media items).
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let items: Vec<MediaItem> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid gallery configuration: {e}")))?;
        Self::new(items)
    }

    pub fn get(&self, id: MediaId) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Position of an item in configuration order.
    pub fn position(&self, id: MediaId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: MediaId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.iter()
    }

    pub fn videos(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.iter().filter(|item| item.is_video())
    }

    pub fn as_slice(&self) -> &[MediaItem] {
        &self.items
    }
}

/// Serializes as the plain item array, in configuration order.
impl Serialize for MediaCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn item(id: u32, kind: MediaKind) -> MediaItem {
        MediaItem {
            id: MediaId(id),
            kind,
            url: format!("https://cdn.example.com/{id}"),
            span: String::new(),
        }
    }

    #[test]
    fn test_catalog_keeps_configuration_order() {
        let catalog = MediaCatalog::new(vec![
            item(3, MediaKind::Image),
            item(1, MediaKind::Video),
            item(2, MediaKind::Image),
        ])
        .unwrap();

        let ids: Vec<u32> = catalog.iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(catalog.position(MediaId(1)), Some(1));
        assert_eq!(catalog.position(MediaId(9)), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = MediaCatalog::new(vec![item(1, MediaKind::Image), item(1, MediaKind::Video)]);
        assert_matches!(result, Err(CoreError::Conflict(_)));
    }

    #[test]
    fn test_empty_url_rejected() {
        let mut bad = item(1, MediaKind::Image);
        bad.url = "  ".to_string();
        assert_matches!(MediaCatalog::new(vec![bad]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_videos_filter() {
        let catalog = MediaCatalog::new(vec![
            item(1, MediaKind::Image),
            item(2, MediaKind::Video),
            item(3, MediaKind::Video),
        ])
        .unwrap();
        let ids: Vec<u32> = catalog.videos().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_from_json_uses_page_field_names() {
        let json = r#"[
            {"id": 1, "type": "image", "url": "https://cdn.example.com/a.jpg", "span": "col-span-2 row-span-3"},
            {"id": 2, "type": "video", "url": "https://cdn.example.com/b.mp4"}
        ]"#;
        let catalog = MediaCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(MediaId(1)).unwrap().span, "col-span-2 row-span-3");
        assert!(catalog.get(MediaId(2)).unwrap().is_video());
        assert_eq!(catalog.get(MediaId(2)).unwrap().span, "");
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let json = r#"[{"id": 1, "type": "audio", "url": "x"}]"#;
        assert_matches!(MediaCatalog::from_json(json), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_serializes_as_item_array() {
        let catalog = MediaCatalog::new(vec![item(2, MediaKind::Video), item(1, MediaKind::Image)]).unwrap();
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"id": 2, "type": "video", "url": "https://cdn.example.com/2", "span": ""},
                {"id": 1, "type": "image", "url": "https://cdn.example.com/1", "span": ""}
            ])
        );
    }

    #[test]
    fn test_clones_share_items() {
        let catalog = MediaCatalog::new(vec![item(1, MediaKind::Image)]).unwrap();
        let clone = catalog.clone();
        assert!(std::ptr::eq(catalog.as_slice(), clone.as_slice()));
    }
}
