//! Viewport visibility tracking.
//!
//! The host reports layout (viewport and element rectangles) whenever it
//! changes; a [`VisibilityObserver`] turns that stream into in-view /
//! out-of-view flips, the only trigger the playback machine reacts to.

/// Fraction of the element that must be visible to count as in view.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Lookahead margin, in pixels, added around the viewport so playback can
/// start slightly before the element scrolls fully into view.
pub const DEFAULT_ROOT_MARGIN: f32 = 50.0;

/// Axis-aligned rectangle in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn right(&self) -> f32 {
        self.x + self.width
    }

    fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn expand(&self, margin: f32) -> Rect {
        Rect {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// Overlapping region, if the rectangles overlap or touch.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Observer tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f32,
    pub root_margin: f32,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
        }
    }
}

/// Visible fraction of `element` within `viewport` grown by `margin`.
///
/// A zero-area element counts as fully visible when it lies inside (or on the
/// edge of) the grown viewport.
pub fn intersection_ratio(viewport: &Rect, element: &Rect, margin: f32) -> f32 {
    let root = viewport.expand(margin);
    let Some(overlap) = root.intersection(element) else {
        return 0.0;
    };
    let area = element.area();
    if area <= 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// A flip of an element's in-view flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityChange {
    pub in_view: bool,
    pub ratio: f32,
}

/// Tracks one element's visibility and reports only threshold crossings.
///
/// The first observation is always reported so the consumer learns the
/// initial state. After [`disconnect`](Self::disconnect) nothing is reported.
#[derive(Debug)]
pub struct VisibilityObserver {
    options: VisibilityOptions,
    last: Option<bool>,
    connected: bool,
}

impl VisibilityObserver {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            last: None,
            connected: true,
        }
    }

    pub fn options(&self) -> VisibilityOptions {
        self.options
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Last reported in-view flag, `None` before the first observation.
    pub fn in_view(&self) -> Option<bool> {
        self.last
    }

    pub fn observe(&mut self, viewport: &Rect, element: &Rect) -> Option<VisibilityChange> {
        if !self.connected {
            return None;
        }
        let ratio = intersection_ratio(viewport, element, self.options.root_margin);
        let in_view = ratio > 0.0 && ratio >= self.options.threshold;
        if self.last == Some(in_view) {
            return None;
        }
        self.last = Some(in_view);
        Some(VisibilityChange { in_view, ratio })
    }

    /// Stop observing. Returns `false` if already disconnected.
    pub fn disconnect(&mut self) -> bool {
        std::mem::replace(&mut self.connected, false)
    }
}
