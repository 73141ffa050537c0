//! Detail overlay control
//!
//! Opening and closing the overlay are navigation side effects only; the
//! overlay itself is visible exactly when the current location matches the
//! detail pattern.

use tracing::debug;

use super::resolver::resolve;
use super::route::{BASE_PATH, Navigator, detail_path};
use crate::models::Movie;

/// Default distance (in rows) between the scroll position and the overlay top
pub const DEFAULT_OVERLAY_OFFSET: u16 = 2;

/// Current document viewport, read fresh on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    /// Vertical scroll position of the document
    pub scroll_y: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            scroll_y: 0,
        }
    }
}

/// What the overlay should show for the current location
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView<'a> {
    /// Row the overlay is anchored at
    pub anchor: u16,
    /// Identity shared with the row box for the same movie
    pub layout_id: String,
    /// Resolved movie, `None` renders an empty body
    pub movie: Option<&'a Movie>,
}

/// Issues navigation for the overlay and anchors it to the scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayController {
    offset: u16,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_OFFSET)
    }
}

impl OverlayController {
    pub fn new(offset: u16) -> Self {
        Self { offset }
    }

    /// Navigate to the detail location for `id`
    pub fn open(&self, nav: &mut impl Navigator, id: i64) {
        debug!(id, "open overlay");
        nav.push(&detail_path(id));
    }

    /// Navigate back to the base location
    pub fn close(&self, nav: &mut impl Navigator) {
        debug!("close overlay");
        nav.push(BASE_PATH);
    }

    /// Scroll position plus the fixed offset
    pub fn anchor_offset(&self, viewport: &Viewport) -> u16 {
        viewport.scroll_y.saturating_add(self.offset)
    }

    /// Overlay for the current location, `None` when no detail route matches
    pub fn view<'a>(
        &self,
        nav: &impl Navigator,
        items: Option<&'a [Movie]>,
        viewport: &Viewport,
    ) -> Option<OverlayView<'a>> {
        let route = nav.route_match()?;
        let movie = resolve(Some(&route.item_id), items);
        Some(OverlayView {
            anchor: self.anchor_offset(viewport),
            layout_id: route.item_id,
            movie,
        })
    }
}
