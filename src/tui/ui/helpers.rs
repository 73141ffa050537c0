//! Helper functions for UI rendering
//!
//! Geometry for the scrolling document (banner on top, the paged row below)
//! and for sliding rows horizontally. Everything here is pure so it can be
//! tested without a terminal.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the paged row, borders included
pub const ROW_HEIGHT: u16 = 7;

/// Columns between boxes in a row
pub const BOX_GAP: u16 = 1;

/// Vertical layout of the document, in document rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentLayout {
    pub banner_height: u16,
    pub row_top: u16,
    pub total_height: u16,
}

impl DocumentLayout {
    /// The banner fills most of the viewport so the row peeks in below it
    pub fn new(viewport_height: u16) -> Self {
        let banner_height = viewport_height.saturating_sub(ROW_HEIGHT / 2).max(8);
        let row_top = banner_height + 1;
        let total_height = row_top + ROW_HEIGHT + 2;
        Self {
            banner_height,
            row_top,
            total_height,
        }
    }

    /// How far the document can scroll within a body `height` rows tall
    pub fn max_scroll(&self, height: u16) -> u16 {
        self.total_height.saturating_sub(height)
    }
}

/// Map a document band to the screen, clipped to `body`
///
/// Returns `None` when the band is scrolled entirely out of view.
pub fn place(body: Rect, doc_y: u16, height: u16, scroll: u16) -> Option<Rect> {
    let top = i32::from(doc_y) - i32::from(scroll);
    let bottom = top + i32::from(height);
    let visible_top = top.max(0);
    let visible_bottom = bottom.min(i32::from(body.height));
    if visible_bottom <= visible_top {
        return None;
    }
    Some(Rect {
        x: body.x,
        y: body.y + visible_top as u16,
        width: body.width,
        height: (visible_bottom - visible_top) as u16,
    })
}

/// Shift `rect` horizontally by `dx`, clipped to `bounds`
pub fn slide(rect: Rect, dx: i32, bounds: Rect) -> Option<Rect> {
    let left = (i32::from(rect.x) + dx).max(i32::from(bounds.x));
    let right = (i32::from(rect.x) + i32::from(rect.width) + dx)
        .min(i32::from(bounds.x) + i32::from(bounds.width));
    if right <= left {
        return None;
    }
    Some(Rect {
        x: left as u16,
        y: rect.y,
        width: (right - left) as u16,
        height: rect.height,
    })
}

/// Equal-width slots for `page_size` boxes; only the first `count` are returned
pub fn box_rects(row: Rect, count: usize, page_size: usize) -> Vec<Rect> {
    let page_size = page_size.max(1);
    let slots = page_size as u16;
    let gaps = BOX_GAP * slots.saturating_sub(1);
    let width = row.width.saturating_sub(gaps) / slots;
    if width == 0 {
        return Vec::new();
    }
    (0..count.min(page_size) as u16)
        .map(|i| Rect {
            x: row.x + i * (width + BOX_GAP),
            y: row.y,
            width,
            height: row.height,
        })
        .collect()
}

/// Horizontally centered rect of `percent_x` width at a fixed top and height
pub fn centered_band(percent_x: u16, top: u16, height: u16, area: Rect) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);
    let bottom = (top + height).min(area.y + area.height);
    Rect {
        x: columns[1].x,
        y: top,
        width: columns[1].width,
        height: bottom.saturating_sub(top),
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    centered_band(percent_x, popup_layout[1].y, popup_layout[1].height, area)
}

/// Cut `text` to `max` characters, ending with an ellipsis when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Rating like `7.4★`
pub fn format_rating(vote: Option<f64>) -> Option<String> {
    vote.filter(|v| *v > 0.0).map(|v| format!("{v:.1}★"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_scrolls_and_clips() {
        let body = Rect::new(0, 1, 80, 20);

        assert_eq!(place(body, 0, 10, 0), Some(Rect::new(0, 1, 80, 10)));
        assert_eq!(place(body, 0, 10, 4), Some(Rect::new(0, 1, 80, 6)));
        assert_eq!(place(body, 15, 10, 0), Some(Rect::new(0, 16, 80, 5)));
        assert_eq!(place(body, 0, 10, 10), None);
        assert_eq!(place(body, 25, 3, 0), None);
    }

    #[test]
    fn test_slide_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 60, 5);
        let rect = Rect::new(10, 0, 10, 5);

        assert_eq!(slide(rect, 0, bounds), Some(rect));
        assert_eq!(slide(rect, -15, bounds), Some(Rect::new(0, 0, 5, 5)));
        assert_eq!(slide(rect, 45, bounds), Some(Rect::new(55, 0, 5, 5)));
        assert_eq!(slide(rect, -20, bounds), None);
        assert_eq!(slide(rect, 60, bounds), None);
    }

    #[test]
    fn test_box_rects() {
        let row = Rect::new(0, 10, 65, 7);
        let boxes = box_rects(row, 6, 6);
        assert_eq!(boxes.len(), 6);
        assert_eq!(boxes[0], Rect::new(0, 10, 10, 7));
        assert_eq!(boxes[1].x, 11);
        assert_eq!(boxes[5].x, 55);

        // Short page keeps full-page slot widths
        assert_eq!(box_rects(row, 2, 6).len(), 2);
        assert!(box_rects(Rect::new(0, 0, 3, 7), 6, 6).is_empty());
    }

    #[test]
    fn test_document_layout() {
        let layout = DocumentLayout::new(30);
        assert_eq!(layout.banner_height, 27);
        assert_eq!(layout.row_top, 28);
        assert_eq!(layout.total_height, 37);
        assert_eq!(layout.max_scroll(30), 7);
        assert_eq!(layout.max_scroll(50), 0);

        assert_eq!(DocumentLayout::new(4).banner_height, 8);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Heat", 10), "Heat");
        assert_eq!(truncate("The Godfather", 6), "The G…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(7.44)), Some("7.4★".to_string()));
        assert_eq!(format_rating(Some(0.0)), None);
        assert_eq!(format_rating(None), None);
    }
}
