//! Keyboard focus within the visible row

/// Which box of the current page has keyboard focus
///
/// The row length changes with the page (a short last page, a list that is
/// still loading), so the index is clamped against the length it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowFocus {
    selected: usize,
}

impl RowFocus {
    pub fn selected(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.selected.min(len - 1))
    }

    /// Move right, wrapping to the first box
    pub fn next(&mut self, len: usize) {
        if let Some(current) = self.selected(len) {
            self.selected = (current + 1) % len;
        }
    }

    /// Move left, wrapping to the last box
    pub fn prev(&mut self, len: usize) {
        if let Some(current) = self.selected(len) {
            self.selected = if current == 0 { len - 1 } else { current - 1 };
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Focus a box directly (mouse)
    pub fn select(&mut self, index: usize, len: usize) {
        if len > 0 {
            self.selected = index.min(len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_row_has_no_focus() {
        let mut focus = RowFocus::default();
        focus.next(0);
        focus.prev(0);
        assert_eq!(focus.selected(0), None);
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut focus = RowFocus::default();
        focus.prev(6);
        assert_eq!(focus.selected(6), Some(5));
        focus.next(6);
        assert_eq!(focus.selected(6), Some(0));
    }

    #[test]
    fn test_clamps_to_shorter_row() {
        let mut focus = RowFocus::default();
        focus.last(6);
        assert_eq!(focus.selected(3), Some(2));
        focus.next(3);
        assert_eq!(focus.selected(3), Some(0));

        focus.select(10, 4);
        assert_eq!(focus.selected(4), Some(3));
    }
}
