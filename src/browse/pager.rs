//! Page cycling over the movie row
//!
//! The first movie of a listing is reserved for the banner, so paging always
//! runs over `items[1..]`. Advancing is forward-only and wraps back to the
//! first page after the last full page.

use tracing::debug;

use crate::models::Movie;

/// Default number of movies shown per page
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Highest valid page index for a list of `len` movies
///
/// `floor((len - 1) / page_size) - 1`, clamped to zero. A trailing partial
/// page is never reached.
pub fn max_index(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    (len.saturating_sub(1) / page_size).saturating_sub(1)
}

/// Owns the current page index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCycler {
    index: usize,
    page_size: usize,
}

impl Default for PageCycler {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageCycler {
    pub fn new(page_size: usize) -> Self {
        Self {
            index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Current page index
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Step to the next page, wrapping to 0 after `max_index`
    ///
    /// Silently does nothing while the list is absent or empty. Gating against
    /// in-flight transitions is the caller's job.
    pub fn advance(&mut self, items: Option<&[Movie]>) {
        let Some(items) = items.filter(|items| !items.is_empty()) else {
            return;
        };

        let max = max_index(items.len(), self.page_size);
        let prev = self.index;
        self.index = if self.index >= max { 0 } else { self.index + 1 };
        debug!(from = prev, to = self.index, max, "page advanced");
    }

    /// Pull the index back into range after the list shrank
    pub fn clamp(&mut self, len: usize) {
        let max = max_index(len, self.page_size);
        if self.index > max {
            debug!(from = self.index, to = max, "page index clamped");
            self.index = max;
        }
    }

    /// Movies on the current page, excluding the banner
    pub fn visible<'a>(&self, items: &'a [Movie]) -> &'a [Movie] {
        page_slice(items, self.index, self.page_size)
    }

    /// Movies on an arbitrary page (used while a transition shows the old page)
    pub fn page<'a>(&self, items: &'a [Movie], index: usize) -> &'a [Movie] {
        page_slice(items, index, self.page_size)
    }

    /// Number of pages a user can cycle through
    pub fn page_count(&self, items: &[Movie]) -> usize {
        if items.is_empty() {
            0
        } else {
            max_index(items.len(), self.page_size) + 1
        }
    }
}

/// The banner movie (index 0), never part of a page
pub fn banner(items: &[Movie]) -> Option<&Movie> {
    items.first()
}

fn page_slice(items: &[Movie], index: usize, page_size: usize) -> &[Movie] {
    let rest = items.get(1..).unwrap_or(&[]);
    let start = (page_size * index).min(rest.len());
    let end = (start + page_size).min(rest.len());
    &rest[start..end]
}
