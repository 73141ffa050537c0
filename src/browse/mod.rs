//! Paged row browsing and the detail overlay
//!
//! [`BrowseState`] ties the page cycler, the transition gate and the row
//! animation together so an advance is only accepted while no other slide is
//! running. The overlay side is independent and driven by navigation.

pub mod gate;
pub mod overlay;
pub mod pager;
pub mod resolver;
pub mod route;
pub mod transition;

use std::time::{Duration, Instant};

use tracing::debug;

pub use gate::{TransitionGate, TransitionState};
pub use overlay::{DEFAULT_OVERLAY_OFFSET, OverlayController, OverlayView, Viewport};
pub use pager::{DEFAULT_PAGE_SIZE, PageCycler, banner, max_index};
pub use resolver::{parse_item_id, resolve};
pub use route::{
    BASE_PATH, DETAIL_PATTERN, MemoryHistory, Navigator, RouteMatch, RoutePattern, detail_path,
    match_detail,
};
pub use transition::{RowOffsets, RowTransition, TransitionEvent};

use crate::models::Movie;

/// Page index, gate and row animation for one browsing session
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pager: PageCycler,
    gate: TransitionGate,
    transition: RowTransition,
}

impl BrowseState {
    /// New session; `gate_timeout` enables the stale-gate fallback
    pub fn new(page_size: usize, transition: Duration, gate_timeout: Option<Duration>) -> Self {
        let gate = match gate_timeout {
            Some(timeout) => TransitionGate::with_timeout(timeout),
            None => TransitionGate::new(),
        };
        Self {
            pager: PageCycler::new(page_size),
            gate,
            transition: RowTransition::new(transition),
        }
    }

    pub fn pager(&self) -> &PageCycler {
        &self.pager
    }

    pub fn gate(&self) -> &TransitionGate {
        &self.gate
    }

    pub fn transition(&self) -> &RowTransition {
        &self.transition
    }

    pub fn page_index(&self) -> usize {
        self.pager.index()
    }

    /// Gate-checked page advance
    ///
    /// Returns `true` when the advance was accepted. The new index is
    /// committed before the slide starts, so the completion of this slide
    /// always follows the index change. With no list loaded nothing happens
    /// and the gate stays open.
    pub fn advance(&mut self, items: Option<&[Movie]>, now: Instant) -> bool {
        let Some(items) = items.filter(|items| !items.is_empty()) else {
            return false;
        };
        if !self.gate.request_advance_at(now) {
            return false;
        }

        let from = self.pager.index();
        self.pager.advance(Some(items));
        let to = self.pager.index();
        if from == to {
            // Single page: nothing slides, so nothing will report completion
            self.gate.on_transition_complete();
            return true;
        }
        self.transition.start(from, to, now);
        true
    }

    /// Keep the page index valid for a list of `len` movies
    pub fn clamp(&mut self, len: usize) {
        self.pager.clamp(len);
    }

    /// Drive the animation clock and the stale-gate fallback
    pub fn tick(&mut self, now: Instant) -> Option<TransitionEvent> {
        let event = self.transition.tick(now);
        if let Some(TransitionEvent::ExitComplete) = event {
            debug!(page = self.pager.index(), "row transition complete");
            self.gate.on_transition_complete();
        }
        if self.gate.release_if_stale(now) {
            // The slide that never finished must not overlap the next one
            self.transition.cancel();
        }
        event
    }

    /// Deliver a completion signal that did not come from [`tick`](Self::tick)
    pub fn on_transition_complete(&mut self) {
        self.gate.on_transition_complete();
    }

    pub fn visible<'a>(&self, items: &'a [Movie]) -> &'a [Movie] {
        self.pager.visible(items)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies(n: usize) -> Vec<Movie> {
        (0..n)
            .map(|i| Movie::new(i as i64, format!("Movie {i}"), ""))
            .collect()
    }

    fn state() -> BrowseState {
        BrowseState::new(6, Duration::from_millis(100), None)
    }

    #[test]
    fn test_advance_rejected_while_in_flight() {
        let items = movies(20);
        let mut browse = state();
        let start = Instant::now();

        assert!(browse.advance(Some(&items), start));
        assert_eq!(browse.page_index(), 1);
        assert_eq!(browse.gate().state(), TransitionState::InFlight);

        assert!(!browse.advance(Some(&items), start + Duration::from_millis(10)));
        assert_eq!(browse.page_index(), 1);
    }

    #[test]
    fn test_completion_reopens_gate() {
        let items = movies(20);
        let mut browse = state();
        let start = Instant::now();

        assert!(browse.advance(Some(&items), start));
        assert!(browse.tick(start + Duration::from_millis(50)).is_none());
        assert_eq!(
            browse.tick(start + Duration::from_millis(100)),
            Some(TransitionEvent::ExitComplete)
        );
        assert!(browse.gate().is_idle());

        assert!(browse.advance(Some(&items), start + Duration::from_millis(110)));
        assert_eq!(browse.page_index(), 2);
    }

    #[test]
    fn test_external_completion_signal() {
        let items = movies(13);
        let mut browse = state();
        let now = Instant::now();

        assert!(browse.advance(Some(&items), now));
        assert!(!browse.advance(Some(&items), now));
        browse.on_transition_complete();
        assert!(browse.advance(Some(&items), now));
        assert_eq!(browse.page_index(), 0);
    }

    #[test]
    fn test_advance_without_items_keeps_gate_open() {
        let mut browse = state();
        let now = Instant::now();
        assert!(!browse.advance(None, now));
        assert!(!browse.advance(Some(&[]), now));
        assert!(browse.gate().is_idle());
        assert!(!browse.is_animating());
    }

    #[test]
    fn test_transition_slides_between_committed_pages() {
        let items = movies(13);
        let mut browse = state();
        let now = Instant::now();

        browse.advance(Some(&items), now);
        let offsets = browse.transition().offsets(now, 60).unwrap();
        assert_eq!(offsets.exiting_page, 0);
        assert_eq!(offsets.entering_page, 1);
        assert_eq!(offsets.entering_page, browse.page_index());
    }

    #[test]
    fn test_gate_timeout_fallback() {
        let items = movies(20);
        let mut browse = BrowseState::new(6, Duration::from_secs(60), Some(Duration::from_millis(200)));
        let start = Instant::now();

        assert!(browse.advance(Some(&items), start));
        browse.tick(start + Duration::from_millis(199));
        assert!(!browse.gate().is_idle());

        browse.tick(start + Duration::from_millis(200));
        assert!(browse.gate().is_idle());
        assert!(!browse.is_animating());
        assert!(browse.advance(Some(&items), start + Duration::from_millis(201)));
    }

    #[test]
    fn test_stale_release_ends_running_slide() {
        let items = movies(25);
        let mut browse = BrowseState::new(6, Duration::from_secs(5), Some(Duration::from_secs(3)));
        let start = Instant::now();

        assert!(browse.advance(Some(&items), start));
        browse.tick(start + Duration::from_secs(3));
        assert!(browse.gate().is_idle());
        assert!(!browse.is_animating());

        // Only the new slide is in flight
        assert!(browse.advance(Some(&items), start + Duration::from_secs(3)));
        let offsets = browse.transition().offsets(start + Duration::from_secs(3), 60).unwrap();
        assert_eq!((offsets.exiting_page, offsets.entering_page), (1, 2));
        assert!(!browse.advance(Some(&items), start + Duration::from_secs(4)));
    }

    #[test]
    fn test_single_page_advance_does_not_slide() {
        let items = movies(7);
        let mut browse = state();
        let now = Instant::now();

        assert!(browse.advance(Some(&items), now));
        assert_eq!(browse.page_index(), 0);
        assert!(!browse.is_animating());
        assert!(browse.gate().is_idle());
        assert!(browse.advance(Some(&items), now));
    }

    #[test]
    fn test_clamp_follows_shorter_list() {
        let mut browse = state();
        let now = Instant::now();
        let long = movies(25);
        for step in 0..3 {
            let at = now + Duration::from_millis(200 * step);
            browse.tick(at);
            assert!(browse.advance(Some(&long), at));
        }
        assert_eq!(browse.page_index(), 3);

        browse.clamp(13);
        assert_eq!(browse.page_index(), 1);
    }
}
