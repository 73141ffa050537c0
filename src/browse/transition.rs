//! Row slide animation between pages
//!
//! The outgoing page slides from `x = 0` to `x = -width` while the incoming
//! page slides from `x = +width` to `x = 0`. Completion is reported once per
//! transition through [`RowTransition::tick`]; nothing is replayed.

use std::time::{Duration, Instant};

/// Default duration of a page slide
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(1000);

/// Quadratic ease-in-out on `t` in [0, 1]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Milestone reported by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The outgoing page finished its exit
    ExitComplete,
}

/// Horizontal placement of both pages at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOffsets {
    pub exiting_page: usize,
    pub exiting_x: i32,
    pub entering_page: usize,
    pub entering_x: i32,
}

#[derive(Debug, Clone, Copy)]
struct Slide {
    from: usize,
    to: usize,
    started: Instant,
}

/// Slide animation keyed by page index
#[derive(Debug, Clone)]
pub struct RowTransition {
    duration: Duration,
    active: Option<Slide>,
}

impl Default for RowTransition {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION)
    }
}

impl RowTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Begin sliding from page `from` to page `to`
    ///
    /// A slide already running is replaced and never reports completion.
    pub fn start(&mut self, from: usize, to: usize, now: Instant) {
        self.active = Some(Slide {
            from,
            to,
            started: now,
        });
    }

    /// Drop the running slide without reporting completion
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Eased progress of the running slide
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let slide = self.active?;
        Some(ease_in_out(self.raw_progress(slide, now)))
    }

    /// Positions of both pages for a row `width` columns wide
    pub fn offsets(&self, now: Instant, width: u16) -> Option<RowOffsets> {
        let slide = self.active?;
        let p = ease_in_out(self.raw_progress(slide, now));
        let width = f32::from(width);
        let travelled = (width * p).round() as i32;
        Some(RowOffsets {
            exiting_page: slide.from,
            exiting_x: -travelled,
            entering_page: slide.to,
            entering_x: width as i32 - travelled,
        })
    }

    /// Advance the clock; yields [`TransitionEvent::ExitComplete`] exactly once
    pub fn tick(&mut self, now: Instant) -> Option<TransitionEvent> {
        let slide = self.active?;
        if self.raw_progress(slide, now) >= 1.0 {
            self.active = None;
            return Some(TransitionEvent::ExitComplete);
        }
        None
    }

    fn raw_progress(&self, slide: Slide, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(slide.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn test_idle_transition_reports_nothing() {
        let mut transition = RowTransition::default();
        let now = Instant::now();
        assert!(!transition.is_animating());
        assert!(transition.offsets(now, 80).is_none());
        assert!(transition.tick(now).is_none());
    }

    #[test]
    fn test_completion_fires_once() {
        let mut transition = RowTransition::new(Duration::from_millis(100));
        let start = Instant::now();
        transition.start(0, 1, start);

        assert!(transition.tick(start + Duration::from_millis(50)).is_none());
        assert_eq!(
            transition.tick(start + Duration::from_millis(100)),
            Some(TransitionEvent::ExitComplete)
        );
        assert!(transition.tick(start + Duration::from_millis(200)).is_none());
        assert!(!transition.is_animating());
    }

    #[test]
    fn test_offsets_follow_width() {
        let mut transition = RowTransition::new(Duration::from_millis(100));
        let start = Instant::now();
        transition.start(2, 0, start);

        let at_start = transition.offsets(start, 80).unwrap();
        assert_eq!(at_start.exiting_page, 2);
        assert_eq!(at_start.entering_page, 0);
        assert_eq!(at_start.exiting_x, 0);
        assert_eq!(at_start.entering_x, 80);

        let halfway = transition.offsets(start + Duration::from_millis(50), 120).unwrap();
        assert_eq!(halfway.exiting_x, -60);
        assert_eq!(halfway.entering_x, 60);

        let done = transition.offsets(start + Duration::from_millis(100), 80).unwrap();
        assert_eq!(done.exiting_x, -80);
        assert_eq!(done.entering_x, 0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut transition = RowTransition::new(Duration::ZERO);
        let now = Instant::now();
        transition.start(0, 1, now);
        assert_eq!(transition.tick(now), Some(TransitionEvent::ExitComplete));
    }

    #[test]
    fn test_cancel_never_reports_completion() {
        let mut transition = RowTransition::new(Duration::from_millis(100));
        let start = Instant::now();
        transition.start(0, 1, start);
        transition.cancel();

        assert!(!transition.is_animating());
        assert!(transition.tick(start + Duration::from_secs(1)).is_none());
    }
}
