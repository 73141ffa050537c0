//! Transition gate
//!
//! At most one page transition may be in flight. The gate closes when an
//! advance is accepted and reopens only when the animation layer reports that
//! the exit animation finished, or when an optional fallback timeout expires.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

/// Whether a page transition is currently animating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    InFlight,
}

/// Mutual exclusion for page transitions
#[derive(Debug, Clone, Default)]
pub struct TransitionGate {
    state: TransitionState,
    closed_at: Option<Instant>,
    timeout: Option<Duration>,
}

impl TransitionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate that force-reopens after `timeout` without a completion signal
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::default()
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == TransitionState::Idle
    }

    /// Try to claim the gate for a new page advance
    ///
    /// Returns `false` (and changes nothing) while a transition is in flight.
    pub fn request_advance(&mut self) -> bool {
        self.request_advance_at(Instant::now())
    }

    /// [`request_advance`](Self::request_advance) with an explicit clock
    pub fn request_advance_at(&mut self, now: Instant) -> bool {
        match self.state {
            TransitionState::InFlight => {
                debug!("advance rejected: transition in flight");
                false
            }
            TransitionState::Idle => {
                self.state = TransitionState::InFlight;
                self.closed_at = Some(now);
                true
            }
        }
    }

    /// Completion signal from the animation layer
    ///
    /// Always lands on `Idle`; a repeated or stray signal cannot close the gate.
    pub fn on_transition_complete(&mut self) {
        self.state = TransitionState::Idle;
        self.closed_at = None;
    }

    /// Reopen a gate stuck in flight past its timeout
    ///
    /// Returns `true` if the gate was released. Gates without a timeout never
    /// release on their own.
    pub fn release_if_stale(&mut self, now: Instant) -> bool {
        let (Some(timeout), Some(closed_at)) = (self.timeout, self.closed_at) else {
            return false;
        };
        if self.state == TransitionState::InFlight && now.duration_since(closed_at) >= timeout {
            warn!(
                timeout_ms = timeout.as_millis() as u64,
                "transition completion never arrived, reopening gate"
            );
            self.on_transition_complete();
            return true;
        }
        false
    }
}
