//! Input debouncing for live conversion.
//!
//! Typing emits one key event per character; converting and redrawing per
//! keystroke would waste cycles and make the panes flicker. The debouncer
//! coalesces a burst of edits into a single conversion once the input has
//! been quiet for [`QUIESCENT_DELAY`].
//!
//! The state is a single optional deadline. Re-arming overwrites it, which is
//! also the cancellation of the superseded invocation: at most one deadline
//! ever exists, and a superseded one never fires. Time is passed in by the
//! caller so tests run deterministically without sleeping.

use std::time::{Duration, Instant};

/// Quiet period after the last edit before a conversion fires.
pub const QUIESCENT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record an input-change event: arm (or re-arm) the deadline at
    /// `now + delay`.
    pub fn notify(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline without firing it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when a pending deadline has elapsed.
    ///
    /// The slot is cleared on fire, so a deadline observed once is never
    /// observed again.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Remaining wait before the pending deadline, if any.
    ///
    /// Used to bound the event loop's poll timeout so a deadline is observed
    /// promptly instead of on the next idle tick.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
