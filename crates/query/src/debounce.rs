//! Cancellable quiet-window coalescing for bursty inputs (search keystrokes).
//!
//! Modeled as an explicit deadline state machine over caller-supplied
//! [`Instant`]s rather than a timer runtime: every `submit` supersedes the
//! pending value and restarts the window, and `poll` releases the latest value
//! once the window has elapsed. At most one value is ever pending.

use std::time::{Duration, Instant};

/// Default quiet window for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Coalesces a burst of submissions into the single most recent value.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self { window, pending: None }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit a value at `now`. Any pending value is superseded and the quiet
    /// window restarts from `now`.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending { value, deadline: now + self.window });
    }

    /// Release the pending value if its quiet window has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Release the pending value immediately, window or not.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_is_released_before_the_window_elapses() {
        let mut d = Debouncer::new(ms(400));
        let t0 = Instant::now();
        d.submit("sh", t0);
        assert_eq!(d.poll(t0 + ms(399)), None);
        assert_eq!(d.poll(t0 + ms(400)), Some("sh"));
    }

    #[test]
    fn a_new_submission_supersedes_and_restarts_the_window() {
        let mut d = Debouncer::new(ms(400));
        let t0 = Instant::now();
        d.submit("sh", t0);
        d.submit("shi", t0 + ms(300));
        d.submit("shirt", t0 + ms(500));

        // The first two deadlines have long passed but were superseded.
        assert_eq!(d.poll(t0 + ms(800)), None);
        assert_eq!(d.poll(t0 + ms(900)), Some("shirt"));
    }

    #[test]
    fn at_most_one_value_is_pending() {
        let mut d = Debouncer::new(ms(400));
        let t0 = Instant::now();
        d.submit(1, t0);
        d.submit(2, t0);
        assert_eq!(d.poll(t0 + ms(400)), Some(2));
        assert_eq!(d.poll(t0 + ms(800)), None);
        assert!(!d.has_pending());
    }

    #[test]
    fn flush_releases_immediately_and_cancel_discards() {
        let mut d = Debouncer::new(ms(400));
        let t0 = Instant::now();
        d.submit("a", t0);
        assert_eq!(d.flush(), Some("a"));
        assert_eq!(d.flush(), None);

        d.submit("b", t0);
        d.cancel();
        assert_eq!(d.poll(t0 + ms(1000)), None);
    }
}
