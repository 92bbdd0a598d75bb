//! Keystroke debouncing for search requests
//!
//! Holds the most recent query until the input has been quiet for the
//! configured delay. A zero delay disables debouncing entirely.

use std::time::{Duration, Instant};

/// A query waiting for its debounce window to close
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub text: String,
    pub request_id: u64,
}

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(PendingQuery, Instant)>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.delay.is_zero()
    }

    /// Replace any pending query; the window restarts at `now`
    pub fn schedule(&mut self, query: PendingQuery, now: Instant) {
        self.pending = Some((query, now + self.delay));
    }

    /// Take the pending query if its window has closed
    pub fn take_due(&mut self, now: Instant) -> Option<PendingQuery> {
        match &self.pending {
            Some((_, due)) if now >= *due => self.pending.take().map(|(query, _)| query),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
