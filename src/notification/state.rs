use std::time::{Duration, Instant};

use crate::search::Notifier;

/// A single toast message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

/// Holds the toast currently on screen, if any
///
/// A new message replaces the old one.
#[derive(Debug)]
pub struct NotificationState {
    current: Option<Notification>,
    duration: Duration,
}

impl NotificationState {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            current: None,
            duration: Duration::from_millis(duration_ms),
        }
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_error_at(message, Instant::now());
    }

    pub fn show_error_at(&mut self, message: &str, now: Instant) {
        let message = message.lines().next().unwrap_or_default().trim().to_string();
        self.current = Some(Notification {
            message,
            expires_at: now + self.duration,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drop the toast once its time is up. Returns true if one was removed.
    pub fn clear_if_expired(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(notification) if now >= notification.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

impl Notifier for NotificationState {
    fn notify_error(&mut self, message: &str) {
        log::warn!("Search error: {}", message);
        self.show_error(message);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
