use std::sync::mpsc;
use std::time::Instant;

use super::router::Router;
use crate::config::Config;
use crate::notification::NotificationState;
use crate::search::{SearchBackend, SearchGuard, worker};

/// Application state
pub struct App {
    pub search: SearchGuard,
    pub router: Router,
    pub notification: NotificationState,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            search: SearchGuard::new(&config.search),
            router: Router::new(),
            notification: NotificationState::new(config.notification.duration_ms),
            should_quit: false,
        }
    }

    /// Start the background search worker and connect the search box to it
    pub fn start_search_worker<B: SearchBackend>(&mut self, backend: B) {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        worker::spawn_worker(backend, request_rx, response_tx);
        self.search.set_channels(request_tx, response_rx);
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advance timers and apply worker responses
    pub fn tick(&mut self, now: Instant) {
        self.search.tick(now, &mut self.notification);
        self.notification.clear_if_expired(now);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
