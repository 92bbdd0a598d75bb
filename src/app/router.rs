//! In-app navigation
//!
//! A stack of route paths. The search page is always at the bottom.

use crate::search::Navigator;

pub const ROOT_PATH: &str = "/";
const GUARD_PREFIX: &str = "/guard/";

/// A parsed route path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search,
    GuardDetail { id: String },
    NotFound { path: String },
}

impl Route {
    pub fn parse(path: &str) -> Self {
        if path == ROOT_PATH {
            return Route::Search;
        }
        match path.strip_prefix(GUARD_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::GuardDetail { id: id.to_string() },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }
}

#[derive(Debug)]
pub struct Router {
    history: Vec<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            history: vec![ROOT_PATH.to_string()],
        }
    }

    pub fn current_path(&self) -> &str {
        self.history.last().map(|s| s.as_str()).unwrap_or(ROOT_PATH)
    }

    pub fn current_route(&self) -> Route {
        Route::parse(self.current_path())
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Return to the previous route. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        log::debug!("Back to {}", self.current_path());
        true
    }
}

impl Navigator for Router {
    fn navigate_to(&mut self, path: &str) {
        log::info!("Navigating to {}", path);
        self.history.push(path.to_string());
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod router_tests;
