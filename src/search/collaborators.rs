//! Capabilities the search box needs from its host
//!
//! Passed into the controller's operations instead of being reached as
//! globals, so tests can record what happened.

/// Moves the app to another route
pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

/// Surfaces a transient error message to the user
pub trait Notifier {
    fn notify_error(&mut self, message: &str);
}
