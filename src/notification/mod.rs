//! Notification module for guardsearch
//!
//! Provides transient toast messages. The search box reports its errors here
//! through the `Notifier` capability.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationState};
