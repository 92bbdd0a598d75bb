mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod router;

// Re-export public types
pub use app_state::App;
pub use router::{Route, Router};
