//! Type-ahead guard search
//!
//! Keystrokes update the query and dispatch requests to a background worker;
//! responses are matched against the latest request ID before they may
//! replace the suggestion list.

mod backend;
mod collaborators;
mod debouncer;
pub mod search_render;
mod search_state;
mod selection;
mod suggestion;
pub mod worker;

pub use backend::{HttpSearchBackend, SearchBackend};
pub use collaborators::{Navigator, Notifier};
pub use search_state::{PLACEHOLDER, SearchGuard, SearchRequest, SearchResponse};
pub use selection::SelectionState;
pub use suggestion::Suggestion;
