//! Mouse click handling
//!
//! A left click on a rendered suggestion selects it.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use super::router::Route;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        handle_click(app, mouse.column, mouse.row);
    }
}

/// Handle left mouse button click at the given cell
pub fn handle_click(app: &mut App, column: u16, row: u16) {
    if app.router.current_route() != Route::Search {
        return;
    }
    app.search.select_at(column, row, &mut app.router);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
