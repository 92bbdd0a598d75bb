use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use super::mouse_click;
use super::router::Route;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => mouse_click::handle_mouse(self, mouse),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.router.current_route() {
            Route::Search => self.handle_search_key(key),
            Route::GuardDetail { .. } | Route::NotFound { .. } => self.handle_page_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.search.query().is_empty() {
                    self.should_quit = true;
                } else {
                    self.search.on_text_change("");
                }
            }
            KeyCode::Down => self.search.select_next(),
            KeyCode::Up => self.search.select_previous(),
            KeyCode::Enter => {
                self.search.select_highlighted(&mut self.router);
            }
            _ => {
                self.search.handle_input_key(key);
            }
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                self.router.back();
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
