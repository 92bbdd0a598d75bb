//! Type-ahead search state
//!
//! Owns the query text, the suggestion list and the request bookkeeping.
//! Every text change bumps `request_id`; only responses carrying the latest
//! id may touch the list, which keeps the list in step with the text box no
//! matter in which order the network answers.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::TextArea;

use super::collaborators::{Navigator, Notifier};
use super::debouncer::{Debouncer, PendingQuery};
use super::selection::SelectionState;
use super::suggestion::Suggestion;
use crate::api::GENERIC_ERROR_MESSAGE;
use crate::config::SearchConfig;

pub const PLACEHOLDER: &str = "Guard name, License Number, State...";

/// Rows each rendered suggestion occupies
pub const SUGGESTION_HEIGHT: u16 = 2;

// Popup height must fit in a u16
const MAX_VISIBLE_LIMIT: usize = (u16::MAX / SUGGESTION_HEIGHT) as usize - 1;

/// Request messages sent to the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    Query {
        text: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    Cancel {
        request_id: u64,
    },
}

/// Response messages received from the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    Results {
        request_id: u64,
        suggestions: Vec<Suggestion>,
    },
    Error {
        request_id: u64,
        message: String,
    },
    Cancelled {
        request_id: u64,
    },
}

/// Keys the text box would turn into a line break
fn is_newline_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn create_query_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea
}

/// The search box controller
pub struct SearchGuard {
    input: TextArea<'static>,
    suggestions: Vec<Suggestion>,
    selection: SelectionState,
    /// Latest issued request ID; responses for any other ID are stale
    request_id: u64,
    /// ID of the request the worker is currently running, if any
    in_flight_request_id: Option<u64>,
    debouncer: Debouncer,
    ignore_blank_queries: bool,
    max_visible: usize,
    request_tx: Option<UnboundedSender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
    /// Where the popup was last drawn, for mouse hit-testing
    list_area: Option<Rect>,
}

impl SearchGuard {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            input: create_query_textarea(),
            suggestions: Vec::new(),
            selection: SelectionState::new(),
            request_id: 0,
            in_flight_request_id: None,
            debouncer: Debouncer::new(config.debounce_ms),
            ignore_blank_queries: config.ignore_blank_queries,
            max_visible: config.max_visible.clamp(1, MAX_VISIBLE_LIMIT),
            request_tx: None,
            response_rx: None,
            list_area: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn query(&self) -> &str {
        self.input
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.input
    }

    #[cfg(test)]
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    #[cfg(test)]
    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Whether results for the current text are still on their way
    pub fn is_loading(&self) -> bool {
        self.in_flight_request_id.is_some() || self.debouncer.has_pending()
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn set_list_area(&mut self, area: Option<Rect>) {
        self.list_area = area;
    }

    /// Handle a new value of the text box
    ///
    /// The text and, for an empty query, the cleared list are applied
    /// before returning. Any request for an earlier text is superseded.
    pub fn on_text_change(&mut self, new_text: &str) {
        if self.query() != new_text {
            self.replace_text(new_text);
        }

        self.cancel_in_flight_request();
        self.debouncer.cancel();
        self.request_id = self.request_id.wrapping_add(1);

        if self.is_blank(new_text) {
            self.suggestions.clear();
            self.selection.clear_selection();
            return;
        }

        let query = PendingQuery {
            text: new_text.to_string(),
            request_id: self.request_id,
        };
        if self.debouncer.is_enabled() {
            self.debouncer.schedule(query, Instant::now());
        } else {
            self.send_query(query);
        }
    }

    /// Feed a key press to the text box
    ///
    /// Returns true if the text changed.
    pub fn handle_input_key(&mut self, key: KeyEvent) -> bool {
        if is_newline_key(&key) {
            return false;
        }

        if self.input.input(key) {
            // Single-line input
            let text = self.input.lines().concat();
            if self.input.lines().len() > 1 {
                self.replace_text(&text);
            }
            self.on_text_change(&text);
            return true;
        }
        false
    }

    /// Apply a worker response
    ///
    /// Responses for anything but the latest request are dropped without a
    /// trace. Errors leave the current list as it is.
    pub fn on_search_result(&mut self, response: SearchResponse, notifier: &mut dyn Notifier) {
        match response {
            SearchResponse::Results {
                request_id,
                suggestions,
            } => {
                if request_id != self.request_id {
                    return;
                }
                self.in_flight_request_id = None;
                self.suggestions = suggestions;
                self.selection.clear_selection();
            }
            SearchResponse::Error {
                request_id,
                message,
            } => {
                if request_id != self.request_id {
                    return;
                }
                self.in_flight_request_id = None;
                if message.trim().is_empty() {
                    notifier.notify_error(GENERIC_ERROR_MESSAGE);
                } else {
                    notifier.notify_error(&message);
                }
            }
            SearchResponse::Cancelled { request_id } => {
                if self.in_flight_request_id == Some(request_id) {
                    self.in_flight_request_id = None;
                }
            }
        }
    }

    /// Drain every response the worker has delivered so far
    pub fn poll_responses(&mut self, notifier: &mut dyn Notifier) {
        loop {
            let next = match &self.response_rx {
                Some(rx) => rx.try_recv(),
                None => return,
            };

            match next {
                Ok(response) => self.on_search_result(response, notifier),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    log::error!("Search worker disconnected");
                    self.response_rx = None;
                    self.request_tx = None;
                    self.in_flight_request_id = None;
                    notifier.notify_error("Search is unavailable: worker stopped");
                    return;
                }
            }
        }
    }

    /// Periodic housekeeping from the event loop
    ///
    /// Sends a debounced query whose window has closed, then applies any
    /// responses that arrived.
    pub fn tick(&mut self, now: Instant, notifier: &mut dyn Notifier) {
        if let Some(query) = self.debouncer.take_due(now)
            && query.request_id == self.request_id
        {
            self.send_query(query);
        }
        self.poll_responses(notifier);
    }

    /// Pick a suggestion
    ///
    /// Text and list are cleared together before navigation is requested.
    pub fn on_suggestion_selected(&mut self, suggestion: Suggestion, navigator: &mut dyn Navigator) {
        self.cancel_in_flight_request();
        self.debouncer.cancel();
        self.request_id = self.request_id.wrapping_add(1);
        self.replace_text("");
        self.suggestions.clear();
        self.selection.clear_selection();
        self.list_area = None;

        navigator.navigate_to(&suggestion.detail_route());
    }

    /// Select the highlighted suggestion, or the first one if none is
    /// highlighted. Returns false when the list is empty.
    pub fn select_highlighted(&mut self, navigator: &mut dyn Navigator) -> bool {
        let index = self.selection.get_selected().unwrap_or(0);
        self.select_index(index, navigator)
    }

    pub fn select_index(&mut self, index: usize, navigator: &mut dyn Navigator) -> bool {
        match self.suggestions.get(index).cloned() {
            Some(suggestion) => {
                self.on_suggestion_selected(suggestion, navigator);
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        self.selection
            .navigate_next(self.suggestions.len(), self.max_visible);
    }

    pub fn select_previous(&mut self) {
        self.selection
            .navigate_previous(self.suggestions.len(), self.max_visible);
    }

    /// Map a screen position to the suggestion drawn there
    pub fn suggestion_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area?;
        // Inside the popup border
        if column <= area.x
            || column + 1 >= area.x + area.width
            || row <= area.y
            || row + 1 >= area.y + area.height
        {
            return None;
        }

        let offset = ((row - area.y - 1) / SUGGESTION_HEIGHT) as usize;
        let index = self.selection.scroll_offset() + offset;
        (index < self.suggestions.len()).then_some(index)
    }

    /// Select whatever suggestion was clicked. Returns false on a miss.
    pub fn select_at(&mut self, column: u16, row: u16, navigator: &mut dyn Navigator) -> bool {
        match self.suggestion_at(column, row) {
            Some(index) => self.select_index(index, navigator),
            None => false,
        }
    }

    fn is_blank(&self, text: &str) -> bool {
        text.is_empty() || (self.ignore_blank_queries && text.trim().is_empty())
    }

    fn replace_text(&mut self, text: &str) {
        let block = self.input.block().cloned();
        self.input = create_query_textarea();
        if let Some(block) = block {
            self.input.set_block(block);
        }
        self.input.insert_str(text);
    }

    fn send_query(&mut self, query: PendingQuery) {
        let Some(tx) = &self.request_tx else {
            return;
        };

        let request_id = query.request_id;
        if tx
            .send(SearchRequest::Query {
                text: query.text,
                request_id,
            })
            .is_ok()
        {
            log::debug!("Sent search request {}", request_id);
            self.in_flight_request_id = Some(request_id);
        }
    }

    /// Cancel any in-flight request
    fn cancel_in_flight_request(&mut self) {
        if let Some(request_id) = self.in_flight_request_id.take()
            && let Some(tx) = &self.request_tx
            && tx.send(SearchRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("Sent cancel for request {}", request_id);
        }
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
