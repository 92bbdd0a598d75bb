//! Highlighted-suggestion tracking
//!
//! Keeps the keyboard highlight and the first visible row of the popup so
//! the highlight never scrolls out of view.

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Highlighted suggestion index (None = nothing highlighted)
    selected_index: Option<usize>,
    /// First suggestion shown in the popup
    scroll_offset: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn select_index(&mut self, index: usize, visible: usize) {
        self.selected_index = Some(index);
        self.ensure_visible(visible);
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
        self.scroll_offset = 0;
    }

    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Move down, wrapping to the first suggestion after the last
    pub fn navigate_next(&mut self, suggestion_count: usize, visible: usize) {
        if suggestion_count == 0 {
            return;
        }

        self.selected_index = Some(match self.selected_index {
            Some(current) => (current + 1) % suggestion_count,
            None => 0,
        });
        self.ensure_visible(visible);
    }

    /// Move up, wrapping to the last suggestion before the first
    pub fn navigate_previous(&mut self, suggestion_count: usize, visible: usize) {
        if suggestion_count == 0 {
            return;
        }

        self.selected_index = Some(match self.selected_index {
            Some(0) | None => suggestion_count - 1,
            Some(current) => current - 1,
        });
        self.ensure_visible(visible);
    }

    fn ensure_visible(&mut self, visible: usize) {
        let Some(selected) = self.selected_index else {
            return;
        };
        let visible = visible.max(1);

        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + visible {
            self.scroll_offset = selected + 1 - visible;
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
