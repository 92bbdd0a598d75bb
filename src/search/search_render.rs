//! Search box rendering
//!
//! Draws the query input and, below it, the suggestion popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::search_state::{SUGGESTION_HEIGHT, SearchGuard};
use crate::widgets::popup;

// Search box display constants
pub const SEARCH_FIELD_HEIGHT: u16 = 3;
const POPUP_BORDER_HEIGHT: u16 = 2;
const ITEM_PADDING: usize = 2;

/// Render the query input
pub fn render_field(search: &mut SearchGuard, frame: &mut Frame, area: Rect) {
    let status = if search.is_loading() {
        Some(Span::styled(" searching… ", Style::default().fg(Color::Yellow)))
    } else if !search.query().is_empty() {
        let count = search.suggestions().len();
        let label = if count == 1 { "match" } else { "matches" };
        Some(Span::styled(
            format!(" {} {} ", count, label),
            Style::default().fg(Color::Gray),
        ))
    } else {
        None
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search Guards ")
        .border_style(Style::default().fg(Color::Cyan));
    if let Some(status) = status {
        block = block.title_top(Line::from(status).alignment(Alignment::Right));
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let textarea = search.textarea_mut();
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(&*textarea, inner_area);
}

/// Render the suggestion popup under the input
///
/// Records where it was drawn so clicks can be mapped back to suggestions.
pub fn render_suggestions(search: &mut SearchGuard, frame: &mut Frame, input_area: Rect) {
    let total = search.suggestions().len();
    if total == 0 {
        search.set_list_area(None);
        return;
    }

    let offset = search.selection().scroll_offset().min(total - 1);
    let visible_count = (total - offset).min(search.max_visible());
    let popup_height = visible_count as u16 * SUGGESTION_HEIGHT + POPUP_BORDER_HEIGHT;

    let Some(popup_area) =
        popup::popup_below_anchor(input_area, frame.area(), input_area.width, popup_height)
    else {
        search.set_list_area(None);
        return;
    };

    let text_width = (popup_area.width as usize).saturating_sub(POPUP_BORDER_HEIGHT as usize + ITEM_PADDING);
    let selected = search.selection().get_selected();

    let items: Vec<ListItem> = search
        .suggestions()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_count)
        .map(|(i, suggestion)| {
            let is_selected = selected == Some(i);

            let mut name_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
            let mut summary_style = Style::default().fg(Color::Gray);
            if is_selected {
                name_style = name_style.bg(Color::DarkGray).fg(Color::Yellow);
                summary_style = summary_style.bg(Color::DarkGray);
            }

            let name = truncate_to_width(&suggestion.display_name(), text_width);
            let summary = truncate_to_width(&suggestion.summary(), text_width);

            ListItem::new(Text::from(vec![
                Line::from(Span::styled(format!(" {:<text_width$} ", name), name_style)),
                Line::from(Span::styled(format!(" {:<text_width$} ", summary), summary_style)),
            ]))
        })
        .collect();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    if total > visible_count {
        let position = format!(" {}-{} of {} ", offset + 1, offset + visible_count, total);
        block = block.title_bottom(Line::from(position).alignment(Alignment::Right));
    }

    popup::clear_area(frame, popup_area);
    frame.render_widget(List::new(items).block(block), popup_area);
    search.set_list_area(Some(popup_area));
}

/// Cut `text` to `max_width` display columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width - 1 {
            break;
        }
        width += ch_width;
        result.push(ch);
    }
    result.push('…');
    result
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
