use std::time::Instant;

use ratatui::{
    Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::NotificationState;
use crate::search::search_render::truncate_to_width;
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;
const HEIGHT: u16 = 3;
const MARGIN: u16 = 1;

/// Draw the current toast in the top-right corner
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    state.clear_if_expired(Instant::now());
    let Some(notification) = state.current() else {
        return;
    };

    let color = Color::Red;
    let frame_area = frame.area();
    let text_width = (notification.message.width() as u16).min(MAX_WIDTH);
    let area = popup::top_right(frame_area, text_width + 4, HEIGHT, MARGIN);
    let message = truncate_to_width(&notification.message, area.width.saturating_sub(4) as usize);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));
    let paragraph = Paragraph::new(Line::from(format!(" {} ", message)))
        .style(Style::default().fg(color))
        .block(block);

    popup::clear_area(frame, area);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
