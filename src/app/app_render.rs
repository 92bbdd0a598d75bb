use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use super::router::Route;
use crate::notification::render_notification;
use crate::search::search_render::{self, SEARCH_FIELD_HEIGHT};
use crate::widgets::popup;

const APP_TITLE: &str = " Guard Dashboard ";
const SEARCH_BOX_MAX_WIDTH: u16 = 64;
const DETAIL_WIDTH: u16 = 48;
const DETAIL_HEIGHT: u16 = 7;

const SEARCH_HELP: &str = "↑/↓ highlight • Enter open • Esc clear/quit • Ctrl+C quit";
const PAGE_HELP: &str = "Esc back • q quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(SEARCH_FIELD_HEIGHT),
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

        let route = self.router.current_route();
        self.render_header(frame, layout[0]);

        let help = match &route {
            Route::Search => {
                self.render_search_page(frame, layout[1]);
                SEARCH_HELP
            }
            Route::GuardDetail { id } => {
                render_guard_detail(frame, layout[1], id);
                PAGE_HELP
            }
            Route::NotFound { path } => {
                render_not_found(frame, layout[1], path);
                PAGE_HELP
            }
        };

        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            layout[2],
        );

        // Toasts go on top of everything
        render_notification(frame, &mut self.notification);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", self.router.current_path()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    /// Search box centred horizontally at the top of the page
    fn render_search_page(&mut self, frame: &mut Frame, area: Rect) {
        if area.height < SEARCH_FIELD_HEIGHT || area.width < 3 {
            self.search.set_list_area(None);
            return;
        }

        let width = SEARCH_BOX_MAX_WIDTH.min(area.width);
        let field_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height: SEARCH_FIELD_HEIGHT,
        };

        search_render::render_field(&mut self.search, frame, field_area);
        search_render::render_suggestions(&mut self.search, frame, field_area);
    }
}

fn render_guard_detail(frame: &mut Frame, area: Rect, id: &str) {
    let popup_area = popup::centered_popup(area, DETAIL_WIDTH, DETAIL_HEIGHT);
    popup::clear_area(frame, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Guard ID: ", Style::default().fg(Color::Gray)),
            Span::styled(id.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: back to search",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Guard ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, popup_area);
}

fn render_not_found(frame: &mut Frame, area: Rect, path: &str) {
    let paragraph = Paragraph::new(format!("Page not found: {}", path))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
