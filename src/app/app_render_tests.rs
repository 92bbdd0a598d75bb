//! Tests for app_render

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::KeyCode;

use crate::app::App;
use crate::search::{Navigator, SearchResponse};
use crate::test_utils::test_helpers::{
    guard, key, last_query_id, test_app, test_app_with_channels,
};

fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut output = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            output.push_str(buffer[(x, y)].symbol());
        }
        output.push('\n');
    }
    output
}

#[test]
fn test_empty_search_page_shows_placeholder() {
    let mut app = test_app();

    let output = render_to_string(&mut app, 80, 20);

    assert!(output.contains("Guard Dashboard"));
    assert!(output.contains("Search Guards"));
    assert!(output.contains("Guard name, License Number, State..."));
    assert!(output.contains("Enter open"));
}

#[test]
fn test_search_page_lists_suggestions() {
    let (mut app, mut requests, responses) = test_app_with_channels();
    app.search.on_text_change("Jo");
    let request_id = last_query_id(&mut requests).unwrap();
    responses
        .send(SearchResponse::Results {
            request_id,
            suggestions: vec![guard("1", "John", "Doe"), guard("2", "Joan", "Roe")],
        })
        .unwrap();
    app.tick(std::time::Instant::now());

    let output = render_to_string(&mut app, 80, 20);

    assert!(output.contains("John Doe"));
    assert!(output.contains("Joan Roe"));
    assert!(output.contains("L1 • CA"));
    assert!(output.contains("2 matches"));
}

#[test]
fn test_render_records_list_area_for_clicks() {
    let (mut app, mut requests, responses) = test_app_with_channels();
    app.search.on_text_change("Jo");
    let request_id = last_query_id(&mut requests).unwrap();
    responses
        .send(SearchResponse::Results {
            request_id,
            suggestions: vec![guard("1", "John", "Doe")],
        })
        .unwrap();
    app.tick(std::time::Instant::now());
    render_to_string(&mut app, 80, 20);

    // Header row, then the 3-row field; first suggestion starts inside the popup border
    let column = (80 - 64) / 2 + 2;
    assert_eq!(app.search.suggestion_at(column, 5), Some(0));
}

#[test]
fn test_detail_page_shows_guard_id() {
    let mut app = test_app();
    app.router.navigate_to("/guard/abc-123");

    let output = render_to_string(&mut app, 80, 20);

    assert!(output.contains("Guard ID: abc-123"));
    assert!(output.contains("Esc back"));
    assert!(!output.contains("Search Guards"));
}

#[test]
fn test_unknown_route_shows_not_found() {
    let mut app = test_app();
    app.router.navigate_to("/account");

    let output = render_to_string(&mut app, 80, 20);

    assert!(output.contains("Page not found: /account"));
}

#[test]
fn test_notification_drawn_over_page() {
    let mut app = test_app();
    app.notification.show_error("Something went wrong! Try again later.");

    let output = render_to_string(&mut app, 80, 20);

    assert!(output.contains("Something went wrong!"));
}

#[test]
fn test_typed_text_is_rendered() {
    let mut app = test_app();
    for c in "Smith".chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }

    let output = render_to_string(&mut app, 80, 20);

    assert!(output.contains("Smith"));
    assert!(!output.contains("Guard name, License Number"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = test_app();
    app.search.on_text_change("Jo");

    render_to_string(&mut app, 10, 3);
    render_to_string(&mut app, 1, 1);
}
