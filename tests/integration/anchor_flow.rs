// =====
// TESTS: 6
// =====
//
// End-to-end agreement between the anchor computation and the rendered
// layout: the top inset the anchor reports must equal the gap the layout
// actually leaves above the content, with and without the panel.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

use crate::helpers::{draw, draw_until_settled, press, test_app, test_terminal, type_text};

fn submit(app: &mut uchat_tui::app::App, text: &str) {
    type_text(app, text);
    press(app, KeyCode::Enter);
}

/// Open the panel, let the slide finish, and run the resulting keyboard
/// event through the app.
fn open_panel_settled(app: &mut uchat_tui::app::App) {
    press(app, KeyCode::Char('?'));
    app.now_ms += 1_000;
    let event = app.keyboard_events.try_recv().expect("keyboard event");
    uchat_tui::app::handle_keyboard_event(app, &event);
}

// On an 80x24 frame with the header shown: 3 rows of top chrome, 1 footer
// row, and an empty input bar measuring 3 (1 content row + 2 separators).

#[tokio::test]
async fn panel_over_empty_conversation() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    open_panel_settled(&mut app);

    // inset = total - panel + bottom safe area = 24 - 8 + 1
    assert_eq!(app.last_anchor.top_inset, 17.0);
    // offset = -(panel - bottom safe area) = -(8 - 1)
    assert_eq!(app.last_anchor.bottom_offset, -7.0);
    assert!(!app.last_anchor.should_scroll_to_end);
}

#[tokio::test]
async fn short_conversation_inset_matches_rendered_gap() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    submit(&mut app, "one");
    submit(&mut app, "two");
    app.now_ms += 1_000;
    draw_until_settled(&mut terminal, &mut app);

    // Two messages, two rows each (content + gap).
    assert_eq!(app.content_height, 4);
    // available = 24 - 3 - 1 - 3 = 17; inset = 17 - 4
    assert_eq!(app.last_anchor.top_inset, 13.0);
    // The layout leaves exactly that gap above the content.
    let body_height = f32::from(app.cached_body_area.height);
    assert_eq!(body_height - 4.0, app.last_anchor.top_inset);
}

#[tokio::test]
async fn panel_inset_matches_shrunk_body() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    submit(&mut app, "one");
    submit(&mut app, "two");
    open_panel_settled(&mut app);
    draw_until_settled(&mut terminal, &mut app);

    // available = 24 - 3 - 1 - 8 - 3 = 9; inset = 9 - 4 + bottom safe area
    assert_eq!(app.last_anchor.top_inset, 6.0);
    // The body shrank by the panel minus the footer it replaced, and the
    // structural gap equals the computed inset.
    let body_height = f32::from(app.cached_body_area.height);
    assert_eq!(body_height - 4.0, app.last_anchor.top_inset);
}

#[tokio::test]
async fn overflow_drops_the_inset_and_requests_scroll() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    for i in 0..30 {
        submit(&mut app, &format!("message {i}"));
        draw(&mut terminal, &mut app);
    }

    assert_eq!(app.last_anchor.top_inset, 0.0);
    assert!(app.last_anchor.should_scroll_to_end);
    assert!(app.content_height > usize::from(app.cached_body_area.height));
}

#[tokio::test]
async fn closing_panel_restores_offsets() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    open_panel_settled(&mut app);
    assert_eq!(app.last_anchor.bottom_offset, -7.0);

    press(&mut app, KeyCode::Esc);
    app.now_ms += 1_000;
    let event = app.keyboard_events.try_recv().expect("dismiss event");
    uchat_tui::app::handle_keyboard_event(&mut app, &event);

    assert_eq!(app.anchor.keyboard_height(), 0.0);
    assert_eq!(app.last_anchor.bottom_offset, 0.0);
    assert_eq!(app.last_anchor.top_inset, 25.0);
}

#[tokio::test]
async fn hidden_header_widens_the_available_space() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    app.show_header = false;
    draw(&mut terminal, &mut app);

    submit(&mut app, "only");
    app.now_ms += 1_000;
    draw_until_settled(&mut terminal, &mut app);

    // available = 24 - 0 - 1 - 3 = 20; inset = 20 - 2
    assert_eq!(app.last_anchor.top_inset, 18.0);
    let body_height = f32::from(app.cached_body_area.height);
    assert_eq!(body_height - 2.0, app.last_anchor.top_inset);
}
