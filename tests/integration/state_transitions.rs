// =====
// TESTS: 10
// =====
//
// State transition integration tests: typing, submitting, panel toggling,
// and the deferred scroll-to-end request.

use crossterm::event::{KeyCode, KeyModifiers};
use pretty_assertions::assert_eq;
use std::time::Duration;

use crate::helpers::{draw, press, press_with, test_app, test_terminal, type_text};

#[test]
fn typing_fills_the_draft() {
    let mut app = test_app();
    type_text(&mut app, "hello there");
    assert_eq!(app.input.text(), "hello there");
    assert!(!app.should_quit);
}

#[tokio::test]
async fn enter_submits_and_clears_draft() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    type_text(&mut app, "first message");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.messages.len(), 1);
    assert_eq!(app.messages[0].text, "first message");
    assert!(app.input.is_empty());
}

#[test]
fn empty_draft_is_not_submitted() {
    let mut app = test_app();
    press(&mut app, KeyCode::Enter);
    assert!(app.messages.is_empty());
}

#[tokio::test]
async fn shift_enter_extends_the_draft() {
    let mut app = test_app();
    type_text(&mut app, "line one");
    press_with(&mut app, KeyCode::Enter, KeyModifiers::SHIFT);
    type_text(&mut app, "line two");
    assert_eq!(app.input.text(), "line one\nline two");
    assert!(app.messages.is_empty());
}

#[test]
fn question_mark_toggles_the_panel() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.panel.is_open());
    press(&mut app, KeyCode::Char('?'));
    assert!(!app.panel.is_open());
}

#[test]
fn esc_dismisses_the_panel() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('?'));
    press(&mut app, KeyCode::Esc);
    assert!(!app.panel.is_open());
}

#[tokio::test]
async fn opening_panel_publishes_a_keyboard_event() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    press(&mut app, KeyCode::Char('?'));
    let event = app.keyboard_events.try_recv().expect("keyboard event");
    assert_eq!(event.target_height, 8.0);

    uchat_tui::app::handle_keyboard_event(&mut app, &event);
    assert_eq!(app.anchor.keyboard_height(), 8.0);
    assert!(app.last_anchor.bottom_offset < 0.0);
}

#[test]
fn ctrl_h_toggles_the_header() {
    let mut app = test_app();
    assert!(app.show_header);
    press_with(&mut app, KeyCode::Char('h'), KeyModifiers::CONTROL);
    assert!(!app.show_header);
}

#[test]
fn ctrl_c_requests_quit() {
    let mut app = test_app();
    press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit);
}

#[tokio::test]
async fn overflowing_append_defers_a_scroll_to_end() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    for i in 0..30 {
        type_text(&mut app, &format!("message {i}"));
        press(&mut app, KeyCode::Enter);
        draw(&mut terminal, &mut app);
    }
    assert!(app.last_anchor.should_scroll_to_end);

    app.auto_scroll = false;
    let event = tokio::time::timeout(Duration::from_millis(500), app.event_rx.recv())
        .await
        .expect("scroll-to-end arrives")
        .expect("channel open");
    uchat_tui::app::handle_app_event(&mut app, event);
    assert!(app.auto_scroll);
}
