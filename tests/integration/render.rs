// =====
// TESTS: 8
// =====
//
// Buffer-level rendering tests against a TestBackend.

use crossterm::event::{KeyCode, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::helpers::{
    draw, draw_until_settled, press, press_with, row_text, screen_text, test_app, test_terminal,
    type_text,
};

#[test]
fn empty_screen_shows_placeholder_and_footer() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    let screen = screen_text(&terminal);
    assert!(screen.contains("Type a message..."));
    assert!(screen.contains("? : Shortcuts"));
    assert!(screen.contains("uchat"));
}

#[test]
fn typed_draft_is_echoed_in_the_input_bar() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    type_text(&mut app, "draft text");
    draw(&mut terminal, &mut app);

    assert!(screen_text(&terminal).contains("❯ draft text"));
}

#[tokio::test]
async fn short_conversation_is_bottom_anchored() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    type_text(&mut app, "hello");
    press(&mut app, KeyCode::Enter);
    app.now_ms += 1_000;
    draw_until_settled(&mut terminal, &mut app);

    // Body spans rows 3..=19; two content rows land at its bottom edge.
    assert_eq!(row_text(&terminal, 18), "❯ hello");
    assert_eq!(row_text(&terminal, 17), "");
    // Input bar sits right below the body separator.
    assert!(row_text(&terminal, 21).contains("Type a message..."));
}

#[tokio::test]
async fn open_panel_covers_the_footer() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    press(&mut app, KeyCode::Char('?'));
    app.now_ms += 1_000;
    draw(&mut terminal, &mut app);

    let screen = screen_text(&terminal);
    assert!(screen.contains("Shortcuts"));
    assert!(screen.contains("Send message"));
    // The footer hint row is gone; the panel's bottom border is there instead.
    assert!(!row_text(&terminal, 23).contains("Quit"));
}

#[tokio::test]
async fn last_message_is_visible_after_many_appends() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    for i in 0..40 {
        type_text(&mut app, &format!("message {i}"));
        press(&mut app, KeyCode::Enter);
        draw(&mut terminal, &mut app);
    }
    draw_until_settled(&mut terminal, &mut app);

    let screen = screen_text(&terminal);
    assert!(screen.contains("message 39"));
    assert!(!screen.contains("message 5\n"));
    assert!(app.scroll_offset > 0);
}

#[tokio::test]
async fn scrolling_up_reveals_older_messages() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    for i in 0..40 {
        type_text(&mut app, &format!("message {i}"));
        press(&mut app, KeyCode::Enter);
        draw(&mut terminal, &mut app);
    }
    draw_until_settled(&mut terminal, &mut app);

    for _ in 0..10 {
        press(&mut app, KeyCode::PageUp);
        draw_until_settled(&mut terminal, &mut app);
    }
    assert_eq!(app.scroll_offset, 0);
    assert!(screen_text(&terminal).contains("message 0"));
}

#[test]
fn compact_terminal_drops_the_chrome() {
    let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    let screen = screen_text(&terminal);
    assert!(!screen.contains("uchat"));
    assert!(!screen.contains("? : Shortcuts"));
    assert!(screen.contains("Type a message..."));
}

#[tokio::test]
async fn header_toggle_changes_the_chrome() {
    let mut terminal = test_terminal();
    let mut app = test_app();
    draw(&mut terminal, &mut app);
    assert!(row_text(&terminal, 1).contains("uchat"));

    press_with(&mut app, KeyCode::Char('h'), KeyModifiers::CONTROL);
    assert!(!app.show_header);
    draw(&mut terminal, &mut app);
    assert!(!row_text(&terminal, 1).contains("uchat"));
}
