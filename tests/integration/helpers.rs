use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use uchat_tui::app::App;

/// Build a minimal `App` for integration testing.
/// No real terminal -- just state plus a test backend when drawing.
pub fn test_app() -> App {
    App::test_default()
}

/// A terminal backed by an in-memory buffer, default chat-screen size.
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

/// Render one frame into the test terminal.
pub fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal.draw(|f| uchat_tui::ui::render(f, app)).unwrap();
}

/// Render repeatedly so smooth scrolling and transitions converge.
pub fn draw_until_settled(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    for _ in 0..60 {
        draw(terminal, app);
    }
}

/// Text content of one buffer row, right-trimmed.
pub fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_owned()
}

/// All buffer rows joined with newlines.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let height = terminal.backend().buffer().area.height;
    (0..height).map(|y| row_text(terminal, y)).collect::<Vec<_>>().join("\n")
}

pub fn press(app: &mut App, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    uchat_tui::app::handle_terminal_event(app, Event::Key(KeyEvent::new(code, modifiers)));
}

/// Type a string one key press at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
