// uchat-tui — a keyboard-avoiding chat screen for the terminal
// Copyright (C) 2026  uchat-tui contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::App;
use crate::app::submit::submit_message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Rows jumped by a Ctrl+Up/Down scroll step.
const SCROLL_STEP: usize = 3;
/// Rows jumped by PageUp/PageDown.
const PAGE_STEP: usize = 10;

fn is_ctrl_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    is_ctrl_shortcut(key.modifiers)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

pub(super) fn dispatch_key(app: &mut App, key: KeyEvent) {
    if handle_global_shortcuts(app, key) {
        return;
    }
    handle_normal_key(app, key);
}

fn handle_global_shortcuts(app: &mut App, key: KeyEvent) -> bool {
    if is_ctrl_char_shortcut(key, 'q') || is_ctrl_char_shortcut(key, 'c') {
        app.should_quit = true;
        return true;
    }
    if is_ctrl_char_shortcut(key, 'l') {
        app.force_redraw = true;
        return true;
    }
    if is_ctrl_char_shortcut(key, 'h') {
        app.show_header = !app.show_header;
        return true;
    }

    if is_ctrl_shortcut(key.modifiers) {
        match key.code {
            KeyCode::Up => {
                app.scroll_up(SCROLL_STEP);
                return true;
            }
            KeyCode::Down => {
                app.scroll_down(SCROLL_STEP);
                return true;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::PageUp => {
            app.scroll_up(PAGE_STEP);
            true
        }
        KeyCode::PageDown => {
            app.scroll_down(PAGE_STEP);
            true
        }
        _ => false,
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            // Shift+Enter / Alt+Enter insert a line break; plain Enter sends.
            if key.modifiers.contains(KeyModifiers::SHIFT)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                app.input.insert_newline();
            } else {
                submit_message(app);
            }
        }
        KeyCode::Esc => {
            // Mirrors tapping outside the keyboard: dismiss the panel.
            app.panel.close(app.now_ms);
        }
        KeyCode::Backspace => app.input.delete_char_before(),
        KeyCode::Delete => app.input.delete_char_after(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Up => app.input.move_up(),
        KeyCode::Down => app.input.move_down(),
        KeyCode::Home => app.input.move_home(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char('?') if app.input.is_empty() => {
            app.panel.toggle(app.now_ms);
        }
        KeyCode::Char(c) if !is_ctrl_shortcut(key.modifiers) => {
            app.input.insert_char(c);
        }
        _ => {}
    }
}
