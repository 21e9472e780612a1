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

use super::{App, AppEvent};
use crate::anchor::KeyboardEvent;
use crate::app::keys::dispatch_key;
use crossterm::event::{Event, KeyEventKind, MouseEvent, MouseEventKind};

const MOUSE_SCROLL_LINES: usize = 3;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            dispatch_key(app, key);
        }
        Event::Mouse(mouse) => {
            handle_mouse_event(app, mouse);
        }
        Event::Paste(text) => {
            app.input.insert_str(&text);
        }
        // Resize is handled automatically by ratatui; the next layout pass
        // picks up the new frame area.
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_up(MOUSE_SCROLL_LINES);
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down(MOUSE_SCROLL_LINES);
            // auto_scroll re-engagement handled by chat render clamping
        }
        MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
            // Clicking the message list dismisses the panel, like tapping
            // the conversation to put the keyboard away.
            let body = app.cached_body_area;
            if app.panel.is_open()
                && mouse.column >= body.x
                && mouse.column < body.right()
                && mouse.row >= body.y
                && mouse.row < body.bottom()
            {
                app.panel.close(app.now_ms);
            }
        }
        _ => {}
    }
}

/// A keyboard (panel) frame change arrived: recompute the anchor layout from
/// fresh geometry snapshots and apply the result.
pub fn handle_keyboard_event(app: &mut App, event: &KeyboardEvent) {
    let viewport = app.viewport_metrics();
    let input_bar = app.input_bar_state();
    let list = app.list_content_state();

    let Some(result) = app.anchor.on_keyboard_event(event, viewport, input_bar, list) else {
        return;
    };

    // Keyboard transitions own the inset from here; drop any short
    // append-driven tween still in flight.
    app.inset_anim = None;
    app.last_anchor = result;
    if result.should_scroll_to_end {
        app.engage_auto_scroll();
    }
    tracing::debug!(
        top_inset = result.top_inset,
        bottom_offset = result.bottom_offset,
        scroll = result.should_scroll_to_end,
        "applied keyboard layout"
    );
}

pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::ScrollToEnd => {
            app.engage_auto_scroll();
        }
    }
}
