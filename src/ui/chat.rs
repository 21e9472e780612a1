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

//! Message list rendering.
//!
//! Short conversations are bottom-anchored: the content is rendered in a
//! sub-rect pushed down by the top inset so the latest message sits just above
//! the input bar. Once content overflows, the inset disappears and the list
//! scrolls within the full body area instead.

use crate::app::{App, ChatMessage};
use crate::ui::message;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};

/// Wrapped row count of the whole conversation at the given width. Also used
/// off-frame after an append, before the next layout pass runs.
pub fn content_rows(messages: &[ChatMessage], width: u16) -> usize {
    if messages.is_empty() {
        return 0;
    }
    let lines: Vec<_> = messages.iter().flat_map(message::render_message).collect();
    Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }).line_count(width)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    app.cached_body_area = area;

    if app.messages.is_empty() {
        app.content_height = 0;
        app.scroll_offset = 0;
        app.scroll_target = 0;
        app.scroll_pos = 0.0;
        return;
    }

    let all_lines: Vec<_> = app.messages.iter().flat_map(message::render_message).collect();

    // Build paragraph once — line_count gives the real wrapped height
    let paragraph = Paragraph::new(Text::from(all_lines)).wrap(Wrap { trim: false });
    let content_height = paragraph.line_count(area.width);
    app.content_height = content_height;
    let viewport_height = area.height as usize;

    // Drop the append transition once it has landed.
    if app.inset_anim.is_some_and(|t| t.is_done(app.now_ms)) {
        app.inset_anim = None;
    }

    if content_height <= viewport_height {
        // Short content: render in a bottom-anchored sub-rect, eased there by
        // the append transition when one is running.
        let settled_offset = (viewport_height - content_height) as f32;
        let offset_f = app
            .inset_anim
            .map_or(settled_offset, |t| t.sample(app.now_ms).clamp(0.0, settled_offset));
        let offset = offset_f.round() as u16;
        let render_area = Rect {
            x: area.x,
            y: area.y + offset,
            width: area.width,
            height: area.height - offset,
        };
        app.scroll_offset = 0;
        app.scroll_target = 0;
        app.scroll_pos = 0.0;
        app.auto_scroll = true;
        frame.render_widget(paragraph, render_area);
    } else {
        // Long content: scroll within the full viewport
        let max_scroll = content_height - viewport_height;
        if app.auto_scroll {
            app.scroll_target = max_scroll;
        }
        app.scroll_target = app.scroll_target.min(max_scroll);

        let target = app.scroll_target as f32;
        let delta = target - app.scroll_pos;
        if delta.abs() < 0.01 {
            app.scroll_pos = target;
        } else {
            // Smooth over ~2-3 frames at 30fps.
            app.scroll_pos += delta * 0.5;
        }
        app.scroll_offset = app.scroll_pos.round() as usize;
        if app.scroll_offset >= max_scroll {
            app.auto_scroll = true;
        }
        frame.render_widget(paragraph.scroll((app.scroll_offset as u16, 0)), area);
    }
}
