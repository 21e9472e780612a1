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

use crate::app::COMPACT_HEIGHT;
use ratatui::layout::{Constraint, Layout, Rect};

pub struct AppLayout {
    pub header_top_sep: Rect,
    pub header: Rect,
    pub header_bot_sep: Rect,
    pub body: Rect,
    pub input_sep: Rect,
    pub input: Rect,
    pub input_bottom_sep: Rect,
    /// Area for the shortcuts panel (zero-height when closed).
    pub panel: Rect,
    pub footer: Option<Rect>,
}

/// `panel_rows` is the panel's current animated height; while it is non-zero
/// the panel covers the footer row, then eats into the body, so the input bar
/// stays pinned directly above the panel's top edge throughout the slide.
pub fn compute(area: Rect, input_lines: u16, show_header: bool, panel_rows: u16) -> AppLayout {
    let input_height = input_lines.max(1);
    let header_height: u16 = u16::from(show_header);
    let header_sep_height: u16 = u16::from(show_header);
    let zero = Rect::new(area.x, area.y, area.width, 0);

    if area.height < COMPACT_HEIGHT {
        // Ultra-compact: no header, no top separator, no footer
        let [body, input, input_bottom_sep, panel] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(input_height),
            Constraint::Length(1),
            Constraint::Length(panel_rows),
        ])
        .areas(area);
        AppLayout {
            header_top_sep: zero,
            header: zero,
            header_bot_sep: zero,
            body,
            input_sep: Rect::new(area.x, input.y, area.width, 0),
            input,
            input_bottom_sep,
            panel,
            footer: None,
        }
    } else {
        let footer_height: u16 = u16::from(panel_rows == 0);
        let [
            header_top_sep,
            header,
            header_bot_sep,
            body,
            input_sep,
            input,
            input_bottom_sep,
            panel,
            footer,
        ] = Layout::vertical([
            Constraint::Length(header_sep_height),
            Constraint::Length(header_height),
            Constraint::Length(header_sep_height),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(input_height),
            Constraint::Length(1),
            Constraint::Length(panel_rows),
            Constraint::Length(footer_height),
        ])
        .areas(area);
        AppLayout {
            header_top_sep,
            header,
            header_bot_sep,
            body,
            input_sep,
            input,
            input_bottom_sep,
            panel,
            footer: (footer_height > 0).then_some(footer),
        }
    }
}
