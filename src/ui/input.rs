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

use crate::app::InputState;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// Horizontal padding to match header/footer inset.
const INPUT_PAD: u16 = 2;

/// Prompt prefix width: "❯ " = 2 columns
const PROMPT_WIDTH: u16 = 2;

/// Maximum input area height (lines) so a long draft cannot push the message
/// list off-screen.
const MAX_INPUT_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, input: &InputState) {
    let padded = Rect {
        x: area.x + INPUT_PAD,
        y: area.y,
        width: area.width.saturating_sub(INPUT_PAD * 2),
        height: area.height,
    };

    if input.is_empty() {
        // Placeholder
        let line = Line::from(vec![
            Span::styled(format!("{} ", theme::PROMPT_CHAR), Style::default().fg(theme::ACCENT)),
            Span::styled("Type a message...", Style::default().fg(theme::DIM)),
        ]);
        frame.render_widget(Paragraph::new(line), padded);

        // Cursor after prompt char
        frame.set_cursor_position((padded.x + PROMPT_WIDTH, padded.y));
        return;
    }

    // Build lines with prompt on first line, indent on continuation lines
    let lines: Vec<Line> = input
        .lines
        .iter()
        .enumerate()
        .map(|(row, text)| {
            let prefix = if row == 0 {
                Span::styled(
                    format!("{} ", theme::PROMPT_CHAR),
                    Style::default().fg(theme::ACCENT),
                )
            } else {
                // Indent continuation lines to align with content after "❯ "
                Span::raw("  ")
            };
            Line::from(vec![prefix, Span::raw(text.clone())])
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, padded);

    // Place terminal cursor accounting for visual wrapping.
    let content_width = usize::from(padded.width.saturating_sub(PROMPT_WIDTH));
    if content_width == 0 {
        return;
    }

    let mut visual_row: u16 = 0;
    for row in 0..input.lines.len() {
        let line_chars = input.lines[row].chars().count();
        // Each logical line takes ceil(chars / content_width) visual lines, at least 1
        let wrapped_lines =
            u16::try_from(((line_chars + content_width) / content_width).max(1)).unwrap_or(1);

        if row == input.cursor_row {
            // Cursor is on this logical line — find the visual position within it
            let wrap_row = u16::try_from(input.cursor_col / content_width).unwrap_or(0);
            let wrap_col = u16::try_from(input.cursor_col % content_width).unwrap_or(0);

            let cursor_x = padded.x + PROMPT_WIDTH + wrap_col;
            let cursor_y = padded.y + visual_row + wrap_row;

            if cursor_x < padded.right() && cursor_y < padded.bottom() {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
            return;
        }
        visual_row = visual_row.saturating_add(wrapped_lines);
    }
}

/// Compute the number of visual lines the input occupies, accounting for
/// wrapping. The layout and the anchor's input bar measurement both go
/// through here so they can never disagree.
pub fn visual_line_count(input: &InputState, area_width: u16) -> u16 {
    if input.is_empty() {
        return 1;
    }
    let content_width = usize::from(area_width.saturating_sub(INPUT_PAD * 2 + PROMPT_WIDTH));
    if content_width == 0 {
        return u16::try_from(input.line_count()).unwrap_or(u16::MAX).min(MAX_INPUT_HEIGHT);
    }

    let mut total: u16 = 0;
    for line in &input.lines {
        // Display width, not char count: wide glyphs wrap earlier.
        let width = UnicodeWidthStr::width(line.as_str());
        let wrapped = u16::try_from(((width + content_width) / content_width).max(1)).unwrap_or(1);
        total = total.saturating_add(wrapped);
    }
    total.min(MAX_INPUT_HEIGHT)
}
