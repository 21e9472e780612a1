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

use crate::app::ChatMessage;
use crate::ui::theme;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Render one message: prompt prefix on the first line, continuation lines
/// indented to align, and a trailing blank line as the inter-message gap.
pub fn render_message(msg: &ChatMessage) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (row, text) in msg.text.lines().enumerate() {
        let prefix = if row == 0 {
            Span::styled(format!("{} ", theme::PROMPT_CHAR), Style::default().fg(theme::ACCENT))
        } else {
            Span::raw("  ")
        };
        lines.push(Line::from(vec![prefix, Span::raw(text.to_owned())]));
    }
    if lines.is_empty() {
        // A message that is pure whitespace still occupies its prompt row.
        lines.push(Line::from(Span::styled(
            format!("{} ", theme::PROMPT_CHAR),
            Style::default().fg(theme::ACCENT),
        )));
    }
    lines.push(Line::default());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_line_message_is_two_rows() {
        let lines = render_message(&ChatMessage::new("hello"));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].to_string().starts_with("❯ hello"));
    }

    #[test]
    fn continuation_lines_are_indented() {
        let lines = render_message(&ChatMessage::new("first\nsecond"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].to_string(), "  second");
    }

    #[test]
    fn empty_text_still_renders_prompt_row() {
        let lines = render_message(&ChatMessage::new(""));
        assert_eq!(lines.len(), 2);
    }
}
