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

//! The shortcuts panel body. During the slide the area is the panel's current
//! animated height, so the top border enters first and rows reveal from the
//! top as the panel rises.

use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

const COLUMN_GAP: usize = 4;

const SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "Send message"),
    ("Shift+Enter", "Insert newline"),
    ("?", "Toggle this panel"),
    ("Esc", "Dismiss panel"),
    ("Ctrl+Up/Down", "Scroll chat"),
    ("PageUp/Down", "Scroll a page"),
    ("Ctrl+H", "Toggle header"),
    ("Ctrl+L", "Redraw screen"),
    ("Ctrl+C", "Quit"),
];

#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let rows = SHORTCUTS.len().div_ceil(2);
    let inner_width = usize::from(area.width.saturating_sub(2));
    let col_width = inner_width.saturating_sub(COLUMN_GAP) / 2;

    let mut table_rows: Vec<Row<'static>> = Vec::with_capacity(rows);
    for row in 0..rows {
        let left = SHORTCUTS.get(row).copied().unwrap_or_default();
        let right = SHORTCUTS.get(row + rows).copied().unwrap_or_default();
        table_rows
            .push(Row::new(vec![Cell::from(format_item(left)), Cell::from(format_item(right))]));
    }

    let block = Block::default()
        .title(Span::styled(
            " Shortcuts ",
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let table = Table::new(
        table_rows,
        [Constraint::Length(col_width as u16), Constraint::Length(col_width as u16)],
    )
    .column_spacing(COLUMN_GAP as u16)
    .block(block);

    frame.render_widget(table, area);
}

fn format_item((key, desc): (&str, &str)) -> ratatui::text::Line<'static> {
    if key.is_empty() {
        return ratatui::text::Line::default();
    }
    ratatui::text::Line::from(vec![
        Span::styled(format!("{key:<13}"), Style::default().fg(theme::ACCENT)),
        Span::styled(desc.to_owned(), Style::default().fg(theme::DIM)),
    ])
}
