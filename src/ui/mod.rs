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

mod chat;
mod input;
mod layout;
mod message;
mod panel;
pub mod theme;

pub use chat::content_rows as chat_content_rows;
pub use input::visual_line_count as input_visual_lines;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const CHROME_PAD: u16 = 2;

pub fn render(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();
    app.cached_frame_area = frame_area;

    let panel_rows = app.panel.current_rows(app.now_ms);
    let input_lines = input::visual_line_count(&app.input, frame_area.width);
    let areas = layout::compute(frame_area, input_lines, app.show_header, panel_rows);

    // Header bar (toggleable via Ctrl+H)
    if areas.header.height > 0 {
        render_separator(frame, areas.header_top_sep);
        render_header(frame, areas.header, app);
        render_separator(frame, areas.header_bot_sep);
    }

    // Body: message list (bottom-anchored while short)
    chat::render(frame, areas.body, app);

    // Input bar between its separators
    render_separator(frame, areas.input_sep);
    input::render(frame, areas.input, &app.input);
    render_separator(frame, areas.input_bottom_sep);

    // Shortcuts panel slides up over the footer
    if areas.panel.height > 0 {
        panel::render(frame, areas.panel);
    }

    if let Some(footer_area) = areas.footer {
        render_footer(frame, footer_area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let padded = pad_horizontal(area);
    let count = app.messages.len();
    let line = Line::from(vec![
        Span::styled("uchat", Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {count} message{}", if count == 1 { "" } else { "s" }),
            Style::default().fg(theme::DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), padded);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let padded = pad_horizontal(area);
    let line = Line::from(vec![
        Span::styled("?", Style::default().fg(ratatui::style::Color::White)),
        Span::styled(" : Shortcuts", Style::default().fg(theme::DIM)),
        Span::raw("  "),
        Span::styled("Ctrl+C", Style::default().fg(ratatui::style::Color::White)),
        Span::styled(" : Quit", Style::default().fg(theme::DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), padded);
}

fn pad_horizontal(area: Rect) -> Rect {
    Rect {
        x: area.x + CHROME_PAD,
        y: area.y,
        width: area.width.saturating_sub(CHROME_PAD * 2),
        height: area.height,
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let sep_str = theme::SEPARATOR_CHAR.repeat(area.width as usize);
    let line = Line::from(Span::styled(sep_str, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), area);
}
