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

use std::time::Instant;
use tokio::sync::mpsc;

use crate::Cli;
use crate::anchor::{
    AnchorResult, InputBarState, KeyboardSubscription, ListContentState, ScrollAnchor, Tween,
    ViewportMetrics, keyboard_channel,
};
use crate::app::panel::PanelState;
use ratatui::layout::Rect;

use super::input::InputState;

/// Below this terminal height the screen drops all chrome (header, footer,
/// input top separator) and the safe areas collapse to zero.
pub const COMPACT_HEIGHT: u16 = 8;

/// Rows of top chrome when the header is shown: separator, header, separator.
pub const HEADER_CHROME_ROWS: u16 = 3;

/// One message in the conversation. Messages are local-only; there is no
/// transport or persistence behind this store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Events dispatched back into the main loop from spawned tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Deferred scroll-to-end request issued shortly after a message append,
    /// once the insertion transition has had time to land.
    ScrollToEnd,
}

pub struct App {
    pub messages: Vec<ChatMessage>,
    pub input: InputState,

    /// Rendered scroll offset (rounded from `scroll_pos`).
    pub scroll_offset: usize,
    /// Target scroll offset requested by user input or auto-scroll.
    pub scroll_target: usize,
    /// Smooth scroll position (fractional) for animation.
    pub scroll_pos: f32,
    pub auto_scroll: bool,

    /// The keyboard-avoidance core; owns the persisted keyboard height.
    pub anchor: ScrollAnchor,
    /// The bottom panel standing in for the on-screen keyboard.
    pub panel: PanelState,
    /// Scoped subscription to the panel's keyboard events, torn down with the
    /// app.
    pub keyboard_events: KeyboardSubscription,
    /// Most recent anchor output, kept for logging and tests.
    pub last_anchor: AnchorResult,
    /// Short fixed-duration top-inset transition after a content append.
    /// Keyboard transitions are driven by the panel tween instead and clear
    /// this.
    pub inset_anim: Option<Tween>,

    pub show_header: bool,
    pub should_quit: bool,
    /// Force a full terminal clear on next render frame.
    pub force_redraw: bool,

    /// Monotonic frame clock in milliseconds, advanced once per loop turn.
    pub now_ms: u64,
    started: Instant,

    pub event_tx: mpsc::UnboundedSender<AppEvent>,
    pub event_rx: mpsc::UnboundedReceiver<AppEvent>,

    /// Last known frame area; geometry snapshots are derived from it.
    pub cached_frame_area: Rect,
    /// Area where the message list was laid out on the last frame.
    pub cached_body_area: Rect,
    /// Wrapped row count of the message list, refreshed on every layout pass
    /// and after every append.
    pub content_height: usize,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        Self::with_options(!cli.no_header, cli.panel_rows)
    }

    pub fn with_options(show_header: bool, panel_rows: u16) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (feed, keyboard_events) = keyboard_channel();
        Self {
            messages: Vec::new(),
            input: InputState::new(),
            scroll_offset: 0,
            scroll_target: 0,
            scroll_pos: 0.0,
            auto_scroll: true,
            anchor: ScrollAnchor::new(),
            panel: PanelState::new(panel_rows, feed),
            keyboard_events,
            last_anchor: AnchorResult::default(),
            inset_anim: None,
            show_header,
            should_quit: false,
            force_redraw: false,
            now_ms: 0,
            started: Instant::now(),
            event_tx,
            event_rx,
            cached_frame_area: Rect::default(),
            cached_body_area: Rect::default(),
            content_height: 0,
        }
    }

    /// Build a minimal `App` for tests: default options, no terminal.
    #[must_use]
    pub fn test_default() -> Self {
        Self::with_options(true, 8)
    }

    pub fn advance_clock(&mut self) {
        self.now_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
    }

    // --- geometry snapshots fed to the anchor ---

    /// Viewport snapshot from the last known frame area. Header chrome is the
    /// top safe area; the footer row is the bottom safe area. Both collapse
    /// in compact mode.
    pub fn viewport_metrics(&self) -> ViewportMetrics {
        let height = self.cached_frame_area.height;
        if height < COMPACT_HEIGHT {
            return ViewportMetrics {
                total_height: f32::from(height),
                safe_area_top: 0.0,
                safe_area_bottom: 0.0,
            };
        }
        let safe_area_top = if self.show_header { f32::from(HEADER_CHROME_ROWS) } else { 0.0 };
        ViewportMetrics { total_height: f32::from(height), safe_area_top, safe_area_bottom: 1.0 }
    }

    /// Input bar snapshot: wrapped content rows plus its separator rows.
    pub fn input_bar_state(&self) -> InputBarState {
        let width = self.cached_frame_area.width;
        let rows = crate::ui::input_visual_lines(&self.input, width);
        let separators = if self.cached_frame_area.height < COMPACT_HEIGHT { 1 } else { 2 };
        InputBarState { measured_height: f32::from(rows + separators) }
    }

    /// List snapshot from the last measurement pass.
    #[allow(clippy::cast_precision_loss)]
    pub fn list_content_state(&self) -> ListContentState {
        ListContentState {
            content_height: self.content_height as f32,
            viewport_height: f32::from(self.cached_body_area.height),
        }
    }

    // --- scrolling ---

    pub fn scroll_up(&mut self, rows: usize) {
        self.auto_scroll = false;
        self.scroll_target = self.scroll_target.saturating_sub(rows);
    }

    /// Scrolls toward the end; clamping against the real content extent
    /// happens on the next render pass.
    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_target = self.scroll_target.saturating_add(rows);
    }

    /// Engage auto-scroll so the next frames ease the list to its end.
    pub fn engage_auto_scroll(&mut self) {
        self.auto_scroll = true;
    }
}
