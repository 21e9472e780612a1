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

//! The keyboard-avoidance and scroll-anchoring core.
//!
//! Given the current viewport, input bar, list content, and the most recent
//! keyboard visibility, [`ScrollAnchor`] computes the list's top content inset
//! and the input bar's vertical offset, and decides whether the list should be
//! scrolled to its end. The caller applies `top_inset` and `bottom_offset`
//! inside a single animated transition using the event's duration and curve,
//! and issues the scroll-to-end request only when indicated, so the inset
//! change and the scroll land visually atomically.

use super::geometry::{AnchorResult, InputBarState, ListContentState, ViewportMetrics};
use super::keyboard::KeyboardEvent;

/// Instance-scoped anchor state for one active screen.
///
/// The only persisted field is the last known keyboard height: subsequent
/// content appends must reuse it without a fresh keyboard event. Call
/// [`ScrollAnchor::reset`] when the screen is torn down.
#[derive(Debug, Default)]
pub struct ScrollAnchor {
    keyboard_height: f32,
}

impl ScrollAnchor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last keyboard height seen, zero when the keyboard is dismissed.
    pub fn keyboard_height(&self) -> f32 {
        self.keyboard_height
    }

    /// Forget the persisted keyboard height (screen teardown).
    pub fn reset(&mut self) {
        self.keyboard_height = 0.0;
    }

    /// Handle a keyboard frame-change event.
    ///
    /// Returns `None` when the viewport has not been laid out yet or the
    /// event payload is malformed — a recoverable silent skip that leaves the
    /// previously applied layout (and the stored keyboard height) in effect.
    pub fn on_keyboard_event(
        &mut self,
        event: &KeyboardEvent,
        viewport: ViewportMetrics,
        input_bar: InputBarState,
        list: ListContentState,
    ) -> Option<AnchorResult> {
        if !event.is_well_formed() {
            tracing::debug!(?event, "skipping malformed keyboard event");
            return None;
        }
        if !viewport.is_laid_out() {
            tracing::debug!(?viewport, "skipping keyboard event before first layout");
            return None;
        }

        self.keyboard_height = event.target_height;
        Some(self.compute(viewport, input_bar, list))
    }

    /// Recompute after a message append, reusing the stored keyboard height.
    ///
    /// `bottom_offset` is unchanged from the last keyboard event since the
    /// keyboard state did not move. The caller applies the new `top_inset`
    /// under a short fixed-duration transition independent of keyboard
    /// animation timing, then issues the scroll-to-end request if indicated.
    pub fn on_content_appended(
        &self,
        viewport: ViewportMetrics,
        input_bar: InputBarState,
        list: ListContentState,
    ) -> Option<AnchorResult> {
        if !viewport.is_laid_out() {
            tracing::debug!(?viewport, "skipping content-append recompute before first layout");
            return None;
        }
        Some(self.compute(viewport, input_bar, list))
    }

    fn compute(
        &self,
        viewport: ViewportMetrics,
        input_bar: InputBarState,
        list: ListContentState,
    ) -> AnchorResult {
        // When visible, pull the input bar up by the overlap, compensating
        // for the bottom safe area the bar already rests above.
        let bottom_offset = if self.keyboard_height > 0.0 {
            (-(self.keyboard_height - viewport.safe_area_bottom)).min(0.0)
        } else {
            0.0
        };

        AnchorResult {
            top_inset: compute_top_inset(viewport, input_bar, list, self.keyboard_height),
            bottom_offset,
            // Only auto-scroll when content overflows the visible area; for
            // short conversations the top inset alone anchors content to the
            // bottom and a forced scroll would be a jarring no-op.
            should_scroll_to_end: list.content_height > list.viewport_height,
        }
    }
}

/// The top-inset ("stick to bottom") rule.
///
/// When the conversation is shorter than the area left over by the keyboard
/// and the input bar, padding is inserted above the content so the most
/// recent message sits just above the input bar instead of floating near the
/// top of the screen. Never negative; zero once content fills or overflows
/// the list.
pub fn compute_top_inset(
    viewport: ViewportMetrics,
    input_bar: InputBarState,
    list: ListContentState,
    keyboard_height: f32,
) -> f32 {
    let available_height = viewport.total_height
        - viewport.safe_area_top
        - viewport.safe_area_bottom
        - keyboard_height
        - input_bar.measured_height;

    if list.content_height <= 0.0 {
        // Degenerate: nothing rendered yet.
        return (viewport.total_height - keyboard_height + viewport.safe_area_bottom).max(0.0);
    }

    if available_height > list.content_height {
        let mut inset = available_height - list.content_height;
        if keyboard_height > 0.0 {
            // The keyboard covers the bottom safe area; close the visual gap
            // that the safe-area compensation on the input bar introduced.
            inset += viewport.safe_area_bottom;
        }
        return inset.max(0.0);
    }
    0.0
}
