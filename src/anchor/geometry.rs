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

//! Geometry snapshots consumed and produced by the scroll anchor.
//!
//! All values are in points. In the terminal host one row equals one point;
//! a host with sub-row precision can pass fractional values unchanged.

/// Read-only snapshot of the host screen's visible bounds, supplied on every
/// layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub total_height: f32,
    /// Height of chrome pinned to the top edge (header rows).
    pub safe_area_top: f32,
    /// Height of chrome pinned to the bottom edge (footer row). The keyboard
    /// slides over this region before it starts displacing the input bar.
    pub safe_area_bottom: f32,
}

impl ViewportMetrics {
    /// A viewport is usable once it has been laid out with a real height.
    pub fn is_laid_out(&self) -> bool {
        self.total_height.is_finite()
            && self.total_height > 0.0
            && self.safe_area_top.is_finite()
            && self.safe_area_top >= 0.0
            && self.safe_area_bottom.is_finite()
            && self.safe_area_bottom >= 0.0
    }
}

/// Current scrollable extent of the message list vs. its visible area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListContentState {
    pub content_height: f32,
    pub viewport_height: f32,
}

/// Measured height of the fixed input bar, separators included.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputBarState {
    pub measured_height: f32,
}

/// The anchor's sole output, recomputed on every keyboard event and on every
/// content append.
///
/// `top_inset` is padding inserted above short content so it sticks to the
/// bottom of the list; it is never negative and never non-zero when content
/// already fills the list. `bottom_offset` is the input bar's displacement in
/// screen terms: zero or negative, pulling the bar up by the keyboard's
/// visible overlap minus the bottom safe area it already rests above.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorResult {
    pub top_inset: f32,
    pub bottom_offset: f32,
    pub should_scroll_to_end: bool,
}
