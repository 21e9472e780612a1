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

//! Headless keyboard-avoidance and scroll-anchoring core.
//!
//! Pure geometry: no terminal types leak in here. The host screen feeds in
//! [`ViewportMetrics`], [`InputBarState`], [`ListContentState`], and
//! [`KeyboardEvent`]s, and applies the resulting [`AnchorResult`] to its own
//! widgets, animated through [`Tween`].

mod geometry;
mod keyboard;
mod scroll_anchor;
mod tween;

pub use geometry::{AnchorResult, InputBarState, ListContentState, ViewportMetrics};
pub use keyboard::{
    AnimationCurve, KeyboardEvent, KeyboardFeed, KeyboardSubscription, keyboard_channel,
};
pub use scroll_anchor::{ScrollAnchor, compute_top_inset};
pub use tween::Tween;
