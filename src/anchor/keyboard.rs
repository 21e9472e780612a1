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

//! Keyboard frame-change events and the channel the host subscribes to.
//!
//! The event source is an owned channel pair rather than a global notification
//! center: the screen holds the [`KeyboardSubscription`] for its active
//! lifetime and teardown is guaranteed when either side is dropped.

use std::time::Duration;
use tokio::sync::mpsc;

/// Emitted when the on-screen keyboard (here: the bottom panel) begins
/// changing frame. `target_height` is the visible overlap with the viewport,
/// zero when dismissed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardEvent {
    pub target_height: f32,
    pub duration: Duration,
    pub curve: AnimationCurve,
}

impl KeyboardEvent {
    /// Best-effort platform signals can carry garbage; a malformed event is
    /// skipped, never an error.
    pub fn is_well_formed(&self) -> bool {
        self.target_height.is_finite() && self.target_height >= 0.0
    }
}

/// Easing curves for keyboard-synchronized transitions.
///
/// Mirrors the platform's enumerated animation-curve set, mapped to concrete
/// easing math instead of passing raw curve identifiers through the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationCurve {
    #[default]
    EaseInOut,
    EaseIn,
    EaseOut,
    Linear,
}

impl AnimationCurve {
    /// Sample the curve at normalized time `t` in `[0, 1]`.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u) / 2.0
                }
            }
        }
    }
}

/// Publishing side of the keyboard event channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct KeyboardFeed {
    tx: mpsc::UnboundedSender<KeyboardEvent>,
}

impl KeyboardFeed {
    /// Publish a frame-change event. Returns `false` once the subscriber is
    /// gone (screen torn down).
    pub fn publish(&self, event: KeyboardEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Receiving side, held by the screen for its active lifetime.
#[derive(Debug)]
pub struct KeyboardSubscription {
    rx: mpsc::UnboundedReceiver<KeyboardEvent>,
}

impl KeyboardSubscription {
    /// Wait for the next event. `None` once every feed handle is dropped.
    pub async fn recv(&mut self) -> Option<KeyboardEvent> {
        self.rx.recv().await
    }

    /// Non-blocking drain step for the event-loop's catch-up phase.
    pub fn try_recv(&mut self) -> Option<KeyboardEvent> {
        self.rx.try_recv().ok()
    }
}

/// Create a connected feed/subscription pair.
pub fn keyboard_channel() -> (KeyboardFeed, KeyboardSubscription) {
    let (tx, rx) = mpsc::unbounded_channel();
    (KeyboardFeed { tx }, KeyboardSubscription { rx })
}
