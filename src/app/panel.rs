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

//! The shortcuts panel that plays the on-screen keyboard's role.
//!
//! Opening or closing publishes one [`KeyboardEvent`] carrying the target
//! height, slide duration, and easing curve; the height itself is animated
//! here with a [`Tween`] so every frame of the slide reads a fresh overlap
//! value, keeping the input bar and list insets in lockstep with the panel
//! edge.

use std::time::Duration;

use crate::anchor::{AnimationCurve, KeyboardEvent, KeyboardFeed, Tween};

/// How long the panel takes to slide in or out.
pub const SLIDE_DURATION: Duration = Duration::from_millis(250);

const SLIDE_CURVE: AnimationCurve = AnimationCurve::EaseInOut;

#[derive(Debug)]
pub struct PanelState {
    open: bool,
    target_rows: u16,
    height: Tween,
    feed: KeyboardFeed,
}

impl PanelState {
    pub fn new(target_rows: u16, feed: KeyboardFeed) -> Self {
        Self { open: false, target_rows: target_rows.max(1), height: Tween::settled(0.0), feed }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Full height of the panel when open, in rows.
    pub fn target_rows(&self) -> u16 {
        self.target_rows
    }

    pub fn open(&mut self, now_ms: u64) {
        if self.open {
            return;
        }
        self.open = true;
        self.slide_to(f32::from(self.target_rows), now_ms);
    }

    pub fn close(&mut self, now_ms: u64) {
        if !self.open {
            return;
        }
        self.open = false;
        self.slide_to(0.0, now_ms);
    }

    pub fn toggle(&mut self, now_ms: u64) {
        if self.open {
            self.close(now_ms);
        } else {
            self.open(now_ms);
        }
    }

    fn slide_to(&mut self, target: f32, now_ms: u64) {
        let duration_ms = u64::try_from(SLIDE_DURATION.as_millis()).unwrap_or(u64::MAX);
        self.height.retarget(now_ms, target, duration_ms, SLIDE_CURVE);
        let delivered = self.feed.publish(KeyboardEvent {
            target_height: target,
            duration: SLIDE_DURATION,
            curve: SLIDE_CURVE,
        });
        tracing::debug!(target, delivered, "panel frame change");
    }

    /// Current animated overlap with the viewport, in fractional rows.
    pub fn current_height(&self, now_ms: u64) -> f32 {
        self.height.sample(now_ms).max(0.0)
    }

    /// Current overlap rounded to whole rows for layout.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn current_rows(&self, now_ms: u64) -> u16 {
        self.current_height(now_ms).round() as u16
    }

    /// True once the slide animation has landed.
    pub fn is_settled(&self, now_ms: u64) -> bool {
        self.height.is_done(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::keyboard_channel;
    use pretty_assertions::assert_eq;

    fn panel() -> (PanelState, crate::anchor::KeyboardSubscription) {
        let (feed, sub) = keyboard_channel();
        (PanelState::new(8, feed), sub)
    }

    #[test]
    fn starts_closed_and_flat() {
        let (panel, _sub) = panel();
        assert!(!panel.is_open());
        assert_eq!(panel.current_rows(0), 0);
        assert!(panel.is_settled(0));
    }

    #[test]
    fn open_publishes_target_height_event() {
        let (mut panel, mut sub) = panel();
        panel.open(1000);
        let event = sub.try_recv().unwrap();
        assert_eq!(event.target_height, 8.0);
        assert_eq!(event.duration, SLIDE_DURATION);
        assert_eq!(event.curve, AnimationCurve::EaseInOut);
    }

    #[test]
    fn close_publishes_zero_height_event() {
        let (mut panel, mut sub) = panel();
        panel.open(0);
        let _ = sub.try_recv();
        panel.close(500);
        let event = sub.try_recv().unwrap();
        assert_eq!(event.target_height, 0.0);
    }

    #[test]
    fn reopen_while_open_is_a_no_op() {
        let (mut panel, mut sub) = panel();
        panel.open(0);
        let _ = sub.try_recv();
        panel.open(100);
        assert!(sub.try_recv().is_none());
    }

    #[test]
    fn slide_reaches_target_after_duration() {
        let (mut panel, _sub) = panel();
        panel.open(0);
        assert_eq!(panel.current_rows(0), 0);
        assert!(!panel.is_settled(100));
        assert_eq!(panel.current_rows(250), 8);
        assert!(panel.is_settled(250));
    }

    #[test]
    fn height_is_monotonic_during_open_slide() {
        let (mut panel, _sub) = panel();
        panel.open(0);
        let mut prev = -1.0_f32;
        for t in (0..=250).step_by(25) {
            let h = panel.current_height(t);
            assert!(h >= prev, "height decreased at {t}ms");
            prev = h;
        }
    }

    #[test]
    fn toggle_mid_slide_retargets_from_current_height() {
        let (mut panel, _sub) = panel();
        panel.open(0);
        let mid = panel.current_height(125);
        assert!(mid > 0.0 && mid < 8.0);
        panel.toggle(125);
        assert!(!panel.is_open());
        // Slide back starts from the interrupted height, not from 8.
        assert!(panel.current_height(126) <= mid);
        assert_eq!(panel.current_rows(400), 0);
    }

    #[test]
    fn zero_row_panel_is_clamped_to_one() {
        let (feed, _sub) = keyboard_channel();
        let panel = PanelState::new(0, feed);
        assert_eq!(panel.target_rows(), 1);
    }
}
