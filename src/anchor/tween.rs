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

//! Millisecond-clock tween used by the host to run keyboard-synchronized
//! transitions: the panel height and the applied insets move through one of
//! these, sampled once per frame.

use super::keyboard::AnimationCurve;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub curve: AnimationCurve,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, curve: AnimationCurve) -> Self {
        Self { from, to, start_ms, duration_ms: duration_ms.max(1), curve }
    }

    /// A tween already resting at `value`.
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, 0, 1, AnimationCurve::Linear)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.curve.sample(t)
    }

    /// Redirect an in-flight tween toward a new target, starting from the
    /// currently sampled value so there is no visual jump.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32, duration_ms: u64, curve: AnimationCurve) {
        let current = self.sample(now_ms);
        *self = Self::new(current, new_to, now_ms, duration_ms, curve);
    }
}
