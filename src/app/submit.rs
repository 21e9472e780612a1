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

use std::time::Duration;

use super::{App, AppEvent, ChatMessage};
use crate::anchor::{AnimationCurve, Tween};

/// The deferred scroll-to-end fires slightly after the append so the row
/// insertion and inset transition have landed before the list moves.
pub const SCROLL_TO_END_DELAY: Duration = Duration::from_millis(50);

/// Duration of the short top-inset transition after an append. Decoupled from
/// keyboard animation timing.
const INSET_ANIM_MS: u64 = 120;

/// Append the drafted message to the conversation and re-anchor the list.
pub fn submit_message(app: &mut App) {
    let text = app.input.text();
    if text.trim().is_empty() {
        return;
    }

    app.messages.push(ChatMessage::new(text));
    app.input.clear();

    // Re-measure with the new message and the shrunk input bar before asking
    // the anchor for fresh insets.
    let width = app.cached_body_area.width;
    app.content_height = crate::ui::chat_content_rows(&app.messages, width);

    let viewport = app.viewport_metrics();
    let input_bar = app.input_bar_state();
    let list = app.list_content_state();

    let Some(result) = app.anchor.on_content_appended(viewport, input_bar, list) else {
        return;
    };

    let current_inset = app
        .inset_anim
        .map_or(app.last_anchor.top_inset, |tween| tween.sample(app.now_ms));
    if (current_inset - result.top_inset).abs() > f32::EPSILON {
        app.inset_anim = Some(Tween::new(
            current_inset,
            result.top_inset,
            app.now_ms,
            INSET_ANIM_MS,
            AnimationCurve::EaseOut,
        ));
    }
    app.last_anchor = result;

    if result.should_scroll_to_end {
        let tx = app.event_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(SCROLL_TO_END_DELAY).await;
            let _ = tx.send(AppEvent::ScrollToEnd);
        });
    }
    tracing::debug!(
        messages = app.messages.len(),
        content_rows = app.content_height,
        top_inset = result.top_inset,
        scroll = result.should_scroll_to_end,
        "message appended"
    );
}
