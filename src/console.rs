//! In-app message log shown in the bottom panel.
//!
//! Messages are also emitted through `tracing` so they reach the terminal.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use std::collections::VecDeque;

use stage::geom::{Rect, Vec2};
use stage::render::Surface;
use stage::theme;
use stage::widget::draw_panel_chrome;

/// Messages kept in memory.
pub const MAX_MESSAGES: usize = 20;
/// Messages drawn in the panel, newest last.
pub const VISIBLE_MESSAGES: usize = 10;

const LINE_FONT_PX: f64 = 18.0;
const LINE_HEIGHT: f64 = 20.0;
const FIRST_LINE: Vec2 = Vec2::new(10.0, 35.0);

#[derive(Debug, Default)]
pub struct Console {
    messages: VecDeque<String>,
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, dropping the oldest past [`MAX_MESSAGES`].
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "console", "{message}");
        self.messages.push_back(message);
        while self.messages.len() > MAX_MESSAGES {
            self.messages.pop_front();
        }
    }

    /// All retained messages, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// The tail of the log that fits in the panel.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().skip(self.messages.len().saturating_sub(VISIBLE_MESSAGES)).map(String::as_str)
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.messages.back().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn draw(&self, surface: &mut dyn Surface, rect: Rect) {
        draw_panel_chrome(surface, rect, "Console");
        surface.push_clip(rect);
        let mut pos = rect.origin() + FIRST_LINE;
        for line in self.visible() {
            surface.text(pos, line, LINE_FONT_PX, theme::TEXT);
            pos.y += LINE_HEIGHT;
        }
        surface.pop_clip();
    }
}
