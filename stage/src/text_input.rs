//! Single-line numeric text field bound to one transform field.
//!
//! Clicking the field activates it with the whole text selected. While active
//! it owns the keyboard: caret movement (Shift extends the selection),
//! Backspace/Delete, Ctrl+A, and printable insertion that replaces the
//! selection. Enter commits, Escape cancels.
//!
//! Commit trims the text and parses it as `f64`. A finite value is constrained
//! for the bound path and written through [`binding::write_bound`]; the field
//! then shows the written value with two decimals and deactivates. Text that
//! does not parse reverts to the last confirmed value and the field stays
//! active so the user can retype. Positions are char indices, not bytes.

#[cfg(test)]
#[path = "text_input_test.rs"]
mod text_input_test;

use crate::binding::{self, PropertyPath};
use crate::consts::{BLINK_PERIOD, FIELD_FONT_PX, PULSE_RATE};
use crate::geom::{Rect, Vec2};
use crate::input::{Button, InputEvent, Key, KeyEvent, PointerState};
use crate::render::{Surface, TextMetrics};
use crate::scene::{ObjectId, Scene};
use crate::theme;

const TEXT_INSET_PX: f64 = 5.0;

/// Formats a field value the way every inspector field displays it.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

/// How a commit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Parsed and written to the bound object.
    Written,
    /// Not a finite number; text reverted, field still active.
    Rejected,
    /// Parsed, but the bound object is no longer the selection.
    Dropped,
}

#[derive(Debug, Clone)]
pub struct TextInput {
    rect: Rect,
    target: ObjectId,
    path: PropertyPath,
    text: String,
    confirmed: String,
    active: bool,
    hovered: bool,
    cursor: usize,
    anchor: usize,
    pulse: f64,
    blink: f64,
}

impl TextInput {
    /// Inactive field over `rect` showing `value`.
    #[must_use]
    pub fn new(rect: Rect, target: ObjectId, path: PropertyPath, value: f64) -> Self {
        let text = format_value(value);
        let cursor = text.chars().count();
        Self {
            rect,
            target,
            path,
            confirmed: text.clone(),
            text,
            active: false,
            hovered: false,
            cursor,
            anchor: cursor,
            pulse: 0.0,
            blink: 0.0,
        }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn path(&self) -> PropertyPath {
        self.path
    }

    #[must_use]
    pub fn target(&self) -> ObjectId {
        self.target
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last text that was committed or synced from the object.
    #[must_use]
    pub fn confirmed(&self) -> &str {
        &self.confirmed
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Caret position in chars.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected char range, if non-empty.
    #[must_use]
    pub fn selection(&self) -> Option<(usize, usize)> {
        (self.anchor != self.cursor).then(|| (self.anchor.min(self.cursor), self.anchor.max(self.cursor)))
    }

    #[must_use]
    pub fn selected_text(&self) -> &str {
        self.selection().map_or("", |(start, end)| &self.text[self.byte_at(start)..self.byte_at(end)])
    }

    /// Whether the caret is in the visible half of its blink cycle.
    #[must_use]
    pub fn caret_visible(&self) -> bool {
        self.active && self.blink.rem_euclid(BLINK_PERIOD) < BLINK_PERIOD / 2.0
    }

    /// Pulse intensity in `[0, 1]` driving the active background.
    #[must_use]
    pub fn pulse_intensity(&self) -> f64 {
        0.5 + 0.5 * (self.pulse * PULSE_RATE).sin()
    }

    /// Replace the shown value from the object. Ignored while the user is typing.
    pub fn sync(&mut self, value: f64) {
        if self.active {
            return;
        }
        let text = format_value(value);
        if text != self.text {
            self.confirmed.clone_from(&text);
            self.text = text;
            self.collapse_to(self.len());
        }
    }

    /// Activate with the whole text selected and the caret at the end.
    pub fn activate(&mut self) {
        self.active = true;
        self.anchor = 0;
        self.cursor = self.len();
        self.pulse = 0.0;
        self.blink = 0.0;
    }

    /// Revert to the confirmed text and deactivate.
    pub fn cancel(&mut self) {
        self.revert();
        self.deactivate();
    }

    /// Parse the current text and write it to the bound field.
    pub fn commit(&mut self, scene: &mut Scene) -> Commit {
        let value = match self.text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                self.revert();
                return Commit::Rejected;
            }
        };
        let value = self.path.constrain(value);
        if binding::write_bound(scene, self.target, self.path, value) {
            self.confirmed = format_value(value);
            self.text.clone_from(&self.confirmed);
            self.deactivate();
            Commit::Written
        } else {
            self.cancel();
            Commit::Dropped
        }
    }

    /// Offer an event. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &InputEvent, scene: &mut Scene) -> bool {
        match event {
            InputEvent::PointerDown { pos, button, .. } => {
                if !self.rect.contains(*pos) {
                    if self.active {
                        self.cancel();
                    }
                    return false;
                }
                if *button != Button::Primary {
                    return false;
                }
                self.hovered = true;
                self.activate();
                true
            }
            InputEvent::PointerMove { pos } => {
                self.hovered = self.rect.contains(*pos);
                false
            }
            InputEvent::KeyDown(key) if self.active => self.handle_key(key, scene),
            _ => false,
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, scene: &mut Scene) -> bool {
        let extend = event.modifiers.shift;
        match event.key {
            Key::Enter => {
                self.commit(scene);
            }
            Key::Escape => self.cancel(),
            Key::Backspace => {
                if !self.delete_selection() && self.cursor > 0 {
                    self.remove_char(self.cursor - 1);
                    self.collapse_to(self.cursor - 1);
                }
            }
            Key::Delete => {
                if !self.delete_selection() && self.cursor < self.len() {
                    self.remove_char(self.cursor);
                }
            }
            Key::Left => self.move_caret(self.cursor.saturating_sub(1), extend),
            Key::Right => self.move_caret((self.cursor + 1).min(self.len()), extend),
            Key::Home => self.move_caret(0, extend),
            Key::End => self.move_caret(self.len(), extend),
            Key::Char('a' | 'A') if event.modifiers.ctrl => {
                self.anchor = 0;
                self.cursor = self.len();
            }
            _ => match event.text {
                Some(c) if !c.is_control() && !event.modifiers.ctrl => self.insert(c),
                _ => return false,
            },
        }
        true
    }

    /// Advance pulse and blink while active and refresh hover.
    pub fn update(&mut self, pointer: &PointerState, dt: f64) {
        self.hovered = self.rect.contains(pointer.position);
        if self.active {
            self.pulse += dt;
            self.blink += dt;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let (bg, border) = if self.active {
            (theme::active_field_bg(self.pulse_intensity()), theme::ACCENT)
        } else if self.hovered {
            (theme::FIELD_BG_HOVER, theme::FIELD_BORDER_HOVER)
        } else {
            (theme::FIELD_BG, theme::FIELD_BORDER)
        };
        surface.fill_rect(self.rect, bg);
        surface.stroke_rect(self.rect, 1.0, border);

        let line = surface.measure_text(&self.text, FIELD_FONT_PX);
        let origin = Vec2::new(self.rect.x + TEXT_INSET_PX, self.rect.center().y - line.y / 2.0);

        surface.push_clip(self.rect.inset(3.0, 1.0));
        if self.active
            && let Some((start, end)) = self.selection()
        {
            let before = self.prefix_width(&*surface, start);
            let width = self.prefix_width(&*surface, end) - before;
            surface.fill_rect(Rect::new(origin.x + before, origin.y, width, line.y), theme::FIELD_TEXT_SELECTION);
        }
        surface.text(origin, &self.text, FIELD_FONT_PX, theme::TEXT);
        if self.caret_visible() {
            let x = origin.x + self.prefix_width(&*surface, self.cursor);
            surface.line(Vec2::new(x, origin.y + 2.0), Vec2::new(x, origin.y + line.y - 2.0), 1.0, theme::TEXT);
        }
        surface.pop_clip();
    }

    fn prefix_width(&self, metrics: &dyn TextMetrics, chars: usize) -> f64 {
        if chars == 0 {
            return 0.0;
        }
        metrics.measure_text(&self.text[..self.byte_at(chars)], FIELD_FONT_PX).x
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_at(&self, chars: usize) -> usize {
        self.text.char_indices().nth(chars).map_or(self.text.len(), |(i, _)| i)
    }

    fn revert(&mut self) {
        self.text.clone_from(&self.confirmed);
        self.collapse_to(self.len());
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.anchor = self.cursor;
    }

    fn collapse_to(&mut self, at: usize) {
        self.cursor = at;
        self.anchor = at;
    }

    fn move_caret(&mut self, to: usize, extend: bool) {
        self.cursor = to;
        if !extend {
            self.anchor = to;
        }
    }

    fn remove_char(&mut self, at: usize) {
        let start = self.byte_at(at);
        let end = self.byte_at(at + 1);
        self.text.replace_range(start..end, "");
    }

    /// Removes the selection, if any, leaving the caret where it started.
    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            return false;
        };
        let range = self.byte_at(start)..self.byte_at(end);
        self.text.replace_range(range, "");
        self.collapse_to(start);
        true
    }

    fn insert(&mut self, c: char) {
        self.delete_selection();
        let at = self.byte_at(self.cursor);
        self.text.insert(at, c);
        self.collapse_to(self.cursor + 1);
    }
}
