//! Generic widgets: the [`Widget`] capability trait, buttons, and panels.
//!
//! Widgets never call back into application code. A widget that wants
//! something to happen pushes a message of type `M` into the outbox passed to
//! [`Widget::handle_input`]; the owner drains the outbox after dispatch.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::geom::{Rect, Vec2};
use crate::input::{Button as MouseButton, InputEvent, PointerState};
use crate::render::Surface;
use crate::theme;

const BUTTON_FONT_PX: f64 = 20.0;
const PANEL_TITLE_FONT_PX: f64 = 24.0;

/// Capability set shared by every interactive control.
pub trait Widget<M> {
    /// Offer `event` to the widget. Returns whether it was consumed.
    fn handle_input(&mut self, event: &InputEvent, out: &mut Vec<M>) -> bool;

    /// Per-frame refresh from the polled pointer. `dt` is in seconds.
    fn update(&mut self, pointer: &PointerState, dt: f64);

    fn draw(&self, surface: &mut dyn Surface);
}

/// Clickable button that emits a fixed message when released over itself.
#[derive(Debug, Clone)]
pub struct Button<M> {
    rect: Rect,
    label: String,
    on_click: M,
    hovered: bool,
    pressed: bool,
}

impl<M: Clone> Button<M> {
    #[must_use]
    pub fn new(rect: Rect, label: impl Into<String>, on_click: M) -> Self {
        Self { rect, label: label.into(), on_click, hovered: false, pressed: false }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl<M: Clone> Widget<M> for Button<M> {
    fn handle_input(&mut self, event: &InputEvent, out: &mut Vec<M>) -> bool {
        match *event {
            InputEvent::PointerDown { pos, button: MouseButton::Primary, .. } if self.rect.contains(pos) => {
                self.pressed = true;
                true
            }
            InputEvent::PointerUp { pos, button: MouseButton::Primary, .. } if self.pressed => {
                self.pressed = false;
                if self.rect.contains(pos) {
                    out.push(self.on_click.clone());
                }
                true
            }
            _ => false,
        }
    }

    fn update(&mut self, pointer: &PointerState, _dt: f64) {
        self.hovered = self.rect.contains(pointer.position);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let fill = if self.pressed {
            theme::ACCENT
        } else if self.hovered {
            theme::HOVER
        } else {
            theme::PANEL_BG
        };
        surface.fill_rect(self.rect, fill);
        surface.stroke_rect(self.rect, 2.0, theme::BORDER);

        let size = surface.measure_text(&self.label, BUTTON_FONT_PX);
        let pos = self.rect.center() - size * 0.5;
        surface.text(pos, &self.label, BUTTON_FONT_PX, theme::TEXT);
    }
}

/// Background, border, and optional title shared by every editor panel.
pub fn draw_panel_chrome(surface: &mut dyn Surface, rect: Rect, title: &str) {
    surface.fill_rect(rect, theme::PANEL_BG);
    surface.stroke_rect(rect, 2.0, theme::BORDER);
    if !title.is_empty() {
        surface.text(rect.origin() + Vec2::new(10.0, 10.0), title, PANEL_TITLE_FONT_PX, theme::TEXT);
    }
}

/// Titled container. Events go to children in order until one consumes them.
pub struct Panel<M> {
    rect: Rect,
    title: String,
    children: Vec<Box<dyn Widget<M>>>,
}

impl<M> Panel<M> {
    #[must_use]
    pub fn new(rect: Rect, title: impl Into<String>) -> Self {
        Self { rect, title: title.into(), children: Vec::new() }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn push(&mut self, child: Box<dyn Widget<M>>) {
        self.children.push(child);
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<M> Widget<M> for Panel<M> {
    fn handle_input(&mut self, event: &InputEvent, out: &mut Vec<M>) -> bool {
        self.children.iter_mut().any(|child| child.handle_input(event, out))
    }

    fn update(&mut self, pointer: &PointerState, dt: f64) {
        for child in &mut self.children {
            child.update(pointer, dt);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        draw_panel_chrome(surface, self.rect, &self.title);
        for child in &self.children {
            child.draw(surface);
        }
    }
}
