//! Draggable numeric labels.
//!
//! A [`DragLabel`] edits one transform field by horizontal pointer drag. The
//! value is always recomputed from the press point, so it depends on total
//! displacement and not on how many move events arrived in between.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::binding::{self, PropertyPath};
use crate::consts::FIELD_FONT_PX;
use crate::geom::Rect;
use crate::input::{Button, InputEvent, PointerState};
use crate::render::Surface;
use crate::scene::{ObjectId, Scene};
use crate::theme;

/// Value for a drag that started at `start_x` with `start_value` and is now at `x`.
#[must_use]
pub fn drag_value(path: PropertyPath, step: f64, start_value: f64, start_x: f64, x: f64) -> f64 {
    path.constrain(start_value + (x - start_x) * step)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    x: f64,
    value: f64,
}

/// Axis label that scrubs its bound field while dragged.
#[derive(Debug, Clone)]
pub struct DragLabel {
    rect: Rect,
    target: ObjectId,
    path: PropertyPath,
    step: f64,
    hovered: bool,
    drag: Option<DragStart>,
}

impl DragLabel {
    /// Label over `rect` editing `path` on `target`, with the path's default step.
    #[must_use]
    pub fn new(rect: Rect, target: ObjectId, path: PropertyPath) -> Self {
        Self { rect, target, path, step: path.drag_step(), hovered: false, drag: None }
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
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the host should show a horizontal-resize cursor.
    #[must_use]
    pub fn wants_resize_cursor(&self) -> bool {
        self.hovered || self.drag.is_some()
    }

    /// Offer an event. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &InputEvent, scene: &mut Scene) -> bool {
        match *event {
            InputEvent::PointerDown { pos, button: Button::Primary, .. } if self.rect.contains(pos) => {
                let value = binding::read_bound(scene, self.target, self.path);
                self.drag = Some(DragStart { x: pos.x, value });
                self.hovered = true;
                true
            }
            InputEvent::PointerUp { button: Button::Primary, .. } if self.drag.is_some() => {
                self.drag = None;
                true
            }
            InputEvent::PointerMove { pos } => {
                self.hovered = self.rect.contains(pos);
                let Some(start) = self.drag else {
                    return false;
                };
                let value = drag_value(self.path, self.step, start.value, start.x, pos.x);
                binding::write_bound(scene, self.target, self.path, value);
                true
            }
            _ => false,
        }
    }

    /// Refresh hover and end a drag whose release was never delivered.
    pub fn update(&mut self, pointer: &PointerState) {
        self.hovered = self.rect.contains(pointer.position);
        if self.drag.is_some() && !pointer.primary {
            self.drag = None;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let color = if self.drag.is_some() {
            theme::ACCENT
        } else if self.hovered {
            theme::LABEL_HOVER
        } else {
            theme::TEXT
        };
        let text = self.path.axis_label();
        let size = surface.measure_text(text, FIELD_FONT_PX);
        surface.text(self.rect.center() - size * 0.5, text, FIELD_FONT_PX, color);
    }
}
