//! Transform inspector.
//!
//! The inspector holds one [`TextInput`] and one [`DragLabel`] per
//! [`PropertyPath`], all bound to the object that was selected when they were
//! built. Every entry point first compares that object with the scene's
//! current selection and rebuilds the controls when they differ, so a control
//! never outlives the selection it was built for. Half-typed text in a field
//! of the previous object is discarded.

#[cfg(test)]
#[path = "inspector_test.rs"]
mod inspector_test;

use crate::binding::{self, PropertyPath};
use crate::drag::DragLabel;
use crate::geom::{Rect, Vec2};
use crate::input::{InputEvent, PointerState};
use crate::render::Surface;
use crate::scene::{ObjectId, Scene};
use crate::text_input::TextInput;
use crate::theme;
use crate::widget::draw_panel_chrome;

const TITLE: &str = "Inspector";
const HEADING_FONT_PX: f64 = 18.0;
const ROW_FONT_PX: f64 = 16.0;

const FIRST_ROW_Y: f64 = 130.0;
const ROW_HEIGHT: f64 = 35.0;
const COLUMN_WIDTH: f64 = 100.0;
const LABEL_X: f64 = 105.0;
const FIELD_X: f64 = 130.0;
const LABEL_WIDTH: f64 = 20.0;
const FIELD_WIDTH: f64 = 60.0;
const CONTROL_HEIGHT: f64 = 20.0;

const ROWS: [&str; 3] = ["Position", "Rotation", "Scale"];

/// Row and column of a path's controls.
fn slot(path: PropertyPath) -> (u8, u8) {
    match path {
        PropertyPath::PositionX => (0, 0),
        PropertyPath::PositionY => (0, 1),
        PropertyPath::Rotation => (1, 0),
        PropertyPath::ScaleX => (2, 0),
        PropertyPath::ScaleY => (2, 1),
    }
}

fn row_y(panel: Rect, row: u8) -> f64 {
    panel.y + FIRST_ROW_Y + f64::from(row) * ROW_HEIGHT
}

/// Screen rect of the drag label for `path` inside `panel`.
#[must_use]
pub fn label_rect(panel: Rect, path: PropertyPath) -> Rect {
    let (row, col) = slot(path);
    Rect::new(panel.x + LABEL_X + f64::from(col) * COLUMN_WIDTH, row_y(panel, row), LABEL_WIDTH, CONTROL_HEIGHT)
}

/// Screen rect of the text field for `path` inside `panel`.
#[must_use]
pub fn field_rect(panel: Rect, path: PropertyPath) -> Rect {
    let (row, col) = slot(path);
    Rect::new(panel.x + FIELD_X + f64::from(col) * COLUMN_WIDTH, row_y(panel, row), FIELD_WIDTH, CONTROL_HEIGHT)
}

pub struct Inspector {
    rect: Rect,
    bound: Option<ObjectId>,
    fields: Vec<TextInput>,
    labels: Vec<DragLabel>,
}

impl Inspector {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self { rect, bound: None, fields: Vec::new(), labels: Vec::new() }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Object the current controls were built for.
    #[must_use]
    pub fn bound(&self) -> Option<ObjectId> {
        self.bound
    }

    #[must_use]
    pub fn field(&self, path: PropertyPath) -> Option<&TextInput> {
        self.fields.iter().find(|f| f.path() == path)
    }

    #[must_use]
    pub fn label(&self, path: PropertyPath) -> Option<&DragLabel> {
        self.labels.iter().find(|l| l.path() == path)
    }

    /// Whether a text field currently owns the keyboard.
    #[must_use]
    pub fn has_active_field(&self) -> bool {
        self.fields.iter().any(TextInput::is_active)
    }

    #[must_use]
    pub fn wants_resize_cursor(&self) -> bool {
        self.labels.iter().any(DragLabel::wants_resize_cursor)
    }

    /// Rebuild the controls if the selection changed. Returns whether it did.
    pub fn rebind(&mut self, scene: &Scene) -> bool {
        let selected = scene.selected();
        if selected == self.bound {
            return false;
        }
        self.fields.clear();
        self.labels.clear();
        self.bound = selected;
        if let Some(id) = selected {
            for path in PropertyPath::ALL {
                let value = binding::read_bound(scene, id, path);
                self.fields.push(TextInput::new(field_rect(self.rect, path), id, path, value));
                self.labels.push(DragLabel::new(label_rect(self.rect, path), id, path));
            }
        }
        tracing::debug!(bound = ?self.bound, "inspector rebuilt");
        true
    }

    /// Offer an event. Returns whether it was consumed.
    ///
    /// Pointer presses reach every field so that at most one stays active.
    /// Everything else goes to fields, then labels, until one consumes it.
    pub fn handle_input(&mut self, event: &InputEvent, scene: &mut Scene) -> bool {
        self.rebind(scene);
        if matches!(event, InputEvent::PointerDown { .. }) {
            let mut consumed = false;
            for field in &mut self.fields {
                consumed |= field.handle_event(event, scene);
            }
            if consumed {
                return true;
            }
        } else if self.fields.iter_mut().any(|f| f.handle_event(event, scene)) {
            return true;
        }
        self.labels.iter_mut().any(|l| l.handle_event(event, scene))
    }

    /// Per-frame refresh: rebind, pull values into idle fields, and animate.
    pub fn sync(&mut self, scene: &Scene, pointer: &PointerState, dt: f64) {
        self.rebind(scene);
        for field in &mut self.fields {
            if !field.is_active() {
                field.sync(binding::read_bound(scene, field.target(), field.path()));
            }
            field.update(pointer, dt);
        }
        for label in &mut self.labels {
            label.update(pointer);
        }
    }

    pub fn draw(&mut self, scene: &Scene, surface: &mut dyn Surface) {
        self.rebind(scene);
        draw_panel_chrome(surface, self.rect, TITLE);
        let origin = self.rect.origin();

        let Some(obj) = scene.selected_object() else {
            surface.text(origin + Vec2::new(15.0, 50.0), "No object selected", HEADING_FONT_PX, theme::TEXT_DIM);
            return;
        };

        surface.text(origin + Vec2::new(15.0, 60.0), &format!("Name: {}", obj.name), HEADING_FONT_PX, theme::TEXT);
        surface.text(origin + Vec2::new(15.0, 90.0), "Transform", HEADING_FONT_PX, theme::ACCENT);
        for (row, name) in (0u8..).zip(ROWS) {
            surface.text(Vec2::new(origin.x + 20.0, row_y(self.rect, row)), name, ROW_FONT_PX, theme::TEXT);
        }

        for label in &self.labels {
            label.draw(surface);
        }
        for field in &self.fields {
            field.draw(surface);
        }
    }
}
