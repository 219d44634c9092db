//! Hierarchy panel: one clickable row per scene object, in draw order.
//!
//! Rows are rebuilt from the scene every frame by [`Hierarchy::sync`]; a
//! click on a row emits [`Command::Select`] for its object.

#[cfg(test)]
#[path = "hierarchy_test.rs"]
mod hierarchy_test;

use stage::geom::{Rect, Vec2};
use stage::input::{Button, InputEvent, PointerState};
use stage::render::Surface;
use stage::scene::{ObjectId, Scene};
use stage::theme;
use stage::widget::{Panel, Widget};

use crate::editor::Command;

const TITLE: &str = "Hierarchy";
const ROW_HEIGHT: f64 = 25.0;
const FIRST_ROW_Y: f64 = 35.0;
const ROW_INSET_X: f64 = 5.0;
const NAME_FONT_PX: f64 = 18.0;
const ICON_RADIUS: f64 = 4.0;

/// Rect of the `index`-th row inside `panel`.
#[must_use]
pub fn row_rect(panel: Rect, index: usize) -> Rect {
    #[allow(clippy::cast_precision_loss)]
    let y = panel.y + FIRST_ROW_Y + index as f64 * ROW_HEIGHT;
    Rect::new(panel.x + ROW_INSET_X, y, panel.width - 2.0 * ROW_INSET_X, ROW_HEIGHT)
}

#[derive(Debug, Clone)]
pub struct HierarchyRow {
    rect: Rect,
    id: ObjectId,
    name: String,
    selected: bool,
    hovered: bool,
}

impl HierarchyRow {
    #[must_use]
    pub fn new(rect: Rect, id: ObjectId, name: impl Into<String>, selected: bool) -> Self {
        Self { rect, id, name: name.into(), selected, hovered: false }
    }
}

impl Widget<Command> for HierarchyRow {
    fn handle_input(&mut self, event: &InputEvent, out: &mut Vec<Command>) -> bool {
        match *event {
            InputEvent::PointerDown { pos, button: Button::Primary, .. } if self.rect.contains(pos) => {
                out.push(Command::Select(self.id));
                true
            }
            _ => false,
        }
    }

    fn update(&mut self, pointer: &PointerState, _dt: f64) {
        self.hovered = self.rect.contains(pointer.position);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let fill = if self.selected {
            theme::ACCENT
        } else if self.hovered {
            theme::HOVER
        } else {
            theme::PANEL_BG
        };
        surface.fill_rect(self.rect, fill);
        surface.text(self.rect.origin() + Vec2::new(20.0, 5.0), &self.name, NAME_FONT_PX, theme::TEXT);
        let icon = Vec2::new(self.rect.x + 10.0, self.rect.center().y);
        surface.fill_circle(icon, ICON_RADIUS, theme::ACCENT);
    }
}

pub struct Hierarchy {
    panel: Panel<Command>,
}

impl Hierarchy {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self { panel: Panel::new(rect, TITLE) }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.panel.rect()
    }

    /// Number of rows currently shown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panel.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panel.is_empty()
    }

    /// Rebuild the rows from the scene. Rows that would spill past the panel are left out.
    pub fn sync(&mut self, scene: &Scene) {
        let rect = self.panel.rect();
        self.panel.clear();
        for (i, obj) in scene.objects().iter().enumerate() {
            let row = row_rect(rect, i);
            if row.bottom() > rect.bottom() {
                break;
            }
            self.panel.push(Box::new(HierarchyRow::new(row, obj.id(), obj.name.clone(), obj.is_selected())));
        }
    }
}

impl Widget<Command> for Hierarchy {
    fn handle_input(&mut self, event: &InputEvent, out: &mut Vec<Command>) -> bool {
        self.panel.handle_input(event, out)
    }

    fn update(&mut self, pointer: &PointerState, dt: f64) {
        self.panel.update(pointer, dt);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.panel.draw(surface);
    }
}
