//! Rendering: draws the scene view onto an abstract 2D surface.
//!
//! [`Surface`] is the only seam to the host's raster target. Everything here
//! receives read-only views of scene and camera state and produces draw calls;
//! it never mutates application state. Positions passed to the surface are
//! window pixels, so the scene view offsets its view-local coordinates by its
//! own origin and clips to its rectangle.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::Camera;
use crate::consts::{
    BASE_DIAMETER, CULL_MARGIN_PX, GRID_BASE, GRID_MAX_SCREEN_PX, GRID_MIN_SCREEN_PX, LABEL_MIN_ZOOM, ORIGIN_CROSS_PX,
    OVERLAY_FONT_PX, SELECTION_PAD_PX,
};
use crate::engine::{HotText, SceneView};
use crate::geom::{Rect, Vec2};
use crate::hit::effective_scale;
use crate::scene::{GameObject, Scene};
use crate::theme;

/// Opaque-by-default RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Text measurement, needed for layout and hit zones as well as drawing.
pub trait TextMetrics {
    /// Width and height in pixels of `text` rendered at `size` pixels.
    fn measure_text(&self, text: &str, size: f64) -> Vec2;
}

/// A 2D raster target. Coordinates are window pixels.
pub trait Surface: TextMetrics {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, thickness: f64, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);
    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, thickness: f64, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, thickness: f64, color: Color);
    /// Fill a convex polygon.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    /// Draw `text` with its top-left corner at `pos`.
    fn text(&mut self, pos: Vec2, text: &str, size: f64, color: Color);
    /// Restrict drawing to `rect` until the matching [`Surface::pop_clip`].
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
}

// =============================================================
// Grid
// =============================================================

/// World-space grid spacing for `zoom`, or `None` when the lines would be
/// closer than [`GRID_MIN_SCREEN_PX`] or farther apart than [`GRID_MAX_SCREEN_PX`].
#[must_use]
pub fn grid_spacing(zoom: f64) -> Option<f64> {
    let world = if zoom >= 4.0 {
        GRID_BASE / 4.0
    } else if zoom >= 2.0 {
        GRID_BASE / 2.0
    } else if zoom >= 0.5 {
        GRID_BASE
    } else if zoom >= 0.25 {
        GRID_BASE * 2.0
    } else {
        GRID_BASE * 4.0
    };
    let screen = world * zoom;
    (GRID_MIN_SCREEN_PX..=GRID_MAX_SCREEN_PX).contains(&screen).then_some(world)
}

/// View-local screen coordinates of the visible grid lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    /// x of each vertical line.
    pub xs: Vec<f64>,
    /// y of each horizontal line.
    pub ys: Vec<f64>,
}

/// Grid lines crossing a viewport of `size` pixels.
#[must_use]
pub fn grid_lines(camera: &Camera, size: Vec2) -> GridLines {
    let Some(spacing) = grid_spacing(camera.zoom()) else {
        return GridLines::default();
    };
    let world = camera.visible_world_rect();
    let xs = axis_lines(world.x, world.right(), spacing)
        .map(|x| camera.world_to_screen(Vec2::new(x, 0.0)).x)
        .filter(|x| (0.0..=size.x).contains(x))
        .collect();
    let ys = axis_lines(world.y, world.bottom(), spacing)
        .map(|y| camera.world_to_screen(Vec2::new(0.0, y)).y)
        .filter(|y| (0.0..=size.y).contains(y))
        .collect();
    GridLines { xs, ys }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn axis_lines(start: f64, end: f64, spacing: f64) -> impl Iterator<Item = f64> {
    let first = (start / spacing).floor() as i64;
    let last = (end / spacing).ceil() as i64;
    (first..=last).map(move |i| i as f64 * spacing)
}

// =============================================================
// Scene view
// =============================================================

/// Draw the whole scene view: background, grid, origin, objects, overlays, border.
pub fn draw_scene_view(surface: &mut dyn Surface, view: &SceneView, scene: &Scene) {
    let rect = view.rect();
    surface.push_clip(rect);
    surface.fill_rect(rect, theme::BACKGROUND);

    if view.show_grid {
        draw_grid(surface, view);
    }
    if view.show_origin {
        draw_origin(surface, view);
    }
    for obj in scene.objects().iter().filter(|o| o.visible) {
        draw_object(surface, view, obj);
    }
    draw_overlays(surface, view);

    surface.stroke_rect(rect, 2.0, theme::BORDER);
    surface.pop_clip();
}

fn draw_grid(surface: &mut dyn Surface, view: &SceneView) {
    let rect = view.rect();
    let lines = grid_lines(view.camera(), rect.size());
    for x in lines.xs {
        let x = rect.x + x;
        surface.line(Vec2::new(x, rect.y), Vec2::new(x, rect.bottom()), 1.0, theme::GRID_LINE);
    }
    for y in lines.ys {
        let y = rect.y + y;
        surface.line(Vec2::new(rect.x, y), Vec2::new(rect.right(), y), 1.0, theme::GRID_LINE);
    }
}

fn draw_origin(surface: &mut dyn Surface, view: &SceneView) {
    let local = view.camera().world_to_screen(Vec2::ZERO);
    let size = view.rect().size();
    if !(0.0..=size.x).contains(&local.x) || !(0.0..=size.y).contains(&local.y) {
        return;
    }
    let o = view.rect().origin() + local;
    let arm = ORIGIN_CROSS_PX;
    surface.line(Vec2::new(o.x - arm, o.y), Vec2::new(o.x + arm, o.y), 2.0, theme::ORIGIN);
    surface.line(Vec2::new(o.x, o.y - arm), Vec2::new(o.x, o.y + arm), 2.0, theme::ORIGIN);
    surface.fill_circle(o, 3.0, theme::ORIGIN);
}

/// On-screen width and height of an object at `zoom`, at least one pixel each.
#[must_use]
pub fn object_screen_size(obj: &GameObject, zoom: f64) -> Vec2 {
    let scale = effective_scale(&obj.transform);
    Vec2::new((BASE_DIAMETER * zoom * scale.x).max(1.0), (BASE_DIAMETER * zoom * scale.y).max(1.0))
}

/// Corners of a `size` rectangle centered on `center`, rotated clockwise by `degrees`.
#[must_use]
pub fn rotated_rect(center: Vec2, size: Vec2, degrees: f64) -> [Vec2; 4] {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let half = size * 0.5;
    [Vec2::new(-half.x, -half.y), Vec2::new(half.x, -half.y), Vec2::new(half.x, half.y), Vec2::new(-half.x, half.y)]
        .map(|p| Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos) + center)
}

fn draw_object(surface: &mut dyn Surface, view: &SceneView, obj: &GameObject) {
    let camera = view.camera();
    let local = camera.world_to_screen(obj.transform.position);
    let view_size = view.rect().size();
    let margin = CULL_MARGIN_PX;
    if local.x < -margin || local.x > view_size.x + margin || local.y < -margin || local.y > view_size.y + margin {
        return;
    }

    let center = view.rect().origin() + local;
    let size = object_screen_size(obj, camera.zoom());

    if obj.is_selected() {
        let pad = Vec2::new(SELECTION_PAD_PX, SELECTION_PAD_PX);
        surface.stroke_ellipse(center, (size + pad) * 0.5, 2.0, theme::SELECTION);
    }

    let color = if view.dragged() == Some(obj.id()) { theme::OBJECT_DRAGGED } else { theme::ACCENT };
    let rotation = obj.transform.rotation;
    if rotation.abs() < f64::EPSILON {
        surface.fill_ellipse(center, size * 0.5, color);
    } else {
        surface.fill_polygon(&rotated_rect(center, size, rotation), color);
        let reach = size.x.max(size.y) * 0.5;
        let (sin, cos) = rotation.to_radians().sin_cos();
        surface.line(center, center + Vec2::new(cos, sin) * reach, 3.0, theme::HEADING);
    }

    if camera.zoom() >= LABEL_MIN_ZOOM {
        let font = (16.0 * camera.zoom()).floor().max(12.0);
        let text_size = surface.measure_text(&obj.name, font);
        let pos = Vec2::new(center.x - text_size.x / 2.0, center.y + size.x.max(size.y) + 5.0);
        surface.text(pos, &obj.name, font, theme::TEXT);
    }
}

fn draw_overlays(surface: &mut dyn Surface, view: &SceneView) {
    let hovered = view.hovered_hot_text(&*surface);
    let origin = view.rect().origin();
    for hot in HotText::ALL {
        let label = hot.label(view.camera());
        let zone = view.hot_text_zone(hot, &*surface).translate(origin);
        let color = if hovered == Some(hot) { theme::ACCENT } else { theme::TEXT };
        surface.text(zone.origin(), &label, OVERLAY_FONT_PX, color);
        if hovered == Some(hot) {
            surface.line(Vec2::new(zone.x, zone.bottom()), Vec2::new(zone.right(), zone.bottom()), 1.0, color);
        }
    }
}
