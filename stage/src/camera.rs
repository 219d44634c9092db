#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM};
use crate::geom::{Rect, Vec2};

/// Camera for the scene view.
///
/// `position` is the world-space point shown at the center of the viewport.
/// `zoom` is a scale factor (1.0 = one world unit per pixel) and always lies
/// in `[MIN_ZOOM, MAX_ZOOM]`. `viewport_center` is half the viewport size and
/// is fixed for the lifetime of the camera.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec2,
    zoom: f64,
    viewport_center: Vec2,
}

impl Camera {
    /// Camera at the world origin with zoom 1.0 for a viewport of `viewport_size` pixels.
    #[must_use]
    pub fn new(viewport_size: Vec2) -> Self {
        Self { position: Vec2::ZERO, zoom: 1.0, viewport_center: viewport_size * 0.5 }
    }

    /// Same camera looking at `position` with `zoom` (clamped).
    #[must_use]
    pub fn with_view(mut self, position: Vec2, zoom: f64) -> Self {
        self.position = position;
        self.zoom = clamp_zoom(zoom);
        self
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn viewport_center(&self) -> Vec2 {
        self.viewport_center
    }

    /// Convert a world-space point to view-local screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom + self.viewport_center
    }

    /// Convert view-local screen pixels to a world-space point.
    #[must_use]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.viewport_center) / self.zoom + self.position
    }

    /// World-space rectangle covered by the viewport.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let top_left = self.screen_to_world(Vec2::ZERO);
        let bottom_right = self.screen_to_world(self.viewport_center * 2.0);
        Rect::from_origin_size(top_left, bottom_right - top_left)
    }

    /// Move the camera by a screen-space drag. The world follows the pointer,
    /// so the camera moves the opposite way, scaled by zoom.
    pub fn pan(&mut self, delta_screen: Vec2) {
        self.position -= delta_screen / self.zoom;
    }

    /// Multiply zoom by `factor` while keeping the world point under
    /// `screen_point` fixed on screen.
    ///
    /// The correction runs even when the new zoom was clamped. Factors that
    /// are not finite and positive are ignored.
    pub fn zoom_at_point(&mut self, screen_point: Vec2, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let before = self.screen_to_world(screen_point);
        self.zoom = clamp_zoom(self.zoom * factor);
        let after = self.screen_to_world(screen_point);
        self.position -= after - before;
    }

    /// Back to the origin at zoom 1.0.
    pub fn reset_view(&mut self) {
        self.position = Vec2::ZERO;
        self.zoom = 1.0;
    }

    /// Zoom 1.0, position unchanged.
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() { 1.0 } else { zoom.clamp(MIN_ZOOM, MAX_ZOOM) }
}
