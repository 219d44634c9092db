//! Scene view: the pannable, zoomable canvas region of the editor.
//!
//! [`SceneView`] owns the camera and the gesture state machine. Handlers take
//! the scene by `&mut` for the duration of one event and return the
//! [`Action`]s they produced; an empty list means the event was not consumed.
//!
//! Pointer positions arrive in window pixels and are converted to view-local
//! pixels (relative to the view's top-left corner) before they reach the
//! camera.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::Camera;
use crate::consts::{CAMERA_READOUT_AT, OVERLAY_FONT_PX, ZOOM_READOUT_AT, ZOOM_STEP_IN, ZOOM_STEP_OUT};
use crate::geom::{Rect, Vec2};
use crate::input::{Button, InputEvent, InputState, PointerState, WheelDelta};
use crate::render::{self, Surface, TextMetrics};
use crate::scene::{ObjectId, Scene};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Selection was set (or cleared) by a click.
    SelectionChanged(Option<ObjectId>),
    /// An object drag began.
    DragStarted(ObjectId),
    /// The dragged object moved to a new world position.
    ObjectMoved { id: ObjectId, position: Vec2 },
    /// A middle-button pan began.
    PanStarted,
    /// Camera position or zoom changed.
    CameraChanged,
    /// A pan or drag finished.
    GestureEnded,
}

/// Clickable overlay readouts in the top-left corner of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotText {
    /// Zoom readout. Clicking resets zoom only.
    Zoom,
    /// Camera position readout. Clicking resets the whole view.
    Camera,
}

impl HotText {
    /// Checked in this order; the first zone containing the pointer wins.
    pub const ALL: [Self; 2] = [Self::Zoom, Self::Camera];

    /// Text shown for this readout.
    #[must_use]
    pub fn label(self, camera: &Camera) -> String {
        match self {
            Self::Zoom => format!("Zoom: {:.1}x", camera.zoom()),
            Self::Camera => {
                let p = camera.position();
                format!("Camera: ({:.1}, {:.1})", p.x, p.y)
            }
        }
    }

    fn anchor(self) -> Vec2 {
        match self {
            Self::Zoom => ZOOM_READOUT_AT,
            Self::Camera => CAMERA_READOUT_AT,
        }
    }

    fn apply(self, camera: &mut Camera) {
        match self {
            Self::Zoom => camera.reset_zoom(),
            Self::Camera => camera.reset_view(),
        }
    }
}

/// The scene canvas: camera, gesture state, and display toggles.
#[derive(Debug, Clone)]
pub struct SceneView {
    rect: Rect,
    camera: Camera,
    input: InputState,
    hovered: bool,
    pointer_local: Vec2,
    playing: bool,
    /// Draw the adaptive background grid.
    pub show_grid: bool,
    /// Draw the world-origin crosshair.
    pub show_origin: bool,
}

impl SceneView {
    /// View occupying `rect` in window pixels, camera at the origin.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            camera: Camera::new(rect.size()),
            input: InputState::Idle,
            hovered: false,
            pointer_local: Vec2::ZERO,
            playing: false,
            show_grid: true,
            show_origin: true,
        }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current gesture.
    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    /// Whether the polled pointer was over the view at the last update.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Switch between edit and play mode. Entering play mode ends any object drag.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        if playing && self.input.dragged().is_some() {
            self.input = InputState::Idle;
        }
    }

    /// Id of the object currently being dragged.
    #[must_use]
    pub fn dragged(&self) -> Option<ObjectId> {
        self.input.dragged()
    }

    /// Convert a window position to view-local pixels.
    #[must_use]
    pub fn to_local(&self, window: Vec2) -> Vec2 {
        window - self.rect.origin()
    }

    // --- Input ---

    /// Route one host event to the matching handler.
    pub fn handle_event(&mut self, event: &InputEvent, scene: &mut Scene, metrics: &dyn TextMetrics) -> Vec<Action> {
        match *event {
            InputEvent::PointerDown { pos, button, .. } => self.on_pointer_down(pos, button, scene, metrics),
            InputEvent::PointerUp { button, .. } => self.on_pointer_up(button),
            InputEvent::PointerMove { pos } => self.on_pointer_move(pos, scene),
            InputEvent::Wheel { pos, delta } => self.on_wheel(pos, delta),
            InputEvent::KeyDown(_) | InputEvent::CloseRequested => Vec::new(),
        }
    }

    /// Button press at window position `pos`. Ignored outside the view.
    ///
    /// Gestures only start from idle: a press of the other button mid-gesture
    /// never replaces the one in progress. A primary press still selects.
    pub fn on_pointer_down(
        &mut self,
        pos: Vec2,
        button: Button,
        scene: &mut Scene,
        metrics: &dyn TextMetrics,
    ) -> Vec<Action> {
        if !self.rect.contains(pos) {
            return Vec::new();
        }
        let local = self.to_local(pos);
        self.pointer_local = local;

        match button {
            Button::Primary => {
                if let Some(hot) = self.hot_text_at(local, metrics) {
                    hot.apply(&mut self.camera);
                    return vec![Action::CameraChanged];
                }

                let world = self.camera.screen_to_world(local);
                let hit = scene.object_at(world);
                scene.select_object(hit);
                let mut actions = vec![Action::SelectionChanged(hit)];

                if let Some(id) = hit.filter(|_| !self.playing && self.input == InputState::Idle) {
                    self.input = InputState::DraggingObject { id };
                    actions.push(Action::DragStarted(id));
                }
                actions
            }
            Button::Middle if self.input == InputState::Idle => {
                self.input = InputState::Panning { last_local: local };
                vec![Action::PanStarted]
            }
            Button::Middle | Button::Secondary => Vec::new(),
        }
    }

    /// Button release anywhere. Ends the gesture that `button` was holding.
    pub fn on_pointer_up(&mut self, button: Button) -> Vec<Action> {
        if self.input.held_button() == Some(button) {
            self.input = InputState::Idle;
            vec![Action::GestureEnded]
        } else {
            Vec::new()
        }
    }

    /// Pointer motion to window position `pos`. Only consumed mid-gesture.
    pub fn on_pointer_move(&mut self, pos: Vec2, scene: &mut Scene) -> Vec<Action> {
        let local = self.to_local(pos);
        self.pointer_local = local;

        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_local } => {
                self.camera.pan(local - last_local);
                self.input = InputState::Panning { last_local: local };
                vec![Action::CameraChanged]
            }
            InputState::DraggingObject { id } => {
                let position = self.camera.screen_to_world(local);
                let Some(obj) = scene.get_mut(id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                obj.transform.position = position;
                vec![Action::ObjectMoved { id, position }]
            }
        }
    }

    /// One wheel notch over window position `pos`. Ignored outside the view.
    pub fn on_wheel(&mut self, pos: Vec2, delta: WheelDelta) -> Vec<Action> {
        if !self.rect.contains(pos) {
            return Vec::new();
        }
        let factor = if delta.is_up() {
            ZOOM_STEP_IN
        } else if delta.is_down() {
            ZOOM_STEP_OUT
        } else {
            return Vec::new();
        };
        self.camera.zoom_at_point(self.to_local(pos), factor);
        vec![Action::CameraChanged]
    }

    /// Per-frame reconciliation against the polled pointer.
    ///
    /// A gesture whose button is no longer physically held ends here even if
    /// its release event was never delivered to the view.
    pub fn update(&mut self, pointer: &PointerState) {
        self.hovered = self.rect.contains(pointer.position);
        self.pointer_local = self.to_local(pointer.position);

        if let Some(button) = self.input.held_button() {
            if !pointer.is_down(button) {
                self.input = InputState::Idle;
            }
        }
    }

    // --- Overlays ---

    /// View-local rectangle of a readout, sized by its current text.
    #[must_use]
    pub fn hot_text_zone(&self, hot: HotText, metrics: &dyn TextMetrics) -> Rect {
        let size = metrics.measure_text(&hot.label(&self.camera), OVERLAY_FONT_PX);
        Rect::from_origin_size(hot.anchor(), size)
    }

    /// Readout under the view-local point, if any.
    #[must_use]
    pub fn hot_text_at(&self, local: Vec2, metrics: &dyn TextMetrics) -> Option<HotText> {
        HotText::ALL.into_iter().find(|hot| self.hot_text_zone(*hot, metrics).contains(local))
    }

    /// Readout under the pointer as of the last update, if the pointer is over the view.
    #[must_use]
    pub fn hovered_hot_text(&self, metrics: &dyn TextMetrics) -> Option<HotText> {
        if self.hovered { self.hot_text_at(self.pointer_local, metrics) } else { None }
    }

    // --- Rendering ---

    pub fn draw(&self, scene: &Scene, surface: &mut dyn Surface) {
        render::draw_scene_view(surface, self, scene);
    }
}
