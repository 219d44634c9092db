//! raylib window host: turns polled device state into [`InputEvent`]s, draws
//! through a [`Surface`] backed by the raylib draw handle, and runs the frame
//! loop.

use std::ffi::CString;

use raylib::ffi;
use raylib::prelude::*;
use stage::geom::{Rect, Vec2};
use stage::input::{Button, InputEvent, Key, KeyEvent, Modifiers, PointerState, WheelDelta};
use stage::render::{self, Surface, TextMetrics};

use crate::editor::{CursorShape, Editor, HeldKeys};

const WINDOW_TITLE: &str = "Scene Editor";

const MOUSE_BUTTONS: [(MouseButton, Button); 3] = [
    (MouseButton::MOUSE_BUTTON_LEFT, Button::Primary),
    (MouseButton::MOUSE_BUTTON_MIDDLE, Button::Middle),
    (MouseButton::MOUSE_BUTTON_RIGHT, Button::Secondary),
];

#[allow(clippy::cast_possible_truncation)]
fn px(v: f64) -> i32 {
    v.round() as i32
}

#[allow(clippy::cast_possible_truncation)]
fn f32_of(v: f64) -> f32 {
    v as f32
}

fn vector(v: Vec2) -> Vector2 {
    Vector2::new(f32_of(v.x), f32_of(v.y))
}

fn color(c: render::Color) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

fn rectangle(r: Rect) -> Rectangle {
    Rectangle::new(f32_of(r.x), f32_of(r.y), f32_of(r.width), f32_of(r.height))
}

fn intersect(a: Rect, b: Rect) -> Rect {
    let x = a.x.max(b.x);
    let y = a.y.max(b.y);
    let right = a.right().min(b.right());
    let bottom = a.bottom().min(b.bottom());
    Rect::new(x, y, (right - x).max(0.0), (bottom - y).max(0.0))
}

// =============================================================================
// Text metrics
// =============================================================================

/// Measures with raylib's default font. Valid once the window exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaylibMetrics;

impl TextMetrics for RaylibMetrics {
    fn measure_text(&self, text: &str, size: f64) -> Vec2 {
        let Ok(c_text) = CString::new(text) else {
            return Vec2::new(0.0, size);
        };
        let width = unsafe { ffi::MeasureText(c_text.as_ptr(), px(size)) };
        Vec2::new(f64::from(width), size)
    }
}

// =============================================================================
// Surface
// =============================================================================

/// [`Surface`] over a raylib draw handle. Clips nest by intersection.
pub struct RaylibSurface<'a, D: RaylibDraw> {
    draw: &'a mut D,
    clips: Vec<Rect>,
}

impl<'a, D: RaylibDraw> RaylibSurface<'a, D> {
    pub fn new(draw: &'a mut D) -> Self {
        Self { draw, clips: Vec::new() }
    }

    fn apply_clip(&self) {
        match self.clips.last() {
            Some(r) => unsafe {
                ffi::EndScissorMode();
                ffi::BeginScissorMode(px(r.x), px(r.y), px(r.width), px(r.height));
            },
            None => unsafe { ffi::EndScissorMode() },
        }
    }
}

impl<D: RaylibDraw> TextMetrics for RaylibSurface<'_, D> {
    fn measure_text(&self, text: &str, size: f64) -> Vec2 {
        RaylibMetrics.measure_text(text, size)
    }
}

impl<D: RaylibDraw> Surface for RaylibSurface<'_, D> {
    fn fill_rect(&mut self, rect: Rect, c: render::Color) {
        self.draw.draw_rectangle_rec(rectangle(rect), color(c));
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f64, c: render::Color) {
        self.draw.draw_rectangle_lines_ex(rectangle(rect), f32_of(thickness), color(c));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, c: render::Color) {
        self.draw.draw_circle_v(vector(center), f32_of(radius), color(c));
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, c: render::Color) {
        self.draw.draw_ellipse(px(center.x), px(center.y), f32_of(radii.x), f32_of(radii.y), color(c));
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, _thickness: f64, c: render::Color) {
        self.draw.draw_ellipse_lines(px(center.x), px(center.y), f32_of(radii.x), f32_of(radii.y), color(c));
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f64, c: render::Color) {
        self.draw.draw_line_ex(vector(from), vector(to), f32_of(thickness), color(c));
    }

    fn fill_polygon(&mut self, points: &[Vec2], c: render::Color) {
        // Winding flips with rotation and raylib culls one of the two.
        let mut fan: Vec<Vector2> = points.iter().copied().map(vector).collect();
        self.draw.draw_triangle_fan(&fan, color(c));
        fan.reverse();
        self.draw.draw_triangle_fan(&fan, color(c));
    }

    fn text(&mut self, pos: Vec2, text: &str, size: f64, c: render::Color) {
        self.draw.draw_text(text, px(pos.x), px(pos.y), px(size), color(c));
    }

    fn push_clip(&mut self, rect: Rect) {
        let clip = self.clips.last().map_or(rect, |outer| intersect(*outer, rect));
        self.clips.push(clip);
        self.apply_clip();
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
        self.apply_clip();
    }
}

// =============================================================================
// Input
// =============================================================================

fn modifiers(rl: &RaylibHandle) -> Modifiers {
    let down = |a, b| rl.is_key_down(a) || rl.is_key_down(b);
    Modifiers {
        shift: down(KeyboardKey::KEY_LEFT_SHIFT, KeyboardKey::KEY_RIGHT_SHIFT),
        ctrl: down(KeyboardKey::KEY_LEFT_CONTROL, KeyboardKey::KEY_RIGHT_CONTROL),
        alt: down(KeyboardKey::KEY_LEFT_ALT, KeyboardKey::KEY_RIGHT_ALT),
        meta: down(KeyboardKey::KEY_LEFT_SUPER, KeyboardKey::KEY_RIGHT_SUPER),
    }
}

fn map_key(key: KeyboardKey, modifiers: Modifiers) -> Option<Key> {
    Some(match key {
        KeyboardKey::KEY_ENTER | KeyboardKey::KEY_KP_ENTER => Key::Enter,
        KeyboardKey::KEY_ESCAPE => Key::Escape,
        KeyboardKey::KEY_BACKSPACE => Key::Backspace,
        KeyboardKey::KEY_DELETE => Key::Delete,
        KeyboardKey::KEY_LEFT => Key::Left,
        KeyboardKey::KEY_RIGHT => Key::Right,
        KeyboardKey::KEY_UP => Key::Up,
        KeyboardKey::KEY_DOWN => Key::Down,
        KeyboardKey::KEY_HOME => Key::Home,
        KeyboardKey::KEY_END => Key::End,
        // Printable keys arrive through the char queue; only shortcuts come from here.
        KeyboardKey::KEY_A if modifiers.ctrl => Key::Char('a'),
        _ => return None,
    })
}

fn pointer_state(rl: &RaylibHandle) -> PointerState {
    let pos = rl.get_mouse_position();
    PointerState {
        position: Vec2::new(f64::from(pos.x), f64::from(pos.y)),
        primary: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
        middle: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_MIDDLE),
        secondary: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_RIGHT),
    }
}

fn held_keys(rl: &RaylibHandle) -> HeldKeys {
    HeldKeys {
        left: rl.is_key_down(KeyboardKey::KEY_LEFT),
        right: rl.is_key_down(KeyboardKey::KEY_RIGHT),
        up: rl.is_key_down(KeyboardKey::KEY_UP),
        down: rl.is_key_down(KeyboardKey::KEY_DOWN),
    }
}

/// Everything that happened since the last frame, in a stable order:
/// pointer motion, buttons, wheel, keys, typed characters, close.
fn poll_events(rl: &mut RaylibHandle, last_pointer: &mut Vec2) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let mods = modifiers(rl);
    let pos = pointer_state(rl).position;

    if pos != *last_pointer {
        events.push(InputEvent::PointerMove { pos });
        *last_pointer = pos;
    }
    for (raw, button) in MOUSE_BUTTONS {
        if rl.is_mouse_button_pressed(raw) {
            events.push(InputEvent::PointerDown { pos, button, modifiers: mods });
        }
        if rl.is_mouse_button_released(raw) {
            events.push(InputEvent::PointerUp { pos, button, modifiers: mods });
        }
    }
    let wheel = rl.get_mouse_wheel_move();
    if wheel.abs() > f32::EPSILON {
        events.push(InputEvent::Wheel { pos, delta: WheelDelta(f64::from(wheel)) });
    }

    while let Some(raw) = rl.get_key_pressed() {
        if let Some(key) = map_key(raw, mods) {
            events.push(InputEvent::KeyDown(KeyEvent::key(key, mods)));
        }
    }
    if !mods.ctrl {
        while let Some(c) = rl.get_char_pressed() {
            events.push(InputEvent::KeyDown(KeyEvent::char(c)));
        }
    }

    if rl.window_should_close() {
        events.push(InputEvent::CloseRequested);
    }
    events
}

fn apply_cursor(rl: &mut RaylibHandle, shape: CursorShape) {
    let cursor = match shape {
        CursorShape::Default => MouseCursor::MOUSE_CURSOR_DEFAULT,
        CursorShape::ResizeHorizontal => MouseCursor::MOUSE_CURSOR_RESIZE_EW,
    };
    rl.set_mouse_cursor(cursor);
}

// =============================================================================
// Frame loop
// =============================================================================

/// Open the window and run until the editor stops.
pub fn run(mut editor: Editor) {
    let config = editor.config();
    let width = i32::try_from(config.width).unwrap_or(i32::MAX);
    let height = i32::try_from(config.height).unwrap_or(i32::MAX);
    let fps = config.fps;

    let (mut rl, thread) = raylib::init().size(width, height).title(WINDOW_TITLE).build();
    rl.set_target_fps(fps);
    rl.set_exit_key(None);
    tracing::info!(width, height, fps, "window opened");

    let mut last_pointer = pointer_state(&rl).position;
    let mut cursor = CursorShape::Default;

    while editor.is_running() {
        for event in poll_events(&mut rl, &mut last_pointer) {
            editor.handle_event(&event, &RaylibMetrics);
        }

        let pointer = pointer_state(&rl);
        editor.update(&pointer, held_keys(&rl), f64::from(rl.get_frame_time()));

        if editor.cursor() != cursor {
            cursor = editor.cursor();
            apply_cursor(&mut rl, cursor);
        }

        let mut d = rl.begin_drawing(&thread);
        let mut surface = RaylibSurface::new(&mut d);
        editor.draw(&mut surface);
    }
    tracing::info!("window closed");
}
