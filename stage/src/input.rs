//! Input model: buttons, keys, modifiers, host events, and the scene-view gesture state.
//!
//! The host translates whatever its windowing layer reports into
//! [`InputEvent`]s and also hands over a polled [`PointerState`] once per
//! frame. Gestures in progress are tracked by [`InputState`]; the polled state
//! is what ends a gesture whose release event never arrived.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Vec2;
use crate::scene::ObjectId;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false, meta: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false, meta: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false, meta: false };
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Keys the editor reacts to. Anything printable arrives as [`Key::Char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Space,
    Char(char),
}

/// A key press with its modifiers and the character it types, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Printable payload. `None` for navigation and editing keys.
    pub text: Option<char>,
}

impl KeyEvent {
    /// A non-printing key press.
    #[must_use]
    pub fn key(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers, text: None }
    }

    /// A printable character press.
    #[must_use]
    pub fn char(c: char) -> Self {
        let key = if c == ' ' { Key::Space } else { Key::Char(c) };
        Self { key, modifiers: Modifiers::NONE, text: Some(c) }
    }
}

/// One discrete wheel notch. Positive scrolls up (zooms in).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta(pub f64);

impl WheelDelta {
    #[must_use]
    pub fn is_up(self) -> bool {
        self.0 > 0.0
    }

    #[must_use]
    pub fn is_down(self) -> bool {
        self.0 < 0.0
    }
}

/// A discrete input event from the host. Positions are window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Vec2, button: Button, modifiers: Modifiers },
    PointerUp { pos: Vec2, button: Button, modifiers: Modifiers },
    PointerMove { pos: Vec2 },
    Wheel { pos: Vec2, delta: WheelDelta },
    KeyDown(KeyEvent),
    CloseRequested,
}

impl InputEvent {
    /// Pointer position carried by the event, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        match self {
            Self::PointerDown { pos, .. }
            | Self::PointerUp { pos, .. }
            | Self::PointerMove { pos }
            | Self::Wheel { pos, .. } => Some(*pos),
            Self::KeyDown(_) | Self::CloseRequested => None,
        }
    }
}

/// Physical pointer state polled from the host once per frame.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Pointer position in window pixels.
    pub position: Vec2,
    pub primary: bool,
    pub middle: bool,
    pub secondary: bool,
}

impl PointerState {
    /// Pointer at `position` with no buttons held.
    #[must_use]
    pub fn at(position: Vec2) -> Self {
        Self { position, ..Self::default() }
    }

    /// Whether `button` is physically held.
    #[must_use]
    pub fn is_down(&self, button: Button) -> bool {
        match button {
            Button::Primary => self.primary,
            Button::Middle => self.middle,
            Button::Secondary => self.secondary,
        }
    }
}

/// Gesture in progress on the scene view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Middle-button drag moving the camera.
    Panning {
        /// View-local position of the previous pointer event, used to compute pan delta.
        last_local: Vec2,
    },
    /// Left-button drag snapping an object's center to the pointer.
    DraggingObject {
        /// Id of the object being dragged.
        id: ObjectId,
    },
}

impl InputState {
    /// The button whose release ends this gesture.
    #[must_use]
    pub fn held_button(&self) -> Option<Button> {
        match self {
            Self::Idle => None,
            Self::Panning { .. } => Some(Button::Middle),
            Self::DraggingObject { .. } => Some(Button::Primary),
        }
    }

    /// Id of the object being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<ObjectId> {
        match self {
            Self::DraggingObject { id } => Some(*id),
            Self::Idle | Self::Panning { .. } => None,
        }
    }
}
