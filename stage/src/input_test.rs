use super::*;

// =============================================================
// Modifiers / KeyEvent
// =============================================================

#[test]
fn modifiers_default_is_none() {
    assert_eq!(Modifiers::default(), Modifiers::NONE);
}

#[test]
fn modifier_constants() {
    assert!(Modifiers::SHIFT.shift && !Modifiers::SHIFT.ctrl);
    assert!(Modifiers::CTRL.ctrl && !Modifiers::CTRL.shift);
}

#[test]
fn char_event_carries_text() {
    let ev = KeyEvent::char('7');
    assert_eq!(ev.key, Key::Char('7'));
    assert_eq!(ev.text, Some('7'));
}

#[test]
fn space_char_maps_to_space_key() {
    let ev = KeyEvent::char(' ');
    assert_eq!(ev.key, Key::Space);
    assert_eq!(ev.text, Some(' '));
}

#[test]
fn plain_key_has_no_text() {
    let ev = KeyEvent::key(Key::Backspace, Modifiers::SHIFT);
    assert_eq!(ev.text, None);
    assert!(ev.modifiers.shift);
}

// =============================================================
// WheelDelta
// =============================================================

#[test]
fn wheel_direction() {
    assert!(WheelDelta(1.0).is_up());
    assert!(WheelDelta(3.5).is_up());
    assert!(WheelDelta(-0.2).is_down());
    let flat = WheelDelta(0.0);
    assert!(!flat.is_up() && !flat.is_down());
}

// =============================================================
// InputEvent
// =============================================================

#[test]
fn event_position() {
    let pos = Vec2::new(3.0, 4.0);
    let down = InputEvent::PointerDown { pos, button: Button::Primary, modifiers: Modifiers::NONE };
    assert_eq!(down.position(), Some(pos));
    assert_eq!(InputEvent::PointerMove { pos }.position(), Some(pos));
    assert_eq!(InputEvent::Wheel { pos, delta: WheelDelta(1.0) }.position(), Some(pos));
    assert_eq!(InputEvent::KeyDown(KeyEvent::char('a')).position(), None);
    assert_eq!(InputEvent::CloseRequested.position(), None);
}

// =============================================================
// PointerState
// =============================================================

#[test]
fn pointer_state_at_has_no_buttons() {
    let p = PointerState::at(Vec2::new(1.0, 2.0));
    assert_eq!(p.position, Vec2::new(1.0, 2.0));
    assert!(!p.is_down(Button::Primary));
    assert!(!p.is_down(Button::Middle));
    assert!(!p.is_down(Button::Secondary));
}

#[test]
fn pointer_state_is_down_per_button() {
    let p = PointerState { middle: true, ..PointerState::default() };
    assert!(p.is_down(Button::Middle));
    assert!(!p.is_down(Button::Primary));
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert_eq!(InputState::Idle.held_button(), None);
}

#[test]
fn gesture_held_buttons() {
    assert_eq!(InputState::Panning { last_local: Vec2::ZERO }.held_button(), Some(Button::Middle));
    let id = ObjectId::new_v4();
    assert_eq!(InputState::DraggingObject { id }.held_button(), Some(Button::Primary));
}

#[test]
fn dragged_only_while_dragging() {
    let id = ObjectId::new_v4();
    assert_eq!(InputState::DraggingObject { id }.dragged(), Some(id));
    assert_eq!(InputState::Panning { last_local: Vec2::ZERO }.dragged(), None);
    assert_eq!(InputState::Idle.dragged(), None);
}
