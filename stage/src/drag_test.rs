#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Vec2;
use crate::input::Modifiers;
use crate::recording::Recorder;
use crate::scene::GameObject;

const LABEL: Rect = Rect::new(1005.0, 170.0, 20.0, 20.0);

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn press(x: f64) -> InputEvent {
    InputEvent::PointerDown { pos: Vec2::new(x, 180.0), button: Button::Primary, modifiers: Modifiers::NONE }
}

fn release(x: f64) -> InputEvent {
    InputEvent::PointerUp { pos: Vec2::new(x, 180.0), button: Button::Primary, modifiers: Modifiers::NONE }
}

fn move_to(x: f64) -> InputEvent {
    InputEvent::PointerMove { pos: Vec2::new(x, 180.0) }
}

fn selected_scene() -> (Scene, ObjectId) {
    let mut scene = Scene::new();
    let id = scene.add_object(GameObject::new("Player"));
    scene.select_object(Some(id));
    (scene, id)
}

fn scale_x(scene: &Scene, id: ObjectId) -> f64 {
    scene.get(id).map_or(f64::NAN, |o| o.transform.scale.x)
}

// =============================================================
// drag_value
// =============================================================

#[test]
fn drag_value_is_proportional_to_total_displacement() {
    assert_eq!(drag_value(PropertyPath::PositionX, 1.0, 10.0, 100.0, 130.0), 40.0);
    assert_eq!(drag_value(PropertyPath::Rotation, 2.0, 0.0, 100.0, 90.0), -20.0);
}

#[test]
fn scale_drag_right_500px() {
    assert!(approx_eq(drag_value(PropertyPath::ScaleX, 0.01, 1.0, 0.0, 500.0), 6.0));
}

#[test]
fn scale_drag_left_500px_hits_floor() {
    assert_eq!(drag_value(PropertyPath::ScaleY, 0.01, 1.0, 0.0, -500.0), 0.01);
}

#[test]
fn non_scale_drag_can_go_negative() {
    assert_eq!(drag_value(PropertyPath::PositionY, 1.0, 0.0, 0.0, -500.0), -500.0);
}

// =============================================================
// DragLabel
// =============================================================

#[test]
fn new_label_uses_path_step() {
    let (_, id) = selected_scene();
    let label = DragLabel::new(LABEL, id, PropertyPath::Rotation);
    assert!(!label.is_dragging());
    assert_eq!(label.path(), PropertyPath::Rotation);
    assert_eq!(label.target(), id);
}

#[test]
fn drag_writes_scale_through_binding() {
    let (mut scene, id) = selected_scene();
    let mut label = DragLabel::new(LABEL, id, PropertyPath::ScaleX);

    assert!(label.handle_event(&press(1010.0), &mut scene));
    assert!(label.is_dragging());
    assert!(label.handle_event(&move_to(1510.0), &mut scene));
    assert!(approx_eq(scale_x(&scene, id), 6.0));

    // Same press point, opposite direction.
    assert!(label.handle_event(&move_to(510.0), &mut scene));
    assert_eq!(scale_x(&scene, id), 0.01);

    assert!(label.handle_event(&release(510.0), &mut scene));
    assert!(!label.is_dragging());
}

#[test]
fn drag_captures_value_at_press() {
    let (mut scene, id) = selected_scene();
    if let Some(obj) = scene.get_mut(id) {
        obj.transform.position.x = 100.0;
    }
    let mut label = DragLabel::new(LABEL, id, PropertyPath::PositionX);
    label.handle_event(&press(1010.0), &mut scene);
    label.handle_event(&move_to(1015.0), &mut scene);
    label.handle_event(&move_to(1020.0), &mut scene);
    assert_eq!(scene.get(id).map(|o| o.transform.position.x), Some(110.0));
}

#[test]
fn drag_continues_outside_label() {
    let (mut scene, id) = selected_scene();
    let mut label = DragLabel::new(LABEL, id, PropertyPath::PositionY);
    label.handle_event(&press(1010.0), &mut scene);
    assert!(label.handle_event(&move_to(900.0), &mut scene));
    assert_eq!(scene.get(id).map(|o| o.transform.position.y), Some(-110.0));
}

#[test]
fn press_outside_is_ignored() {
    let (mut scene, id) = selected_scene();
    let mut label = DragLabel::new(LABEL, id, PropertyPath::PositionX);
    assert!(!label.handle_event(&press(500.0), &mut scene));
    assert!(!label.handle_event(&move_to(600.0), &mut scene));
    assert!(!label.handle_event(&release(600.0), &mut scene));
    assert_eq!(scene.get(id).map(|o| o.transform.position.x), Some(0.0));
}

#[test]
fn stale_label_does_not_write() {
    let (mut scene, id) = selected_scene();
    let other = scene.add_object(GameObject::new("Enemy"));
    let mut label = DragLabel::new(LABEL, id, PropertyPath::PositionX);
    label.handle_event(&press(1010.0), &mut scene);
    scene.select_object(Some(other));
    label.handle_event(&move_to(1050.0), &mut scene);
    assert_eq!(scene.get(id).map(|o| o.transform.position.x), Some(0.0));
    assert_eq!(scene.get(other).map(|o| o.transform.position.x), Some(0.0));
}

#[test]
fn poll_ends_drag_without_release_event() {
    let (mut scene, id) = selected_scene();
    let mut label = DragLabel::new(LABEL, id, PropertyPath::PositionX);
    label.handle_event(&press(1010.0), &mut scene);
    label.update(&PointerState { position: Vec2::new(1010.0, 180.0), primary: true, ..PointerState::default() });
    assert!(label.is_dragging());
    label.update(&PointerState::at(Vec2::new(700.0, 700.0)));
    assert!(!label.is_dragging());
    assert!(!label.handle_event(&move_to(1100.0), &mut scene));
}

#[test]
fn resize_cursor_on_hover_or_drag() {
    let (mut scene, id) = selected_scene();
    let mut label = DragLabel::new(LABEL, id, PropertyPath::PositionX);
    assert!(!label.wants_resize_cursor());
    label.update(&PointerState::at(Vec2::new(1010.0, 180.0)));
    assert!(label.wants_resize_cursor());
    label.handle_event(&press(1010.0), &mut scene);
    label.handle_event(&move_to(1200.0), &mut scene);
    assert!(!label.is_hovered());
    assert!(label.wants_resize_cursor());
}

#[test]
fn draw_uses_axis_letter_and_state_color() {
    let (mut scene, id) = selected_scene();
    let mut label = DragLabel::new(LABEL, id, PropertyPath::Rotation);
    let mut rec = Recorder::default();
    label.draw(&mut rec);
    assert_eq!(rec.text_color("Z"), Some(theme::TEXT));

    label.handle_event(&press(1010.0), &mut scene);
    let mut rec = Recorder::default();
    label.draw(&mut rec);
    assert_eq!(rec.text_color("Z"), Some(theme::ACCENT));
}
