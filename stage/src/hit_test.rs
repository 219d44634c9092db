#![allow(clippy::float_cmp)]

use super::*;

fn object(name: &str, x: f64, y: f64, sx: f64, sy: f64) -> GameObject {
    let mut obj = GameObject::new(name).at(Vec2::new(x, y));
    obj.transform.scale = Vec2::new(sx, sy);
    obj
}

// =============================================================
// Footprint geometry
// =============================================================

#[test]
fn semi_axes_for_unit_scale() {
    let t = Transform::default();
    assert_eq!(semi_axes(&t), Vec2::new(16.0, 16.0));
}

#[test]
fn semi_axes_follow_scale_per_axis() {
    let t = Transform { scale: Vec2::new(2.0, 0.5), ..Transform::default() };
    assert_eq!(semi_axes(&t), Vec2::new(32.0, 8.0));
}

#[test]
fn effective_scale_uses_magnitude() {
    let t = Transform { scale: Vec2::new(-3.0, -0.5), ..Transform::default() };
    assert_eq!(effective_scale(&t), Vec2::new(3.0, 0.5));
}

#[test]
fn effective_scale_floors_zero() {
    let t = Transform { scale: Vec2::new(0.0, 0.001), ..Transform::default() };
    assert_eq!(effective_scale(&t), Vec2::new(MIN_SCALE, MIN_SCALE));
}

#[test]
fn footprint_contains_boundary() {
    let t = Transform::default();
    assert!(footprint_contains(&t, Vec2::new(16.0, 0.0)));
    assert!(!footprint_contains(&t, Vec2::new(16.01, 0.0)));
}

#[test]
fn footprint_is_elliptical_not_rectangular() {
    let t = Transform::default();
    // Inside the bounding box corner, outside the ellipse.
    assert!(!footprint_contains(&t, Vec2::new(15.0, 15.0)));
    assert!(footprint_contains(&t, Vec2::new(11.0, 11.0)));
}

#[test]
fn footprint_ignores_rotation() {
    let t = Transform { rotation: 90.0, scale: Vec2::new(2.0, 1.0), ..Transform::default() };
    assert!(footprint_contains(&t, Vec2::new(31.0, 0.0)));
    assert!(!footprint_contains(&t, Vec2::new(0.0, 31.0)));
}

// =============================================================
// object_at
// =============================================================

#[test]
fn non_uniform_scale_hits_and_misses() {
    let objects = vec![object("wide", 0.0, 0.0, 2.0, 1.0)];
    let id = objects[0].id();
    assert_eq!(object_at(Vec2::new(31.9, 0.0), &objects), Some(id));
    assert_eq!(object_at(Vec2::new(33.0, 0.0), &objects), None);
    assert_eq!(object_at(Vec2::new(0.0, 17.0), &objects), None);
}

#[test]
fn empty_list_hits_nothing() {
    assert_eq!(object_at(Vec2::ZERO, &[]), None);
}

#[test]
fn topmost_object_wins() {
    let objects = vec![object("below", 0.0, 0.0, 1.0, 1.0), object("above", 5.0, 0.0, 1.0, 1.0)];
    assert_eq!(object_at(Vec2::new(2.0, 0.0), &objects), Some(objects[1].id()));
}

#[test]
fn lower_object_hit_outside_upper_footprint() {
    let objects = vec![object("below", 0.0, 0.0, 1.0, 1.0), object("above", 20.0, 0.0, 1.0, 1.0)];
    assert_eq!(object_at(Vec2::new(-10.0, 0.0), &objects), Some(objects[0].id()));
}

#[test]
fn invisible_objects_are_skipped() {
    let mut objects = vec![object("below", 0.0, 0.0, 1.0, 1.0), object("hidden", 0.0, 0.0, 1.0, 1.0)];
    objects[1].visible = false;
    assert_eq!(object_at(Vec2::ZERO, &objects), Some(objects[0].id()));
}

#[test]
fn zero_scale_still_has_a_tiny_footprint() {
    let objects = vec![object("flat", 0.0, 0.0, 0.0, 0.0)];
    assert_eq!(object_at(Vec2::new(0.1, 0.0), &objects), Some(objects[0].id()));
    assert_eq!(object_at(Vec2::new(0.2, 0.0), &objects), None);
}

#[test]
fn negative_scale_uses_magnitude() {
    let objects = vec![object("mirrored", 0.0, 0.0, -2.0, 1.0)];
    assert_eq!(object_at(Vec2::new(31.0, 0.0), &objects), Some(objects[0].id()));
    assert_eq!(object_at(Vec2::new(-31.0, 0.0), &objects), Some(objects[0].id()));
}

#[test]
fn offset_object_hit_relative_to_its_position() {
    let objects = vec![object("away", 100.0, -50.0, 1.0, 1.0)];
    assert_eq!(object_at(Vec2::new(110.0, -45.0), &objects), Some(objects[0].id()));
    assert_eq!(object_at(Vec2::ZERO, &objects), None);
}
