#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Vec2;
use crate::scene::{GameObject, Scene};

// =============================================================
// PropertyPath
// =============================================================

#[test]
fn dotted_spelling_round_trips_through_parse() {
    for path in PropertyPath::ALL {
        assert_eq!(path.as_str().parse::<PropertyPath>(), Ok(path));
        assert_eq!(path.to_string(), path.as_str());
    }
}

#[test]
fn parse_rejects_unknown_and_partial_paths() {
    for bad in ["", "transform", "transform.position", "position.x", "transform.scale.z", "Transform.rotation"] {
        assert_eq!(bad.parse::<PropertyPath>(), Err(PathError::Unknown(bad.to_string())));
    }
}

#[test]
fn only_scale_paths_are_scale() {
    let scales: Vec<_> = PropertyPath::ALL.into_iter().filter(|p| p.is_scale()).collect();
    assert_eq!(scales, vec![PropertyPath::ScaleX, PropertyPath::ScaleY]);
}

#[test]
fn drag_steps_per_field() {
    assert_eq!(PropertyPath::PositionX.drag_step(), 1.0);
    assert_eq!(PropertyPath::PositionY.drag_step(), 1.0);
    assert_eq!(PropertyPath::Rotation.drag_step(), 2.0);
    assert_eq!(PropertyPath::ScaleX.drag_step(), 0.01);
    assert_eq!(PropertyPath::ScaleY.drag_step(), 0.01);
}

#[test]
fn constrain_floors_scale_only() {
    assert_eq!(PropertyPath::ScaleX.constrain(-4.0), MIN_SCALE);
    assert_eq!(PropertyPath::ScaleY.constrain(0.5), 0.5);
    assert_eq!(PropertyPath::PositionX.constrain(-4.0), -4.0);
    assert_eq!(PropertyPath::Rotation.constrain(-720.0), -720.0);
}

#[test]
fn axis_labels() {
    let labels: Vec<_> = PropertyPath::ALL.into_iter().map(PropertyPath::axis_label).collect();
    assert_eq!(labels, vec!["X", "Y", "Z", "X", "Y"]);
}

#[test]
fn write_then_read_each_field_independently() {
    for (i, path) in PropertyPath::ALL.into_iter().enumerate() {
        let mut t = Transform::default();
        let before = t;
        #[allow(clippy::cast_precision_loss)]
        let value = 10.0 + i as f64;
        path.write(&mut t, value);
        assert_eq!(path.read(&t), value);
        for other in PropertyPath::ALL.into_iter().filter(|o| *o != path) {
            assert_eq!(other.read(&t), other.read(&before), "{path} leaked into {other}");
        }
    }
}

#[test]
fn write_does_not_constrain_raw_transform() {
    let mut t = Transform::default();
    PropertyPath::ScaleX.write(&mut t, -1.0);
    assert_eq!(t.scale, Vec2::new(-1.0, 1.0));
}

// =============================================================
// Errors
// =============================================================

#[test]
fn error_messages_name_the_path() {
    let e = BindingError::NoSelection { path: PropertyPath::Rotation };
    assert_eq!(e.to_string(), "cannot set transform.rotation: no object selected");
    let e = PathError::Unknown("a.b".into());
    assert_eq!(e.to_string(), "unknown property path `a.b`");
}

// =============================================================
// write_bound
// =============================================================

fn two_objects() -> (Scene, ObjectId, ObjectId) {
    let mut scene = Scene::new();
    let a = scene.add_object(GameObject::new("A"));
    let b = scene.add_object(GameObject::new("B"));
    (scene, a, b)
}

#[test]
fn write_bound_hits_current_selection() {
    let (mut scene, a, _) = two_objects();
    scene.select_object(Some(a));
    assert!(write_bound(&mut scene, a, PropertyPath::PositionX, 42.0));
    assert_eq!(scene.get(a).map(|o| o.transform.position.x), Some(42.0));
}

#[test]
fn write_bound_drops_when_selection_moved() {
    let (mut scene, a, b) = two_objects();
    scene.select_object(Some(b));
    assert!(!write_bound(&mut scene, a, PropertyPath::PositionX, 42.0));
    assert_eq!(scene.get(a).map(|o| o.transform.position.x), Some(0.0));
    assert_eq!(scene.get(b).map(|o| o.transform.position.x), Some(0.0));
}

#[test]
fn write_bound_drops_without_selection() {
    let (mut scene, a, _) = two_objects();
    assert!(!write_bound(&mut scene, a, PropertyPath::Rotation, 90.0));
    assert_eq!(scene.get(a).map(|o| o.transform.rotation), Some(0.0));
}

#[test]
fn write_bound_drops_after_delete() {
    let (mut scene, a, _) = two_objects();
    scene.select_object(Some(a));
    scene.remove_object(a);
    assert!(!write_bound(&mut scene, a, PropertyPath::ScaleX, 3.0));
}

#[test]
fn read_bound_falls_back_to_zero_when_stale() {
    let (mut scene, a, b) = two_objects();
    if let Some(obj) = scene.get_mut(a) {
        obj.transform.rotation = 45.0;
    }
    scene.select_object(Some(a));
    assert_eq!(read_bound(&scene, a, PropertyPath::Rotation), 45.0);
    scene.select_object(Some(b));
    assert_eq!(read_bound(&scene, a, PropertyPath::Rotation), 0.0);
    scene.select_object(None);
    assert_eq!(read_bound(&scene, a, PropertyPath::Rotation), 0.0);
}
