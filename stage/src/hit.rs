//! Hit-testing: resolve a world point to the topmost object under it.
//!
//! Every object's footprint is an axis-aligned ellipse centered on its
//! position. Rotation does not affect the footprint.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{BASE_DIAMETER, MIN_SCALE};
use crate::geom::Vec2;
use crate::scene::{GameObject, ObjectId, Transform};

/// Per-axis scale with the [`MIN_SCALE`] floor applied to the magnitude.
#[must_use]
pub fn effective_scale(transform: &Transform) -> Vec2 {
    Vec2::new(transform.scale.x.abs().max(MIN_SCALE), transform.scale.y.abs().max(MIN_SCALE))
}

/// Semi-axes of the object's footprint ellipse in world units.
#[must_use]
pub fn semi_axes(transform: &Transform) -> Vec2 {
    effective_scale(transform) * (BASE_DIAMETER / 2.0)
}

/// Whether `world` lies inside the footprint of `transform`. The boundary counts as inside.
#[must_use]
pub fn footprint_contains(transform: &Transform, world: Vec2) -> bool {
    let axes = semi_axes(transform);
    let dx = (world.x - transform.position.x) / axes.x;
    let dy = (world.y - transform.position.y) / axes.y;
    dx * dx + dy * dy <= 1.0
}

/// Topmost visible object whose footprint contains `world`.
///
/// `objects` is in draw order, so it is searched from the back.
#[must_use]
pub fn object_at(world: Vec2, objects: &[GameObject]) -> Option<ObjectId> {
    objects
        .iter()
        .rev()
        .filter(|obj| obj.visible)
        .find(|obj| footprint_contains(&obj.transform, world))
        .map(GameObject::id)
}
