//! Bindable transform fields.
//!
//! Inspector controls edit exactly five numeric leaves of an object's
//! transform. [`PropertyPath`] names them as a closed set with typed
//! [`read`](PropertyPath::read) and [`write`](PropertyPath::write), and keeps
//! the dotted spelling (`"transform.position.x"`) for display and for callers
//! that address fields by string.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{MIN_SCALE, POSITION_DRAG_STEP, ROTATION_DRAG_STEP, SCALE_DRAG_STEP};
use crate::scene::{ObjectId, Scene, Transform};

/// One numeric field of a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyPath {
    PositionX,
    PositionY,
    Rotation,
    ScaleX,
    ScaleY,
}

impl PropertyPath {
    /// Every bindable path, in inspector order.
    pub const ALL: [Self; 5] = [Self::PositionX, Self::PositionY, Self::Rotation, Self::ScaleX, Self::ScaleY];

    /// Dotted spelling of the path.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PositionX => "transform.position.x",
            Self::PositionY => "transform.position.y",
            Self::Rotation => "transform.rotation",
            Self::ScaleX => "transform.scale.x",
            Self::ScaleY => "transform.scale.y",
        }
    }

    /// Whether the path addresses a scale component.
    #[must_use]
    pub fn is_scale(self) -> bool {
        matches!(self, Self::ScaleX | Self::ScaleY)
    }

    /// Axis letter shown on the inspector's drag label.
    #[must_use]
    pub fn axis_label(self) -> &'static str {
        match self {
            Self::PositionX | Self::ScaleX => "X",
            Self::PositionY | Self::ScaleY => "Y",
            Self::Rotation => "Z",
        }
    }

    /// Value change per pixel of horizontal drag.
    #[must_use]
    pub fn drag_step(self) -> f64 {
        match self {
            Self::PositionX | Self::PositionY => POSITION_DRAG_STEP,
            Self::Rotation => ROTATION_DRAG_STEP,
            Self::ScaleX | Self::ScaleY => SCALE_DRAG_STEP,
        }
    }

    /// Apply the per-path floor: scale values never drop below [`MIN_SCALE`].
    #[must_use]
    pub fn constrain(self, value: f64) -> f64 {
        if self.is_scale() { value.max(MIN_SCALE) } else { value }
    }

    #[must_use]
    pub fn read(self, transform: &Transform) -> f64 {
        match self {
            Self::PositionX => transform.position.x,
            Self::PositionY => transform.position.y,
            Self::Rotation => transform.rotation,
            Self::ScaleX => transform.scale.x,
            Self::ScaleY => transform.scale.y,
        }
    }

    pub fn write(self, transform: &mut Transform, value: f64) {
        match self {
            Self::PositionX => transform.position.x = value,
            Self::PositionY => transform.position.y = value,
            Self::Rotation => transform.rotation = value,
            Self::ScaleX => transform.scale.x = value,
            Self::ScaleY => transform.scale.y = value,
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PathError::Unknown(s.to_string()))
    }
}

/// A dotted path that does not name a bindable field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("unknown property path `{0}`")]
    Unknown(String),
}

/// A write through a binding that could not find its target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("cannot set {path}: no object selected")]
    NoSelection { path: PropertyPath },
    #[error("cannot set {path}: bound to {bound} but {selected} is selected")]
    Stale { path: PropertyPath, bound: ObjectId, selected: ObjectId },
}

/// Value of `path` on `target` while it is still the selected object, else `0.0`.
#[must_use]
pub fn read_bound(scene: &Scene, target: ObjectId, path: PropertyPath) -> f64 {
    if scene.selected() == Some(target) { scene.read_property(path) } else { 0.0 }
}

/// Write `value` to `path` on `target`, but only while `target` is still the
/// selected object. Failures are logged and dropped.
///
/// Returns whether the write happened.
pub fn write_bound(scene: &mut Scene, target: ObjectId, path: PropertyPath, value: f64) -> bool {
    let result = match scene.selected() {
        Some(selected) if selected != target => Err(BindingError::Stale { path, bound: target, selected }),
        _ => scene.write_property(path, value),
    };
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "property write dropped");
            false
        }
    }
}
