//! Scene model: transforms, game objects, and the ordered object store.
//!
//! Objects are kept in insertion order, which is also draw order; hit-testing
//! walks the same list backwards so the most recently added object wins.
//! The store enforces single selection: [`Scene::select_object`] clears the
//! previous object's flag in the same call, and removing the selected object
//! clears the selection.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use uuid::Uuid;

use crate::binding::{BindingError, PathError, PropertyPath};
use crate::geom::Vec2;
use crate::hit;

/// Handle identifying a game object for its whole lifetime.
pub type ObjectId = Uuid;

/// Position, rotation, and scale of an object.
///
/// Any scale is representable here. Code that derives geometry from scale
/// floors each component at [`crate::consts::MIN_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Center of the object in world coordinates.
    pub position: Vec2,
    /// Clockwise rotation in degrees. Unbounded.
    pub rotation: f64,
    /// Per-axis scale factor.
    pub scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: Vec2::ZERO, rotation: 0.0, scale: Vec2::new(1.0, 1.0) }
    }
}

/// A named object in the scene.
#[derive(Debug, Clone)]
pub struct GameObject {
    id: ObjectId,
    /// Display name shown in the hierarchy and under the object.
    pub name: String,
    /// Spatial state of the object.
    pub transform: Transform,
    selected: bool,
    /// Hidden objects are neither drawn nor hit-tested.
    pub visible: bool,
}

impl GameObject {
    /// New visible, unselected object at the origin with unit scale.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transform: Transform::default(),
            selected: false,
            visible: true,
        }
    }

    /// Builder-style position setter.
    #[must_use]
    pub fn at(mut self, position: Vec2) -> Self {
        self.transform.position = position;
        self
    }

    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Whether this object is the scene's current selection.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Read a transform field by dotted path, e.g. `"transform.scale.x"`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Unknown`] if the path does not name a bindable field.
    pub fn get_path(&self, path: &str) -> Result<f64, PathError> {
        Ok(path.parse::<PropertyPath>()?.read(&self.transform))
    }

    /// Write a transform field by dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Unknown`] if the path does not name a bindable field.
    pub fn set_path(&mut self, path: &str, value: f64) -> Result<(), PathError> {
        path.parse::<PropertyPath>()?.write(&mut self.transform, value);
        Ok(())
    }
}

/// In-memory store of scene objects plus the current selection.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<GameObject>,
    selected: Option<ObjectId>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object on top of the draw order and return its id.
    ///
    /// The incoming selection flag is ignored; use [`Scene::select_object`].
    pub fn add_object(&mut self, mut obj: GameObject) -> ObjectId {
        obj.selected = false;
        let id = obj.id;
        self.objects.push(obj);
        id
    }

    /// Remove an object by id, returning it if it was present. Removing the
    /// selected object clears the selection.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<GameObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        let mut obj = self.objects.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        obj.selected = false;
        Some(obj)
    }

    /// Select `id`, or clear the selection with `None`.
    ///
    /// Unknown ids clear the selection rather than leaving a dangling handle.
    pub fn select_object(&mut self, id: Option<ObjectId>) {
        let target = id.filter(|id| self.objects.iter().any(|o| o.id == *id));
        for obj in &mut self.objects {
            obj.selected = Some(obj.id) == target;
        }
        self.selected = target;
    }

    /// Id of the selected object, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// The selected object, if any.
    #[must_use]
    pub fn selected_object(&self) -> Option<&GameObject> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Mutable access to the selected object, if any.
    pub fn selected_object_mut(&mut self) -> Option<&mut GameObject> {
        let id = self.selected?;
        self.get_mut(id)
    }

    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Objects in draw (insertion) order.
    #[must_use]
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// The first object in draw order.
    #[must_use]
    pub fn first(&self) -> Option<&GameObject> {
        self.objects.first()
    }

    /// Topmost visible object whose footprint contains `world`.
    #[must_use]
    pub fn object_at(&self, world: Vec2) -> Option<ObjectId> {
        hit::object_at(world, &self.objects)
    }

    /// Current value of `path` on the selected object, or `0.0` when nothing is selected.
    #[must_use]
    pub fn read_property(&self, path: PropertyPath) -> f64 {
        self.selected_object().map_or(0.0, |obj| path.read(&obj.transform))
    }

    /// Write `value` to `path` on the selected object.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NoSelection`] when nothing is selected.
    pub fn write_property(&mut self, path: PropertyPath, value: f64) -> Result<(), BindingError> {
        let obj = self.selected_object_mut().ok_or(BindingError::NoSelection { path })?;
        path.write(&mut obj.transform, value);
        Ok(())
    }

    /// Number of objects currently in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
