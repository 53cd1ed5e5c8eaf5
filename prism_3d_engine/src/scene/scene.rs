/// Scene objects and their transforms.
///
/// A SceneObject is a position plus per-axis rotation angles; its model
/// matrix is recomposed on demand as T * Rx * Ry * Rz (applied
/// right-to-left to a column vector, so the object rotates in place and
/// then translates).

use slotmap::SlotMap;
use crate::math::{Mat4, Vec3};

slotmap::new_key_type! {
    /// Generational key identifying a scene object.
    pub struct SceneObjectKey;
}

/// A static mesh placement: world position and per-axis rotations.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pos: Vec3,
    rot_x: f32,
    rot_y: f32,
    rot_z: f32,
}

impl SceneObject {
    /// Place an object at `pos` with no rotation.
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            rot_x: 0.0,
            rot_y: 0.0,
            rot_z: 0.0,
        }
    }

    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Vec3) {
        self.pos = pos;
    }

    /// Set the per-axis rotation angles, in radians.
    pub fn set_rotation(&mut self, rot_x: f32, rot_y: f32, rot_z: f32) {
        self.rot_x = rot_x;
        self.rot_y = rot_y;
        self.rot_z = rot_z;
    }

    /// Model matrix for this placement: T * Rx * Ry * Rz.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
            * Mat4::translation(self.pos)
            * Mat4::rotation_x(self.rot_x)
            * Mat4::rotation_y(self.rot_y)
            * Mat4::rotation_z(self.rot_z)
    }
}

/// Collection of scene objects, keyed generationally.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<SceneObjectKey, SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, returning its key.
    pub fn add_object(&mut self, object: SceneObject) -> SceneObjectKey {
        self.objects.insert(object)
    }

    /// Remove an object. Returns it if the key was live.
    pub fn remove_object(&mut self, key: SceneObjectKey) -> Option<SceneObject> {
        self.objects.remove(key)
    }

    pub fn object(&self, key: SceneObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    pub fn object_mut(&mut self, key: SceneObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Iterate all objects in the scene.
    pub fn iter(&self) -> impl Iterator<Item = (SceneObjectKey, &SceneObject)> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
