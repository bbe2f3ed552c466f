//! TRS transform with a lazily cached local matrix.

use std::cell::Cell;

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::scene::NodeKey;

/// Position, rotation and scale of a node, plus a non-owning reference to
/// the parent node whose transform this one composes under.
///
/// The local matrix (`Translate · Rotate · Scale`) is recomputed lazily
/// when a setter has marked it dirty. World matrices are never cached:
/// [`SceneGraph::world_matrix`] walks the parent chain on every call, so a
/// parent that moves every frame is always picked up.
///
/// The parent graph must be acyclic; there is no cycle detection.
///
/// [`SceneGraph::world_matrix`]: crate::scene::SceneGraph::world_matrix
#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    parent: Option<NodeKey>,

    local_cache: Cell<Mat4>,
    dirty: Cell<bool>,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self::from_trs(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE)
    }

    #[must_use]
    pub fn from_trs(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
            parent: None,
            local_cache: Cell::new(Mat4::IDENTITY),
            dirty: Cell::new(true),
        }
    }

    // ========================================================================
    // Position
    // ========================================================================

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.dirty.set(true);
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
        self.dirty.set(true);
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    /// `rotation` must be a unit quaternion; it is stored as-is.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.dirty.set(true);
    }

    /// Euler-angle convenience (XYZ order, radians).
    pub fn set_rotation_euler(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
        self.dirty.set(true);
    }

    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Prepends `delta` (`new = delta * current`), so incremental rotation
    /// accumulates without re-deriving from Euler angles.
    pub fn rotate(&mut self, delta: Quat) {
        self.rotation = delta * self.rotation;
        self.dirty.set(true);
    }

    /// Prepends a rotation of `angle` radians about `axis`.
    ///
    /// The axis is renormalized first. A zero-length axis violates the
    /// precondition: it asserts in debug builds and leaves the rotation
    /// untouched in release builds.
    pub fn rotate_about(&mut self, angle: f32, axis: Vec3) {
        debug_assert!(
            axis.length_squared() > f32::EPSILON,
            "rotation axis must be non-zero"
        );
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.rotation = Quat::from_axis_angle(axis, angle) * self.rotation;
        self.dirty.set(true);
    }

    /// Orients the transform so `-Z` points at `target`, keeping `up`
    /// roughly upward. `target` and `up` are in the parent's space. No-op
    /// when the look direction degenerates (target at the position, or
    /// collinear with `up`).
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            return;
        };
        if forward.cross(up).length_squared() < 1e-4 {
            return;
        }

        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward).normalize();

        self.rotation = Quat::from_mat3(&glam::Mat3::from_cols(right, new_up, -forward));
        self.dirty.set(true);
    }

    // ========================================================================
    // Scale
    // ========================================================================

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.dirty.set(true);
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.set_scale(Vec3::splat(scale));
    }

    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Sets the observing parent reference. Prefer
    /// [`SceneGraph::attach`](crate::scene::SceneGraph::attach), which
    /// keeps node and transform parents in sync.
    pub fn set_parent(&mut self, parent: Option<NodeKey>) {
        self.parent = parent;
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    // ========================================================================
    // Matrices & directions
    // ========================================================================

    /// `Translate(position) · Rotate(rotation) · Scale(scale)`, recomputed
    /// only when a setter has run since the last call.
    #[must_use]
    pub fn local_matrix(&self) -> Mat4 {
        if self.dirty.get() {
            self.local_cache.set(Mat4::from_scale_rotation_translation(
                self.scale,
                self.rotation,
                self.position,
            ));
            self.dirty.set(false);
        }
        self.local_cache.get()
    }

    /// Local-space forward (`rotation · -Z`).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
