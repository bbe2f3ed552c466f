//! Perspective camera.

use std::borrow::Cow;

use glam::{Mat4, Quat, Vec3};
use uuid::Uuid;

use crate::scene::transform::Transform;

/// A perspective camera: projection parameters plus an embedded
/// [`Transform`] for its pose.
///
/// The projection matrix is cached and refreshed whenever a projection
/// parameter changes; the view matrix is derived from the current
/// position/target/up on demand.
#[derive(Debug, Clone)]
pub struct Camera {
    pub uuid: Uuid,
    pub name: Cow<'static, str>,

    // === Projection ===
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    projection_matrix: Mat4,

    // === Pose ===
    transform: Transform,
    target: Vec3,
    up: Vec3,
}

impl Camera {
    /// 45° perspective camera at `(0, 5, 10)` looking at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::new_perspective(45.0, 16.0 / 9.0, 0.1, 1000.0)
    }

    /// `fov` is the vertical field of view in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut transform = Transform::new();
        transform.set_position(Vec3::new(0.0, 5.0, 10.0));

        let mut camera = Self {
            uuid: Uuid::new_v4(),
            name: Cow::Borrowed("Camera"),
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            projection_matrix: Mat4::IDENTITY,
            transform,
            target: Vec3::ZERO,
            up: Vec3::Y,
        };
        camera.update_projection_matrix();
        camera
    }

    fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    // ========================================================================
    // Pose
    // ========================================================================

    pub fn set_position(&mut self, position: Vec3) {
        self.transform.set_position(position);
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    /// Orients the camera toward `target`, keeping the current up vector.
    /// No-op when the target coincides with the camera position.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;

        let Some(direction) = (target - self.position()).try_normalize() else {
            return;
        };
        self.transform
            .set_rotation(Quat::from_rotation_arc(Vec3::NEG_Z, direction));
    }

    pub fn look_at_up(&mut self, target: Vec3, up: Vec3) {
        self.up = up;
        self.look_at(target);
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[must_use]
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    // ========================================================================
    // Matrices
    // ========================================================================

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, self.up)
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix()
    }

    // ========================================================================
    // Projection parameters
    // ========================================================================

    /// `fov` in degrees.
    pub fn set_perspective(&mut self, fov: f32, aspect: f32, near: f32, far: f32) {
        self.fov = fov.to_radians();
        self.aspect = aspect;
        self.near = near;
        self.far = far;
        self.update_projection_matrix();
    }

    pub fn set_fov(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.to_radians();
        self.update_projection_matrix();
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    pub fn set_near(&mut self, near: f32) {
        self.near = near;
        self.update_projection_matrix();
    }

    pub fn set_far(&mut self, far: f32) {
        self.far = far;
        self.update_projection_matrix();
    }

    /// Field of view in radians.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[must_use]
    pub fn near(&self) -> f32 {
        self.near
    }

    #[must_use]
    pub fn far(&self) -> f32 {
        self.far
    }

    // ========================================================================
    // Directions
    // ========================================================================

    /// Normalized direction toward the look target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize_or(Vec3::NEG_Z)
    }

    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
