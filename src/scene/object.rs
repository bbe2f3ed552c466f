//! Renderable-object data: material, animation and procedural motion.

use glam::Vec3;

use crate::animation::AnimationController;

/// Phong material block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
            shininess: 32.0,
        }
    }
}

/// Procedural up/down bob layered on top of the animated pose.
#[derive(Debug, Clone)]
pub struct Bobbing {
    pub amplitude: f32,
    pub speed: f32,
    phase: f32,
}

impl Bobbing {
    #[must_use]
    pub fn new(amplitude: f32, speed: f32) -> Self {
        Self {
            amplitude,
            speed,
            phase: 0.0,
        }
    }

    /// Advances the oscillator and returns this frame's vertical offset.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.phase += dt * self.speed;
        self.phase.sin() * self.amplitude
    }
}

/// What a renderer needs to draw a node: its material, plus the optional
/// animation state the scene graph steps each frame. Mesh and shader
/// handles belong to the renderer, not here.
#[derive(Debug, Clone, Default)]
pub struct Object {
    pub name: String,
    pub material: Material,
    pub controller: Option<AnimationController>,
    pub bobbing: Option<Bobbing>,
}

impl Object {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_controller(mut self, controller: AnimationController) -> Self {
        self.controller = Some(controller);
        self
    }

    #[must_use]
    pub fn with_bobbing(mut self, amplitude: f32, speed: f32) -> Self {
        self.bobbing = Some(Bobbing::new(amplitude, speed));
        self
    }
}
