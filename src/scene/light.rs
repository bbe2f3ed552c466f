//! Phong-style light data.
//!
//! Lights are plain data shared read-only across the objects they
//! illuminate; how a renderer binds them is not this crate's concern.

use glam::Vec3;
use uuid::Uuid;

/// Distance falloff: `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// Coefficients giving roughly `range` units of useful falloff.
    #[must_use]
    pub fn from_range(range: f32) -> Self {
        Self {
            constant: 1.0,
            linear: 4.5 / range,
            quadratic: 75.0 / (range * range),
        }
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

#[derive(Debug, Clone)]
pub enum LightKind {
    /// Infinitely distant light (sun); direction only.
    Directional { direction: Vec3 },
    Point {
        position: Vec3,
        attenuation: Attenuation,
    },
    Spot {
        position: Vec3,
        direction: Vec3,
        /// Full-intensity cone half-angle, radians.
        inner_cutoff: f32,
        /// Fade-out cone half-angle, radians.
        outer_cutoff: f32,
        attenuation: Attenuation,
    },
}

/// A light source with Phong color components.
///
/// Components are HDR: values above 1.0 are allowed.
#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub intensity: f32,
    pub enabled: bool,
    pub kind: LightKind,
}

impl Light {
    fn new(kind: LightKind) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
            intensity: 1.0,
            enabled: true,
            kind,
        }
    }

    #[must_use]
    pub fn new_directional(direction: Vec3) -> Self {
        Self::new(LightKind::Directional {
            direction: direction.normalize_or(Vec3::NEG_Y),
        })
    }

    #[must_use]
    pub fn new_point(position: Vec3, range: f32) -> Self {
        Self::new(LightKind::Point {
            position,
            attenuation: Attenuation::from_range(range),
        })
    }

    /// Cutoff angles in radians; `inner < outer` gives a soft edge.
    #[must_use]
    pub fn new_spot(position: Vec3, direction: Vec3, inner_cutoff: f32, outer_cutoff: f32) -> Self {
        Self::new(LightKind::Spot {
            position,
            direction: direction.normalize_or(Vec3::NEG_Y),
            inner_cutoff,
            outer_cutoff,
            attenuation: Attenuation::default(),
        })
    }

    /// Writes `color` to all three Phong components, with the customary
    /// dimmed ambient term.
    pub fn set_color(&mut self, color: Vec3) {
        self.ambient = color * 0.1;
        self.diffuse = color;
        self.specular = color;
    }
}
