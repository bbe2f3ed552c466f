//! Scene graph: hierarchy, transforms and the components nodes carry.
//!
//! - [`SceneNode`]: tree cell with transform, gating flags and a closed
//!   [`NodeKind`]
//! - [`Transform`]: TRS with lazily cached local matrix
//! - [`SceneGraph`]: node arena, component pools, frame traversal
//! - [`Camera`] / [`Light`] / [`Object`]: the components themselves

pub mod camera;
pub mod graph;
pub mod light;
pub mod node;
pub mod object;
pub mod transform;

pub use camera::Camera;
pub use graph::SceneGraph;
pub use light::{Attenuation, Light, LightKind};
pub use node::{NodeKind, SceneNode};
pub use object::{Bobbing, Material, Object};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeKey;
    pub struct ObjectKey;
    pub struct CameraKey;
    pub struct LightKey;
}
