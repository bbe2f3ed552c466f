//! Mirage — a small real-time 3D scene core.
//!
//! The crate covers the pieces of a scene demo that carry real state and
//! algorithms: a hierarchical [`Transform`] node with cached matrix
//! composition, a keyframe animation engine with several interpolation
//! schemes, a camera path system sharing the same playback machinery, and
//! a [`SceneGraph`] that drives update and render traversal. GPU
//! submission, windowing and asset import are left to the embedding
//! application.

pub mod animation;
pub mod errors;
pub mod scene;
pub mod utils;

pub use animation::{
    AnimationController, CameraKeyframe, CameraPath, InterpolationMode, Keyframe, Span, Track,
    TrackKey, TrackPlayer,
};
pub use errors::SceneError;
pub use scene::{
    Camera, Light, LightKind, Material, NodeKind, Object, SceneGraph, SceneNode, Transform,
};
pub use utils::Timer;
