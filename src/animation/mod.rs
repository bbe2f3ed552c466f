//! Keyframe animation: interpolation primitives, time-sampled tracks and
//! the shared playback state machine.

pub mod camera_path;
pub mod controller;
pub mod interpolation;
pub mod keyframe;
pub mod player;

pub use camera_path::CameraPath;
pub use controller::AnimationController;
pub use keyframe::{CameraKeyframe, Keyframe, Span, Track, TrackKey};
pub use player::{InterpolationMode, TrackPlayer};
