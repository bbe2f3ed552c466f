//! Camera paths: sampling position/target keyframes into a [`Camera`].

use glam::Vec3;

use crate::animation::interpolation;
use crate::animation::keyframe::{CameraKeyframe, Span};
use crate::animation::player::{InterpolationMode, TrackPlayer, sample_spline_vec3};
use crate::scene::camera::Camera;

/// Drives a `Track<CameraKeyframe>` and steers a [`Camera`] along it. The
/// playback contract is shared with [`AnimationController`] through
/// [`TrackPlayer`].
///
/// [`AnimationController`]: crate::animation::AnimationController
pub type CameraPath = TrackPlayer<CameraKeyframe>;

impl TrackPlayer<CameraKeyframe> {
    /// Moves `camera` to the interpolated position and orients it toward
    /// the interpolated target. No-op when the track is missing or empty.
    pub fn apply_to_camera(&self, camera: &mut Camera) {
        let Some(track) = self.track() else { return };
        let Some(span) = track.span_at(self.time()) else {
            return;
        };

        let keys = track.keys();
        let position = sample_channel(keys, span, self.mode(), |k| k.position);
        let target = sample_channel(keys, span, self.mode(), |k| k.target);

        camera.set_position(position);
        camera.look_at(target);
    }
}

fn sample_channel(
    keys: &[CameraKeyframe],
    span: Span,
    mode: InterpolationMode,
    get: impl Fn(&CameraKeyframe) -> Vec3,
) -> Vec3 {
    match mode {
        InterpolationMode::CatmullRom => sample_spline_vec3(keys, span, get),
        InterpolationMode::Smooth => interpolation::lerp_vec3(
            get(&keys[span.i0]),
            get(&keys[span.i1]),
            interpolation::smootherstep(span.t),
        ),
        // Camera channels have no synthetic-control Bezier path.
        InterpolationMode::Linear | InterpolationMode::Bezier => {
            interpolation::lerp_vec3(get(&keys[span.i0]), get(&keys[span.i1]), span.t)
        }
    }
}
