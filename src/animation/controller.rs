//! Object animation: sampling a keyframe track into a [`Transform`].

use glam::{Quat, Vec3};

use crate::animation::interpolation;
use crate::animation::keyframe::{Keyframe, Span};
use crate::animation::player::{InterpolationMode, TrackPlayer, sample_spline_vec3};
use crate::scene::transform::Transform;

/// Drives a `Track<Keyframe>` and writes the sampled pose onto a
/// [`Transform`]. The playback contract (play/pause/stop/loop/speed) comes
/// from [`TrackPlayer`].
pub type AnimationController = TrackPlayer<Keyframe>;

impl TrackPlayer<Keyframe> {
    /// Resamples position, rotation and scale at the current time and
    /// writes all three onto `transform`. No-op when the track is missing
    /// or empty.
    pub fn apply_to_transform(&self, transform: &mut Transform) {
        let Some(track) = self.track() else { return };
        let Some(span) = track.span_at(self.time()) else {
            return;
        };

        let keys = track.keys();
        let mode = self.mode();

        transform.set_position(sample_position(keys, span, mode));
        transform.set_rotation(sample_rotation(keys, span, mode));
        transform.set_scale(sample_scale(keys, span, mode));
    }
}

fn sample_position(keys: &[Keyframe], span: Span, mode: InterpolationMode) -> Vec3 {
    let p0 = keys[span.i0].position;
    let p1 = keys[span.i1].position;

    match mode {
        InterpolationMode::Linear => interpolation::lerp_vec3(p0, p1, span.t),
        InterpolationMode::Smooth => {
            interpolation::lerp_vec3(p0, p1, interpolation::smootherstep(span.t))
        }
        InterpolationMode::CatmullRom => sample_spline_vec3(keys, span, |k| k.position),
        InterpolationMode::Bezier => {
            // Synthetic control points at 1/3 and 2/3 of the segment
            // delta; stored rotation/scale contribute no curvature.
            let delta = p1 - p0;
            let c1 = p0 + delta * (1.0 / 3.0);
            let c2 = p0 + delta * (2.0 / 3.0);
            interpolation::cubic_bezier(p0, c1, c2, p1, span.t)
        }
    }
}

fn sample_rotation(keys: &[Keyframe], span: Span, mode: InterpolationMode) -> Quat {
    // Rotation has no true spline path; always slerp, shaping the blend
    // parameter for the smoothed modes.
    let t = match mode {
        InterpolationMode::Smooth | InterpolationMode::CatmullRom => {
            interpolation::smootherstep(span.t)
        }
        InterpolationMode::Linear | InterpolationMode::Bezier => span.t,
    };
    interpolation::slerp(keys[span.i0].rotation, keys[span.i1].rotation, t)
}

fn sample_scale(keys: &[Keyframe], span: Span, mode: InterpolationMode) -> Vec3 {
    let t = if mode == InterpolationMode::Smooth {
        interpolation::smootherstep(span.t)
    } else {
        span.t
    };
    interpolation::lerp_vec3(keys[span.i0].scale, keys[span.i1].scale, t)
}
