//! Animation System Tests
//!
//! Tests for:
//! - Track sorted insertion, duration and span lookup (clamp, wrap,
//!   degenerate intervals)
//! - TrackPlayer playback state machine (play/pause/stop/reset, loop wrap,
//!   speed scaling, stop-at-end snap-back)
//! - AnimationController channel interpolation across all four modes

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use glam::{Quat, Vec3};

use mirage::animation::interpolation;
use mirage::animation::keyframe::{Keyframe, Track};
use mirage::animation::player::InterpolationMode;
use mirage::animation::AnimationController;
use mirage::scene::Transform;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

/// Keys at t = {0, 5, 10} moving along +X: (0,0,0) → (5,0,0) → (10,0,0).
fn straight_track() -> Arc<Track<Keyframe>> {
    let mut track = Track::new().with_name("straight");
    track.push(Keyframe::at(0.0, Vec3::ZERO));
    track.push(Keyframe::at(5.0, Vec3::new(5.0, 0.0, 0.0)));
    track.push(Keyframe::at(10.0, Vec3::new(10.0, 0.0, 0.0)));
    Arc::new(track)
}

fn controller_with(track: Arc<Track<Keyframe>>, mode: InterpolationMode) -> AnimationController {
    let mut controller = AnimationController::new();
    controller.set_track(track);
    controller.set_mode(mode);
    controller
}

// ============================================================================
// Track: insertion & duration
// ============================================================================

#[test]
fn track_push_keeps_keys_sorted() {
    let mut track: Track<Keyframe> = Track::new();
    track.push(Keyframe::at(2.0, Vec3::X));
    track.push(Keyframe::at(0.5, Vec3::Y));
    track.push(Keyframe::at(1.0, Vec3::Z));

    let times: Vec<f32> = track.keys().iter().map(|k| k.time).collect();
    assert_eq!(times, vec![0.5, 1.0, 2.0]);
}

#[test]
fn track_duration_is_last_key_time() {
    let track = straight_track();
    assert!(approx(track.duration(), 10.0));
}

#[test]
fn empty_track_duration_zero() {
    let track: Track<Keyframe> = Track::new();
    assert!(approx(track.duration(), 0.0));
    assert!(track.is_empty());
}

// ============================================================================
// Track: span lookup
// ============================================================================

#[test]
fn span_empty_track_is_none() {
    let track: Track<Keyframe> = Track::new();
    assert!(track.span_at(1.0).is_none());
}

#[test]
fn span_clamps_before_first_key() {
    let track = straight_track();
    for time in [-100.0, -0.1, 0.0] {
        let span = track.span_at(time).unwrap();
        assert_eq!((span.i0, span.i1), (0, 0), "time={time}");
        assert!(approx(span.t, 0.0));
    }
}

#[test]
fn span_clamps_at_and_after_last_key() {
    let track = straight_track();
    for time in [10.0, 11.0, 1e6] {
        let span = track.span_at(time).unwrap();
        assert_eq!((span.i0, span.i1), (2, 2), "time={time}");
        assert!(approx(span.t, 0.0));
    }
}

#[test]
fn span_brackets_interior_time() {
    let track = straight_track();
    let span = track.span_at(7.5).unwrap();
    assert_eq!((span.i0, span.i1), (1, 2));
    assert!(approx(span.t, 0.5), "got t={}", span.t);
}

#[test]
fn span_loop_wraps_past_duration() {
    let mut track = Track::new().with_looping(true);
    track.push(Keyframe::at(0.0, Vec3::ZERO));
    track.push(Keyframe::at(4.0, Vec3::X));

    // For a looping track of duration D, span_at(t) == span_at(t - D)
    for t in [5.0, 6.5, 7.9] {
        let wrapped = track.span_at(t).unwrap();
        let direct = track.span_at(t - 4.0).unwrap();
        assert_eq!((wrapped.i0, wrapped.i1), (direct.i0, direct.i1), "t={t}");
        assert!(approx(wrapped.t, direct.t), "t={t}");
    }
}

#[test]
fn span_single_key_resolves_everywhere() {
    let mut track = Track::new();
    track.push(Keyframe::at(3.0, Vec3::X));

    for time in [-1.0, 0.0, 3.0, 100.0] {
        let span = track.span_at(time).unwrap();
        assert_eq!((span.i0, span.i1), (0, 0), "time={time}");
        assert!(approx(span.t, 0.0));
    }
}

#[test]
fn span_duplicate_timestamps_never_produce_nan() {
    // Two keys share t=1.0: the zero-length interval must not leak a
    // division by zero into the blend parameter for any query time.
    let mut track = Track::new();
    track.push(Keyframe::at(0.0, Vec3::ZERO));
    track.push(Keyframe::at(1.0, Vec3::X));
    track.push(Keyframe::at(1.0, Vec3::Y));
    track.push(Keyframe::at(2.0, Vec3::Z));

    for i in 0..=40 {
        let time = i as f32 * 0.05;
        let span = track.span_at(time).unwrap();
        assert!(span.t.is_finite(), "time={time}: t={}", span.t);
        assert!(
            (0.0..=1.0).contains(&span.t),
            "time={time}: t={} out of range",
            span.t
        );
    }
}

// ============================================================================
// TrackPlayer: state machine
// ============================================================================

#[test]
fn player_update_requires_playing() {
    let mut controller = controller_with(straight_track(), InterpolationMode::Linear);

    controller.update(1.0);
    assert!(approx(controller.time(), 0.0), "stopped player advanced");

    controller.play();
    controller.update(1.0);
    assert!(approx(controller.time(), 1.0));
}

#[test]
fn player_pause_freezes_time() {
    let mut controller = controller_with(straight_track(), InterpolationMode::Linear);
    controller.play();
    controller.update(2.0);
    controller.pause();
    controller.update(3.0);

    assert!(approx(controller.time(), 2.0));
    assert!(!controller.is_playing());
    assert!(controller.is_paused());

    // play() resumes from the frozen time
    controller.play();
    controller.update(1.0);
    assert!(approx(controller.time(), 3.0));
}

#[test]
fn player_stop_resets_time() {
    let mut controller = controller_with(straight_track(), InterpolationMode::Linear);
    controller.play();
    controller.update(4.0);
    controller.stop();

    assert!(approx(controller.time(), 0.0));
    assert!(!controller.is_playing());
}

#[test]
fn player_reset_preserves_playing_flag() {
    let mut controller = controller_with(straight_track(), InterpolationMode::Linear);
    controller.play();
    controller.update(4.0);
    controller.reset();

    assert!(approx(controller.time(), 0.0));
    assert!(controller.is_playing(), "reset must not stop playback");
}

#[test]
fn player_speed_scales_advance() {
    let mut controller = controller_with(straight_track(), InterpolationMode::Linear);
    controller.set_speed(2.0);
    controller.play();
    controller.update(1.5);
    assert!(approx(controller.time(), 3.0));
}

#[test]
fn player_no_track_is_noop() {
    let mut controller = AnimationController::new();
    controller.play();
    controller.update(1.0);
    assert!(approx(controller.time(), 0.0));
    assert!(approx(controller.duration(), 0.0));
}

#[test]
fn player_empty_track_is_noop() {
    let mut controller = AnimationController::new();
    controller.set_track(Arc::new(Track::new()));
    controller.play();
    controller.update(1.0);
    assert!(approx(controller.time(), 0.0));
}

#[test]
fn player_loop_wraps() {
    let mut track = Track::new().with_looping(true);
    track.push(Keyframe::at(0.0, Vec3::ZERO));
    track.push(Keyframe::at(2.0, Vec3::X));

    let mut controller = controller_with(Arc::new(track), InterpolationMode::Linear);
    controller.play();
    controller.update(2.5);

    assert!(approx(controller.time(), 0.5), "got {}", controller.time());
    assert!(controller.is_playing(), "looping playback must continue");
}

#[test]
fn player_non_loop_stops_and_snaps_back() {
    // Documented edge behavior: finishing a non-looping track clamps to
    // the duration, stops, and the stop rewinds the clock to zero.
    let mut controller = controller_with(straight_track(), InterpolationMode::Linear);
    controller.play();
    controller.update(15.0);

    assert!(!controller.is_playing());
    assert!(approx(controller.time(), 0.0), "got {}", controller.time());

    // The next sample therefore yields the start pose.
    let mut transform = Transform::new();
    controller.apply_to_transform(&mut transform);
    assert!(vec3_approx(transform.position(), Vec3::ZERO));
}

#[test]
fn player_set_track_resets_time() {
    let mut controller = controller_with(straight_track(), InterpolationMode::Linear);
    controller.play();
    controller.update(4.0);
    assert!(approx(controller.time(), 4.0));

    controller.set_track(straight_track());
    assert!(approx(controller.time(), 0.0));
    assert!(controller.is_playing(), "swap keeps the playing flag");
}

// ============================================================================
// AnimationController: channel interpolation
// ============================================================================

#[test]
fn linear_position_midpoint_scenario() {
    // Keys at t={0,5,10}, positions along +X, LINEAR, query t=2.5
    let mut controller = controller_with(straight_track(), InterpolationMode::Linear);
    controller.set_time(2.5);

    let mut transform = Transform::new();
    controller.apply_to_transform(&mut transform);
    assert!(
        vec3_approx(transform.position(), Vec3::new(2.5, 0.0, 0.0)),
        "got {:?}",
        transform.position()
    );
}

#[test]
fn empty_track_leaves_transform_unchanged() {
    let mut controller = AnimationController::new();
    controller.set_track(Arc::new(Track::new()));

    let mut transform = Transform::new();
    transform.set_position(Vec3::new(1.0, 2.0, 3.0));
    controller.apply_to_transform(&mut transform);

    assert!(vec3_approx(transform.position(), Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn smooth_position_eases_in() {
    let mut controller = controller_with(straight_track(), InterpolationMode::Smooth);
    controller.set_time(1.25); // quarter of the first segment

    let mut transform = Transform::new();
    controller.apply_to_transform(&mut transform);

    let expected = 5.0 * interpolation::smootherstep(0.25);
    assert!(approx(transform.position().x, expected));
    // Easing in: below the linear value at the quarter point
    assert!(transform.position().x < 1.25);
}

#[test]
fn smooth_midpoint_matches_linear() {
    // smootherstep(0.5) == 0.5, so the segment midpoint is mode-invariant
    let mut smooth = controller_with(straight_track(), InterpolationMode::Smooth);
    smooth.set_time(2.5);
    let mut linear = controller_with(straight_track(), InterpolationMode::Linear);
    linear.set_time(2.5);

    let mut ts = Transform::new();
    let mut tl = Transform::new();
    smooth.apply_to_transform(&mut ts);
    linear.apply_to_transform(&mut tl);
    assert!(vec3_approx(ts.position(), tl.position()));
}

fn spline_track() -> Arc<Track<Keyframe>> {
    let mut track = Track::new();
    track.push(Keyframe::at(0.0, Vec3::new(0.0, 0.0, 0.0)));
    track.push(Keyframe::at(1.0, Vec3::new(2.0, 1.0, 0.0)));
    track.push(Keyframe::at(2.0, Vec3::new(4.0, -1.0, 1.0)));
    track.push(Keyframe::at(3.0, Vec3::new(6.0, 0.0, 2.0)));
    track.push(Keyframe::at(4.0, Vec3::new(8.0, 2.0, 0.0)));
    Arc::new(track)
}

#[test]
fn catmull_rom_passes_through_keys() {
    // C1-continuous spline still interpolates: at every key time the
    // sampled position equals the key position exactly
    let track = spline_track();
    let mut controller = controller_with(track.clone(), InterpolationMode::CatmullRom);

    for key in track.keys() {
        controller.set_time(key.time);
        let mut transform = Transform::new();
        controller.apply_to_transform(&mut transform);
        assert!(
            vec3_approx(transform.position(), key.position),
            "t={}: got {:?}, want {:?}",
            key.time,
            transform.position(),
            key.position
        );
    }
}

#[test]
fn catmull_rom_few_keys_falls_back_to_smoothed_lerp() {
    // Fewer than four keys in the whole track: spline degrades to a
    // smootherstep-shaped lerp
    let mut controller = controller_with(straight_track(), InterpolationMode::CatmullRom);
    controller.set_time(1.25);

    let mut transform = Transform::new();
    controller.apply_to_transform(&mut transform);

    let expected = 5.0 * interpolation::smootherstep(0.25);
    assert!(approx(transform.position().x, expected));
}

#[test]
fn bezier_synthetic_controls_follow_segment() {
    // Control points at 1/3 and 2/3 of the delta collapse the cubic to
    // the segment itself, and the curve passes exactly through both ends
    let mut controller = controller_with(straight_track(), InterpolationMode::Bezier);

    controller.set_time(0.0);
    let mut transform = Transform::new();
    controller.apply_to_transform(&mut transform);
    assert!(vec3_approx(transform.position(), Vec3::ZERO));

    controller.set_time(2.5);
    controller.apply_to_transform(&mut transform);
    assert!(vec3_approx(transform.position(), Vec3::new(2.5, 0.0, 0.0)));

    controller.set_time(10.0);
    controller.apply_to_transform(&mut transform);
    assert!(vec3_approx(transform.position(), Vec3::new(10.0, 0.0, 0.0)));
}

fn rotating_track() -> Arc<Track<Keyframe>> {
    let mut track = Track::new();
    track.push(Keyframe::at(0.0, Vec3::ZERO));
    track.push(Keyframe::at(2.0, Vec3::X).with_rotation(Quat::from_rotation_y(PI)));
    Arc::new(track)
}

#[test]
fn rotation_is_slerped() {
    let mut controller = controller_with(rotating_track(), InterpolationMode::Linear);
    controller.set_time(1.0);

    let mut transform = Transform::new();
    controller.apply_to_transform(&mut transform);

    let expected = Quat::IDENTITY.slerp(Quat::from_rotation_y(PI), 0.5);
    let angle = transform.rotation().angle_between(expected);
    assert!(angle < 1e-4, "slerp mismatch: angle={angle}");
}

#[test]
fn rotation_blend_smoothed_for_spline_modes() {
    // CATMULL_ROM has no quaternion spline; it smootherstep-shapes the
    // slerp parameter instead
    let mut controller = controller_with(rotating_track(), InterpolationMode::CatmullRom);
    controller.set_time(0.5); // quarter of the segment

    let mut transform = Transform::new();
    controller.apply_to_transform(&mut transform);

    let t = interpolation::smootherstep(0.25);
    let expected = Quat::IDENTITY.slerp(Quat::from_rotation_y(PI), t);
    let angle = transform.rotation().angle_between(expected);
    assert!(angle < 1e-4, "angle={angle}");
}

#[test]
fn rotation_bezier_uses_raw_parameter() {
    let mut spline = controller_with(rotating_track(), InterpolationMode::Bezier);
    let mut linear = controller_with(rotating_track(), InterpolationMode::Linear);
    spline.set_time(0.5);
    linear.set_time(0.5);

    let mut tb = Transform::new();
    let mut tl = Transform::new();
    spline.apply_to_transform(&mut tb);
    linear.apply_to_transform(&mut tl);

    let angle = tb.rotation().angle_between(tl.rotation());
    assert!(angle < 1e-5, "Bezier rotation must match linear, angle={angle}");
}

#[test]
fn scale_smoothed_only_in_smooth_mode() {
    let mut track = Track::new();
    track.push(Keyframe::at(0.0, Vec3::ZERO).with_scale(Vec3::ONE));
    track.push(Keyframe::at(2.0, Vec3::X).with_scale(Vec3::splat(3.0)));
    let track = Arc::new(track);

    let quarter = 0.5;

    let mut smooth = controller_with(track.clone(), InterpolationMode::Smooth);
    smooth.set_time(quarter);
    let mut ts = Transform::new();
    smooth.apply_to_transform(&mut ts);
    let expected = 1.0 + 2.0 * interpolation::smootherstep(0.25);
    assert!(approx(ts.scale().x, expected));

    // Catmull-Rom leaves the scale parameter raw
    let mut spline = controller_with(track, InterpolationMode::CatmullRom);
    spline.set_time(quarter);
    let mut tc = Transform::new();
    spline.apply_to_transform(&mut tc);
    assert!(approx(tc.scale().x, 1.0 + 2.0 * 0.25));
}

#[test]
fn looping_playback_samples_wrapped_pose() {
    let mut track = Track::new().with_looping(true);
    track.push(Keyframe::at(0.0, Vec3::ZERO));
    track.push(Keyframe::at(4.0, Vec3::new(4.0, 0.0, 0.0)));

    let mut controller = controller_with(Arc::new(track), InterpolationMode::Linear);
    controller.play();
    controller.update(5.0); // wraps to t=1

    let mut transform = Transform::new();
    controller.apply_to_transform(&mut transform);
    assert!(vec3_approx(transform.position(), Vec3::new(1.0, 0.0, 0.0)));
}

// ============================================================================
// Rotation slerp quarter turn (interpolation sanity through the stack)
// ============================================================================

#[test]
fn quarter_turn_track() {
    let mut track = Track::new();
    track.push(Keyframe::at(0.0, Vec3::ZERO));
    track.push(Keyframe::at(1.0, Vec3::ZERO).with_rotation(Quat::from_rotation_y(FRAC_PI_2)));

    let mut controller = controller_with(Arc::new(track), InterpolationMode::Linear);
    controller.set_time(0.5);

    let mut transform = Transform::new();
    controller.apply_to_transform(&mut transform);

    // Halfway to a quarter turn: 45 degrees about Y
    let expected = Quat::from_rotation_y(FRAC_PI_2 * 0.5);
    assert!(transform.rotation().angle_between(expected) < 1e-4);
}
