//! The playback state machine shared by object animation and camera paths.
//!
//! [`TrackPlayer`] advances a clock over a shared [`Track`] and handles
//! looping, completion and speed scaling. [`AnimationController`] and
//! [`CameraPath`] are instantiations of this one type, so their playback
//! contracts cannot drift apart.
//!
//! [`AnimationController`]: crate::animation::AnimationController
//! [`CameraPath`]: crate::animation::CameraPath

use std::sync::Arc;

use glam::Vec3;

use crate::animation::interpolation;
use crate::animation::keyframe::{Span, Track, TrackKey};

/// How a player blends between bracketing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Raw linear blend.
    Linear,
    /// Linear blend with a smootherstep-shaped parameter.
    Smooth,
    /// Catmull-Rom spline through the neighboring keys; falls back to
    /// [`Smooth`](Self::Smooth) when the track holds fewer than four keys.
    #[default]
    CatmullRom,
    /// Cubic Bezier with synthetic control points (position channel only).
    Bezier,
}

/// Playback state over a shared, read-only [`Track`].
///
/// Tracks are shared via `Arc` so several players can read one track; only
/// the player's own clock mutates during playback.
#[derive(Debug, Clone)]
pub struct TrackPlayer<K: TrackKey> {
    track: Option<Arc<Track<K>>>,
    time: f32,
    speed: f32,
    playing: bool,
    paused: bool,
    mode: InterpolationMode,
}

impl<K: TrackKey> TrackPlayer<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            track: None,
            time: 0.0,
            speed: 1.0,
            playing: false,
            paused: false,
            mode: InterpolationMode::default(),
        }
    }

    /// Swaps the driven track. Playback time resets to zero.
    pub fn set_track(&mut self, track: Arc<Track<K>>) {
        self.track = Some(track);
        self.reset();
    }

    #[must_use]
    pub fn track(&self) -> Option<&Arc<Track<K>>> {
        self.track.as_ref()
    }

    /// Advances the clock by `dt * speed` seconds.
    ///
    /// No-op unless playing, unpaused and driving a non-empty track. A
    /// looping track wraps past its duration; a finishing non-looping
    /// track clamps to its duration and then stops, which resets the clock
    /// to zero — the next sample yields the start pose.
    pub fn update(&mut self, dt: f32) {
        if !self.playing || self.paused {
            return;
        }
        let Some(track) = &self.track else { return };
        if track.is_empty() {
            return;
        }

        self.time += dt * self.speed;

        let duration = track.duration();
        if track.is_looping() && duration > 0.0 {
            if self.time > duration {
                self.time %= duration;
            }
        } else if self.time >= duration {
            self.time = duration;
            log::trace!("track '{}' finished, stopping playback", track.name());
            self.stop();
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
        self.paused = false;
    }

    /// Freezes the clock; `play` resumes from the frozen time.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Halts playback and rewinds the clock to zero.
    pub fn stop(&mut self) {
        self.playing = false;
        self.paused = false;
        self.time = 0.0;
    }

    /// Rewinds the clock to zero without touching the playing flag.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.paused = false;
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing && !self.paused
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Duration of the driven track, or `0.0` without one.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.track.as_deref().map_or(0.0, Track::duration)
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_mode(&mut self, mode: InterpolationMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn mode(&self) -> InterpolationMode {
        self.mode
    }
}

impl<K: TrackKey> Default for TrackPlayer<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Catmull-Rom over one vector channel of a key span, with neighbor
/// indices clamped to the track bounds so end segments degrade without
/// phantom points. Tracks with fewer than four keys fall back to a
/// smoothed lerp.
pub(crate) fn sample_spline_vec3<K: TrackKey>(
    keys: &[K],
    span: Span,
    get: impl Fn(&K) -> Vec3,
) -> Vec3 {
    if keys.len() < 4 {
        let a = get(&keys[span.i0]);
        let b = get(&keys[span.i1]);
        return interpolation::lerp_vec3(a, b, interpolation::smootherstep(span.t));
    }

    let prev = span.i0.saturating_sub(1);
    let next = (span.i1 + 1).min(keys.len() - 1);

    interpolation::catmull_rom(
        get(&keys[prev]),
        get(&keys[span.i0]),
        get(&keys[span.i1]),
        get(&keys[next]),
        span.t,
    )
}
