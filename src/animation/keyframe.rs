//! Keyframes and time-sampled tracks.
//!
//! A [`Track`] is an ordered sequence of time-stamped keys, kept sorted by
//! time on every insertion. It is generic over the key payload so object
//! animation ([`Keyframe`]) and camera paths ([`CameraKeyframe`]) share one
//! storage and lookup implementation.

use glam::{EulerRot, Quat, Vec3};

/// Intervals shorter than this are treated as zero-length: the lookup
/// resolves to the left key instead of dividing by the interval.
const MIN_INTERVAL: f32 = 1e-6;

/// A sampled object pose at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Time in seconds, monotonic within a track.
    pub time: f32,
    pub position: Vec3,
    /// Unit quaternion; callers must pass normalized values.
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Keyframe {
    /// A keyframe holding `position` at `time`, with identity rotation and
    /// unit scale.
    #[must_use]
    pub fn at(time: f32, position: Vec3) -> Self {
        Self {
            time,
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Euler-angle convenience (XYZ order, radians).
    pub fn set_rotation_euler(&mut self, angles: Vec3) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z);
    }
}

impl Default for Keyframe {
    fn default() -> Self {
        Self::at(0.0, Vec3::ZERO)
    }
}

/// A sampled camera pose: where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraKeyframe {
    pub time: f32,
    pub position: Vec3,
    /// Point the camera looks toward.
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraKeyframe {
    #[must_use]
    pub fn new(time: f32, position: Vec3, target: Vec3) -> Self {
        Self {
            time,
            position,
            target,
            up: Vec3::Y,
        }
    }

    #[must_use]
    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }
}

impl Default for CameraKeyframe {
    fn default() -> Self {
        Self::new(0.0, Vec3::ZERO, Vec3::NEG_Z)
    }
}

/// Anything that can live on a [`Track`]: a value with a timestamp.
pub trait TrackKey: Clone {
    fn time(&self) -> f32;
}

impl TrackKey for Keyframe {
    fn time(&self) -> f32 {
        self.time
    }
}

impl TrackKey for CameraKeyframe {
    fn time(&self) -> f32 {
        self.time
    }
}

/// The bracketing key pair resolved by [`Track::span_at`].
///
/// `t` is the fractional position of the query time inside the
/// `[i0, i1]` interval; it is `0.0` whenever the query clamps to a single
/// key (before the first, after the last, or a zero-length interval).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub i0: usize,
    pub i1: usize,
    pub t: f32,
}

/// An ordered sequence of time-stamped keys.
///
/// Keys are re-sorted (stably) on every insertion, so tracks are cheap to
/// query during playback and only pay the sort while being built at setup.
#[derive(Debug, Clone)]
pub struct Track<K: TrackKey> {
    keys: Vec<K>,
    looping: bool,
    name: String,
}

impl<K: TrackKey> Track<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            looping: false,
            name: String::from("Unnamed"),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Inserts a key, keeping the sequence sorted ascending by time.
    pub fn push(&mut self, key: K) {
        self.keys.push(key);
        // Stable: keys sharing a timestamp keep their insertion order.
        self.keys.sort_by(|a, b| a.time().total_cmp(&b.time()));
    }

    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Time of the last key, or `0.0` for an empty track.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.keys.last().map_or(0.0, TrackKey::time)
    }

    /// Resolves the key pair bracketing `time`.
    ///
    /// Returns `None` only for an empty track. Query times before the
    /// first key or at/after the last clamp to that key with `t = 0`. A
    /// looping track wraps `time` by the duration first. A single-key
    /// track resolves to that key for every query time.
    #[must_use]
    pub fn span_at(&self, mut time: f32) -> Option<Span> {
        if self.keys.is_empty() {
            return None;
        }

        let last = self.keys.len() - 1;
        let duration = self.duration();

        if self.looping && duration > 0.0 && time > duration {
            time %= duration;
        }

        if time <= self.keys[0].time() {
            return Some(Span { i0: 0, i1: 0, t: 0.0 });
        }
        if time >= self.keys[last].time() {
            return Some(Span {
                i0: last,
                i1: last,
                t: 0.0,
            });
        }

        for i in 0..last {
            let t0 = self.keys[i].time();
            let t1 = self.keys[i + 1].time();
            if time >= t0 && time <= t1 {
                let dt = t1 - t0;
                let t = if dt > MIN_INTERVAL {
                    (time - t0) / dt
                } else {
                    0.0
                };
                return Some(Span { i0: i, i1: i + 1, t });
            }
        }

        Some(Span { i0: 0, i1: 0, t: 0.0 })
    }
}

impl<K: TrackKey> Default for Track<K> {
    fn default() -> Self {
        Self::new()
    }
}
