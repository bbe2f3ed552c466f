use std::time::{Duration, Instant};

/// Largest delta fed into a frame update, in seconds. Long stalls (window
/// drags, debugger pauses) would otherwise teleport every animation.
pub const MAX_DELTA_SECONDS: f32 = 0.1;

/// Timer for tracking frame timing and elapsed time.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Updates the timer; call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Frame delta capped at [`MAX_DELTA_SECONDS`] — the value to feed
    /// into `SceneGraph::update` and the track players.
    #[must_use]
    pub fn clamped_dt_seconds(&self) -> f32 {
        self.dt_seconds().min(MAX_DELTA_SECONDS)
    }
}
