use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Externally advanced clock that drives every timed choreography input.
/// Event sources advance it in whatever increments they observe; nothing in
/// the core reads wall time on its own.
#[derive(Debug, Default, Clone)]
pub struct MotionClock {
    elapsed: Duration,
}

impl MotionClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// Delay/duration envelope for a single animation, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTiming {
    pub delay: f32,
    pub duration: f32,
}

impl AnimationTiming {
    pub fn new(delay: f32, duration: f32) -> Self {
        Self { delay, duration }
    }

    pub fn total(&self) -> f32 {
        self.delay + self.duration
    }
}

/// Normalised keyframe schedule. `times` are fractions of the duration at
/// which the visual reaches each keyframe, ascending, first entry 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframes {
    pub times: Vec<f32>,
    pub timing: AnimationTiming,
}

impl Keyframes {
    pub fn new(times: Vec<f32>, timing: AnimationTiming) -> Self {
        Self { times, timing }
    }

    /// Index of the keyframe in effect at normalised progress `t`.
    pub fn stage_at(&self, t: f32) -> usize {
        let t = t.clamp(0.0, 1.0);
        self.times
            .iter()
            .rposition(|time| *time <= t)
            .unwrap_or(0)
    }

    pub fn stages(&self) -> usize {
        self.times.len()
    }
}
