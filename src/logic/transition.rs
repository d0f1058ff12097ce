//! Timed value transitions
//!
//! Pure interpolation between two values over a time window, evaluated
//! against a clock reading. Used for toast slides, splash progress and
//! fade, smooth scrolling, progress bars and reveal animations.

use std::time::Duration;

/// Timing curve applied to linear progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Animation from `from` to `to`, starting at `started_at` on the clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Duration,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    pub fn new(
        from: f32,
        to: f32,
        started_at: Duration,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    /// A value that never changes
    pub fn fixed(value: f32) -> Self {
        Self::new(value, value, Duration::ZERO, Duration::ZERO, Easing::Linear)
    }

    /// Start a new animation towards `to` from wherever this one is at `now`.
    /// Interrupting a running animation continues from its current value.
    pub fn retarget(&self, to: f32, now: Duration, duration: Duration, easing: Easing) -> Self {
        Self::new(self.value_at(now), to, now, duration, easing)
    }

    /// Linear progress in [0, 1]
    pub fn progress_at(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        if now <= self.started_at {
            return 0.0;
        }
        let elapsed = (now - self.started_at).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value_at(&self, now: Duration) -> f32 {
        let t = self.easing.apply(self.progress_at(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress_at(now) >= 1.0
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn finishes_at(&self) -> Duration {
        self.started_at + self.duration
    }
}
