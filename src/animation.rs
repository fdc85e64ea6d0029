//! Opacity fades for overlays.
//!
//! Fades are driven by the event loop: callers advance them by the time elapsed since the last
//! frame, so nothing here reads a clock and tests can step time exactly.

use std::time::Duration;

/// Fade duration used when nothing else is configured.
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(300);

/// Timing curve applied to a fade's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Slow start and slow finish, the usual curve for view transitions.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `0.0..=1.0` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// A single opacity tween.
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Fade {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// Fade from fully transparent to fully opaque.
    pub fn fade_in(duration: Duration) -> Self {
        Self::new(0.0, 1.0, duration)
    }

    /// Fade from the given opacity down to transparent.
    pub fn fade_out(from: f32, duration: Duration) -> Self {
        Self::new(from, 0.0, duration)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Step the fade forward and return the new opacity.
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(elapsed).min(self.duration);
        self.value()
    }

    /// Opacity at the current point of the fade.
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let progress = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
