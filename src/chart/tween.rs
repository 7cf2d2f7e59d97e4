use crate::chart::state::Paddings;
use crate::core::types::NumberRange;

/// Values a [`Tween`] can interpolate linearly.
pub trait Lerp: Copy {
    #[must_use]
    fn lerp(self, target: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, target: Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

impl Lerp for NumberRange {
    fn lerp(self, target: Self, t: f64) -> Self {
        Self::new(self.start.lerp(target.start, t), self.end.lerp(target.end, t))
    }
}

impl Lerp for Paddings {
    fn lerp(self, target: Self, t: f64) -> Self {
        Self::new(self.x.lerp(target.x, t), self.y.lerp(target.y, t))
    }
}

/// A timed linear interpolation toward a target, sampled per animation frame.
///
/// There is no cancellation API: starting a new tween for the same logical
/// property replaces the old one, so the last writer wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    started_at_ms: f64,
    duration_ms: f64,
}

impl<T: Lerp> Tween<T> {
    #[must_use]
    pub fn new(from: T, to: T, started_at_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            started_at_ms,
            duration_ms,
        }
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    #[must_use]
    pub fn sample(&self, now_ms: f64) -> T {
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
        };

        self.from.lerp(self.to, t)
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.started_at_ms >= self.duration_ms
    }
}
