/// Time-based interpolation of a single scalar
///
/// Replaces a property-animation library: a tween remembers where it started,
/// where it is going and when, and is sampled against the frame clock.

/// Ease-out quadratic interpolation from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f32,
    pub end: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl Tween {
    pub fn new(start: f32, end: f32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            start,
            end,
            start_ms,
            duration_ms,
        }
    }

    /// Elapsed fraction in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f32;
        (elapsed / self.duration_ms as f32).min(1.0)
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let t = self.progress(now_ms);
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        self.start + (self.end - self.start) * eased
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
