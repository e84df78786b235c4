/// Periodic enemy spawning.
///
/// `Spawner` is a cancelable repeating timer driven by the caller's
/// millisecond clock; `spawn_enemy` builds one randomized inbound enemy.

use glam::Vec2;
use rand::Rng;

use crate::aim;
use crate::consts::*;
use crate::entities::Enemy;
use crate::surface::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Spawner {
    interval_ms: u64,
    /// Clock time of the next firing; `None` while stopped
    next_due: Option<u64>,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL_MS)
    }
}

impl Spawner {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Arm the timer; the first firing is one full period after `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due = Some(now_ms + self.interval_ms);
    }

    /// Cancel the timer. A firing that was already due is dropped.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true if the timer fired at or before `now_ms`, then re-arms it.
    ///
    /// Fires at most once per call. When the caller has stalled for more than
    /// a period, the missed firings are skipped rather than replayed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let mut next = due + self.interval_ms;
        if next <= now_ms {
            next = now_ms + self.interval_ms;
        }
        self.next_due = Some(next);
        true
    }
}

/// Build one enemy just off a random canvas edge, heading for `target`.
///
/// Half the time it enters through a vertical edge (left or right), otherwise
/// through a horizontal one (top or bottom). Its velocity is fixed here and
/// never re-aimed.
pub fn spawn_enemy<R: Rng>(
    rng: &mut R,
    width: f32,
    height: f32,
    target: Vec2,
    speed: f32,
) -> Enemy {
    let radius = rng.gen_range(ENEMY_MIN_RADIUS..ENEMY_MAX_RADIUS) as f32;

    let pos = if rng.gen_bool(0.5) {
        let x = if rng.gen_bool(0.5) { -radius } else { width + radius };
        Vec2::new(x, rng.gen::<f32>() * height)
    } else {
        let y = if rng.gen_bool(0.5) { -radius } else { height + radius };
        Vec2::new(rng.gen::<f32>() * width, y)
    };

    let vel = aim(pos, target) * speed;
    let color = Color::from_hsl(rng.gen::<f32>() * 360.0, 0.5, 0.5);

    Enemy::new(pos, vel, radius, color)
}
