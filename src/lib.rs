/// Radial Shooter - a fixed-turret arcade shooter
///
/// Core modules:
/// - `registry`: per-kind live-entity arenas with stable handles
/// - `entities`: the drawable contract and the four entity kinds
/// - `compute`: the two-phase per-frame simulation tick
/// - `spawner`: periodic edge spawning of inbound enemies
/// - `session`: start/end/click glue and outbound UI events

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod registry;
pub mod session;
pub mod spawner;
pub mod state;
pub mod surface;
pub mod tween;

pub use config::Config;
pub use error::{ConfigError, SetupError};
pub use session::{GameEvent, Session};

/// Gameplay constants
pub mod consts {
    pub const PLAYER_RADIUS: f32 = 10.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;

    /// Enemy radius range, integer sizes in `[MIN, MAX)`
    pub const ENEMY_MIN_RADIUS: u32 = 10;
    pub const ENEMY_MAX_RADIUS: u32 = 30;

    /// Radius lost per hit; an enemy whose remaining radius would drop below
    /// `ENEMY_DESTROY_RADIUS` is finished off instead.
    pub const ENEMY_SHRINK_STEP: f32 = 10.0;
    pub const ENEMY_DESTROY_RADIUS: f32 = 10.0;
    pub const ENEMY_SHRINK_MS: u64 = 500;

    pub const SCORE_SHRINK: u64 = 100;
    pub const SCORE_KILL: u64 = 250;

    /// Particle size range, integer sizes in `[MIN, MAX)`
    pub const PARTICLE_MIN_SIZE: u32 = 1;
    pub const PARTICLE_MAX_SIZE: u32 = 4;
    pub const PARTICLE_FRICTION: f32 = 0.99;
    pub const PARTICLE_ALPHA_DECAY: f32 = 0.01;

    /// Difficulty multipliers before and after the ramp
    pub const PROJECTILE_ACCEL: f32 = 1.0;
    pub const ENEMY_ACCEL: f32 = 1.0;
    pub const RAMP_SCORE: u64 = 2000;
    pub const RAMP_PROJECTILE_ACCEL: f32 = 8.0;
    pub const RAMP_ENEMY_ACCEL: f32 = 1.5;

    pub const SPAWN_INTERVAL_MS: u64 = 1000;
}

/// Unit vector pointing from `from` toward `to`, via `atan2`.
///
/// Coincident points yield `(1, 0)`, the direction of angle zero.
#[inline]
pub fn aim(from: glam::Vec2, to: glam::Vec2) -> glam::Vec2 {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    glam::Vec2::new(angle.cos(), angle.sin())
}
