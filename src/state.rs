/// Session status, score and difficulty scalars

use crate::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Waiting on the start overlay, no game played yet
    #[default]
    Idle,
    Started,
    Over,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub status: GameStatus,
    pub score: u64,
    /// Speed multiplier applied to new projectiles
    pub projectile_accel: f32,
    /// Speed multiplier applied to new enemies
    pub enemy_accel: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            status: GameStatus::Idle,
            score: 0,
            projectile_accel: PROJECTILE_ACCEL,
            enemy_accel: ENEMY_ACCEL,
        }
    }
}

impl GameState {
    /// Restore score and difficulty to their defaults. Status is untouched.
    pub fn reset(&mut self) {
        self.score = 0;
        self.projectile_accel = PROJECTILE_ACCEL;
        self.enemy_accel = ENEMY_ACCEL;
    }

    pub fn is_started(&self) -> bool {
        self.status == GameStatus::Started
    }

    /// Raise the speed multipliers once the score threshold is reached.
    ///
    /// Returns true when this call changed the multipliers.
    pub fn apply_difficulty_ramp(&mut self) -> bool {
        if self.score < RAMP_SCORE {
            return false;
        }
        let changed = self.projectile_accel != RAMP_PROJECTILE_ACCEL
            || self.enemy_accel != RAMP_ENEMY_ACCEL;
        self.projectile_accel = RAMP_PROJECTILE_ACCEL;
        self.enemy_accel = RAMP_ENEMY_ACCEL;
        changed
    }
}
