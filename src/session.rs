/// Session controller
///
/// `Session` is the one context object the front end talks to. It owns the
/// world, the spawn timer and the RNG, and turns input (start, click, clock)
/// into state changes. Anything the UI must show is queued as a `GameEvent`.

use glam::Vec2;
use rand::Rng;

use crate::aim;
use crate::compute::{self, TickReport};
use crate::entities::{viewport_center, Player, Projectile, World};
use crate::registry::EntityId;
use crate::spawner::{spawn_enemy, Spawner};
use crate::state::GameStatus;
use crate::surface::Surface;

/// Notifications for the UI layer, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    /// New score for the HUD counter and the game-over summary
    ScoreChanged(u64),
    GameOver { score: u64 },
}

pub struct Session<R: Rng> {
    world: World,
    spawner: Spawner,
    rng: R,
    events: Vec<GameEvent>,
    overlay_visible: bool,
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R, spawn_interval_ms: u64, width: f32, height: f32) -> Self {
        Self {
            world: World::new(width, height),
            spawner: Spawner::new(spawn_interval_ms),
            rng,
            events: Vec::new(),
            overlay_visible: true,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn status(&self) -> GameStatus {
        self.world.state.status
    }

    pub fn score(&self) -> u64 {
        self.world.state.score
    }

    /// Whether the start / game-over overlay should be shown.
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    /// Begin a fresh game on a `width × height` canvas.
    ///
    /// Previous entities are discarded wholesale, not destroyed one by one.
    pub fn start_game(&mut self, width: f32, height: f32, now_ms: u64) {
        let world = &mut self.world;
        world.width = width;
        world.height = height;
        world.center = viewport_center(width, height);
        world.player = Some(Player::new(world.center));

        world.projectiles.clear();
        world.enemies.clear();
        world.particles.clear();

        world.state.reset();
        self.set_score(0);

        self.overlay_visible = false;
        self.spawner.start(now_ms);
        self.world.state.status = GameStatus::Started;

        log::info!("game started on {}x{} canvas", width, height);
        self.events.push(GameEvent::GameStarted);
    }

    /// Stop spawning, show the overlay and mark the game over.
    pub fn end_game(&mut self) {
        if self.world.state.status != GameStatus::Started {
            return;
        }
        self.spawner.stop();
        self.overlay_visible = true;
        self.world.state.status = GameStatus::Over;

        let score = self.world.state.score;
        log::info!("game over, final score {}", score);
        self.events.push(GameEvent::GameOver { score });
    }

    // ── Input ────────────────────────────────────────────────────────────────

    /// Fire a projectile from the viewport centre toward `(x, y)`.
    ///
    /// Ignored unless a game is running.
    pub fn click(&mut self, x: f32, y: f32) -> Option<EntityId> {
        if !self.world.state.is_started() {
            return None;
        }
        let center = self.world.center;
        let vel = aim(center, Vec2::new(x, y)) * self.world.state.projectile_accel;
        Some(self.world.projectiles.register(Projectile::new(center, vel)))
    }

    // ── Clock-driven work ────────────────────────────────────────────────────

    /// Run the spawn timer up to `now_ms`, registering an enemy if it fired.
    pub fn poll_spawner(&mut self, now_ms: u64) -> Option<EntityId> {
        if !self.spawner.poll(now_ms) || !self.world.state.is_started() {
            return None;
        }
        let world = &mut self.world;
        let enemy = spawn_enemy(
            &mut self.rng,
            world.width,
            world.height,
            world.center,
            world.state.enemy_accel,
        );
        log::debug!("spawned enemy r={} at ({:.0}, {:.0})", enemy.radius, enemy.pos.x, enemy.pos.y);
        Some(world.enemies.register(enemy))
    }

    /// Run one simulation tick against `surface`.
    pub fn frame<S: Surface>(&mut self, surface: &mut S, now_ms: u64) -> TickReport {
        let report = compute::tick(&mut self.world, surface, &mut self.rng, now_ms);
        if report.score_changed {
            self.events.push(GameEvent::ScoreChanged(self.world.state.score));
        }
        if report.player_hit {
            self.end_game();
        }
        report
    }

    fn set_score(&mut self, score: u64) {
        self.world.state.score = score;
        self.events.push(GameEvent::ScoreChanged(score));
    }
}
