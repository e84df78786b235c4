/// Per-frame simulation tick.
///
/// A tick runs in two phases. The read pass walks every registry, draws and
/// advances each entity, and records what should happen as a list of
/// `Effect`s without adding or removing anything. The apply pass then commits
/// those effects in the order they were recorded. Registries are compacted
/// afterwards, so no collection is ever resized while it is being walked.
/// Side effects are limited to the surface and the injected RNG.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::entities::{collides, Drawable, Enemy, Particle, World};
use crate::registry::EntityId;
use crate::surface::{Color, Surface};

/// A deferred mutation produced by the read pass.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    DestroyProjectile(EntityId),
    Hit {
        enemy: EntityId,
        projectile: EntityId,
        /// Projectile position when the hit was detected
        at: Vec2,
        color: Color,
        /// Enemy radius when the hit was detected
        radius: f32,
    },
    DestroyParticle(EntityId),
}

/// What one tick did, for the session to act on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub score_changed: bool,
    /// An enemy touched the player this tick.
    pub player_hit: bool,
    /// Hits that were actually applied
    pub hits: u32,
    pub ramped: bool,
}

// ── Entry point ──────────────────────────────────────────────────────────────

/// Advance the world by one frame and paint it onto `surface`.
///
/// The background is always cleared; nothing else happens unless a game is
/// running.
pub fn tick<S: Surface, R: Rng>(
    world: &mut World,
    surface: &mut S,
    rng: &mut R,
    now_ms: u64,
) -> TickReport {
    surface.clear(Color::BLACK);
    world.width = surface.width();
    world.height = surface.height();

    if !world.state.is_started() {
        return TickReport::default();
    }

    let (effects, player_hit) = read_pass(world, surface, now_ms);
    let mut report = apply_effects(world, effects, rng, now_ms);
    report.player_hit = player_hit;

    world.projectiles.compact();
    world.enemies.compact();
    world.particles.compact();

    // ── Difficulty ramp ──────────────────────────────────────────────────────
    report.ramped = world.state.apply_difficulty_ramp();
    if report.ramped {
        log::trace!(
            "difficulty ramp at score {}: projectile x{}, enemy x{}",
            world.state.score,
            world.state.projectile_accel,
            world.state.enemy_accel
        );
    }

    report
}

// ── Phase 1: read pass ───────────────────────────────────────────────────────

fn read_pass(world: &mut World, surface: &mut dyn Surface, now_ms: u64) -> (Vec<Effect>, bool) {
    let mut effects = Vec::new();
    let mut player_hit = false;

    // ── 1. Player ────────────────────────────────────────────────────────────
    if let Some(player) = world.player.as_mut() {
        player.update(surface, now_ms);
    }

    // ── 2. Projectiles: cull or advance ──────────────────────────────────────
    let (width, height) = (world.width, world.height);
    for (id, projectile) in world.projectiles.iter_mut() {
        if projectile.is_out_of_bounds(width, height) {
            effects.push(Effect::DestroyProjectile(id));
        } else {
            projectile.update(surface, now_ms);
        }
    }

    // ── 3. Enemies: advance, then test against player and projectiles ────────
    for (enemy_id, enemy) in world.enemies.iter_mut() {
        enemy.update(surface, now_ms);

        if let Some(player) = world.player.as_ref() {
            if collides(&*enemy, player) {
                player_hit = true;
            }
        }

        for (projectile_id, projectile) in world.projectiles.iter() {
            if collides(&*enemy, projectile) {
                effects.push(Effect::Hit {
                    enemy: enemy_id,
                    projectile: projectile_id,
                    at: projectile.pos,
                    color: enemy.color,
                    radius: enemy.radius,
                });
            }
        }
    }

    // ── 4. Particles: cull or fade ───────────────────────────────────────────
    for (id, particle) in world.particles.iter_mut() {
        if particle.is_faded() {
            effects.push(Effect::DestroyParticle(id));
        } else {
            particle.update(surface, now_ms);
        }
    }

    (effects, player_hit)
}

// ── Phase 2: apply ───────────────────────────────────────────────────────────

/// Commit recorded effects in order.
///
/// Every recorded hit lands, including a second hit on the same projectile
/// or on an enemy an earlier hit already destroyed. Removals are idempotent,
/// so duplicates only add particles and score. A hit reads the enemy's
/// current radius if it is still registered and the radius captured by the
/// read pass otherwise.
pub fn apply_effects<R: Rng>(
    world: &mut World,
    effects: Vec<Effect>,
    rng: &mut R,
    now_ms: u64,
) -> TickReport {
    let mut report = TickReport::default();

    for effect in effects {
        match effect {
            Effect::DestroyProjectile(id) => {
                world.projectiles.unregister(id);
            }
            Effect::DestroyParticle(id) => {
                world.particles.unregister(id);
            }
            Effect::Hit {
                enemy,
                projectile,
                at,
                color,
                radius,
            } => {
                let radius = world.enemies.get(enemy).map_or(radius, |e| e.radius);
                let lethal = Enemy::is_lethal_radius(radius);

                // Particles, then score and enemy, then projectile
                spawn_burst(world, rng, at, color, radius.ceil().max(0.0) as usize);
                if lethal {
                    world.state.score += SCORE_KILL;
                    world.enemies.unregister(enemy);
                } else {
                    world.state.score += SCORE_SHRINK;
                    if let Some(target) = world.enemies.get_mut(enemy) {
                        target.start_shrink(now_ms);
                    }
                }
                world.projectiles.unregister(projectile);

                log::debug!(
                    "hit enemy {} ({}), score {}",
                    enemy.raw(),
                    if lethal { "destroyed" } else { "shrunk" },
                    world.state.score
                );
                report.hits += 1;
                report.score_changed = true;
            }
        }
    }

    report
}

/// Register `count` particles at `at` with random size and drift.
fn spawn_burst<R: Rng>(world: &mut World, rng: &mut R, at: Vec2, color: Color, count: usize) {
    for _ in 0..count {
        let size = rng.gen_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE) as f32;
        let vel = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5);
        world.particles.register(Particle::new(at, vel, size, color));
    }
}
