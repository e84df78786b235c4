/// Game entity types and the drawable contract they share.

use glam::Vec2;

use crate::consts::*;
use crate::registry::Registry;
use crate::state::GameState;
use crate::surface::{Color, Surface};
use crate::tween::Tween;

// ── Drawable contract ─────────────────────────────────────────────────────────

/// Anything with a position, a radius and a colour that can paint itself and
/// advance one simulation step.
pub trait Drawable {
    fn position(&self) -> Vec2;
    fn radius(&self) -> f32;
    fn color(&self) -> Color;

    fn alpha(&self) -> f32 {
        1.0
    }

    /// Render at the current position.
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.position(), self.radius(), self.color(), self.alpha());
    }

    /// Draw, then advance one step.
    fn update(&mut self, surface: &mut dyn Surface, now_ms: u64);
}

/// Two circles collide iff the distance between centres is less than the sum
/// of their radii.
pub fn collides(a: &impl Drawable, b: &impl Drawable) -> bool {
    a.position().distance(b.position()) < a.radius() + b.radius()
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            color: Color::WHITE,
        }
    }
}

impl Drawable for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn color(&self) -> Color {
        self.color
    }

    // The player never moves.
    fn update(&mut self, surface: &mut dyn Surface, _now_ms: u64) {
        self.draw(surface);
    }
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: PROJECTILE_RADIUS,
            color: Color::WHITE,
        }
    }

    /// True when the bounding circle lies entirely outside `[0,w] × [0,h]`.
    pub fn is_out_of_bounds(&self, width: f32, height: f32) -> bool {
        self.pos.x + self.radius < 0.0
            || self.pos.y + self.radius < 0.0
            || self.pos.x - self.radius > width
            || self.pos.y - self.radius > height
    }
}

impl Drawable for Projectile {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn color(&self) -> Color {
        self.color
    }

    fn update(&mut self, surface: &mut dyn Surface, _now_ms: u64) {
        self.draw(surface);
        self.pos += self.vel;
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    /// Fixed at spawn, never re-aimed.
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Radius animation started by the most recent non-lethal hit.
    pub shrink: Option<Tween>,
}

impl Enemy {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            shrink: None,
        }
    }

    /// Whether one more hit finishes this enemy off.
    pub fn is_lethal_hit(&self) -> bool {
        Self::is_lethal_radius(self.radius)
    }

    pub fn is_lethal_radius(radius: f32) -> bool {
        radius - ENEMY_SHRINK_STEP < ENEMY_DESTROY_RADIUS
    }

    /// Start easing the radius down by one shrink step from where it is now.
    pub fn start_shrink(&mut self, now_ms: u64) {
        let target = self.radius - ENEMY_SHRINK_STEP;
        self.shrink = Some(Tween::new(self.radius, target, now_ms, ENEMY_SHRINK_MS));
    }

    fn advance_shrink(&mut self, now_ms: u64) {
        if let Some(tween) = self.shrink {
            self.radius = tween.sample(now_ms);
            if tween.is_finished(now_ms) {
                self.shrink = None;
            }
        }
    }
}

impl Drawable for Enemy {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn color(&self) -> Color {
        self.color
    }

    fn update(&mut self, surface: &mut dyn Surface, now_ms: u64) {
        self.advance_shrink(now_ms);
        self.draw(surface);
        self.pos += self.vel;
    }
}

// ── Particle ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Starts at 1, fades by `PARTICLE_ALPHA_DECAY` per update
    pub alpha: f32,
    pub friction: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            alpha: 1.0,
            friction: PARTICLE_FRICTION,
        }
    }

    pub fn is_faded(&self) -> bool {
        self.alpha <= 0.0
    }
}

impl Drawable for Particle {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn color(&self) -> Color {
        self.color
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn update(&mut self, surface: &mut dyn Surface, _now_ms: u64) {
        self.draw(surface);
        self.vel *= self.friction;
        self.pos += self.vel;
        self.alpha -= PARTICLE_ALPHA_DECAY;
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Everything the simulation tick reads and mutates.
#[derive(Clone, Debug)]
pub struct World {
    /// Replaced wholesale on every new game.
    pub player: Option<Player>,
    pub projectiles: Registry<Projectile>,
    pub enemies: Registry<Enemy>,
    pub particles: Registry<Particle>,
    pub state: GameState,
    /// Viewport centre captured at game start; player, shots and spawns aim here.
    pub center: Vec2,
    /// Canvas size seen by the most recent tick.
    pub width: f32,
    pub height: f32,
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            player: None,
            projectiles: Registry::new(),
            enemies: Registry::new(),
            particles: Registry::new(),
            state: GameState::default(),
            center: viewport_center(width, height),
            width,
            height,
        }
    }
}

/// Centre of the canvas, floored to whole units.
pub fn viewport_center(width: f32, height: f32) -> Vec2 {
    Vec2::new((width / 2.0).floor(), (height / 2.0).floor())
}
