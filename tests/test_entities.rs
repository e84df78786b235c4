use glam::Vec2;

use radial_shooter::entities::*;
use radial_shooter::surface::{Color, RecordingSurface};

fn surface() -> RecordingSurface {
    RecordingSurface::new(800.0, 600.0)
}

// ── Collision ─────────────────────────────────────────────────────────────────

#[test]
fn circles_touching_do_not_collide() {
    let enemy = Enemy::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 10.0, Color::WHITE);
    let shot = Projectile::new(Vec2::new(15.0, 0.0), Vec2::ZERO);
    // distance 15 == 10 + 5: not strictly less
    assert!(!collides(&enemy, &shot));
}

#[test]
fn overlapping_circles_collide() {
    let enemy = Enemy::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 10.0, Color::WHITE);
    let shot = Projectile::new(Vec2::new(14.9, 0.0), Vec2::ZERO);
    assert!(collides(&enemy, &shot));
    assert!(collides(&shot, &enemy));
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_update_draws_and_stays_put() {
    let mut s = surface();
    let mut player = Player::new(Vec2::new(400.0, 300.0));
    player.update(&mut s, 0);
    assert_eq!(player.pos, Vec2::new(400.0, 300.0));
    assert_eq!(s.circles.len(), 1);
    assert_eq!(s.circles[0].radius, 10.0);
    assert_eq!(s.circles[0].color, Color::WHITE);
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[test]
fn projectile_update_draws_then_moves() {
    let mut s = surface();
    let mut shot = Projectile::new(Vec2::new(10.0, 10.0), Vec2::new(3.0, -4.0));
    shot.update(&mut s, 0);
    assert_eq!(s.circles[0].center, Vec2::new(10.0, 10.0));
    assert_eq!(shot.pos, Vec2::new(13.0, 6.0));
}

#[test]
fn projectile_out_of_bounds_left() {
    let shot = Projectile::new(Vec2::new(-6.0, 100.0), Vec2::ZERO);
    assert!(shot.is_out_of_bounds(800.0, 600.0));
}

#[test]
fn projectile_partially_visible_is_in_bounds() {
    let shot = Projectile::new(Vec2::new(-4.0, 100.0), Vec2::ZERO);
    assert!(!shot.is_out_of_bounds(800.0, 600.0));
    let shot = Projectile::new(Vec2::new(804.0, 100.0), Vec2::ZERO);
    assert!(!shot.is_out_of_bounds(800.0, 600.0));
}

#[test]
fn projectile_out_of_bounds_far_edges() {
    assert!(Projectile::new(Vec2::new(806.0, 100.0), Vec2::ZERO).is_out_of_bounds(800.0, 600.0));
    assert!(Projectile::new(Vec2::new(100.0, 606.0), Vec2::ZERO).is_out_of_bounds(800.0, 600.0));
    assert!(Projectile::new(Vec2::new(100.0, -6.0), Vec2::ZERO).is_out_of_bounds(800.0, 600.0));
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_lethal_threshold_is_radius_20() {
    let e = |r| Enemy::new(Vec2::ZERO, Vec2::ZERO, r, Color::WHITE);
    assert!(e(15.0).is_lethal_hit());
    assert!(e(19.9).is_lethal_hit());
    assert!(!e(20.0).is_lethal_hit());
    assert!(!e(25.0).is_lethal_hit());
}

#[test]
fn enemy_shrink_eases_and_finishes() {
    let mut s = surface();
    let mut enemy = Enemy::new(Vec2::ZERO, Vec2::ZERO, 25.0, Color::WHITE);
    enemy.start_shrink(1000);

    enemy.update(&mut s, 1250);
    assert!((enemy.radius - 17.5).abs() < 1e-4);
    assert!(enemy.shrink.is_some());

    enemy.update(&mut s, 1500);
    assert_eq!(enemy.radius, 15.0);
    assert!(enemy.shrink.is_none());
}

#[test]
fn enemy_update_moves_by_velocity() {
    let mut s = surface();
    let mut enemy = Enemy::new(Vec2::new(5.0, 5.0), Vec2::new(-1.0, 0.5), 12.0, Color::WHITE);
    enemy.update(&mut s, 0);
    assert_eq!(enemy.pos, Vec2::new(4.0, 5.5));
    assert_eq!(s.circles[0].center, Vec2::new(5.0, 5.0));
}

// ── Particle ──────────────────────────────────────────────────────────────────

#[test]
fn particle_update_applies_friction_and_fades() {
    let mut s = surface();
    let mut p = Particle::new(Vec2::new(0.0, 0.0), Vec2::new(0.5, -0.5), 2.0, Color::WHITE);
    p.update(&mut s, 0);
    assert!((p.pos.x - 0.495).abs() < 1e-6);
    assert!((p.pos.y + 0.495).abs() < 1e-6);
    assert!((p.alpha - 0.99).abs() < 1e-6);
    assert_eq!(s.circles[0].alpha, 1.0);
}

#[test]
fn particle_faded_at_zero_alpha() {
    let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 1.0, Color::WHITE);
    assert!(!p.is_faded());
    p.alpha = 0.0;
    assert!(p.is_faded());
}

// ── World ─────────────────────────────────────────────────────────────────────

#[test]
fn viewport_center_is_floored() {
    assert_eq!(viewport_center(801.0, 601.0), Vec2::new(400.0, 300.0));
}

#[test]
fn new_world_is_empty_and_idle() {
    let world = World::new(800.0, 600.0);
    assert!(world.player.is_none());
    assert!(world.projectiles.is_empty());
    assert!(world.enemies.is_empty());
    assert!(world.particles.is_empty());
    assert_eq!(world.state.score, 0);
}

#[test]
fn hsl_primary_hues() {
    assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::rgb(255, 0, 0));
    assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::rgb(0, 255, 0));
    assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::rgb(0, 0, 255));
    // 50% saturation, 50% lightness
    assert_eq!(Color::from_hsl(0.0, 0.5, 0.5), Color::rgb(191, 64, 64));
}
