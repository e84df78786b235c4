use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use radial_shooter::entities::{Enemy, Particle, Projectile};
use radial_shooter::state::GameStatus;
use radial_shooter::surface::{Color, RecordingSurface};
use radial_shooter::{GameEvent, Session};

fn make_session() -> Session<StdRng> {
    Session::new(StdRng::seed_from_u64(42), 1000, 800.0, 600.0)
}

fn started() -> Session<StdRng> {
    let mut s = make_session();
    s.start_game(800.0, 600.0, 0);
    s.drain_events();
    s
}

fn surface() -> RecordingSurface {
    RecordingSurface::new(800.0, 600.0)
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_session_is_idle_with_overlay() {
    let s = make_session();
    assert_eq!(s.status(), GameStatus::Idle);
    assert!(s.overlay_visible());
    assert!(!s.spawner().is_active());
    assert!(s.world().player.is_none());
}

// ── start_game ────────────────────────────────────────────────────────────────

#[test]
fn start_game_sets_up_fresh_round() {
    let mut s = make_session();
    s.start_game(801.0, 601.0, 0);

    assert_eq!(s.status(), GameStatus::Started);
    assert!(!s.overlay_visible());
    assert!(s.spawner().is_active());
    assert_eq!(s.score(), 0);
    assert_eq!(s.world().center, Vec2::new(400.0, 300.0));
    assert_eq!(s.world().player.as_ref().unwrap().pos, Vec2::new(400.0, 300.0));
    assert_eq!(
        s.drain_events(),
        vec![GameEvent::ScoreChanged(0), GameEvent::GameStarted]
    );
}

#[test]
fn start_game_clears_previous_round() {
    let mut s = started();
    {
        let w = s.world_mut();
        for i in 0..5 {
            w.projectiles.register(Projectile::new(Vec2::new(i as f32, 0.0), Vec2::ZERO));
            w.enemies.register(Enemy::new(Vec2::new(i as f32, 0.0), Vec2::ZERO, 12.0, Color::WHITE));
            w.particles.register(Particle::new(Vec2::ZERO, Vec2::ZERO, 1.0, Color::WHITE));
        }
        w.state.score = 3100;
        w.state.projectile_accel = 8.0;
        w.state.enemy_accel = 1.5;
    }

    s.start_game(800.0, 600.0, 5000);
    let w = s.world();
    assert!(w.projectiles.is_empty());
    assert!(w.enemies.is_empty());
    assert!(w.particles.is_empty());
    assert_eq!(w.state.score, 0);
    assert_eq!(w.state.projectile_accel, 1.0);
    assert_eq!(w.state.enemy_accel, 1.0);
}

// ── click ─────────────────────────────────────────────────────────────────────

#[test]
fn click_ignored_while_idle() {
    let mut s = make_session();
    assert_eq!(s.click(500.0, 300.0), None);
    assert!(s.world().projectiles.is_empty());
}

#[test]
fn click_fires_from_center_toward_point() {
    let mut s = started();
    let id = s.click(500.0, 300.0).unwrap();
    let p = s.world().projectiles.get(id).unwrap();
    assert_eq!(p.pos, Vec2::new(400.0, 300.0));
    assert!((p.vel - Vec2::new(1.0, 0.0)).length() < 1e-5);
    assert_eq!(p.radius, 5.0);
    assert_eq!(p.color, Color::WHITE);
}

#[test]
fn click_velocity_is_unit_on_fresh_game() {
    let mut s = started();
    for (x, y) in [(500.0, 300.0), (123.0, 45.0), (400.0, 599.0), (0.0, 0.0)] {
        let id = s.click(x, y).unwrap();
        let vel = s.world().projectiles.get(id).unwrap().vel;
        assert!((vel.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn shot_advances_one_unit_per_tick_on_fresh_game() {
    let mut s = started();
    let id = s.click(400.0, 0.0).unwrap();
    s.frame(&mut surface(), 16);
    let pos = s.world().projectiles.get(id).unwrap().pos;
    assert!((pos - Vec2::new(400.0, 299.0)).length() < 1e-4);
}

#[test]
fn click_speed_follows_ramp() {
    let mut s = started();
    s.world_mut().state.projectile_accel = 8.0;
    let id = s.click(400.0, 0.0).unwrap();
    let p = s.world().projectiles.get(id).unwrap();
    assert!((p.vel - Vec2::new(0.0, -8.0)).length() < 1e-5);
}

#[test]
fn click_ignored_after_game_over() {
    let mut s = started();
    s.end_game();
    assert_eq!(s.click(500.0, 300.0), None);
    assert!(s.world().projectiles.is_empty());
}

// ── end_game ──────────────────────────────────────────────────────────────────

#[test]
fn enemy_contact_ends_game() {
    let mut s = started();
    s.world_mut()
        .enemies
        .register(Enemy::new(Vec2::new(405.0, 300.0), Vec2::ZERO, 12.0, Color::WHITE));
    let report = s.frame(&mut surface(), 16);

    assert!(report.player_hit);
    assert_eq!(s.status(), GameStatus::Over);
    assert!(s.overlay_visible());
    assert!(!s.spawner().is_active());
    assert_eq!(s.drain_events(), vec![GameEvent::GameOver { score: 0 }]);
}

#[test]
fn end_game_only_from_started() {
    let mut s = make_session();
    s.end_game();
    assert_eq!(s.status(), GameStatus::Idle);
    assert!(s.drain_events().is_empty());
}

#[test]
fn restart_after_game_over() {
    let mut s = started();
    s.end_game();
    s.start_game(800.0, 600.0, 10_000);
    assert_eq!(s.status(), GameStatus::Started);
    assert!(s.click(500.0, 300.0).is_some());
}

// ── spawning ──────────────────────────────────────────────────────────────────

#[test]
fn spawner_fires_only_while_started() {
    let mut s = make_session();
    assert_eq!(s.poll_spawner(1000), None);

    s.start_game(800.0, 600.0, 0);
    assert_eq!(s.poll_spawner(999), None);
    let id = s.poll_spawner(1000).unwrap();
    let e = s.world().enemies.get(id).unwrap();
    assert!((e.vel.length() - 1.0).abs() < 1e-4);

    s.end_game();
    assert_eq!(s.poll_spawner(2000), None);
    assert_eq!(s.poll_spawner(60_000), None);
    assert_eq!(s.world().enemies.len(), 1);
}

#[test]
fn pending_spawn_dropped_by_end_game() {
    let mut s = started();
    // The firing at t=1000 is already due when the game ends
    s.end_game();
    assert_eq!(s.poll_spawner(1500), None);
    assert!(s.world().enemies.is_empty());
}

#[test]
fn spawned_enemy_speed_follows_ramp() {
    let mut s = started();
    s.world_mut().state.enemy_accel = 1.5;
    let id = s.poll_spawner(1000).unwrap();
    let e = s.world().enemies.get(id).unwrap();
    assert!((e.vel.length() - 1.5).abs() < 1e-4);
}

// ── frame & events ────────────────────────────────────────────────────────────

#[test]
fn frame_reports_score_changes() {
    let mut s = started();
    s.world_mut()
        .enemies
        .register(Enemy::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 25.0, Color::WHITE));
    s.world_mut()
        .projectiles
        .register(Projectile::new(Vec2::new(100.0, 100.0), Vec2::ZERO));

    s.frame(&mut surface(), 16);
    assert_eq!(s.score(), 100);
    assert_eq!(s.drain_events(), vec![GameEvent::ScoreChanged(100)]);
    assert!(s.drain_events().is_empty());
}

#[test]
fn frame_while_idle_just_clears() {
    let mut s = make_session();
    let mut surf = surface();
    s.frame(&mut surf, 16);
    assert_eq!(surf.clears, 1);
    assert!(surf.circles.is_empty());
}

#[test]
fn hit_landing_on_fatal_tick_counts_in_final_score() {
    let mut s = started();
    {
        let w = s.world_mut();
        w.enemies.register(Enemy::new(Vec2::new(405.0, 300.0), Vec2::ZERO, 12.0, Color::WHITE));
        w.enemies.register(Enemy::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 15.0, Color::WHITE));
        w.projectiles.register(Projectile::new(Vec2::new(100.0, 100.0), Vec2::ZERO));
    }
    s.frame(&mut surface(), 16);
    assert_eq!(
        s.drain_events(),
        vec![GameEvent::ScoreChanged(250), GameEvent::GameOver { score: 250 }]
    );
}
