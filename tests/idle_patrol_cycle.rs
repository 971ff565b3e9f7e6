//! Idle/Patrol steady-cycle scenarios.

mod common;

use bevy::prelude::*;
use common::*;
use duskmire::enemies::EnemyState;

#[test]
fn idle_waits_out_idle_time_then_patrols() {
    let mut app = sim_app();
    let enemy = spawn_enemy_at(&mut app, base_definition().into_config(), Vec2::ZERO);

    run_for(&mut app, 0.5);
    assert_eq!(enemy_state(&app, enemy), EnemyState::Idle);

    run_for(&mut app, 0.7);
    assert_eq!(enemy_state(&app, enemy), EnemyState::Patrol);

    // Walking toward the first waypoint at (-4, 0).
    let before = position_of(&app, enemy).x;
    run_for(&mut app, 0.5);
    assert!(position_of(&app, enemy).x < before);
}

#[test]
fn patrol_arrival_waits_then_advances_waypoint_and_idles() {
    let mut app = sim_app();
    let enemy = spawn_enemy_at(&mut app, base_definition().into_config(), Vec2::ZERO);

    // idle 1.0s + ~2.6s walk to (-4, 0) + 0.4s wait.
    run_for(&mut app, 4.3);
    assert_eq!(enemy_state(&app, enemy), EnemyState::Idle);
    assert_eq!(params_of(&app, enemy).waypoint, 1);
    assert!(position_of(&app, enemy).distance(Vec2::new(-4.0, 0.0)) < 0.5);
}

#[test]
fn empty_waypoints_idles_forever_without_error() {
    let mut definition = base_definition();
    definition.waypoints.clear();
    let mut app = sim_app();
    let enemy = spawn_enemy_at(&mut app, definition.into_config(), Vec2::ZERO);

    // Several idle_time periods: the timer keeps resetting and the actor
    // never leaves Idle.
    let steps = (5.0 / TICK) as u32;
    for _ in 0..steps {
        tick(&mut app, TICK);
        assert_eq!(enemy_state(&app, enemy), EnemyState::Idle);
    }
    assert_eq!(position_of(&app, enemy), Vec2::ZERO);
}
