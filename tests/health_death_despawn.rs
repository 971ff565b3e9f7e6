//! Health mutation, the Hit interrupt, death latching, and delayed
//! destruction.

mod common;

use bevy::prelude::*;
use common::*;
use duskmire::combat::Hurtbox;
use duskmire::core::{DamageEvent, HealEvent, SessionContext};
use duskmire::enemies::EnemyState;

fn hurt(app: &mut App, target: Entity, source: Entity, amount: f32) {
    app.world_mut().send_event(DamageEvent {
        target,
        source,
        amount,
        knockback: Vec2::new(-2.0, 0.0),
    });
}

#[test]
fn three_hit_kill_reaches_dead_and_despawns_after_delay() {
    let mut definition = base_definition();
    definition.max_health = 3.0;
    let mut app = sim_app();
    // Damage source far outside the sight circle.
    let player = spawn_player_at(&mut app, Vec2::new(50.0, 0.0));
    let enemy = spawn_enemy_at(&mut app, definition.into_config(), Vec2::ZERO);
    tick(&mut app, TICK);

    // First hit: survives, staggers.
    hurt(&mut app, enemy, player, 1.0);
    tick(&mut app, TICK);
    assert_eq!(health_of(&app, enemy), 2.0);
    tick(&mut app, TICK);
    assert_eq!(enemy_state(&app, enemy), EnemyState::Hit);

    // Two more: health reaches zero and Dead follows within a tick.
    hurt(&mut app, enemy, player, 1.0);
    tick(&mut app, TICK);
    hurt(&mut app, enemy, player, 1.0);
    tick(&mut app, TICK);
    assert_eq!(health_of(&app, enemy), 0.0);
    tick(&mut app, TICK);
    assert_eq!(enemy_state(&app, enemy), EnemyState::Dead);

    // Collision is gone the moment Dead is entered.
    assert!(app.world().get::<Hurtbox>(enemy).is_none());

    // Damage on a dead actor is a no-op and fires no second death.
    hurt(&mut app, enemy, player, 5.0);
    tick(&mut app, TICK);
    assert_eq!(health_of(&app, enemy), 0.0);
    assert_eq!(enemy_state(&app, enemy), EnemyState::Dead);
    assert_eq!(app.world().resource::<SessionContext>().kills, 1);

    // Destruction is requested once, after the configured 0.6s delay.
    run_for(&mut app, 0.45);
    assert!(!is_despawned(&app, enemy));
    run_for(&mut app, 0.3);
    assert!(is_despawned(&app, enemy));
}

#[test]
fn nonfatal_hit_enters_hit_state_then_resumes() {
    let mut app = sim_app();
    // Outside the sight circle but inside the chase bounds, so the
    // post-stagger re-acquisition has somewhere legal to go.
    let player = spawn_player_at(&mut app, Vec2::new(8.0, 0.0));
    let enemy = spawn_enemy_at(&mut app, base_definition().into_config(), Vec2::ZERO);
    tick(&mut app, TICK);

    hurt(&mut app, enemy, player, 1.0);
    tick(&mut app, TICK);
    tick(&mut app, TICK);
    assert_eq!(enemy_state(&app, enemy), EnemyState::Hit);
    assert_eq!(health_of(&app, enemy), 19.0);

    // Heal undoes the hit exactly; clamping only matters at the bounds.
    app.world_mut().send_event(HealEvent {
        target: enemy,
        amount: 1.0,
    });
    tick(&mut app, TICK);
    assert_eq!(health_of(&app, enemy), 20.0);

    // The hurt clip (0.35s) runs out; the survivor re-acquires the living
    // player by lookup and chases.
    run_for(&mut app, 0.5);
    assert_eq!(enemy_state(&app, enemy), EnemyState::Chase);
    assert_eq!(params_of(&app, enemy).target, Some(player));
    assert!(!params_of(&app, enemy).is_hit);
}
