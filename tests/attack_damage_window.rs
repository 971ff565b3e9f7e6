//! Damage-window resolution: one application per activation, cooldown
//! gating, and looped re-entry.

mod common;

use bevy::prelude::*;
use common::*;
use duskmire::enemies::{ChaseStyle, EnemyState};
use duskmire::player::{PlayerCommand, PlayerConfig};

fn tough_player_config() -> PlayerConfig {
    PlayerConfig {
        max_health: 100.0,
        invuln_window: 0.0,
        ..Default::default()
    }
}

#[test]
fn window_hit_applies_damage_exactly_once_despite_dense_ticking() {
    let mut app = sim_app();
    app.insert_resource(tough_player_config());
    let player = spawn_player_at(&mut app, Vec2::new(1.0, 0.0));
    let enemy = spawn_enemy_at(&mut app, base_definition().into_config(), Vec2::ZERO);

    // 0.6s covers the whole damage window (0.3..0.7 of a 0.7s clip) with
    // ~25 ticks inside it.
    let steps = (0.6 / TICK) as u32;
    for _ in 0..steps {
        send(&mut app, PlayerCommand::Move(0.0));
        tick(&mut app, TICK);
    }
    assert!(enemy_state(&app, enemy).is_attacking());
    assert_eq!(health_of(&app, player), 99.0);
}

#[test]
fn looping_attack_second_activation_applies_again() {
    let mut app = sim_app();
    app.insert_resource(tough_player_config());
    let player = spawn_player_at(&mut app, Vec2::new(1.0, 0.0));
    let _enemy = spawn_enemy_at(&mut app, base_definition().into_config(), Vec2::ZERO);

    // First activation plus the looped re-entry's full window.
    let steps = (1.3 / TICK) as u32;
    for _ in 0..steps {
        send(&mut app, PlayerCommand::Move(0.0));
        tick(&mut app, TICK);
    }
    assert_eq!(health_of(&app, player), 98.0);
}

#[test]
fn cooldown_gates_reentry_from_chase_while_holding_ground() {
    let mut definition = base_definition();
    definition.attack_cooldown = 1.0;
    definition.chase_style = ChaseStyle::HoldGround;

    let mut app = sim_app();
    app.insert_resource(tough_player_config());
    let player = spawn_player_at(&mut app, Vec2::new(1.0, 0.0));
    let enemy = spawn_enemy_at(&mut app, definition.into_config(), Vec2::ZERO);

    // The first attack starts immediately and triggers the cooldown.
    send(&mut app, PlayerCommand::Move(0.0));
    tick(&mut app, TICK);
    assert_eq!(enemy_state(&app, enemy), EnemyState::Attack);

    // Pull the target out of reach mid-swing so the attack resolves into
    // Chase rather than looping.
    let mut elapsed = TICK;
    while elapsed < 0.5 {
        send(&mut app, PlayerCommand::Move(0.0));
        tick(&mut app, TICK);
        elapsed += TICK;
    }
    teleport(&mut app, player, Vec2::new(4.0, 0.0));
    while elapsed < 0.8 {
        send(&mut app, PlayerCommand::Move(0.0));
        tick(&mut app, TICK);
        elapsed += TICK;
    }
    assert_eq!(enemy_state(&app, enemy), EnemyState::Chase);

    // Back in reach with the cooldown still running: hold ground, no attack.
    teleport(&mut app, player, Vec2::new(position_of(&app, enemy).x + 1.0, 0.0));
    while elapsed < 0.9 {
        send(&mut app, PlayerCommand::Move(0.0));
        tick(&mut app, TICK);
        elapsed += TICK;
    }
    assert_eq!(enemy_state(&app, enemy), EnemyState::Chase);

    // Cooldown elapsed: the attack comes out.
    while elapsed < 1.25 {
        send(&mut app, PlayerCommand::Move(0.0));
        tick(&mut app, TICK);
        elapsed += TICK;
    }
    assert_eq!(enemy_state(&app, enemy), EnemyState::Attack);
}
