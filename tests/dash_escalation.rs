//! Combo escalation into the dash attack, including its drive phase.

mod common;

use bevy::prelude::*;
use common::*;
use duskmire::core::Velocity;
use duskmire::enemies::{EnemyState, SpeciesConfig, StateMachine};
use duskmire::player::{PlayerCommand, PlayerConfig};

fn comboing_species() -> SpeciesConfig {
    let mut definition = base_definition();
    definition.attack_cooldown = 0.5;
    definition.escalation = ron::from_str("ComboDash(hits: 2)").unwrap();
    definition.dash = Some(
        ron::from_str(
            r#"(
                clip: "dash_attack",
                damage: 2.0,
                window: (0.2, 0.5),
                point_offset: (1.0, 0.0),
                point_radius: 0.8,
                drive: Some((speed: 9.0, drive_time: 0.25, decel_time: 0.15)),
            )"#,
        )
        .unwrap(),
    );
    definition.clips.insert("dash_attack".into(), 0.8);
    definition.into_config()
}

#[test]
fn two_swings_then_dash_then_reset() {
    let mut app = sim_app();
    app.insert_resource(PlayerConfig {
        max_health: 1000.0,
        invuln_window: 0.0,
        ..Default::default()
    });
    let _player = spawn_player_at(&mut app, Vec2::new(1.0, 0.0));
    let enemy = spawn_enemy_at(&mut app, comboing_species(), Vec2::ZERO);

    // Record every attack-state entry. Same-state re-entries show up as the
    // elapsed-in-state clock snapping back, which is exactly the protocol's
    // deliberate reset.
    let mut entries: Vec<EnemyState> = Vec::new();
    let mut last_state = EnemyState::Idle;
    let mut last_elapsed = 0.0_f32;
    let mut max_dash_speed = 0.0_f32;

    let steps = (6.0 / TICK) as u32;
    for _ in 0..steps {
        send(&mut app, PlayerCommand::Move(0.0));
        tick(&mut app, TICK);

        let machine = app.world().get::<StateMachine>(enemy).unwrap();
        let state = machine.state();
        let elapsed = machine.elapsed;
        if state.is_attacking() && (state != last_state || elapsed < last_elapsed) {
            entries.push(state);
        }
        if state == EnemyState::DashAttack {
            let velocity = app.world().get::<Velocity>(enemy).unwrap();
            max_dash_speed = max_dash_speed.max(velocity.0.x.abs());
        }
        last_state = state;
        last_elapsed = elapsed;
        if entries.len() >= 4 {
            break;
        }
    }

    assert!(
        entries.len() >= 4,
        "expected at least four attack entries, got {:?}",
        entries
    );
    assert_eq!(
        &entries[..4],
        &[
            EnemyState::Attack,
            EnemyState::Attack,
            EnemyState::DashAttack,
            EnemyState::Attack,
        ],
        "combo counter must force the dash after two swings and reset"
    );
    // The drive phase actually translates at dash speed.
    assert!(max_dash_speed > 8.0, "dash drive speed was {max_dash_speed}");
}
