//! Boss phase thresholds rewrite the parameter block exactly once each.

mod common;

use bevy::prelude::*;
use common::*;
use duskmire::core::DamageEvent;
use duskmire::enemies::SpeciesConfig;

fn boss_species() -> SpeciesConfig {
    let mut definition = base_definition();
    definition.max_health = 100.0;
    definition.dash = Some(
        ron::from_str(
            r#"(
                clip: "dash_attack",
                damage: 3.0,
                window: (0.2, 0.5),
                point_offset: (1.0, 0.0),
                point_radius: 0.8,
                drive: Some((speed: 11.0, drive_time: 0.3, decel_time: 0.2)),
            )"#,
        )
        .unwrap(),
    );
    definition.clips.insert("dash_attack".into(), 0.9);
    definition.boss_phases = ron::from_str(
        r#"[
            (health_below: 0.66, speed_mult: 1.25, cooldown_mult: 0.8),
            (health_below: 0.33, speed_mult: 1.5, cooldown_mult: 0.6,
             escalation: Some(ComboDash(hits: 2))),
        ]"#,
    )
    .unwrap();
    definition.into_config()
}

fn hurt(app: &mut App, target: Entity, source: Entity, amount: f32) {
    app.world_mut().send_event(DamageEvent {
        target,
        source,
        amount,
        knockback: Vec2::ZERO,
    });
}

#[test]
fn phases_apply_once_at_their_thresholds() {
    let mut app = sim_app();
    let player = spawn_player_at(&mut app, Vec2::new(50.0, 0.0));
    let boss = spawn_enemy_at(&mut app, boss_species(), Vec2::ZERO);
    tick(&mut app, TICK);

    // Full health: no phase active.
    assert_eq!(params_of(&app, boss).phase, 0);
    assert_eq!(params_of(&app, boss).speed_mult, 1.0);

    // Drop to 60%: first phase only.
    hurt(&mut app, boss, player, 40.0);
    run_for(&mut app, 0.1);
    let params = params_of(&app, boss);
    assert_eq!(params.phase, 1);
    assert_eq!(params.speed_mult, 1.25);
    assert_eq!(params.cooldown_mult, 0.8);
    assert!(params.escalation_override.is_none());

    // Drop to 30%: second phase, with the escalation override.
    hurt(&mut app, boss, player, 30.0);
    run_for(&mut app, 0.5);
    let params = params_of(&app, boss);
    assert_eq!(params.phase, 2);
    assert_eq!(params.speed_mult, 1.5);
    assert_eq!(params.cooldown_mult, 0.6);
    assert!(params.escalation_override.is_some());

    // Further damage cannot re-apply or invent phases.
    hurt(&mut app, boss, player, 10.0);
    run_for(&mut app, 0.5);
    assert_eq!(params_of(&app, boss).phase, 2);
}

#[test]
fn one_big_hit_can_cross_both_thresholds() {
    let mut app = sim_app();
    let player = spawn_player_at(&mut app, Vec2::new(50.0, 0.0));
    let boss = spawn_enemy_at(&mut app, boss_species(), Vec2::ZERO);
    tick(&mut app, TICK);

    hurt(&mut app, boss, player, 80.0);
    run_for(&mut app, 0.1);
    let params = params_of(&app, boss);
    assert_eq!(params.phase, 2);
    assert_eq!(params.speed_mult, 1.5);
    assert_eq!(params.cooldown_mult, 0.6);
}
