//! Attack states: damage windows, dash translation, and escalation.
//!
//! All four attack states share one behavior: play the clip, run a single
//! idempotent hit check inside the damage window, and decide at the end of
//! the clip whether to keep attacking, escalate, or fall back. Dash and
//! heavy attacks additionally drive the actor forward for an elapsed-time
//! bounded phase that is independent of the damage window.

use bevy::prelude::*;

use super::animation::Animator;
use super::config::{AttackSpec, EscalationRule, SpeciesConfig};
use super::fsm::{transition, EnemyState, StateMachine};
use super::params::{EnemyParams, Species};
use crate::combat::{overlap_circle, Facing, Health, Hurtbox, Team, KNOCKBACK_IMPULSE};
use crate::core::{DamageEvent, Velocity};
use crate::player::Player;

/// Normalized progress at which an attack resolves its continuation.
const CONTINUE_AT: f32 = 0.95;

/// The state a species enters when an attack opportunity opens from Chase.
pub fn entry_attack_state(rule: EscalationRule) -> EnemyState {
    match rule {
        EscalationRule::HeavyOnly => EnemyState::HeavyAttack,
        _ => EnemyState::Attack,
    }
}

/// The state an in-range attack chains into once its clip ends.
///
/// `combo_hits` counts consecutive basic attacks for `ComboDash`; a
/// completed dash resets it.
pub fn continuation_state(
    current: EnemyState,
    rule: EscalationRule,
    combo_hits: &mut u32,
) -> EnemyState {
    match rule {
        EscalationRule::Loop => EnemyState::Attack,
        EscalationRule::HeavyOnly => EnemyState::HeavyAttack,
        EscalationRule::Alternate => {
            if current == EnemyState::Attack {
                EnemyState::Attack2
            } else {
                EnemyState::Attack
            }
        }
        EscalationRule::ComboDash { hits } => {
            if current == EnemyState::DashAttack {
                *combo_hits = 0;
                EnemyState::Attack
            } else {
                *combo_hits += 1;
                if *combo_hits >= hits {
                    *combo_hits = 0;
                    EnemyState::DashAttack
                } else {
                    EnemyState::Attack
                }
            }
        }
    }
}

fn spec_for<'c>(state: EnemyState, config: &'c SpeciesConfig) -> Option<&'c AttackSpec> {
    match state {
        EnemyState::Attack => Some(&config.attack),
        EnemyState::Attack2 => config.attack2.as_ref(),
        EnemyState::DashAttack => config.dash.as_ref(),
        EnemyState::HeavyAttack => config.heavy.as_ref(),
        _ => None,
    }
}

pub fn attack_behavior(
    mut commands: Commands,
    players: Query<
        (Entity, &Transform, &Hurtbox, &Health),
        (With<Player>, Without<EnemyParams>),
    >,
    mut enemies: Query<(
        Entity,
        &Transform,
        &Facing,
        &Species,
        &mut StateMachine,
        &mut EnemyParams,
        &mut Velocity,
        &mut Animator,
    )>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    for (entity, transform, facing, species, mut machine, mut params, mut velocity, mut animator) in
        enemies.iter_mut()
    {
        let state = machine.state();
        if !state.is_attacking() {
            continue;
        }
        let config = &species.0;

        let Some(spec) = spec_for(state, config) else {
            // Data hole: no table entry for this state. Degrade to Idle.
            warn!("{}: no attack table entry for {:?}", config.name, state);
            transition(
                entity,
                &mut commands,
                &mut machine,
                EnemyState::Idle,
                config,
                &mut params,
                &mut velocity,
                &mut animator,
            );
            continue;
        };

        // Dash/heavy translation phase: full speed, then a linear ramp down.
        // Bounded by elapsed time in the state, not by the damage window.
        if let Some(drive) = &spec.drive {
            if machine.elapsed < drive.drive_time {
                velocity.0.x = facing.0 * drive.speed;
            } else if machine.elapsed < drive.drive_time + drive.decel_time {
                let t = (machine.elapsed - drive.drive_time) / drive.decel_time;
                velocity.0.x = facing.0 * drive.speed * (1.0 - t);
            } else {
                velocity.0.x = 0.0;
            }
        }

        let position = transform.translation.truncate();
        let point = spec.point();
        let center = position + Vec2::new(point.x * facing.0, point.y);
        let progress = animator.progress();

        // One hit check per activation inside the damage window. The latch
        // makes repeated ticks inside the window harmless.
        if !machine.hit_applied && progress >= spec.window.0 && progress <= spec.window.1 {
            let candidates = players
                .iter()
                .filter(|(.., health)| !health.is_dead())
                .map(|(target, t, hurtbox, _)| {
                    (target, t.translation.truncate(), hurtbox.radius, Team::Player)
                });
            if let Some(&target) =
                overlap_circle(center, spec.point_radius, Team::Enemy, candidates).first()
            {
                machine.hit_applied = true;
                let target_pos = players
                    .get(target)
                    .map(|(_, t, ..)| t.translation.truncate())
                    .unwrap_or(center);
                let direction = (target_pos - position).normalize_or_zero();
                damage_events.send(DamageEvent {
                    target,
                    source: entity,
                    amount: spec.damage,
                    knockback: direction * KNOCKBACK_IMPULSE,
                });
            }
        }

        if progress >= CONTINUE_AT {
            let target_data = params.target.and_then(|t| players.get(t).ok());
            let live_target = target_data
                .filter(|(.., health)| !health.is_dead())
                .map(|(target, t, hurtbox, _)| (target, t.translation.truncate(), hurtbox.radius));

            let next = match live_target {
                None => {
                    params.target = None;
                    EnemyState::Idle
                }
                Some((target, target_pos, hurt_radius)) => {
                    let still_in_range = !overlap_circle(
                        center,
                        spec.point_radius,
                        Team::Enemy,
                        [(target, target_pos, hurt_radius, Team::Player)],
                    )
                    .is_empty();
                    if still_in_range {
                        continuation_state(state, params.escalation(config), &mut params.combo_hits)
                    } else {
                        EnemyState::Chase
                    }
                }
            };
            transition(
                entity,
                &mut commands,
                &mut machine,
                next,
                config,
                &mut params,
                &mut velocity,
                &mut animator,
            );
        }
    }
}
