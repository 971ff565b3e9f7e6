//! Idle, Patrol, Chase, Hit, and Dead state behaviors.
//!
//! Attack states live in `attack`. Each system only touches actors whose
//! machine is in its state; all transitions go through the shared protocol
//! in `fsm`.

use bevy::prelude::*;

use super::animation::Animator;
use super::fsm::{transition, EnemyState, StateMachine};
use super::params::{EnemyParams, Species};
use crate::combat::{overlap_circle, Facing, Health, Hurtbox, Team};
use crate::core::Velocity;
use crate::player::Player;

/// How close an actor must get to a waypoint to count as arrived.
const ARRIVAL_RADIUS: f32 = 0.1;

/// Exponential decay rate for knockback velocity during the hit stagger.
const HIT_KNOCKBACK_DAMPING: f32 = 8.0;

type PlayerQuery<'w, 's> = Query<
    'w,
    's,
    (Entity, &'static Transform, &'static Hurtbox, &'static Health),
    (With<Player>, Without<EnemyParams>),
>;

/// Position of the stored target, if it is still alive.
fn live_target_position(target: Option<Entity>, players: &PlayerQuery) -> Option<Vec2> {
    let entity = target?;
    let (_, transform, _, health) = players.get(entity).ok()?;
    (!health.is_dead()).then(|| transform.translation.truncate())
}

fn in_chase_bounds(bounds: (f32, f32), x: f32) -> bool {
    x >= bounds.0 && x <= bounds.1
}

/// Idle: wait out the idle time, then patrol. A stored target inside the
/// chase bounds pulls straight into Chase. Without waypoints the timer
/// resets and the actor simply stays idle.
pub fn idle_behavior(
    mut commands: Commands,
    players: PlayerQuery,
    mut enemies: Query<(
        Entity,
        &Species,
        &mut StateMachine,
        &mut EnemyParams,
        &mut Velocity,
        &mut Animator,
    )>,
) {
    for (entity, species, mut machine, mut params, mut velocity, mut animator) in enemies.iter_mut()
    {
        if machine.state() != EnemyState::Idle {
            continue;
        }
        let config = &species.0;

        if let Some(target_pos) = live_target_position(params.target, &players) {
            if in_chase_bounds(config.chase_bounds, target_pos.x) {
                transition(
                    entity,
                    &mut commands,
                    &mut machine,
                    EnemyState::Chase,
                    config,
                    &mut params,
                    &mut velocity,
                    &mut animator,
                );
                continue;
            }
        }

        if machine.elapsed >= config.idle_time {
            if config.waypoints.is_empty() {
                // Nowhere to go: reset and keep idling.
                machine.elapsed = 0.0;
            } else {
                transition(
                    entity,
                    &mut commands,
                    &mut machine,
                    EnemyState::Patrol,
                    config,
                    &mut params,
                    &mut velocity,
                    &mut animator,
                );
            }
        }
    }
}

/// Patrol: walk to the current waypoint, wait there, then advance the
/// (cyclic) index and return to Idle.
pub fn patrol_behavior(
    mut commands: Commands,
    time: Res<Time>,
    players: PlayerQuery,
    mut enemies: Query<(
        Entity,
        &Transform,
        &Species,
        &mut Facing,
        &mut StateMachine,
        &mut EnemyParams,
        &mut Velocity,
        &mut Animator,
    )>,
) {
    let dt = time.delta_secs();
    for (entity, transform, species, mut facing, mut machine, mut params, mut velocity, mut animator) in
        enemies.iter_mut()
    {
        if machine.state() != EnemyState::Patrol {
            continue;
        }
        let config = &species.0;

        if let Some(target_pos) = live_target_position(params.target, &players) {
            if in_chase_bounds(config.chase_bounds, target_pos.x) {
                transition(
                    entity,
                    &mut commands,
                    &mut machine,
                    EnemyState::Chase,
                    config,
                    &mut params,
                    &mut velocity,
                    &mut animator,
                );
                continue;
            }
        }

        if config.waypoints.is_empty() {
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
        }

        let position = transform.translation.truncate();
        let waypoint = config.waypoints[params.waypoint % config.waypoints.len()];
        let offset = waypoint - position;
        facing.turn_toward(offset.x);

        if offset.length_squared() <= ARRIVAL_RADIUS * ARRIVAL_RADIUS {
            velocity.0 = Vec2::ZERO;
            machine.wait += dt;
            if machine.wait >= config.patrol_wait {
                params.waypoint = (params.waypoint + 1) % config.waypoints.len();
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
            }
        } else {
            velocity.0 = offset.normalize_or_zero() * config.patrol_speed * params.speed_mult;
        }
    }
}

/// Chase: pursue horizontally inside the chase bounds; hand over to an
/// attack state when the attack point reaches the target and the cooldown
/// is ready.
pub fn chase_behavior(
    mut commands: Commands,
    players: PlayerQuery,
    mut enemies: Query<(
        Entity,
        &Transform,
        &Species,
        &mut Facing,
        &mut StateMachine,
        &mut EnemyParams,
        &mut Velocity,
        &mut Animator,
    )>,
) {
    for (entity, transform, species, mut facing, mut machine, mut params, mut velocity, mut animator) in
        enemies.iter_mut()
    {
        if machine.state() != EnemyState::Chase {
            continue;
        }
        let config = &species.0;

        let target = params.target;
        let target_data = target.and_then(|t| players.get(t).ok());
        let Some((target_entity, target_transform, target_hurtbox, target_health)) = target_data
        else {
            params.target = None;
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
        if target_health.is_dead() {
            params.target = None;
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
        }

        let target_pos = target_transform.translation.truncate();
        if !in_chase_bounds(config.chase_bounds, target_pos.x) {
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
        }

        let position = transform.translation.truncate();
        facing.turn_toward(target_pos.x - position.x);

        let point = config.attack.point();
        let center = position + Vec2::new(point.x * facing.0, point.y);
        let in_range = !overlap_circle(
            center,
            config.attack.point_radius,
            Team::Enemy,
            [(target_entity, target_pos, target_hurtbox.radius, Team::Player)],
        )
        .is_empty();

        if in_range && params.attack_cooldown.ready() {
            let duration = config.attack_cooldown * params.cooldown_mult;
            params.attack_cooldown.set_duration(duration);
            params.attack_cooldown.trigger();
            let entry = super::attack::entry_attack_state(params.escalation(config));
            transition(
                entity,
                &mut commands,
                &mut machine,
                entry,
                config,
                &mut params,
                &mut velocity,
                &mut animator,
            );
        } else if in_range && config.chase_style == super::config::ChaseStyle::HoldGround {
            // Cooling down: hold position, keep facing the target.
            velocity.0.x = 0.0;
        } else {
            let dir = (target_pos.x - position.x).signum();
            velocity.0.x = dir * config.chase_speed * params.speed_mult;
        }
    }
}

/// Hit: sit out the hurt clip, then clear the flag, re-acquire the player,
/// and resume (Chase with a target, Idle without, Dead if health ran out).
pub fn hit_behavior(
    mut commands: Commands,
    time: Res<Time>,
    players: PlayerQuery,
    mut enemies: Query<(
        Entity,
        &Species,
        &Health,
        &mut StateMachine,
        &mut EnemyParams,
        &mut Velocity,
        &mut Animator,
    )>,
) {
    for (entity, species, health, mut machine, mut params, mut velocity, mut animator) in
        enemies.iter_mut()
    {
        if machine.state() != EnemyState::Hit {
            continue;
        }
        if !animator.finished() {
            // The knockback impulse bleeds off over the stagger.
            let damp = (1.0 - HIT_KNOCKBACK_DAMPING * time.delta_secs()).max(0.0);
            velocity.0 *= damp;
            continue;
        }
        let config = &species.0;

        params.is_hit = false;
        params.pending_knockback = None;

        let next = if health.is_dead() {
            EnemyState::Dead
        } else {
            match players.iter().find(|(.., h)| !h.is_dead()) {
                Some((player_entity, ..)) => {
                    params.target = Some(player_entity);
                    EnemyState::Chase
                }
                None => {
                    params.target = None;
                    EnemyState::Idle
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

/// Dead: terminal. After the configured delay, request destruction exactly
/// once; the latch keeps later ticks from scheduling it again.
pub fn dead_behavior(
    mut commands: Commands,
    mut enemies: Query<(Entity, &Species, &mut StateMachine)>,
) {
    for (entity, species, mut machine) in enemies.iter_mut() {
        if machine.state() != EnemyState::Dead {
            continue;
        }
        if machine.elapsed >= species.0.despawn_delay && !machine.despawning {
            machine.despawning = true;
            commands.entity(entity).despawn_recursive();
        }
    }
}
