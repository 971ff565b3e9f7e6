//! Target acquisition and loss.
//!
//! Perception is a per-tick sight-circle containment check that produces
//! enter/exit edges. Entering sight stores the target and pulls passive
//! states into Chase; attacks in flight are never cancelled. Leaving sight
//! keeps the pursuit while the target is within the horizontal tolerance,
//! and otherwise clears the target and sends a chasing actor back to Patrol.
//! The Hit state ignores perception entirely until its clip completes.

use bevy::prelude::*;

use super::animation::Animator;
use super::fsm::{transition, EnemyState, StateMachine};
use super::params::{EnemyParams, Species};
use crate::combat::Health;
use crate::core::Velocity;
use crate::player::Player;

/// Sight bookkeeping for one actor.
#[derive(Component, Debug, Default)]
pub struct Perception {
    pub in_sight: bool,
}

pub fn update_perception(
    mut commands: Commands,
    players: Query<(Entity, &Transform, &Health), (With<Player>, Without<EnemyParams>)>,
    mut enemies: Query<(
        Entity,
        &Transform,
        &Species,
        &mut Perception,
        &mut StateMachine,
        &mut EnemyParams,
        &mut Velocity,
        &mut Animator,
    )>,
) {
    let player = players.iter().find(|(_, _, health)| !health.is_dead());

    for (entity, transform, species, mut perception, mut machine, mut params, mut velocity, mut animator) in
        enemies.iter_mut()
    {
        if matches!(machine.state(), EnemyState::Hit | EnemyState::Dead) {
            continue;
        }
        let config = &species.0;

        let Some((player_entity, player_transform, _)) = player else {
            // No living player: targets cannot survive.
            perception.in_sight = false;
            params.target = None;
            continue;
        };

        let position = transform.translation.truncate();
        let player_position = player_transform.translation.truncate();
        let inside = position.distance_squared(player_position)
            <= config.sight_radius * config.sight_radius;

        if inside && !perception.in_sight {
            perception.in_sight = true;
            params.target = Some(player_entity);
            if machine.state().is_passive() {
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
            }
        } else if !inside && perception.in_sight {
            perception.in_sight = false;
            let dx = (player_position.x - position.x).abs();
            if dx > config.sight_radius + config.sight_tolerance {
                params.target = None;
                if machine.state() == EnemyState::Chase {
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
            // Within tolerance: the pursuit continues with the stored target.
        }
    }
}
