//! Enemy spawning from the species registry.

use bevy::prelude::*;
use std::sync::Arc;

use super::animation::Animator;
use super::config::SpeciesConfig;
use super::fsm::StateMachine;
use super::params::{EnemyParams, Species};
use super::perception::Perception;
use crate::combat::{Facing, Health, Hurtbox, Team};
use crate::core::Velocity;

use super::data::SpeciesRegistry;

/// Spawn one enemy of a registered species at `position`.
///
/// An unknown species name degrades with a warning instead of panicking.
pub fn spawn_enemy(
    commands: &mut Commands,
    registry: &SpeciesRegistry,
    species: &str,
    position: Vec2,
) -> Option<Entity> {
    let Some(config) = registry.get(species) else {
        warn!("No species definition for '{}', skipping spawn", species);
        return None;
    };
    Some(spawn_from_config(commands, config, position))
}

/// Spawn directly from a behavior table (tests and tools).
pub fn spawn_from_config(
    commands: &mut Commands,
    config: Arc<SpeciesConfig>,
    position: Vec2,
) -> Entity {
    // The initial transition into Idle: the machine defaults to Idle and
    // the idle clip starts playing.
    let mut animator = Animator::default();
    animator.play("idle", &config);

    commands
        .spawn((
            EnemyParams::from_config(&config),
            Species(config.clone()),
            StateMachine::new(),
            Perception::default(),
            Health::new(config.max_health).with_invulnerability(config.invuln_window),
            Hurtbox::new(config.hurt_radius),
            Team::Enemy,
            Facing::default(),
            Velocity::default(),
            animator,
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}
