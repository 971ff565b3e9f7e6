//! Enemy plugin - registers the behavior state machine systems.

use bevy::prelude::*;

use super::animation::advance_animators;
use super::attack::attack_behavior;
use super::behavior::{
    chase_behavior, dead_behavior, hit_behavior, idle_behavior, patrol_behavior,
};
use super::boss::boss_phases;
use super::data::{finish_loading, load_species_definitions, SpeciesRegistry};
use super::fsm::{interrupt_transitions, tick_state_clock};
use super::params::tick_enemy_cooldowns;
use super::perception::update_perception;
use crate::core::{GameState, SimSet};

/// Enemy plugin - species loading, perception, behavior, and despawning.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpeciesRegistry>()
            // Load definitions while in Loading, then start the simulation.
            .add_systems(
                OnEnter(GameState::Loading),
                (load_species_definitions, finish_loading).chain(),
            )
            // One behavior pass per tick, strictly ordered: cooldowns and
            // perception feed the interrupt edges, then each state runs,
            // then clip playback advances.
            .add_systems(
                Update,
                (
                    tick_enemy_cooldowns,
                    update_perception,
                    interrupt_transitions,
                    tick_state_clock,
                    idle_behavior,
                    patrol_behavior,
                    chase_behavior,
                    attack_behavior,
                    hit_behavior,
                    dead_behavior,
                    boss_phases,
                    advance_animators,
                )
                    .chain()
                    .in_set(SimSet::Behavior),
            );
    }
}
