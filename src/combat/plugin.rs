//! Combat plugin - hit resolution and damage flow.

use bevy::prelude::*;

use super::systems;
use crate::core::SimSet;

/// Combat plugin - handles all attack-resolution and health systems.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::tick_health,
                systems::update_hit_flash,
                systems::resolve_hitbox_hits,
                systems::apply_healing,
                systems::apply_damage,
                systems::handle_deaths,
            )
                .chain()
                .in_set(SimSet::Combat),
        );
    }
}
