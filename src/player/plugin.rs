//! Player plugin - commands, abilities, and the attack controller.

use bevy::prelude::*;

use super::components::{PlayerCommand, PlayerConfig};
use super::systems;
use crate::core::SimSet;

/// Player plugin - handles the command surface and attack windows.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerConfig>()
            .add_event::<PlayerCommand>()
            .add_systems(
                Update,
                (
                    systems::tick_player_cooldowns,
                    systems::handle_commands,
                    systems::update_attack_window,
                    systems::apply_gravity,
                )
                    .chain()
                    .in_set(SimSet::Commands),
            );
    }
}
