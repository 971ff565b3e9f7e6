//! Player module - command surface, abilities, and attack controller.

mod components;
mod plugin;
mod systems;

pub use components::{Abilities, AttackController, Player, PlayerCommand, PlayerConfig};
pub use plugin::PlayerPlugin;
pub use systems::spawn_player;
