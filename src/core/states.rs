//! Game state definitions that control the overall flow of the simulation.
//!
//! States determine which systems run at any given time. Behavior and combat
//! systems only run in the InGame state.

use bevy::prelude::*;

/// Main game states.
///
/// The simulation transitions between these states:
/// - Start in `Loading` while species data files are read
/// - Move to `InGame` once the registry is populated
/// - `GameOver` when the player dies
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading species definitions
    #[default]
    Loading,
    /// Active simulation
    InGame,
    /// Player has died
    GameOver,
}
