//! Duskmire - the behavior and combat core of a 2D action game.
//!
//! Every hostile actor runs the same state machine protocol
//! (Idle/Patrol/Chase/Attack/Hit/Dead with per-species attack escalations),
//! fed by layered perception and resolved through time-windowed, idempotent
//! damage application.
//!
//! # Architecture
//!
//! The simulation is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, cooldowns, velocity integration
//! - **Combat**: Health, hitboxes, the overlap primitive, damage flow
//! - **Enemies**: The state machine engine and per-species behavior tables
//! - **Player**: Command surface, ability cooldowns, attack controller
//!
//! Rendering, audio, input binding, and scene management are external; the
//! core consumes them through narrow interfaces (clip playback timing, the
//! command event stream) and can run entirely headless.

pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;

use bevy::prelude::*;

/// Main simulation plugin that adds all sub-plugins.
///
/// Requires `StatesPlugin` (part of `DefaultPlugins`) to be registered.
pub struct DuskmirePlugin;

impl Plugin for DuskmirePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            // Player systems
            .add_plugins(player::PlayerPlugin)
            // Combat systems
            .add_plugins(combat::CombatPlugin)
            // Enemy systems
            .add_plugins(enemies::EnemyPlugin);
    }
}
