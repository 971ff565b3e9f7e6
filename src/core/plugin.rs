//! Core plugin that sets up game states, events, and tick ordering.

use bevy::prelude::*;

use super::events::*;
use super::movement::integrate_velocity;
use super::session::SessionContext;
use super::states::GameState;

/// Top-level ordering of one simulation tick.
///
/// Everything runs single-threaded within one `Update` pass:
/// commands first, then behavior state machines, then combat resolution,
/// then the one position-integration step.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// External command intake (player input surface).
    Commands,
    /// Enemy perception + state machines.
    Behavior,
    /// Hit resolution, damage application, death handling.
    Combat,
    /// Velocity integration.
    Integrate,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, GameOver)
/// - Global events (DamageEvent, DeathEvent, etc.)
/// - Deterministic tick ordering via [`SimSet`]
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            // Session-scoped counters
            .init_resource::<SessionContext>()
            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DamageTakenEvent>()
            .add_event::<HealEvent>()
            .add_event::<HealedEvent>()
            .add_event::<HealthChangedEvent>()
            .add_event::<DeathEvent>()
            // One global tick: commands → behavior → combat → integrate
            .configure_sets(
                Update,
                (
                    SimSet::Commands,
                    SimSet::Behavior,
                    SimSet::Combat,
                    SimSet::Integrate,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(Update, integrate_velocity.in_set(SimSet::Integrate));
    }
}
