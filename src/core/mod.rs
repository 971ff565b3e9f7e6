//! Core simulation module - states, events, and fundamental systems.
//!
//! This module provides the foundation that all other systems build upon.

mod cooldown;
mod events;
mod movement;
mod plugin;
mod session;
mod states;

pub use cooldown::Cooldown;
pub use events::*;
pub use movement::{integrate_velocity, Velocity};
pub use plugin::{CorePlugin, SimSet};
pub use session::SessionContext;
pub use states::GameState;
