//! Enemies module - the behavior state machine and per-species tables.

mod animation;
mod attack;
mod behavior;
mod boss;
mod config;
mod data;
mod error;
mod fsm;
mod params;
mod perception;
mod plugin;
mod spawning;

pub use animation::Animator;
pub use attack::{continuation_state, entry_attack_state};
pub use config::{
    AttackSpec, BossPhase, ChaseStyle, DriveSpec, EscalationRule, SpeciesConfig, SpeciesDefinition,
};
pub use data::{load_species_file, SpeciesRegistry};
pub use error::SpeciesLoadError;
pub use fsm::{transition, EnemyState, StateMachine};
pub use params::{EnemyParams, Species};
pub use perception::Perception;
pub use plugin::EnemyPlugin;
pub use spawning::{spawn_enemy, spawn_from_config};
