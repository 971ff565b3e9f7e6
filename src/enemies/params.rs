//! Runtime parameter block shared by all of an actor's states.

use bevy::prelude::*;
use std::sync::Arc;

use super::config::{EscalationRule, SpeciesConfig};
use crate::core::Cooldown;

/// Handle to the species behavior table this actor was spawned from.
#[derive(Component, Clone)]
pub struct Species(pub Arc<SpeciesConfig>);

/// Mutable per-actor state, visible to every state of the actor's machine.
///
/// There is exactly one of these per enemy; states read and write it in
/// place rather than holding copies.
#[derive(Component)]
pub struct EnemyParams {
    /// Current pursuit target, cleared on loss.
    pub target: Option<Entity>,
    /// Interrupt flag armed by damage application, consumed by the Hit state.
    pub is_hit: bool,
    /// Impulse recorded with the hit, applied when the Hit state is entered.
    pub pending_knockback: Option<Vec2>,
    /// Index of the current patrol waypoint.
    pub waypoint: usize,
    /// Consecutive basic attacks, for combo escalation.
    pub combo_hits: u32,
    /// Gate for entering an attack from Chase.
    pub attack_cooldown: Cooldown,
    /// Boss-phase movement multiplier.
    pub speed_mult: f32,
    /// Boss-phase cooldown multiplier.
    pub cooldown_mult: f32,
    /// Boss-phase escalation override.
    pub escalation_override: Option<EscalationRule>,
    /// Boss phases already applied.
    pub phase: usize,
}

impl EnemyParams {
    pub fn from_config(config: &SpeciesConfig) -> Self {
        Self {
            target: None,
            is_hit: false,
            pending_knockback: None,
            waypoint: 0,
            combo_hits: 0,
            attack_cooldown: Cooldown::new(config.attack_cooldown),
            speed_mult: 1.0,
            cooldown_mult: 1.0,
            escalation_override: None,
            phase: 0,
        }
    }

    /// Escalation rule currently in effect.
    pub fn escalation(&self, config: &SpeciesConfig) -> EscalationRule {
        self.escalation_override.unwrap_or(config.escalation)
    }
}

/// Tick every enemy's attack cooldown.
pub fn tick_enemy_cooldowns(time: Res<Time>, mut query: Query<&mut EnemyParams>) {
    let dt = time.delta_secs();
    for mut params in query.iter_mut() {
        params.attack_cooldown.tick(dt);
    }
}
