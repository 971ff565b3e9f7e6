//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The attack-resolution
//! systems send DamageEvents, and the health system receives them to apply
//! the actual mutation. This keeps systems independent and testable.

use bevy::prelude::*;

/// Sent when an entity should take damage.
///
/// The health system listens for these and performs the actual mutation,
/// honoring death and invulnerability.
#[derive(Event)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Damage amount
    pub amount: f32,
    /// Knockback impulse (fixed magnitude along attacker→target)
    pub knockback: Vec2,
}

/// Sent after damage was actually applied (not ignored by death or
/// invulnerability).
#[derive(Event)]
pub struct DamageTakenEvent {
    pub entity: Entity,
    pub amount: f32,
    pub remaining: f32,
}

/// Sent when an entity should be healed (pickups, scripted recovery).
#[derive(Event)]
pub struct HealEvent {
    pub target: Entity,
    pub amount: f32,
}

/// Sent after a heal was applied.
#[derive(Event)]
pub struct HealedEvent {
    pub entity: Entity,
    pub amount: f32,
}

/// Sent whenever current health changes, for HUD-style consumers.
#[derive(Event)]
pub struct HealthChangedEvent {
    pub entity: Entity,
    pub current: f32,
    pub max: f32,
}

/// Sent when an entity dies (health reaches 0).
///
/// Systems can listen for this to trigger death states, count kills,
/// or end the session.
#[derive(Event)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}
