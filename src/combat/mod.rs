//! Combat module - health, hitboxes, damage resolution.

mod components;
mod hitbox;
mod plugin;
mod systems;

pub use components::{DamageOutcome, Facing, Health, HitFlash, Hurtbox, Team};
pub use hitbox::{overlap_circle, AttackHitbox, AttackTag};
pub use plugin::CombatPlugin;
pub use systems::KNOCKBACK_IMPULSE;
