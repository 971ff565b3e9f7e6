//! Attack hitboxes and the region overlap primitive.
//!
//! `overlap_circle` is the sole hit-detection primitive in the simulation:
//! a pure, side-effect-free query that can be called every tick. Damage
//! application on top of it is made idempotent per activation by the
//! hitbox's hit-set.

use bevy::prelude::*;
use std::collections::HashSet;

use super::components::Team;

/// Tag describing which attack category a hitbox belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackTag {
    Slash,
    Slam,
}

/// Damage-dealing region owned by an attacker.
///
/// The region is a circle at `offset` (mirrored by facing) from the owner.
/// While `active`, overlap hits are resolved every tick, but each activation
/// damages a given target at most once: the hit-set is cleared on activation
/// and consulted before every application.
#[derive(Component, Debug)]
pub struct AttackHitbox {
    pub damage: f32,
    pub tag: AttackTag,
    pub offset: Vec2,
    pub radius: f32,
    active: bool,
    hit: HashSet<Entity>,
}

impl AttackHitbox {
    pub fn new(damage: f32, tag: AttackTag, offset: Vec2, radius: f32) -> Self {
        Self {
            damage,
            tag,
            offset,
            radius,
            active: false,
            hit: HashSet::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Arm the hitbox for a fresh activation, forgetting previous victims.
    pub fn begin_activation(&mut self) {
        self.active = true;
        self.hit.clear();
    }

    pub fn end_activation(&mut self) {
        self.active = false;
    }

    /// Record a hit against `target`. Returns `false` if this activation
    /// already damaged it.
    pub fn register_hit(&mut self, target: Entity) -> bool {
        self.hit.insert(target)
    }

    /// Targets damaged by the current activation.
    pub fn hits_this_activation(&self) -> usize {
        self.hit.len()
    }
}

/// Pure circle overlap query.
///
/// Returns every candidate whose hurt circle intersects the query circle and
/// whose team is opposed by `mask`. Candidates are
/// `(entity, center, hurt radius, team)` tuples, so callers can feed either
/// an ECS query or plain data.
pub fn overlap_circle(
    center: Vec2,
    radius: f32,
    mask: Team,
    candidates: impl IntoIterator<Item = (Entity, Vec2, f32, Team)>,
) -> Vec<Entity> {
    let mut found = Vec::new();
    for (entity, pos, hurt_radius, team) in candidates {
        if !mask.opposes(team) {
            continue;
        }
        let reach = radius + hurt_radius;
        if pos.distance_squared(center) <= reach * reach {
            found.push(entity);
        }
    }
    found
}
