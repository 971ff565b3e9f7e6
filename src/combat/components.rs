//! Combat-related components.

use bevy::prelude::*;

/// Which side an entity fights for. Attack resolution only ever damages
/// the opposing team.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    pub fn opposes(self, other: Team) -> bool {
        self != other
    }
}

/// Horizontal facing: `+1.0` is right, `-1.0` is left.
///
/// Facing is a pure function of the sign of the horizontal offset to
/// whatever the entity is oriented toward; a zero offset keeps the
/// previous facing.
#[derive(Component, Debug, Clone, Copy)]
pub struct Facing(pub f32);

impl Default for Facing {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Facing {
    /// Turn toward a horizontal offset. `dx == 0` keeps the current facing.
    pub fn turn_toward(&mut self, dx: f32) {
        if dx != 0.0 {
            self.0 = dx.signum();
        }
    }
}

/// Circular damage-receiving region centered on the entity.
///
/// Removed on death: a dead body no longer participates in overlap queries.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hurtbox {
    pub radius: f32,
}

impl Hurtbox {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

/// Result of a single [`Health::take_damage`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Dead or invulnerable - nothing happened.
    Ignored,
    /// Damage applied, entity survived.
    Applied { remaining: f32 },
    /// Damage applied and health reached zero.
    Fatal,
}

/// Component for entities that can take damage.
///
/// Invariants maintained on every mutation: `0 <= current <= max`, and once
/// `dead` is set further damage is a no-op. The invulnerability window is
/// non-reentrant: damage received while it runs is ignored, not queued.
#[derive(Component, Debug, Clone)]
pub struct Health {
    current: f32,
    max: f32,
    dead: bool,
    /// Length of the invulnerability window started by surviving a hit.
    /// Zero disables the window entirely.
    invuln_duration: f32,
    invuln_remaining: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        let max = max.max(1.0);
        Self {
            current: max,
            max,
            dead: false,
            invuln_duration: 0.0,
            invuln_remaining: 0.0,
        }
    }

    /// Builder for entities with post-hit invulnerability frames.
    pub fn with_invulnerability(mut self, duration: f32) -> Self {
        self.invuln_duration = duration.max(0.0);
        self
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn fraction(&self) -> f32 {
        self.current / self.max
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_remaining > 0.0
    }

    pub fn invulnerability_window(&self) -> f32 {
        self.invuln_duration
    }

    /// Apply damage. No-op while dead or invulnerable; otherwise subtracts,
    /// clamps to `[0, max]`, latches the dead flag at zero, and starts the
    /// invulnerability window on survival.
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.dead || self.is_invulnerable() {
            return DamageOutcome::Ignored;
        }
        let amount = amount.max(0.0);
        self.current = (self.current - amount).clamp(0.0, self.max);
        if self.current <= 0.0 {
            self.current = 0.0;
            self.dead = true;
            DamageOutcome::Fatal
        } else {
            self.invuln_remaining = self.invuln_duration;
            DamageOutcome::Applied {
                remaining: self.current,
            }
        }
    }

    /// Restore health. No-op while dead; otherwise adds and clamps to max.
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if self.dead {
            return 0.0;
        }
        let amount = amount.max(0.0);
        let before = self.current;
        self.current = (self.current + amount).clamp(0.0, self.max);
        self.current - before
    }

    /// Advance the invulnerability window by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.invuln_remaining > 0.0 {
            self.invuln_remaining = (self.invuln_remaining - dt).max(0.0);
        }
    }
}

/// Visibility-toggle sequence run alongside the invulnerability window.
///
/// Consumers map `visible` to sprite alpha; the core only drives the timing.
#[derive(Component, Debug)]
pub struct HitFlash {
    pub remaining: f32,
    pub interval: f32,
    pub phase: f32,
    pub visible: bool,
}

impl HitFlash {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration,
            interval: 0.1,
            phase: 0.0,
            visible: false,
        }
    }
}
