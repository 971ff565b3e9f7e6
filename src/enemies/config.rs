//! Per-species behavior tables.
//!
//! One generic state machine drives every species; everything that differs
//! between species lives here as data. Definitions are deserialized from RON
//! files and validated into [`SpeciesConfig`], the table the behavior systems
//! read at runtime.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

/// How a species continues once an attack animation nears its end with the
/// target still in range.
///
/// The divergence between species is genuine content, so it is explicit
/// configuration rather than unified behavior.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum EscalationRule {
    /// Re-enter the basic attack every time.
    #[default]
    Loop,
    /// Alternate between the basic attack and the second attack.
    Alternate,
    /// After `hits` consecutive basic attacks, force a dash attack.
    ComboDash { hits: u32 },
    /// The species only ever uses its heavy attack.
    HeavyOnly,
}

/// What a chasing species does while its attack is cooling down in range.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChaseStyle {
    /// Keep pressing into the target at chase speed.
    #[default]
    Press,
    /// Hold position, facing the target, until the cooldown elapses.
    HoldGround,
}

/// High-speed translation phase for dash and heavy attacks.
///
/// The drive and deceleration phases are bounded by elapsed time in the
/// state, independent of the damage window.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct DriveSpec {
    /// Horizontal speed during the drive phase, along facing.
    pub speed: f32,
    /// Seconds at full speed.
    pub drive_time: f32,
    /// Seconds spent decelerating to a stop afterwards.
    pub decel_time: f32,
}

/// One attack category: clip, damage window, and contact region.
#[derive(Deserialize, Debug, Clone)]
pub struct AttackSpec {
    /// Animation clip played for this attack.
    pub clip: String,
    pub damage: f32,
    /// Damage window as a sub-interval of normalized animation progress.
    pub window: (f32, f32),
    /// Attack point, relative to the actor and mirrored by facing.
    pub point_offset: (f32, f32),
    pub point_radius: f32,
    /// Present on dash/heavy variants that translate during the attack.
    #[serde(default)]
    pub drive: Option<DriveSpec>,
}

impl AttackSpec {
    pub fn point(&self) -> Vec2 {
        Vec2::new(self.point_offset.0, self.point_offset.1)
    }
}

/// One boss phase, triggered when health falls to the given fraction.
#[derive(Deserialize, Debug, Clone)]
pub struct BossPhase {
    /// Health fraction at or below which this phase starts.
    pub health_below: f32,
    pub speed_mult: f32,
    pub cooldown_mult: f32,
    /// Optional escalation override for the rest of the fight.
    #[serde(default)]
    pub escalation: Option<EscalationRule>,
}

/// Species definition as written in `assets/data/enemies/*.ron`.
#[derive(Deserialize, Debug, Clone)]
pub struct SpeciesDefinition {
    pub name: String,
    pub max_health: f32,
    #[serde(default)]
    pub invuln_window: f32,
    pub patrol_speed: f32,
    pub chase_speed: f32,
    /// Seconds spent in Idle before patrolling.
    pub idle_time: f32,
    /// Seconds spent waiting at a reached waypoint.
    #[serde(default = "default_patrol_wait")]
    pub patrol_wait: f32,
    #[serde(default)]
    pub waypoints: Vec<(f32, f32)>,
    /// Horizontal interval beyond which pursuit is abandoned.
    pub chase_bounds: (f32, f32),
    pub sight_radius: f32,
    /// Extra horizontal slack before sight loss clears the target.
    pub sight_tolerance: f32,
    pub hurt_radius: f32,
    pub attack_cooldown: f32,
    #[serde(default)]
    pub chase_style: ChaseStyle,
    #[serde(default)]
    pub escalation: EscalationRule,
    pub attack: AttackSpec,
    #[serde(default)]
    pub attack2: Option<AttackSpec>,
    #[serde(default)]
    pub dash: Option<AttackSpec>,
    #[serde(default)]
    pub heavy: Option<AttackSpec>,
    /// Clip name → duration in seconds. Must cover "idle", "walk", "hurt",
    /// "death" and every attack clip.
    pub clips: HashMap<String, f32>,
    /// Seconds between death and the destruction request.
    #[serde(default = "default_despawn_delay")]
    pub despawn_delay: f32,
    #[serde(default)]
    pub boss_phases: Vec<BossPhase>,
}

fn default_patrol_wait() -> f32 {
    0.5
}

fn default_despawn_delay() -> f32 {
    0.6
}

/// Validated runtime behavior table for one species.
#[derive(Debug, Clone)]
pub struct SpeciesConfig {
    pub name: String,
    pub max_health: f32,
    pub invuln_window: f32,
    pub patrol_speed: f32,
    pub chase_speed: f32,
    pub idle_time: f32,
    pub patrol_wait: f32,
    pub waypoints: Vec<Vec2>,
    pub chase_bounds: (f32, f32),
    pub sight_radius: f32,
    pub sight_tolerance: f32,
    pub hurt_radius: f32,
    pub attack_cooldown: f32,
    pub chase_style: ChaseStyle,
    pub escalation: EscalationRule,
    pub attack: AttackSpec,
    pub attack2: Option<AttackSpec>,
    pub dash: Option<AttackSpec>,
    pub heavy: Option<AttackSpec>,
    pub clips: HashMap<String, f32>,
    pub despawn_delay: f32,
    pub boss_phases: Vec<BossPhase>,
}

impl SpeciesConfig {
    pub fn clip_duration(&self, name: &str) -> Option<f32> {
        self.clips.get(name).copied()
    }

    pub fn is_boss(&self) -> bool {
        !self.boss_phases.is_empty()
    }
}

impl SpeciesDefinition {
    /// Validate into a runtime config, correcting inconsistent data instead
    /// of failing: reversed bounds are swapped, damage windows are clamped
    /// into order, and escalation rules referencing a missing attack table
    /// entry degrade to `Loop`.
    pub fn into_config(self) -> SpeciesConfig {
        let mut chase_bounds = self.chase_bounds;
        if chase_bounds.0 > chase_bounds.1 {
            warn!(
                "{}: chase bounds reversed ({}, {}), swapping",
                self.name, chase_bounds.0, chase_bounds.1
            );
            chase_bounds = (chase_bounds.1, chase_bounds.0);
        }

        let escalation = match self.escalation {
            EscalationRule::Alternate if self.attack2.is_none() => {
                warn!("{}: Alternate escalation without attack2, using Loop", self.name);
                EscalationRule::Loop
            }
            EscalationRule::ComboDash { .. } if self.dash.is_none() => {
                warn!("{}: ComboDash escalation without dash, using Loop", self.name);
                EscalationRule::Loop
            }
            EscalationRule::HeavyOnly if self.heavy.is_none() => {
                warn!("{}: HeavyOnly escalation without heavy, using Loop", self.name);
                EscalationRule::Loop
            }
            rule => rule,
        };

        let mut phases = self.boss_phases;
        phases.sort_by(|a, b| b.health_below.total_cmp(&a.health_below));

        SpeciesConfig {
            name: self.name,
            max_health: self.max_health.max(1.0),
            invuln_window: self.invuln_window.max(0.0),
            patrol_speed: self.patrol_speed,
            chase_speed: self.chase_speed,
            idle_time: self.idle_time.max(0.0),
            patrol_wait: self.patrol_wait.max(0.0),
            waypoints: self
                .waypoints
                .into_iter()
                .map(|(x, y)| Vec2::new(x, y))
                .collect(),
            chase_bounds,
            sight_radius: self.sight_radius.max(0.0),
            sight_tolerance: self.sight_tolerance.max(0.0),
            hurt_radius: self.hurt_radius.max(0.0),
            attack_cooldown: self.attack_cooldown.max(0.0),
            chase_style: self.chase_style,
            escalation,
            attack: clamp_window(self.attack),
            attack2: self.attack2.map(clamp_window),
            dash: self.dash.map(clamp_window),
            heavy: self.heavy.map(clamp_window),
            clips: self.clips,
            despawn_delay: self.despawn_delay.max(0.0),
            boss_phases: phases,
        }
    }
}

fn clamp_window(mut spec: AttackSpec) -> AttackSpec {
    let (lo, hi) = spec.window;
    let lo = lo.clamp(0.0, 1.0);
    let hi = hi.clamp(lo, 1.0);
    spec.window = (lo, hi);
    spec
}
