//! Player-related components.

use bevy::prelude::*;

use crate::core::Cooldown;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// External command surface for the player.
///
/// Input binding lives outside the core; whatever reads the keyboard (or a
/// replay, or a test) sends these.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    /// Horizontal movement intent in `[-1, 1]`.
    Move(f32),
    Jump,
    Slide,
    Attack,
}

/// Tunables for the player controller.
#[derive(Resource, Clone)]
pub struct PlayerConfig {
    pub max_health: f32,
    /// Post-hit invulnerability window.
    pub invuln_window: f32,
    pub hurt_radius: f32,
    /// Base movement speed in units per second.
    pub move_speed: f32,
    /// Jump velocity.
    pub jump_force: f32,
    /// Gravity acceleration.
    pub gravity: f32,
    /// Ground plane height for the demo arena.
    pub ground_y: f32,
    pub jump_cooldown: f32,
    pub double_jump_cooldown: f32,
    pub slide_cooldown: f32,
    pub slide_speed: f32,
    pub slide_time: f32,
    pub attack_damage: f32,
    pub attack_cooldown: f32,
    /// Seconds into the swing before the hitbox arms.
    pub attack_start_delay: f32,
    /// Seconds the hitbox stays armed.
    pub attack_active_time: f32,
    /// Hitbox placement, mirrored by facing.
    pub attack_offset: Vec2,
    pub attack_radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 5.0,
            invuln_window: 1.0,
            hurt_radius: 0.4,
            move_speed: 5.0,
            jump_force: 8.0,
            gravity: 20.0,
            ground_y: 0.0,
            jump_cooldown: 0.1,
            double_jump_cooldown: 0.3,
            slide_cooldown: 1.0,
            slide_speed: 9.0,
            slide_time: 0.25,
            attack_damage: 1.0,
            attack_cooldown: 0.4,
            attack_start_delay: 0.08,
            attack_active_time: 0.15,
            attack_offset: Vec2::new(0.9, 0.0),
            attack_radius: 0.7,
        }
    }
}

/// Movement abilities, each gated by its own cooldown.
///
/// The timers run concurrently and never share a pool.
#[derive(Component)]
pub struct Abilities {
    pub jump: Cooldown,
    pub double_jump: Cooldown,
    pub slide: Cooldown,
    /// Jumps performed since last grounded (double jump allowed at 1).
    pub jumps_used: u8,
    pub grounded: bool,
    /// Seconds left in the current slide burst.
    pub slide_remaining: f32,
}

impl Abilities {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            jump: Cooldown::new(config.jump_cooldown),
            double_jump: Cooldown::new(config.double_jump_cooldown),
            slide: Cooldown::new(config.slide_cooldown),
            jumps_used: 0,
            grounded: true,
            slide_remaining: 0.0,
        }
    }
}

/// Drives the attack hitbox through its activation sub-window.
///
/// The hitbox arms at `start_delay` into the swing and disarms
/// `active_time` later; the controller owns that timing.
#[derive(Component)]
pub struct AttackController {
    pub cooldown: Cooldown,
    pub start_delay: f32,
    pub active_time: f32,
    /// Elapsed swing time, `None` when no swing is running.
    pub swing: Option<f32>,
}

impl AttackController {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            cooldown: Cooldown::new(config.attack_cooldown),
            start_delay: config.attack_start_delay,
            active_time: config.attack_active_time,
            swing: None,
        }
    }
}
