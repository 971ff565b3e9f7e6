//! Player controller systems: command handling, ability gating, and the
//! attack activation window.

use bevy::prelude::*;

use super::components::{Abilities, AttackController, Player, PlayerCommand, PlayerConfig};
use crate::combat::{AttackHitbox, AttackTag, Facing, Health, Hurtbox, Team};
use crate::core::Velocity;

/// Tick every player-side cooldown and the slide burst.
pub fn tick_player_cooldowns(
    time: Res<Time>,
    mut query: Query<(&mut Abilities, &mut AttackController, &mut Velocity), With<Player>>,
) {
    let dt = time.delta_secs();
    for (mut abilities, mut attack, mut velocity) in query.iter_mut() {
        abilities.jump.tick(dt);
        abilities.double_jump.tick(dt);
        abilities.slide.tick(dt);
        attack.cooldown.tick(dt);
        if abilities.slide_remaining > 0.0 {
            abilities.slide_remaining -= dt;
            if abilities.slide_remaining <= 0.0 {
                abilities.slide_remaining = 0.0;
                velocity.0.x = 0.0;
            }
        }
    }
}

/// Translate commands into motion and swings, honoring each cooldown.
pub fn handle_commands(
    mut commands: EventReader<PlayerCommand>,
    config: Res<PlayerConfig>,
    mut query: Query<
        (
            &Health,
            &mut Abilities,
            &mut AttackController,
            &mut Velocity,
            &mut Facing,
        ),
        With<Player>,
    >,
) {
    let Ok((health, mut abilities, mut attack, mut velocity, mut facing)) = query.get_single_mut()
    else {
        return;
    };
    if health.is_dead() {
        return;
    }

    for command in commands.read() {
        match *command {
            PlayerCommand::Move(dir) => {
                let dir = dir.clamp(-1.0, 1.0);
                facing.turn_toward(dir);
                // A slide burst owns horizontal velocity until it ends.
                if abilities.slide_remaining <= 0.0 {
                    velocity.0.x = dir * config.move_speed;
                }
            }
            PlayerCommand::Jump => {
                if abilities.grounded && abilities.jump.ready() {
                    abilities.jump.trigger();
                    abilities.jumps_used = 1;
                    abilities.grounded = false;
                    velocity.0.y = config.jump_force;
                } else if !abilities.grounded
                    && abilities.jumps_used == 1
                    && abilities.double_jump.ready()
                {
                    abilities.double_jump.trigger();
                    abilities.jumps_used = 2;
                    velocity.0.y = config.jump_force;
                }
            }
            PlayerCommand::Slide => {
                if abilities.slide.ready() {
                    abilities.slide.trigger();
                    abilities.slide_remaining = config.slide_time;
                    velocity.0.x = facing.0 * config.slide_speed;
                }
            }
            PlayerCommand::Attack => {
                if attack.cooldown.ready() && attack.swing.is_none() {
                    attack.cooldown.trigger();
                    attack.swing = Some(0.0);
                }
            }
        }
    }
}

/// Advance a running swing and arm/disarm the hitbox around its sub-window.
///
/// Arming clears the hit-set, so each swing is a fresh activation.
pub fn update_attack_window(
    time: Res<Time>,
    mut query: Query<(&mut AttackController, &mut AttackHitbox), With<Player>>,
) {
    let dt = time.delta_secs();
    for (mut attack, mut hitbox) in query.iter_mut() {
        let Some(elapsed) = attack.swing else {
            continue;
        };
        let elapsed = elapsed + dt;
        let window_end = attack.start_delay + attack.active_time;

        if !hitbox.is_active() && elapsed >= attack.start_delay && elapsed < window_end {
            hitbox.begin_activation();
        }
        if elapsed >= window_end {
            hitbox.end_activation();
            attack.swing = None;
        } else {
            attack.swing = Some(elapsed);
        }
    }
}

/// Minimal vertical motion for the demo arena: gravity above the ground
/// plane, landing resets the jump chain.
pub fn apply_gravity(
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut query: Query<(&mut Abilities, &mut Velocity, &mut Transform), With<Player>>,
) {
    let dt = time.delta_secs();
    for (mut abilities, mut velocity, mut transform) in query.iter_mut() {
        if transform.translation.y > config.ground_y {
            abilities.grounded = false;
            velocity.0.y -= config.gravity * dt;
        } else if velocity.0.y <= 0.0 {
            transform.translation.y = config.ground_y;
            velocity.0.y = 0.0;
            abilities.grounded = true;
            abilities.jumps_used = 0;
        }
    }
}

/// Spawn the player entity.
pub fn spawn_player(commands: &mut Commands, config: &PlayerConfig, position: Vec2) -> Entity {
    commands
        .spawn((
            Player,
            Abilities::from_config(config),
            AttackController::from_config(config),
            AttackHitbox::new(
                config.attack_damage,
                AttackTag::Slash,
                config.attack_offset,
                config.attack_radius,
            ),
            Health::new(config.max_health).with_invulnerability(config.invuln_window),
            Hurtbox::new(config.hurt_radius),
            Team::Player,
            Facing::default(),
            Velocity::default(),
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}
