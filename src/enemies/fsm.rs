//! The behavior state machine host.
//!
//! Every enemy owns one [`StateMachine`]; the per-state systems in
//! `behavior` and `attack` drive it. All transitions funnel through
//! [`transition`], which runs the shared exit hook (stop motion, clear
//! transient latches) before swapping and the enter hook (start the state's
//! clip, state-specific setup) after. Transitioning to the *same* state
//! still exits and re-enters, which resets that state's timers - a
//! deliberate reset mechanism.

use bevy::prelude::*;

use super::animation::Animator;
use super::config::SpeciesConfig;
use super::params::{EnemyParams, Species};
use super::perception::Perception;
use crate::combat::{Health, Hurtbox};
use crate::core::Velocity;

/// Behavior states. Exactly one is active per actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    #[default]
    Idle,
    Patrol,
    Chase,
    Attack,
    Attack2,
    DashAttack,
    HeavyAttack,
    Hit,
    Dead,
}

impl EnemyState {
    /// States that only wait or wander; sight acquisition pulls these into
    /// Chase.
    pub fn is_passive(self) -> bool {
        matches!(self, EnemyState::Idle | EnemyState::Patrol)
    }

    pub fn is_attacking(self) -> bool {
        matches!(
            self,
            EnemyState::Attack | EnemyState::Attack2 | EnemyState::DashAttack | EnemyState::HeavyAttack
        )
    }

    /// The clip played on entry.
    pub fn clip(self, config: &SpeciesConfig) -> Option<&str> {
        match self {
            EnemyState::Idle => Some("idle"),
            EnemyState::Patrol | EnemyState::Chase => Some("walk"),
            EnemyState::Attack => Some(&config.attack.clip),
            EnemyState::Attack2 => config.attack2.as_ref().map(|a| a.clip.as_str()),
            EnemyState::DashAttack => config.dash.as_ref().map(|a| a.clip.as_str()),
            EnemyState::HeavyAttack => config.heavy.as_ref().map(|a| a.clip.as_str()),
            EnemyState::Hit => Some("hurt"),
            EnemyState::Dead => Some("death"),
        }
    }
}

/// Per-actor state machine host.
#[derive(Component, Debug, Default)]
pub struct StateMachine {
    state: EnemyState,
    previous: EnemyState,
    /// Seconds since the current state was entered.
    pub elapsed: f32,
    /// Patrol-arrival wait accumulator. Cleared on every transition.
    pub wait: f32,
    /// Damage latch for the current attack activation. Cleared on every
    /// transition, so one activation applies damage at most once.
    pub hit_applied: bool,
    /// Destruction-request latch for the Dead state.
    pub despawning: bool,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    pub fn previous(&self) -> EnemyState {
        self.previous
    }
}

/// Perform the transition protocol: exit hook, swap, enter hook.
///
/// The exit hook cancels whatever multi-tick sequence the outgoing state was
/// running: motion stops and transient latches clear. The enter hook starts
/// the incoming state's clip and applies state-specific setup (Hit consumes
/// the pending knockback; Dead drops collision immediately).
pub fn transition(
    entity: Entity,
    commands: &mut Commands,
    machine: &mut StateMachine,
    next: EnemyState,
    config: &SpeciesConfig,
    params: &mut EnemyParams,
    velocity: &mut Velocity,
    animator: &mut Animator,
) {
    // Exit hook.
    velocity.0 = Vec2::ZERO;
    machine.wait = 0.0;
    machine.hit_applied = false;

    // Swap. Same-state transitions still reset elapsed time.
    machine.previous = machine.state;
    machine.state = next;
    machine.elapsed = 0.0;

    // Enter hook.
    if let Some(clip) = next.clip(config) {
        animator.play(clip, config);
    }
    match next {
        EnemyState::Hit => {
            if let Some(knockback) = params.pending_knockback.take() {
                velocity.0 = knockback;
            }
        }
        EnemyState::Dead => {
            // Collision and perception go away the moment death is entered.
            commands.entity(entity).remove::<Hurtbox>();
            commands.entity(entity).remove::<Perception>();
        }
        _ => {}
    }
}

/// High-priority interrupt edges, checked before any state behavior runs.
///
/// Death (health at zero) beats everything; the `is_hit` flag pulls every
/// non-terminal state into Hit.
pub fn interrupt_transitions(
    mut commands: Commands,
    mut query: Query<(
        Entity,
        &Species,
        &Health,
        &mut StateMachine,
        &mut EnemyParams,
        &mut Velocity,
        &mut Animator,
    )>,
) {
    for (entity, species, health, mut machine, mut params, mut velocity, mut animator) in
        query.iter_mut()
    {
        if machine.state() == EnemyState::Dead {
            continue;
        }
        if health.is_dead() {
            transition(
                entity,
                &mut commands,
                &mut machine,
                EnemyState::Dead,
                &species.0,
                &mut params,
                &mut velocity,
                &mut animator,
            );
            continue;
        }
        if params.is_hit && machine.state() != EnemyState::Hit {
            transition(
                entity,
                &mut commands,
                &mut machine,
                EnemyState::Hit,
                &species.0,
                &mut params,
                &mut velocity,
                &mut animator,
            );
        }
    }
}

/// Advance every live machine's elapsed-in-state clock.
pub fn tick_state_clock(time: Res<Time>, mut query: Query<&mut StateMachine>) {
    let dt = time.delta_secs();
    for mut machine in query.iter_mut() {
        machine.elapsed += dt;
    }
}
