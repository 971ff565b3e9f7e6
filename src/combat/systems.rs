//! Combat systems - hit resolution, damage application, death handling.

use bevy::prelude::*;

use super::components::{DamageOutcome, Facing, Health, HitFlash, Hurtbox, Team};
use super::hitbox::{overlap_circle, AttackHitbox};
use crate::core::{
    DamageEvent, DamageTakenEvent, DeathEvent, GameState, HealEvent, HealedEvent,
    HealthChangedEvent, SessionContext, Velocity,
};
use crate::enemies::EnemyParams;
use crate::player::Player;

/// Fixed knockback impulse magnitude, applied along attacker→target.
pub const KNOCKBACK_IMPULSE: f32 = 6.0;

/// Advance every invulnerability window by one tick.
pub fn tick_health(time: Res<Time>, mut query: Query<&mut Health>) {
    let dt = time.delta_secs();
    for mut health in query.iter_mut() {
        health.tick(dt);
    }
}

/// Drive hit-flash sequences and drop them when they run out.
pub fn update_hit_flash(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitFlash)>,
) {
    let dt = time.delta_secs();
    for (entity, mut flash) in query.iter_mut() {
        flash.remaining -= dt;
        flash.phase += dt;
        if flash.phase >= flash.interval {
            flash.phase = 0.0;
            flash.visible = !flash.visible;
        }
        if flash.remaining <= 0.0 {
            flash.visible = true;
            commands.entity(entity).remove::<HitFlash>();
        }
    }
}

/// Resolve active hitboxes against opposing hurtboxes.
///
/// The overlap query runs every tick while a hitbox is active; the
/// per-activation hit-set guarantees at most one damage application per
/// target per activation regardless of tick granularity.
pub fn resolve_hitbox_hits(
    mut attackers: Query<(Entity, &Transform, &Facing, &mut AttackHitbox, &Team)>,
    targets: Query<(Entity, &Transform, &Hurtbox, &Team), With<Health>>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    for (attacker, transform, facing, mut hitbox, team) in attackers.iter_mut() {
        if !hitbox.is_active() {
            continue;
        }
        let origin = transform.translation.truncate();
        let center = origin + Vec2::new(hitbox.offset.x * facing.0, hitbox.offset.y);

        let candidates = targets
            .iter()
            .filter(|(entity, ..)| *entity != attacker)
            .map(|(entity, t, hurtbox, target_team)| {
                (entity, t.translation.truncate(), hurtbox.radius, *target_team)
            });

        for target in overlap_circle(center, hitbox.radius, *team, candidates) {
            if !hitbox.register_hit(target) {
                continue;
            }
            let target_pos = targets
                .get(target)
                .map(|(_, t, ..)| t.translation.truncate())
                .unwrap_or(center);
            let direction = (target_pos - origin).normalize_or_zero();
            damage_events.send(DamageEvent {
                target,
                source: attacker,
                amount: hitbox.damage,
                knockback: direction * KNOCKBACK_IMPULSE,
            });
        }
    }
}

/// Apply queued damage to health entities.
///
/// Death and invulnerability make this a no-op for the affected target.
/// Surviving enemies get their hit reaction armed (the `is_hit` interrupt
/// plus the pending knockback impulse); surviving players are knocked back
/// directly.
pub fn apply_damage(
    mut commands: Commands,
    mut damage_events: EventReader<DamageEvent>,
    mut health_query: Query<&mut Health>,
    mut enemy_query: Query<&mut EnemyParams>,
    mut velocity_query: Query<&mut Velocity, With<Player>>,
    team_query: Query<&Team>,
    mut session: ResMut<SessionContext>,
    mut taken_events: EventWriter<DamageTakenEvent>,
    mut changed_events: EventWriter<HealthChangedEvent>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for event in damage_events.read() {
        let Ok(mut health) = health_query.get_mut(event.target) else {
            continue;
        };

        let outcome = health.take_damage(event.amount);
        if outcome == DamageOutcome::Ignored {
            continue;
        }

        changed_events.send(HealthChangedEvent {
            entity: event.target,
            current: health.current(),
            max: health.max(),
        });
        taken_events.send(DamageTakenEvent {
            entity: event.target,
            amount: event.amount,
            remaining: health.current(),
        });

        if matches!(team_query.get(event.source), Ok(&Team::Player)) {
            session.damage_dealt += event.amount;
        }
        if matches!(team_query.get(event.target), Ok(&Team::Player)) {
            session.damage_taken += event.amount;
        }

        if let DamageOutcome::Applied { .. } = outcome {
            // Survivors get their hit reaction: enemies arm the interrupt
            // flag plus the pending impulse, players are knocked back
            // directly.
            if let Ok(mut params) = enemy_query.get_mut(event.target) {
                params.is_hit = true;
                params.pending_knockback = Some(event.knockback);
            } else if let Ok(mut velocity) = velocity_query.get_mut(event.target) {
                velocity.0 = event.knockback;
            }
            if health.invulnerability_window() > 0.0 {
                commands
                    .entity(event.target)
                    .insert(HitFlash::new(health.invulnerability_window()));
            }
        } else {
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: Some(event.source),
            });
        }
    }
}

/// Apply queued healing. A dead target is a no-op; the gain clamps to max.
pub fn apply_healing(
    mut heal_events: EventReader<HealEvent>,
    mut health_query: Query<&mut Health>,
    mut healed_events: EventWriter<HealedEvent>,
    mut changed_events: EventWriter<HealthChangedEvent>,
) {
    for event in heal_events.read() {
        let Ok(mut health) = health_query.get_mut(event.target) else {
            continue;
        };
        let restored = health.heal(event.amount);
        if restored > 0.0 {
            healed_events.send(HealedEvent {
                entity: event.target,
                amount: restored,
            });
            changed_events.send(HealthChangedEvent {
                entity: event.target,
                current: health.current(),
                max: health.max(),
            });
        }
    }
}

/// React to deaths: count kills, end the session when the player falls.
pub fn handle_deaths(
    mut death_events: EventReader<DeathEvent>,
    player_query: Query<(), With<Player>>,
    enemy_query: Query<(), With<EnemyParams>>,
    mut session: ResMut<SessionContext>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in death_events.read() {
        if player_query.get(event.entity).is_ok() {
            info!("Player died. Ending session.");
            next_state.set(GameState::GameOver);
        } else if enemy_query.get(event.entity).is_ok() {
            session.kills += 1;
        }
    }
}
