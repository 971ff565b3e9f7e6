//! Boss phase escalation.
//!
//! A boss is a species whose table carries phase entries. Each phase fires
//! exactly once, when health falls to its fraction, and rewrites the
//! actor's parameter block (speed and cooldown multipliers, optionally the
//! escalation rule for the rest of the fight).

use bevy::prelude::*;

use super::params::{EnemyParams, Species};
use crate::combat::Health;

pub fn boss_phases(mut query: Query<(&Species, &Health, &mut EnemyParams)>) {
    for (species, health, mut params) in query.iter_mut() {
        let config = &species.0;
        if !config.is_boss() || health.is_dead() {
            continue;
        }

        let fraction = health.fraction();
        while params.phase < config.boss_phases.len()
            && fraction <= config.boss_phases[params.phase].health_below
        {
            let phase = &config.boss_phases[params.phase];
            params.speed_mult = phase.speed_mult;
            params.cooldown_mult = phase.cooldown_mult;
            if let Some(rule) = phase.escalation {
                params.escalation_override = Some(rule);
            }
            params.phase += 1;
            info!(
                "{} entered phase {} at {:.0}% health",
                config.name,
                params.phase,
                fraction * 100.0
            );
        }
    }
}
