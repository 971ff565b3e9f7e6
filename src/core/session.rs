//! Session-scoped counters.
//!
//! World-level tallies live on one explicit context resource instead of
//! process-wide statics, so separate sessions (and tests) never share state.

use bevy::prelude::*;

/// Counters owned by the running session.
#[derive(Resource, Default, Debug)]
pub struct SessionContext {
    /// Enemies destroyed this session.
    pub kills: u32,
    /// Total damage the player has dealt.
    pub damage_dealt: f32,
    /// Total damage the player has received.
    pub damage_taken: f32,
}
