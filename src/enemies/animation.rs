//! Clip playback tracking for behavior timing.
//!
//! The behavior core only needs two things from animation: start a named
//! clip, and read how far the current clip has progressed. Durations come
//! from the species clip table; rendering is someone else's problem.

use bevy::prelude::*;

use super::config::SpeciesConfig;

/// Fallback duration for clips missing from the species table, so a data
/// hole degrades to sluggish timing instead of a stuck actor.
const FALLBACK_CLIP_SECS: f32 = 0.5;

/// Tracks the current clip and its normalized progress.
#[derive(Component, Debug)]
pub struct Animator {
    clip: String,
    elapsed: f32,
    duration: f32,
}

impl Default for Animator {
    fn default() -> Self {
        Self {
            clip: String::new(),
            elapsed: 0.0,
            duration: 0.0,
        }
    }
}

impl Animator {
    /// Restart playback of a named clip. Unknown names log once and play
    /// with a fallback duration.
    pub fn play(&mut self, name: &str, config: &SpeciesConfig) {
        let duration = match config.clip_duration(name) {
            Some(duration) => duration,
            None => {
                warn!("{}: no clip named '{}', using fallback timing", config.name, name);
                FALLBACK_CLIP_SECS
            }
        };
        self.clip = name.to_string();
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
    }

    pub fn clip(&self) -> &str {
        &self.clip
    }

    /// Normalized progress of the current clip. Keeps growing past `1.0`
    /// once the clip has run its length.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    pub fn finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance playback by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }
}

/// Advance every animator by one tick.
pub fn advance_animators(time: Res<Time>, mut query: Query<&mut Animator>) {
    let dt = time.delta_secs();
    for mut animator in query.iter_mut() {
        animator.advance(dt);
    }
}
