//! Velocity-based movement integration.
//!
//! Behavior systems only set velocities; this module owns the single
//! position-integration pass at the end of each tick. Anything that moves
//! carries a `Velocity`.

use bevy::prelude::*;

/// 2D velocity in units per second.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Integrate positions from velocities, once per tick.
pub fn integrate_velocity(time: Res<Time>, mut query: Query<(&Velocity, &mut Transform)>) {
    let dt = time.delta_secs();
    for (velocity, mut transform) in query.iter_mut() {
        transform.translation.x += velocity.0.x * dt;
        transform.translation.y += velocity.0.y * dt;
    }
}
