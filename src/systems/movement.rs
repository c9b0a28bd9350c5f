//! Velocity integration.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Move every entity with a body by its velocity. Runs after all
/// controllers so they see last tick's positions consistently.
pub fn movement(time: Res<WorldTime>, mut query: Query<(&mut MapPosition, &RigidBody)>) {
    for (mut position, body) in query.iter_mut() {
        position.pos += body.velocity * time.delta;
    }
}
