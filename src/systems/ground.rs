//! Ground scrolling wrap.

use bevy_ecs::prelude::*;

use crate::components::ground::Ground;
use crate::components::mapposition::MapPosition;

/// Wrap the ground strip by one tile width once it has scrolled that far,
/// so it appears endless. Runs after movement.
pub fn ground_wrap(mut query: Query<(&mut MapPosition, &Ground)>) {
    for (mut position, ground) in query.iter_mut() {
        if position.pos.x <= -ground.tile_width {
            position.pos.x += ground.tile_width;
        }
    }
}
