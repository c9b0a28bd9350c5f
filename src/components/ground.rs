//! The scrolling ground strip.

use bevy_ecs::prelude::Component;

/// Marker for the ground entity. The strip scrolls with the world speed and
/// wraps by one tile width so it appears endless; its collision region is
/// widened by the same amount to keep coverage constant.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ground {
    pub tile_width: f32,
}

impl Ground {
    pub fn new(tile_width: f32) -> Self {
        Ground { tile_width }
    }
}
