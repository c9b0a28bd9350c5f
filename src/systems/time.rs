//! Simulation clock system.

use bevy_ecs::prelude::ResMut;

use crate::resources::worldtime::WorldTime;

/// Advance the fixed-tick clock. Runs first in the schedule.
pub fn update_world_time(mut time: ResMut<WorldTime>) {
    time.delta = 1.0 / time.tick_rate;
    time.elapsed += time.delta;
    time.frame_count += 1;
}
