//! Simulation clock resource.
//!
//! The game advances in fixed ticks; `delta` is always `1 / tick_rate`
//! seconds. State-machine timers count ticks, so [`WorldTime::ticks`] is the
//! single place where wall-clock durations become tick counts.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds of simulated time since startup.
    pub elapsed: f32,
    /// Seconds advanced by the current tick.
    pub delta: f32,
    /// Simulation ticks per second.
    pub tick_rate: f32,
    /// Number of completed ticks since startup.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            tick_rate: 60.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_tick_rate(tick_rate: f32) -> Self {
        WorldTime {
            tick_rate,
            ..Default::default()
        }
    }

    /// Convert a duration in seconds into a whole number of ticks.
    pub fn ticks(&self, seconds: f32) -> u32 {
        (seconds * self.tick_rate).round() as u32
    }
}
