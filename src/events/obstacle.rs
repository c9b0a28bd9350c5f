//! Obstacle controller commands.

/// Start and stop commands for the obstacle spawner, issued by scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleCmd {
    Start,
    Stop,
}
