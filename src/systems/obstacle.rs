//! Obstacle controller system.

use bevy_ecs::prelude::*;

use crate::components::obstacle::{remove_all_obstacles, ObstacleCtl};
use crate::scenes::OBSTACLE_RESET_FLAG;
use crate::systems::fsm::FsmRunner;

/// Reset the spawner when requested, then feed it its commands and let it
/// breed.
pub fn obstacle_update(mut ctl: ResMut<ObstacleCtl>, mut runner: FsmRunner) {
    let mut ctx = runner.ctx();

    if ctx.signals.has_flag(OBSTACLE_RESET_FLAG) {
        ctx.signals.clear_flag(OBSTACLE_RESET_FLAG);
        remove_all_obstacles(&mut ctx);
        ctl.0.init(&mut ctx);
    }

    let commands: Vec<_> = ctx.obstacle_inbox.drain().collect();
    for command in commands {
        ctl.0.enqueue(command);
    }

    ctl.0.update(&mut ctx);
}
