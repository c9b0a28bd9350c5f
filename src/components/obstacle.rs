//! Obstacles and the controller that breeds them.
//!
//! An obstacle is a hanging pipe and a standing pipe with a passage between
//! them. The controller is a three-state machine: while running it breeds a
//! new obstacle after a random delay, and each birth also culls obstacles
//! that have scrolled off the left edge.

use bevy_ecs::prelude::{Component, Resource};
use glam::Vec2;

use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::statemachine::{FsmContext, StateMachine, Trigger};
use crate::events::bird::BirdEvent;
use crate::events::obstacle::ObstacleCmd;

pub const OBSTACLE_GROUP: &str = "obstacle";

/// Pipe pair geometry. The entity position is the top left corner of the
/// hanging pipe; the passage and the standing pipe hang below it.
#[derive(Component, Debug, Clone, Copy)]
pub struct Obstacle {
    pub width: f32,
    pub height: f32,
    pub passage_height: f32,
    pub passage_center_y: f32,
    pub lighted: bool,
}

impl Obstacle {
    pub fn new(width: f32, height: f32, passage_height: f32, passage_center_y: f32) -> Self {
        Obstacle {
            width,
            height,
            passage_height,
            passage_center_y,
            lighted: false,
        }
    }

    fn passage_radius(&self) -> f32 {
        self.passage_height / 2.0
    }

    /// Hanging pipe rectangle, relative to the entity position.
    pub fn upper_part(&self) -> (Vec2, Vec2) {
        let height = self.passage_center_y - self.passage_radius();
        (Vec2::ZERO, Vec2::new(self.width, height))
    }

    /// Passage rectangle, relative to the entity position.
    pub fn passage(&self) -> (Vec2, Vec2) {
        let top = self.passage_center_y - self.passage_radius();
        (
            Vec2::new(0.0, top),
            Vec2::new(self.width, self.passage_height),
        )
    }

    /// Standing pipe rectangle, relative to the entity position.
    pub fn lower_part(&self) -> (Vec2, Vec2) {
        let top = self.passage_center_y + self.passage_radius();
        (Vec2::new(0.0, top), Vec2::new(self.width, self.height - top))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstaclePhase {
    Stopped,
    Breeding,
    GivingBirth,
}

/// The obstacle controller machine, stored as a resource since it manages a
/// population rather than a single entity.
#[derive(Resource)]
pub struct ObstacleCtl(pub StateMachine<ObstaclePhase, ObstacleCmd>);

impl Default for ObstacleCtl {
    fn default() -> Self {
        ObstacleCtl(obstacle_machine())
    }
}

pub fn obstacle_machine() -> StateMachine<ObstaclePhase, ObstacleCmd> {
    use ObstacleCmd::*;
    use ObstaclePhase::*;

    let mut fsm = StateMachine::new("[ObstacleController]", Stopped);

    fsm.timer(Breeding, |ctx| {
        let min = ctx.time.ticks(ctx.cfg.min_pipe_creation_sec);
        let max = ctx.time.ticks(ctx.cfg.max_pipe_creation_sec);
        ctx.rng.int(min as i32, max as i32) as u32
    });

    fsm.on_entry(GivingBirth, update_obstacle_list);

    fsm.when(Stopped, Breeding, Trigger::On(Start));
    fsm.when(Breeding, Stopped, Trigger::On(Stop));
    fsm.when(Breeding, GivingBirth, Trigger::Timeout);
    fsm.when(GivingBirth, Breeding, Trigger::Always);
    fsm.when(GivingBirth, Stopped, Trigger::On(Stop));

    fsm
}

/// Despawn every obstacle and drop its collision rules.
pub fn remove_all_obstacles(ctx: &mut FsmContext) {
    let obstacles: Vec<_> = ctx.obstacles.iter().map(|(entity, _)| entity).collect();
    for entity in obstacles {
        ctx.colliders.unregister_all_for(entity);
        ctx.commands.entity(entity).try_despawn();
    }
}

/// Spawn one new obstacle at the right edge and cull the ones that have
/// left the screen.
fn update_obstacle_list(ctx: &mut FsmContext) {
    let bird = ctx.index.require("bird");
    let cfg = ctx.cfg;

    let min_height = cfg.min_pipe_height;
    let passage_height = cfg.passage_height;
    let radius = passage_height / 2.0;
    let passage_center_y = ctx.rng.int(
        (min_height + radius) as i32,
        (cfg.ground_y() - min_height - radius) as i32,
    ) as f32;

    let obstacle = Obstacle {
        lighted: ctx.signals.has_flag(crate::components::city::NIGHT_FLAG)
            && ctx.rng.one_in(cfg.lighted_one_in),
        ..Obstacle::new(cfg.pipe_width, cfg.ground_y(), passage_height, passage_center_y)
    };

    let art = if obstacle.lighted {
        "pipe_lighted"
    } else {
        "pipe_green"
    };
    let entity = ctx
        .commands
        .spawn((
            obstacle,
            MapPosition::new(cfg.width, 0.0),
            RigidBody::with_velocity(cfg.world_speed * ctx.time.tick_rate, 0.0),
            Sprite::new(art),
            Group(OBSTACLE_GROUP),
        ))
        .id();

    let (upper_offset, upper_size) = obstacle.upper_part();
    let (lower_offset, lower_size) = obstacle.lower_part();
    let (passage_offset, passage_size) = obstacle.passage();
    ctx.colliders
        .register_start(bird, entity, upper_offset, upper_size, BirdEvent::TouchedPipe);
    ctx.colliders
        .register_start(bird, entity, lower_offset, lower_size, BirdEvent::TouchedPipe);
    ctx.colliders
        .register_end(bird, entity, passage_offset, passage_size, BirdEvent::LeftPassage);

    // Cull obstacles that ran out of screen.
    let gone: Vec<_> = ctx
        .obstacles
        .iter()
        .filter(|(entity, obstacle)| {
            ctx.positions
                .get(*entity)
                .map(|pos| pos.pos.x + obstacle.width < 0.0)
                .unwrap_or(false)
        })
        .map(|(entity, _)| entity)
        .collect();
    for entity in gone {
        ctx.colliders.unregister_all_for(entity);
        ctx.commands.entity(entity).try_despawn();
    }
}
