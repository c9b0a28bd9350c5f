//! The little bird.
//!
//! The bird is controlled by two state machines running side by side on the
//! same entity: flight (how it moves) and health (how hurt it is). Both
//! consume the same [`BirdEvent`] stream; the controller system feeds every
//! event to both machines and updates flight before health, so a crash is
//! visible in the same tick it is dispatched.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use std::f32::consts::PI;

use crate::components::statemachine::{FsmContext, StateMachine, Trigger};
use crate::events::audio::AudioCmd;
use crate::events::bird::BirdEvent;

/// Bird sprite extent in world pixels.
pub const BIRD_SIZE: Vec2 = Vec2::new(34.0, 24.0);

/// Default upward force of one wing flap, in multiples of gravity.
pub const FLAP_FORCE: f32 = 2.5;

#[derive(Component, Debug, Default)]
pub struct Bird;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightState {
    Flying,
    Crashing,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthState {
    Sane,
    Injured,
    Dead,
}

/// Flight machine as a component.
#[derive(Component)]
pub struct FlightCtl(pub StateMachine<FlightState, BirdEvent>);

/// Health machine as a component.
#[derive(Component)]
pub struct HealthCtl(pub StateMachine<HealthState, BirdEvent>);

/// Collision box margin: a quarter of the smaller sprite dimension is
/// shaved off each side so near misses feel fair.
pub fn collision_margin() -> f32 {
    (BIRD_SIZE.x / 4.0).min(BIRD_SIZE.y / 4.0)
}

pub fn flight_machine() -> StateMachine<FlightState, BirdEvent> {
    use BirdEvent::*;
    use FlightState::*;

    let mut fsm = StateMachine::new("[Flight]", Flying);
    fsm.log_dropped_events();

    fsm.on_tick(Flying, |ctx| {
        if ctx.input.jump_down() {
            flap(ctx, FLAP_FORCE);
        } else {
            fly(ctx);
        }
    });

    fsm.on_entry(Crashing, turn_down);
    fsm.on_tick(Crashing, |ctx| fall(ctx, 3.0));

    fsm.on_entry(Down, |ctx| {
        ctx.audio.write(AudioCmd::PlayFx { id: "die".into() });
        turn_down(ctx);
    });

    fsm.when(Flying, Crashing, Trigger::On(TouchedPipe));
    fsm.when(Flying, Crashing, Trigger::On(Crashed));
    fsm.when(Flying, Crashing, Trigger::On(LeftWorld));
    fsm.when(Flying, Down, Trigger::On(TouchedGround));
    fsm.when(Crashing, Down, Trigger::On(TouchedGround));

    fsm
}

pub fn health_machine() -> StateMachine<HealthState, BirdEvent> {
    use BirdEvent::*;
    use HealthState::*;

    let mut fsm = StateMachine::new("[Health]", Sane);
    fsm.log_dropped_events();

    fsm.on_entry(Sane, |ctx| select_sprite(ctx, "bird_yellow"));

    fsm.when(Sane, Sane, Trigger::On(LeftPassage));
    fsm.when(Sane, Injured, Trigger::On(TouchedPipe));
    fsm.when(Sane, Dead, Trigger::On(TouchedGround));
    fsm.when(Sane, Dead, Trigger::On(LeftWorld));

    fsm.on_entry(Injured, |ctx| select_sprite(ctx, "bird_red"));
    fsm.timer(Injured, |ctx| ctx.time.ticks(ctx.cfg.bird_injured_seconds));

    // A second pipe hit restarts the injury timer (self-transition).
    fsm.when(Injured, Injured, Trigger::On(TouchedPipe));
    fsm.when(Injured, Sane, Trigger::Timeout);
    fsm.when(Injured, Injured, Trigger::On(Crashed));
    fsm.when(Injured, Injured, Trigger::On(LeftPassage));
    fsm.when(Injured, Dead, Trigger::On(TouchedGround));
    fsm.when(Injured, Dead, Trigger::On(LeftWorld));

    fsm.on_entry(Dead, |ctx| {
        select_sprite(ctx, "bird_blue");
        turn_down(ctx);
    });

    fsm.when(Dead, Dead, Trigger::On(TouchedGround));

    fsm
}

/// One wing beat: kick the vertical velocity upwards and glide.
pub fn flap(ctx: &mut FsmContext, force: f32) {
    let bird = ctx.index.require("bird");
    ctx.audio.write(AudioCmd::PlayFx { id: "wing".into() });
    let gravity = ctx.cfg.world_gravity * ctx.time.tick_rate;
    if let Ok(mut body) = ctx.bodies.get_mut(bird) {
        body.velocity.y -= force * gravity;
    }
    fly(ctx);
}

/// Normal gliding: gravity pulls, the nose follows the vertical speed.
pub fn fly(ctx: &mut FsmContext) {
    let bird = ctx.index.require("bird");
    let above_world = ctx
        .positions
        .get(bird)
        .map(|pos| pos.pos.y < -BIRD_SIZE.y)
        .unwrap_or(false);
    let rate = ctx.time.tick_rate;
    let mut vy_ticks = 0.0;
    if let Ok(mut body) = ctx.bodies.get_mut(bird) {
        if above_world {
            body.stop();
        }
        body.velocity.y += ctx.cfg.world_gravity * rate;
        vy_ticks = body.velocity.y / rate;
    }
    let damp = if vy_ticks < 0.0 { 0.05 } else { 0.2 };
    let radians = (-PI / 8.0 + damp * vy_ticks).clamp(-PI / 4.0, PI / 2.0);
    if let Ok(mut rotation) = ctx.rotations.get_mut(bird) {
        rotation.degrees = radians.to_degrees();
    }
}

/// Free fall with reduced gravity, used while crashing.
pub fn fall(ctx: &mut FsmContext, slowdown: f32) {
    let bird = ctx.index.require("bird");
    if let Ok(mut body) = ctx.bodies.get_mut(bird) {
        body.velocity.y += ctx.cfg.world_gravity * ctx.time.tick_rate / slowdown;
    }
}

/// Nose straight down, all motion stopped.
pub fn turn_down(ctx: &mut FsmContext) {
    let bird = ctx.index.require("bird");
    if let Ok(mut rotation) = ctx.rotations.get_mut(bird) {
        rotation.degrees = 90.0;
    }
    if let Ok(mut body) = ctx.bodies.get_mut(bird) {
        body.stop();
    }
}

fn select_sprite(ctx: &mut FsmContext, art: &'static str) {
    let bird = ctx.index.require("bird");
    if let Ok(mut sprite) = ctx.sprites.get_mut(bird) {
        sprite.select(art);
    }
}
