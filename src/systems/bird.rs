//! Bird controller system.
//!
//! Drains the bird inbox into both machines and updates flight before
//! health, so a crash changes the flight path in the same tick the health
//! verdict lands.

use bevy_ecs::prelude::*;

use crate::components::bird::{Bird, FlightCtl, HealthCtl};
use crate::scenes::BIRD_RESET_FLAG;
use crate::systems::fsm::FsmRunner;

pub fn bird_update(
    mut machines: Query<(&mut FlightCtl, &mut HealthCtl), With<Bird>>,
    mut runner: FsmRunner,
) {
    let Ok((mut flight, mut health)) = machines.single_mut() else {
        return;
    };
    let mut ctx = runner.ctx();

    if ctx.signals.has_flag(BIRD_RESET_FLAG) {
        ctx.signals.clear_flag(BIRD_RESET_FLAG);
        health.0.init(&mut ctx);
        flight.0.init(&mut ctx);
        return;
    }

    let events: Vec<_> = ctx.bird_inbox.drain().collect();
    for event in events {
        flight.0.enqueue(event);
        health.0.enqueue(event);
    }

    flight.0.update(&mut ctx);
    health.0.update(&mut ctx);
}
