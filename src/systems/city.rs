//! City controller system.
//!
//! Feeds the day/night machine from its inbox and from the debug keys:
//! `n` forces a sunset, `d` a sunrise.

use bevy_ecs::prelude::*;
use crossterm::event::KeyCode;

use crate::components::city::CityCtl;
use crate::events::city::DayEvent;
use crate::scenes::CITY_RESET_FLAG;
use crate::systems::fsm::FsmRunner;

pub fn city_update(mut machines: Query<&mut CityCtl>, mut runner: FsmRunner) {
    let Ok(mut city) = machines.single_mut() else {
        return;
    };
    let mut ctx = runner.ctx();

    if ctx.input.just_pressed(KeyCode::Char('n')) {
        city.0.enqueue(DayEvent::Sunset);
    } else if ctx.input.just_pressed(KeyCode::Char('d')) {
        city.0.enqueue(DayEvent::Sunrise);
    }

    if ctx.signals.has_flag(CITY_RESET_FLAG) {
        ctx.signals.clear_flag(CITY_RESET_FLAG);
        city.0.init(&mut ctx);
        return;
    }

    let events: Vec<_> = ctx.city_inbox.drain().collect();
    for event in events {
        city.0.enqueue(event);
    }

    city.0.update(&mut ctx);
}
