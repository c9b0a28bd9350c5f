//! The city in the background and its day/night cycle.
//!
//! Night publishes the "night" signal flag; the obstacle spawner and the
//! renderer read it instead of peeking into the machine. While night lasts,
//! the star field is regenerated every cycle.

use bevy_ecs::prelude::Component;
use log::info;

use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::statemachine::{FsmContext, StateMachine, Trigger};
use crate::events::city::DayEvent;

/// Signal flag set while it is night.
pub const NIGHT_FLAG: &str = "night";

pub const STAR_GROUP: &str = "star";

#[derive(Component, Debug, Default)]
pub struct City;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayTime {
    Day,
    Night,
}

/// Day/night machine as a component on the city entity.
#[derive(Component)]
pub struct CityCtl(pub StateMachine<DayTime, DayEvent>);

pub fn city_machine() -> StateMachine<DayTime, DayEvent> {
    use DayEvent::*;
    use DayTime::*;

    let mut fsm = StateMachine::new("[City]", Day);

    fsm.on_entry(Day, |ctx| {
        ctx.signals.clear_flag(NIGHT_FLAG);
    });

    fsm.when(Day, Night, Trigger::On(Sunset));
    fsm.when(Day, Day, Trigger::On(Sunrise));

    fsm.timer(Night, |ctx| ctx.time.ticks(ctx.cfg.night_seconds));

    fsm.on_entry(Night, |ctx| {
        ctx.signals.set_flag(NIGHT_FLAG);
        replace_stars(ctx);
    });

    fsm.on_exit(Night, remove_stars);

    // Every night cycle the star field is rebuilt and the timer restarts.
    fsm.rule(Night, Night, Trigger::Timeout, None, Some(replace_stars));

    fsm.when(Night, Day, Trigger::On(Sunrise));

    fsm
}

fn remove_stars(ctx: &mut FsmContext) {
    let stars: Vec<_> = ctx
        .groups
        .iter()
        .filter(|(_, group)| group.name() == STAR_GROUP)
        .map(|(entity, _)| entity)
        .collect();
    for star in stars {
        ctx.commands.entity(star).try_despawn();
    }
}

fn replace_stars(ctx: &mut FsmContext) {
    remove_stars(ctx);
    let num_stars = ctx.rng.int(1, ctx.cfg.max_stars);
    for _ in 1..num_stars {
        let x = ctx.rng.int(50, ctx.cfg.width as i32 - 50) as f32;
        let y = ctx.rng.int(100, 180) as f32;
        ctx.commands.spawn((
            MapPosition::new(x, y),
            Sprite::new("star"),
            Group(STAR_GROUP),
        ));
    }
    info!("Created {} new stars", num_stars);
}
