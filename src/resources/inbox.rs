//! Per-controller event inboxes.
//!
//! Bird events detected by the collision pass are messages; the scene
//! dispatch fans them out into these queues, and each controller system
//! drains its own queue into its state machines on the same tick. Events a
//! scene forwards to the bird (hit outcomes) land here too and are consumed
//! on the following tick, so scene judgement always precedes bird reaction.

use bevy_ecs::prelude::Resource;
use std::collections::VecDeque;

use crate::events::bird::BirdEvent;
use crate::events::city::DayEvent;
use crate::events::obstacle::ObstacleCmd;

#[derive(Resource, Debug, Default)]
pub struct BirdInbox {
    queue: VecDeque<BirdEvent>,
}

impl BirdInbox {
    pub fn push(&mut self, event: BirdEvent) {
        self.queue.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = BirdEvent> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[derive(Resource, Debug, Default)]
pub struct CityInbox {
    queue: VecDeque<DayEvent>,
}

impl CityInbox {
    pub fn push(&mut self, event: DayEvent) {
        self.queue.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = DayEvent> + '_ {
        self.queue.drain(..)
    }
}

#[derive(Resource, Debug, Default)]
pub struct ObstacleInbox {
    queue: VecDeque<ObstacleCmd>,
}

impl ObstacleInbox {
    pub fn push(&mut self, event: ObstacleCmd) {
        self.queue.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ObstacleCmd> + '_ {
        self.queue.drain(..)
    }
}
