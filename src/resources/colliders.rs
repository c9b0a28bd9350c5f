//! Collision rule registry.
//!
//! The collision detector is driven by registered rules: a probe entity (the
//! bird, with its [`BoxCollider`](crate::components::boxcollider::BoxCollider))
//! tested against a rectangular region anchored to another entity. Each rule
//! fires a [`BirdEvent`](crate::events::bird::BirdEvent) on the configured
//! overlap edge: `Start` when the overlap begins, `End` when it ends (used
//! for "left the passage" and "left the world").

use bevy_ecs::prelude::{Entity, Resource};
use glam::Vec2;

use crate::events::bird::BirdEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEdge {
    Start,
    End,
}

#[derive(Debug, Clone, Copy)]
pub struct ColliderRule {
    /// Entity whose `BoxCollider` probes the region.
    pub probe: Entity,
    /// Entity the region rectangle is anchored to.
    pub anchor: Entity,
    /// Region offset from the anchor position.
    pub offset: Vec2,
    /// Region extent.
    pub size: Vec2,
    /// Which overlap edge fires the event.
    pub edge: CollisionEdge,
    /// Event emitted when the edge occurs.
    pub event: BirdEvent,
    /// Overlap state observed on the previous tick.
    pub overlapping: bool,
}

#[derive(Resource, Debug, Default)]
pub struct ColliderRegistry {
    rules: Vec<ColliderRule>,
}

impl ColliderRegistry {
    pub fn register_start(
        &mut self,
        probe: Entity,
        anchor: Entity,
        offset: Vec2,
        size: Vec2,
        event: BirdEvent,
    ) {
        self.rules.push(ColliderRule {
            probe,
            anchor,
            offset,
            size,
            edge: CollisionEdge::Start,
            event,
            overlapping: false,
        });
    }

    pub fn register_end(
        &mut self,
        probe: Entity,
        anchor: Entity,
        offset: Vec2,
        size: Vec2,
        event: BirdEvent,
    ) {
        self.rules.push(ColliderRule {
            probe,
            anchor,
            offset,
            size,
            edge: CollisionEdge::End,
            event,
            overlapping: false,
        });
    }

    /// Remove every rule anchored to (or probing with) the given entity.
    pub fn unregister_all_for(&mut self, entity: Entity) {
        self.rules
            .retain(|r| r.anchor != entity && r.probe != entity);
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ColliderRule> {
        self.rules.iter_mut()
    }
}
