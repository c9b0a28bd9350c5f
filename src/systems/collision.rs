//! Collision detection over the registered rules.
//!
//! Each rule tests the probe's [`BoxCollider`] against a rectangle anchored
//! to another entity and remembers the overlap state, so events fire on the
//! overlap edges only: entering a pipe fires once, leaving the passage or
//! the world region fires once on the way out.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::events::bird::BirdEvent;
use crate::resources::colliders::{ColliderRegistry, CollisionEdge};

pub fn collision_detector(
    mut registry: ResMut<ColliderRegistry>,
    probes: Query<(&MapPosition, &BoxCollider)>,
    anchors: Query<&MapPosition>,
    mut writer: MessageWriter<BirdEvent>,
) {
    for rule in registry.iter_mut() {
        // Entities spawned this tick are not visible yet; their rules
        // simply wait for the next pass.
        let Ok((probe_position, collider)) = probes.get(rule.probe) else {
            continue;
        };
        let Ok(anchor_position) = anchors.get(rule.anchor) else {
            continue;
        };
        let region_min = anchor_position.pos + rule.offset;
        let overlapping = collider.overlaps_rect(probe_position.pos, region_min, rule.size);
        if overlapping != rule.overlapping {
            match rule.edge {
                CollisionEdge::Start if overlapping => {
                    writer.write(rule.event);
                }
                CollisionEdge::End if !overlapping => {
                    writer.write(rule.event);
                }
                _ => {}
            }
            rule.overlapping = overlapping;
        }
    }
}

/// Advance the bird event mailbox so this tick's detections become readable.
/// Runs directly after [`collision_detector`].
pub fn update_bird_messages(mut messages: ResMut<Messages<BirdEvent>>) {
    messages.update();
}
