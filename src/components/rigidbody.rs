//! Kinematic body component.
//!
//! Stores the velocity consumed by the movement system to advance
//! [`MapPosition`](super::mapposition::MapPosition). The bird's state machines
//! adjust the velocity directly (gravity, flap impulses); obstacles and the
//! ground get a constant horizontal velocity matching the world scroll speed.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity in world units (pixels) per second.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vec2,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(x: f32, y: f32) -> Self {
        Self {
            velocity: Vec2::new(x, y),
        }
    }

    pub fn set_velocity(&mut self, x: f32, y: f32) {
        self.velocity = Vec2::new(x, y);
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}
