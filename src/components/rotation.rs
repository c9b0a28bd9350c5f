use bevy_ecs::prelude::Component;

/// Rotation angle in degrees. 0 = level flight, positive = nose down.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub degrees: f32,
}
