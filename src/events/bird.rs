//! Bird collision and outcome events.

use bevy_ecs::prelude::Message;

/// Things that happen to the bird.
///
/// `TouchedPipe`, `TouchedGround`, `LeftPassage` and `LeftWorld` come from
/// the collision detector; `Crashed` is a verdict issued by the play scene
/// when a pipe hit is unaffordable.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdEvent {
    TouchedPipe,
    TouchedGround,
    LeftPassage,
    LeftWorld,
    Crashed,
}
