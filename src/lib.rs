//! Birdy: a terminal rendition of the flapping-bird arcade game where every
//! behaviour, from the bird's wings to the scene flow, is a table-driven
//! state machine running on a bevy_ecs world.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod scenes;
pub mod systems;
