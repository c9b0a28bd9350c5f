//! ECS systems.
//!
//! - [`audio`]: audio command sink and mailbox advance.
//! - [`bird`]: drives the bird's flight and health machines.
//! - [`city`]: drives the day/night machine and the debug keys.
//! - [`collision`]: rule-based detection emitting bird events.
//! - [`fsm`]: the shared [`FsmRunner`](fsm::FsmRunner) system parameter.
//! - [`ground`]: ground strip wrapping.
//! - [`input`]: terminal key polling (main loop, not scheduled).
//! - [`movement`]: velocity integration.
//! - [`obstacle`]: drives the obstacle spawner.
//! - [`render`]: half-block terminal renderer (main loop, not scheduled).
//! - [`scene`]: event fan-out, active scene update and scene switching.
//! - [`time`]: fixed-tick clock.

pub mod audio;
pub mod bird;
pub mod city;
pub mod collision;
pub mod fsm;
pub mod ground;
pub mod input;
pub mod movement;
pub mod obstacle;
pub mod render;
pub mod scene;
pub mod time;
