//! ECS components.
//!
//! - [`bird`]: the bird, its flight and health machines and its physics.
//! - [`boxcollider`]: axis-aligned collision boxes.
//! - [`city`]: background city with its day/night machine.
//! - [`dynamictext`]: text widgets (credits, logo, banners).
//! - [`ground`]: the scrolling ground strip.
//! - [`group`]: group tags for addressing families of entities.
//! - [`mapposition`]: world position.
//! - [`obstacle`]: pipe pairs and the controller that breeds them.
//! - [`rigidbody`]: velocity.
//! - [`rotation`]: draw rotation in degrees.
//! - [`sprite`]: current sprite art name.
//! - [`statemachine`]: the generic state machine engine.

pub mod bird;
pub mod boxcollider;
pub mod city;
pub mod dynamictext;
pub mod ground;
pub mod group;
pub mod mapposition;
pub mod obstacle;
pub mod rigidbody;
pub mod rotation;
pub mod sprite;
pub mod statemachine;
