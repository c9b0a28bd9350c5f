//! ECS resources.
//!
//! - [`artstore`]: sprite name to terminal color mapping.
//! - [`audiostate`]: which music ids are currently looping.
//! - [`colliders`]: registered collision rules driving bird events.
//! - [`entityindex`]: stable name to entity lookup.
//! - [`gameconfig`]: tunables loaded from the INI file.
//! - [`inbox`]: per-controller event queues.
//! - [`input`]: keyboard state folded from terminal events.
//! - [`rng`]: seedable random number generator.
//! - [`scene`]: active scene selection and pending switches.
//! - [`score`]: player score.
//! - [`worldsignals`]: global key/value signal map.
//! - [`worldtime`]: fixed-tick simulation clock.

pub mod artstore;
pub mod audiostate;
pub mod colliders;
pub mod entityindex;
pub mod gameconfig;
pub mod inbox;
pub mod input;
pub mod rng;
pub mod scene;
pub mod score;
pub mod worldsignals;
pub mod worldtime;
