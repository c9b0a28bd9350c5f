//! Event and command types.
//!
//! - [`audio`]: playback commands for the audio sink.
//! - [`bird`]: collision detections and hit verdicts for the bird.
//! - [`city`]: sunset/sunrise commands for the day/night machine.
//! - [`obstacle`]: start/stop commands for the obstacle spawner.

pub mod audio;
pub mod bird;
pub mod city;
pub mod obstacle;
