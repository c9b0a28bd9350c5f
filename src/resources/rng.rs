//! Deterministic random number resource.
//!
//! One seedable generator for the whole simulation so runs can be replayed
//! exactly from a seed (tests rely on this).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug)]
pub struct GameRng {
    rng: fastrand::Rng,
}

impl Default for GameRng {
    fn default() -> Self {
        GameRng {
            rng: fastrand::Rng::new(),
        }
    }
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        GameRng {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Uniform integer in the inclusive range.
    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.i32(min..=max)
    }

    /// Uniform float in `[min, max)`.
    pub fn float(&mut self, min: f32, max: f32) -> f32 {
        min + self.rng.f32() * (max - min)
    }

    /// True with probability 1 in `n`.
    pub fn one_in(&mut self, n: i32) -> bool {
        n > 0 && self.rng.i32(0..n) == 0
    }
}
