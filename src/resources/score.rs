//! Player score resource.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Score {
    pub points: i32,
}

impl Score {
    pub fn reset(&mut self) {
        self.points = 0;
    }

    /// Add (or with a negative delta, deduct) points. Never goes below zero.
    pub fn add(&mut self, delta: i32) {
        self.points = (self.points + delta).max(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_never_negative() {
        let mut score = Score::default();
        score.add(2);
        score.add(-3);
        assert_eq!(score.points, 0);
    }
}
