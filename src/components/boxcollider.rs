use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned rectangular collider, offset from the entity position.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// AABB overlap test against a raw rectangle in world space.
    pub fn overlaps_rect(&self, position: Vec2, rect_min: Vec2, rect_size: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let min_b = rect_min.min(rect_min + rect_size);
        let max_b = rect_min.max(rect_min + rect_size);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_applies_offset() {
        let c = BoxCollider::new(10.0, 10.0).with_offset(Vec2::new(2.0, 3.0));
        let (min, max) = c.aabb(Vec2::new(100.0, 200.0));
        assert_eq!(min, Vec2::new(102.0, 203.0));
        assert_eq!(max, Vec2::new(112.0, 213.0));
    }

    #[test]
    fn overlap_is_exclusive_at_edges() {
        let c = BoxCollider::new(10.0, 10.0);
        // touching edges do not overlap
        assert!(!c.overlaps_rect(Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(5.0, 5.0)));
        assert!(c.overlaps_rect(Vec2::ZERO, Vec2::new(9.0, 0.0), Vec2::new(5.0, 5.0)));
    }
}
