//=========================================================================
// Axis-Aligned Bounding Box
//=========================================================================
//
// World-space rectangles; y grows downwards.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Aabb ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates an AABB from two corners, normalized so `min <= max`.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self::new(top_left, top_left + size)
    }

    /// Strict test: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
