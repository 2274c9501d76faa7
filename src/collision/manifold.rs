use crate::math::vec2::Vec2;

/// Result of a single collision check.
///
/// When the check reported a collision, `normal` is a unit vector pointing from shape B
/// towards shape A, `overlap >= 0` is the penetration depth along it and
/// `mtv = normal * overlap` is the translation that separates A from B.
/// After a miss the contents carry no meaning.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollisionManifold {
    /// Penetration depth along `normal`.
    pub overlap: f64,
    /// Separating direction for shape A.
    pub normal: Vec2,
    /// Minimum translation vector for shape A.
    pub mtv: Vec2,
    /// World-space contact points found by this check, in discovery order.
    /// Empty for polygon-polygon and box-box checks.
    pub points: Vec<Vec2>,
    /// Contact point nearest to the probing shape, when the algorithm tracks one.
    pub closest_point: Option<Vec2>,
}

impl CollisionManifold {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every field, keeping the `points` allocation for reuse.
    pub fn clear(&mut self) {
        self.overlap = 0.0;
        self.normal = Vec2::ZERO;
        self.mtv = Vec2::ZERO;
        self.points.clear();
        self.closest_point = None;
    }

    /// Sets normal and depth together and derives the mtv.
    pub fn set_separation(&mut self, normal: Vec2, overlap: f64) {
        self.normal = normal;
        self.overlap = overlap;
        self.mtv = normal * overlap;
    }

    /// Mirrors the manifold so it describes the same contact with A and B swapped.
    pub fn flip(&mut self) {
        self.normal.negate_mut();
        self.mtv.negate_mut();
    }

    /// The first contact point, if any.
    pub fn contact(&self) -> Option<Vec2> {
        self.points.first().copied()
    }
}
