// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;

/// An axis-aligned box given by its center and full extents, in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAlignedBox {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl AxisAlignedBox {
    /// Negative extents are folded to their magnitude.
    pub fn new(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        AxisAlignedBox {
            center_x,
            center_y,
            width: width.abs(),
            height: height.abs(),
        }
    }

    /// Creates a box from two opposite corners, in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = Vec2::new(a.x.min(b.x), a.y.min(b.y));
        let max = Vec2::new(a.x.max(b.x), a.y.max(b.y));
        Self::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            max.x - min.x,
            max.y - min.y,
        )
    }

    /// Creates the smallest box that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| {
            (
                Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                Vec2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self::from_corners(min, max))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_y)
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center_y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center_y + self.height / 2.0
    }

    /// Checks if this box overlaps another. Touching edges do not count.
    ///
    /// Both boxes are inset by `offset.x` horizontally and `offset.y` vertically before the
    /// test, so a positive offset makes the check more forgiving and a negative one stricter.
    pub fn overlaps(&self, other: &AxisAlignedBox, offset: Vec2) -> bool {
        let x_overlap = self.left() + offset.x < other.right() - offset.x
            && self.right() - offset.x > other.left() + offset.x;
        let y_overlap = self.top() + offset.y < other.bottom() - offset.y
            && self.bottom() - offset.y > other.top() + offset.y;
        x_overlap && y_overlap
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Merges another box into this one, expanding this box to contain both.
    pub fn merge(&mut self, other: &AxisAlignedBox) {
        *self = Self::from_corners(
            Vec2::new(self.left().min(other.left()), self.top().min(other.top())),
            Vec2::new(self.right().max(other.right()), self.bottom().max(other.bottom())),
        );
    }
}
