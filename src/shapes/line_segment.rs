use crate::math::vec2::Vec2;

/// A line segment in world space. Everything except the endpoints is derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Direction vector of the segment, from `start` to `end`.
    pub fn plane(&self) -> Vec2 {
        self.end - self.start
    }

    /// Left normal of the plane. Not normalized: its length equals the segment length,
    /// which keeps cross products between raw planes and normals comparable.
    pub fn normal(&self) -> Vec2 {
        self.plane().left_normal()
    }

    /// Unit-length [`Segment::normal`]; zero for a degenerate segment.
    pub fn unit_normal(&self) -> Vec2 {
        self.normal().normalize()
    }

    /// Calculates the length of the line segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Calculates the squared length of the line segment.
    pub fn length_squared(&self) -> f64 {
        self.start.distance_squared(self.end)
    }

    /// Angle of the plane from the positive x axis.
    pub fn angle(&self) -> f64 {
        self.plane().angle()
    }

    pub fn midpoint(&self) -> Vec2 {
        self.start.lerp(self.end, 0.5)
    }

    pub fn translated(&self, by: Vec2) -> Self {
        Self::new(self.start + by, self.end + by)
    }

    /// The same segment walked the other way; its normal points the opposite way.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.length_squared() <= epsilon * epsilon
    }
}
