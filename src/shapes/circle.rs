use crate::error::{GeometryError, Result};
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub position: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Zero radius is allowed (it behaves like a point); negative or non-finite radii are not.
    pub fn new(position: Vec2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { position, radius })
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) < self.radius * self.radius
    }

    pub fn bounding_box(&self) -> crate::shapes::AxisAlignedBox {
        crate::shapes::AxisAlignedBox::new(
            self.position.x,
            self.position.y,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}
