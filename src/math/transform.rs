use super::vec2::Vec2;

/// Placement of a local-space shape in the world: uniform scale, then rotation, then translation.
///
/// Scale is uniform so that a transformed polygon keeps its winding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f64, // Angle in radians
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Creates a new transform with unit scale.
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Creates an identity transform (no translation, no rotation, unit scale).
    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    /// Applies the transform (scale, rotation, then translation) to a point.
    pub fn apply(self, point: Vec2) -> Vec2 {
        let (sin_a, cos_a) = self.rotation.sin_cos();
        let sx = point.x * self.scale;
        let sy = point.y * self.scale;
        Vec2::new(sx * cos_a - sy * sin_a, sx * sin_a + sy * cos_a) + self.position
    }

    /// Applies only the rotation, for directions.
    pub fn apply_direction(self, direction: Vec2) -> Vec2 {
        direction.rotate(self.rotation)
    }

    /// Applies the inverse transform (inverse translation, inverse rotation, inverse scale).
    /// A zero scale yields non-finite components.
    pub fn apply_inverse(self, point: Vec2) -> Vec2 {
        let translated = point - self.position;
        // rotate by -angle: cos(-a) = cos(a), sin(-a) = -sin(a)
        let (sin_a, cos_a) = self.rotation.sin_cos();
        let x = translated.x * cos_a + translated.y * sin_a;
        let y = -translated.x * sin_a + translated.y * cos_a;
        Vec2::new(x / self.scale, y / self.scale)
    }
}
