use crate::math::Vec2;

/// Tunables for a [`CollisionEngine`](crate::collision::CollisionEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct EngineConfig {
    /// Lengths and areas below this are treated as zero by the degeneracy guards.
    pub epsilon: f64,
    /// Offset used by `check` when the caller passes `None`.
    /// `x` is the segment endpoint tolerance; `x`/`y` inset boxes horizontally/vertically.
    pub default_offset: Vec2,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-9,
            default_offset: Vec2::ZERO,
        }
    }
}

impl EngineConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    pub fn with_default_offset(mut self, offset: Vec2) -> Self {
        self.default_offset = offset;
        self
    }
}
