use crate::collision::CollisionManifold;
use crate::math::vec2::Vec2;

/// Anything the screen-bounce helper can keep on screen.
pub trait ScreenBody {
    fn position_mut(&mut self) -> &mut Vec2;
    fn velocity_mut(&mut self) -> &mut Vec2;

    /// Distance kept between the body's position and the screen edges.
    /// Zero for bodies that are not circular.
    fn bounce_radius(&self) -> f64 {
        0.0
    }
}

/// A minimal moving body for callers that resolve contacts themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            radius: 0.0,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius.abs();
        self
    }

    /// Resolves a contact in which this body was shape A: moves it out along the mtv and
    /// drops the part of its velocity heading into the contact.
    pub fn apply_manifold(&mut self, manifold: &CollisionManifold) {
        self.position += manifold.mtv;

        let approaching = self.velocity.dot(manifold.normal);
        if approaching < 0.0 {
            self.velocity -= manifold.normal * approaching;
        }
    }
}

impl ScreenBody for Body {
    fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.position
    }

    fn velocity_mut(&mut self) -> &mut Vec2 {
        &mut self.velocity
    }

    fn bounce_radius(&self) -> f64 {
        self.radius
    }
}
