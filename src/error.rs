//! Errors raised while building geometric primitives.
//!
//! Collision queries never fail; a degenerate query resolves to "not colliding".
//! Validation happens once, when a primitive is constructed or re-placed.

use crate::math::Vec2;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("vertex {index} is not finite: {vertex:?}")]
    NonFiniteVertex { index: usize, vertex: Vec2 },
    #[error("polygon has no area")]
    ZeroArea,
    #[error("polygon is wound counter-clockwise on screen (signed area {0})")]
    WrongWinding(f64),
    #[error("circle radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),
    #[error("scale must be finite and non-zero, got {0}")]
    InvalidScale(f64),
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
