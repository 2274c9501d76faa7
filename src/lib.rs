//! Narrow-phase collision detection for 2D games in screen space (y pointing down).
//!
//! Build shapes from [`shapes`], hand pairs of them to a [`CollisionEngine`] and read the
//! resulting [`CollisionManifold`] to push bodies apart.

pub mod collision;
pub mod config;
pub mod error;
pub mod math;
pub mod objects;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{collide, AxisAlignedBox, CollisionEngine, CollisionManifold, SlicedPolygon};
pub use config::EngineConfig;
pub use error::GeometryError;
pub use math::{Transform, Vec2};
pub use objects::{Body, ScreenBody};
pub use shapes::{
    Circle, ConvexPolygon, PlacedPolygon, Polygonal, ScreenBounds, Segment, Shape, ShapeKind,
};
