pub mod aabb;
pub mod detection;
pub mod engine;
pub mod manifold;
pub mod slicing;

// Re-export key types
pub use aabb::AxisAlignedBox;
pub use detection::*;
pub use engine::{collide, CollisionEngine};
pub use manifold::CollisionManifold;
pub use slicing::{slice_polygon, SlicedPolygon};
