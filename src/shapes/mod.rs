pub mod circle;
pub mod line_segment;
pub mod polygon;

// Re-export the specific shape types
pub use crate::collision::aabb::AxisAlignedBox;
pub use circle::Circle;
pub use line_segment::Segment;
pub use polygon::{ConvexPolygon, PlacedPolygon, Polygonal, Projection};

use crate::math::vec2::Vec2;

/// The visible area, spanning `[0, width] x [0, height]` in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenBounds {
    pub width: f64,
    pub height: f64,
}

impl ScreenBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Discriminant of a [`Shape`], used for dispatch and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Polygon,
    Circle,
    Segment,
    Box,
    Point,
    ScreenEdge,
}

/// A borrowed view of any shape the engine can test.
///
/// Shapes are owned by their producers; the engine only holds these views for one check.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Polygon(&'a dyn Polygonal),
    Circle(&'a Circle),
    Segment(&'a Segment),
    Box(&'a AxisAlignedBox),
    Point(Vec2),
    ScreenEdge(&'a ScreenBounds),
}

impl Shape<'_> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Box(_) => ShapeKind::Box,
            Shape::Point(_) => ShapeKind::Point,
            Shape::ScreenEdge(_) => ShapeKind::ScreenEdge,
        }
    }
}

impl<'a> From<&'a PlacedPolygon> for Shape<'a> {
    fn from(polygon: &'a PlacedPolygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl<'a> From<&'a Circle> for Shape<'a> {
    fn from(circle: &'a Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl<'a> From<&'a Segment> for Shape<'a> {
    fn from(segment: &'a Segment) -> Self {
        Shape::Segment(segment)
    }
}

impl<'a> From<&'a AxisAlignedBox> for Shape<'a> {
    fn from(aabb: &'a AxisAlignedBox) -> Self {
        Shape::Box(aabb)
    }
}

impl From<Vec2> for Shape<'_> {
    fn from(point: Vec2) -> Self {
        Shape::Point(point)
    }
}

impl<'a> From<&'a ScreenBounds> for Shape<'a> {
    fn from(bounds: &'a ScreenBounds) -> Self {
        Shape::ScreenEdge(bounds)
    }
}
