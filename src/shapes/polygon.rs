use std::fmt;

use itertools::Itertools;

use crate::collision::aabb::AxisAlignedBox;
use crate::error::{GeometryError, Result};
use crate::math::{Transform, Vec2};
use crate::shapes::Segment;

/// Signed areas at or below this magnitude are treated as zero.
const AREA_EPSILON: f64 = 1e-12;

/// Interval covered by a shape projected onto an axis, and the vertices that produced its ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
    pub min_point: Vec2,
    pub max_point: Vec2,
}

impl Projection {
    /// Whether the two intervals are disjoint. Touching intervals are not.
    pub fn is_separated_from(&self, other: &Projection) -> bool {
        self.max < other.min || other.max < self.min
    }
}

/// What the collision engine needs from anything polygon-shaped, in world space.
///
/// Implementors must wind their vertices clockwise on screen (positive shoelace area with
/// y pointing down) so that `normals` point outward.
pub trait Polygonal: fmt::Debug {
    fn vertices(&self) -> &[Vec2];

    /// Edges in ring order; edge `i` runs from vertex `i` to vertex `i + 1`.
    fn lines(&self) -> &[Segment];

    /// Unit outward normals, parallel to `lines`.
    fn normals(&self) -> &[Vec2];

    /// Local origin of the shape in world space.
    fn position(&self) -> Vec2;

    /// Projects every vertex onto `axis`.
    fn support_points(&self, axis: Vec2) -> Projection {
        let mut projection = Projection {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            min_point: Vec2::ZERO,
            max_point: Vec2::ZERO,
        };
        for &vertex in self.vertices() {
            let d = vertex.dot(axis);
            if d < projection.min {
                projection.min = d;
                projection.min_point = vertex;
            }
            if d > projection.max {
                projection.max = d;
                projection.max_point = vertex;
            }
        }
        projection
    }

    fn bounding_box(&self) -> AxisAlignedBox {
        AxisAlignedBox::from_points(self.vertices())
            .unwrap_or_else(|| AxisAlignedBox::new(self.position().x, self.position().y, 0.0, 0.0))
    }
}

/// Shoelace signed area. Positive for rings wound clockwise on screen.
pub fn signed_area(vertices: &[Vec2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    vertices
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.cross(*b))
        .sum::<f64>()
        / 2.0
}

/// A polygon outline in local space, validated on construction.
///
/// Only vertex count, finiteness, area and winding are checked. Convexity is not:
/// concave rings are accepted and work with segment queries, while SAT, point and
/// circle tests assume a convex ring. Use [`ConvexPolygon::is_convex`] to check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize))]
pub struct ConvexPolygon {
    vertices: Vec<Vec2>,
}

impl ConvexPolygon {
    /// Creates a polygon from a vertex ring wound clockwise on screen.
    ///
    /// Convexity is not enforced, since segment queries work on any simple ring,
    /// but winding is: the engine's normal conventions depend on it.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        if let Some((index, &vertex)) = vertices.iter().find_position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFiniteVertex { index, vertex });
        }
        let area = signed_area(&vertices);
        if area.abs() <= AREA_EPSILON {
            return Err(GeometryError::ZeroArea);
        }
        if area < 0.0 {
            return Err(GeometryError::WrongWinding(area));
        }
        Ok(ConvexPolygon { vertices })
    }

    /// Orders a point cloud by angle about its mean, then validates it.
    /// Only correct for point sets that are star-shaped around their mean.
    pub fn from_points_unordered(mut points: Vec<Vec2>) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::TooFewVertices(0));
        }
        let center = mean(&points);
        points.sort_by(|a, b| center.angle_to(*a).total_cmp(&center.angle_to(*b)));
        Self::new(points)
    }

    /// A `width` x `height` rectangle centered on the local origin.
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        let hw = width.abs() / 2.0;
        let hh = height.abs() / 2.0;
        Self::new(vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ])
    }

    /// A regular polygon with `sides` vertices on a circle of `radius`.
    pub fn regular(sides: usize, radius: f64) -> Result<Self> {
        let step = std::f64::consts::TAU / sides as f64;
        Self::new(
            (0..sides)
                .map(|i| Vec2::new(radius, 0.0).rotate(step * i as f64))
                .collect(),
        )
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Calculates the centroid (center of mass for uniform density) of the polygon.
    pub fn centroid(&self) -> Vec2 {
        centroid_of(&self.vertices)
    }

    pub fn is_convex(&self) -> bool {
        self.vertices
            .iter()
            .circular_tuple_windows()
            .all(|(u, v, w)| (*v - *u).cross(*w - *v) >= 0.0)
    }
}

fn mean(points: &[Vec2]) -> Vec2 {
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + *p);
    sum / points.len() as f64
}

/// Area-weighted centroid using a triangle fan; falls back to the vertex mean
/// when the ring has no area.
fn centroid_of(vertices: &[Vec2]) -> Vec2 {
    let Some((&origin, rest)) = vertices.split_first() else {
        return Vec2::ZERO;
    };

    let mut centroid = Vec2::ZERO;
    let mut signed_area_sum = 0.0;
    for (&v2, &v3) in rest.iter().tuple_windows() {
        let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
        signed_area_sum += triangle_signed_area;
        centroid += (origin + v2 + v3) / 3.0 * triangle_signed_area;
    }

    if signed_area_sum.abs() <= AREA_EPSILON {
        mean(vertices)
    } else {
        centroid / signed_area_sum
    }
}

/// A [`ConvexPolygon`] placed in the world, with its world-space geometry cached.
///
/// The cache is rebuilt by every placement change and is read-only otherwise, so
/// `vertices`, `lines` and `normals` are cheap repeatable queries during collision checks.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPolygon {
    shape: ConvexPolygon,
    transform: Transform,
    vertices: Vec<Vec2>,
    edges: Vec<Segment>,
    normals: Vec<Vec2>,
}

impl PlacedPolygon {
    pub fn new(shape: ConvexPolygon, position: Vec2) -> Self {
        let mut placed = PlacedPolygon {
            shape,
            transform: Transform::new(position, 0.0),
            vertices: Vec::new(),
            edges: Vec::new(),
            normals: Vec::new(),
        };
        placed.rebuild();
        placed
    }

    pub fn with_transform(shape: ConvexPolygon, transform: Transform) -> Result<Self> {
        let mut placed = Self::new(shape, transform.position);
        placed.transform(transform.scale, transform.rotation, transform.position)?;
        Ok(placed)
    }

    pub fn shape(&self) -> &ConvexPolygon {
        &self.shape
    }

    pub fn placement(&self) -> Transform {
        self.transform
    }

    pub fn rotation(&self) -> f64 {
        self.transform.rotation
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
        self.rebuild();
    }

    pub fn translate(&mut self, by: Vec2) {
        self.set_position(self.transform.position + by);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.transform.rotation = rotation;
        self.rebuild();
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        self.transform(scale, self.transform.rotation, self.transform.position)
    }

    /// Replaces the whole placement at once, rebuilding the cache a single time.
    pub fn transform(&mut self, scale: f64, rotation: f64, position: Vec2) -> Result<()> {
        if !scale.is_finite() || scale == 0.0 {
            return Err(GeometryError::InvalidScale(scale));
        }
        self.transform = Transform {
            position,
            rotation,
            scale,
        };
        self.rebuild();
        Ok(())
    }

    /// World-space area.
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// World-space centroid.
    pub fn centroid(&self) -> Vec2 {
        centroid_of(&self.vertices)
    }

    /// Inside or on the boundary. Assumes convexity.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.edges
            .iter()
            .zip(&self.normals)
            .all(|(edge, normal)| (edge.start - point).dot(*normal) >= 0.0)
    }

    fn rebuild(&mut self) {
        let transform = self.transform;
        self.vertices.clear();
        self.vertices
            .extend(self.shape.vertices.iter().map(|v| transform.apply(*v)));

        self.edges.clear();
        self.edges.extend(
            self.vertices
                .iter()
                .circular_tuple_windows()
                .map(|(a, b)| Segment::new(*a, *b)),
        );

        self.normals.clear();
        self.normals.extend(self.edges.iter().map(Segment::unit_normal));
    }
}

impl Polygonal for PlacedPolygon {
    fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    fn lines(&self) -> &[Segment] {
        &self.edges
    }

    fn normals(&self) -> &[Vec2] {
        &self.normals
    }

    fn position(&self) -> Vec2 {
        self.transform.position
    }
}
