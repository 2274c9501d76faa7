//! Cutting a polygon in two along a segment.

use log::{debug, warn};

use crate::math::vec2::Vec2;
use crate::shapes::{ConvexPolygon, PlacedPolygon, Polygonal, Segment};

use super::detection;
use super::manifold::CollisionManifold;

/// The two pieces of a sliced polygon. `left` lies on the cut's left side as seen on screen
/// when walking from the cut's start to its end.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicedPolygon {
    pub left: PlacedPolygon,
    pub right: PlacedPolygon,
}

/// Splits `polygon` along `cut`. Returns `None` when the cut does not cross the polygon
/// completely, which is the normal "nothing to slice" outcome.
///
/// `scratch` receives the segment-polygon result used to find the cut points.
/// Each piece is ordered by angle about its own vertex mean, which becomes its position;
/// pieces that are not star-shaped around that point (from concave input) are rejected.
pub fn slice_polygon<P: Polygonal + ?Sized>(
    cut: &Segment,
    polygon: &P,
    epsilon: f64,
    scratch: &mut CollisionManifold,
) -> Option<SlicedPolygon> {
    scratch.clear();
    if cut.is_degenerate(epsilon) {
        warn!("slice_polygon: zero-length cut {:?}", cut);
        return None;
    }
    if !detection::segment_polygon(cut, polygon, scratch) {
        return None;
    }

    // a cut through a vertex hits both edges sharing it
    let mut cut_points: Vec<Vec2> = Vec::with_capacity(2);
    for &point in &scratch.points {
        if !cut_points.iter().any(|p| p.distance_squared(point) <= epsilon * epsilon) {
            cut_points.push(point);
        }
    }
    if cut_points.len() < 2 {
        debug!("slice_polygon: cut crosses the boundary only once, nothing to slice");
        return None;
    }

    let plane = cut.plane();
    let on_line = epsilon * plane.magnitude();
    let mut left = cut_points.clone();
    let mut right = cut_points;
    for &vertex in polygon.vertices() {
        let side = (vertex - cut.start).cross(plane);
        if side > on_line {
            left.push(vertex);
        } else if side < -on_line {
            right.push(vertex);
        }
        // vertices on the cut are represented by the cut points
    }

    let left = build_piece(left)?;
    let right = build_piece(right)?;
    debug!(
        "slice_polygon: split into {} and {} vertices",
        left.vertices().len(),
        right.vertices().len()
    );
    Some(SlicedPolygon { left, right })
}

fn build_piece(points: Vec<Vec2>) -> Option<PlacedPolygon> {
    if points.is_empty() {
        return None;
    }
    let origin = points.iter().fold(Vec2::ZERO, |acc, p| acc + *p) / points.len() as f64;
    let local = points.into_iter().map(|p| p - origin).collect();
    match ConvexPolygon::from_points_unordered(local) {
        Ok(shape) => Some(PlacedPolygon::new(shape, origin)),
        Err(err) => {
            warn!("slice_polygon: discarding piece: {}", err);
            None
        }
    }
}
