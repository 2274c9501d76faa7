//! Pair algorithms. Each one writes into a caller-owned manifold and returns whether the
//! shapes collide; see [`CollisionManifold`] for the sign conventions.
//!
//! When an algorithm is called with shape A and shape B, the manifold normal points from B
//! towards A.

use log::trace;

use crate::collision::aabb::AxisAlignedBox;
use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Polygonal, Projection, ScreenBounds, Segment};

use super::manifold::CollisionManifold;

/// Where a probe segment crosses a target segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Fraction along the probe, in `(0, 1 - tolerance]`.
    pub fraction: f64,
    pub point: Vec2,
}

/// Parametric intersection of `probe` with `target`.
///
/// The probe's start is excluded, and so is the last `tolerance` fraction of it, so probes
/// chained end to start don't report their shared endpoint twice. The whole target is included.
/// Parallel or zero-length segments divide by zero; the resulting infinite or NaN fraction
/// fails the range checks, so they never intersect.
pub fn segment_intersection(probe: &Segment, target: &Segment, tolerance: f64) -> Option<SegmentHit> {
    let probe_plane = probe.plane();
    let target_plane = target.plane();

    let s1 = (target.start - probe.start).cross(target_plane);
    let s2 = probe_plane.cross(target_plane);
    let fraction = s1 / s2;
    if !(fraction > 0.0 && fraction <= 1.0 - tolerance) {
        return None;
    }

    let point = probe.start + probe_plane * fraction;
    let along_target = (point - target.start).dot(target_plane);
    if along_target < 0.0 || along_target > target_plane.magnitude_squared() {
        return None;
    }
    Some(SegmentHit { fraction, point })
}

/// Segment A crossing segment B.
///
/// The normal is B's unit normal turned towards A's start, and the overlap is how far A's end
/// has gone past B's line.
pub fn segment_segment(a: &Segment, b: &Segment, tolerance: f64, m: &mut CollisionManifold) -> bool {
    let Some(hit) = segment_intersection(a, b, tolerance) else {
        return false;
    };

    let mut normal = b.unit_normal();
    if (a.start - b.start).dot(normal) < 0.0 {
        normal.negate_mut();
    }
    m.set_separation(normal, (hit.point - a.end).dot(normal).max(0.0));
    m.points.push(hit.point);
    m.closest_point = Some(hit.point);
    true
}

/// A segment probing every edge of a polygon.
///
/// Convexity is not assumed: all crossings are recorded in edge order. The crossing nearest
/// the segment's start becomes `closest_point`, and the edge it lies on provides the normal.
pub fn segment_polygon<P: Polygonal + ?Sized>(
    segment: &Segment,
    polygon: &P,
    m: &mut CollisionManifold,
) -> bool {
    let direction = segment.plane();
    let mut closest: Option<(f64, Vec2, usize)> = None;

    for (i, edge) in polygon.lines().iter().enumerate() {
        let Some(hit) = segment_intersection(segment, edge, 0.0) else {
            continue;
        };
        m.points.push(hit.point);
        let depth = hit.point.dot(direction);
        if closest.map_or(true, |(best, _, _)| depth < best) {
            closest = Some((depth, hit.point, i));
        }
    }

    let Some((_, point, edge_index)) = closest else {
        return false;
    };
    let normal = polygon.normals()[edge_index];
    m.set_separation(normal, (point - segment.end).dot(normal).max(0.0));
    m.closest_point = Some(point);
    true
}

/// Signed overlap of two intersecting intervals on one axis.
///
/// Positive means A has to move against the axis to separate, negative means along it.
/// When one interval contains the other the shorter of the two exits is taken, with ties
/// resolved towards moving A along the axis.
fn interval_overlap(a: &Projection, b: &Projection) -> f64 {
    let contained = || {
        let backward = a.max - b.min;
        let forward = b.max - a.min;
        if backward < forward {
            backward
        } else {
            -forward
        }
    };

    if a.min < b.min {
        if a.max < b.max {
            a.max - b.min
        } else {
            contained()
        }
    } else if a.max > b.max {
        -(b.max - a.min)
    } else {
        contained()
    }
}

/// Separating Axis Theorem for two convex polygons.
///
/// Every edge normal of A, then of B, is tested without an early exit; the axis with the
/// smallest overlap becomes the manifold normal. No contact points are produced.
pub fn polygon_polygon<A: Polygonal + ?Sized, B: Polygonal + ?Sized>(
    a: &A,
    b: &B,
    m: &mut CollisionManifold,
) -> bool {
    let mut separated = false;
    let mut min_overlap = f64::INFINITY;
    let mut normal = Vec2::ZERO;

    for &axis in a.normals().iter().chain(b.normals()) {
        // zero-length edges have no normal
        if axis.magnitude_squared() == 0.0 {
            continue;
        }
        let projection_a = a.support_points(axis);
        let projection_b = b.support_points(axis);
        if projection_a.is_separated_from(&projection_b) {
            separated = true;
            continue;
        }

        let overlap = interval_overlap(&projection_a, &projection_b);
        if overlap.abs() < min_overlap {
            min_overlap = overlap.abs();
            normal = if overlap > 0.0 { -axis } else { axis };
        }
    }

    if separated || !min_overlap.is_finite() {
        return false;
    }
    trace!("polygon_polygon: overlap {} along {:?}", min_overlap, normal);
    m.set_separation(normal, min_overlap);
    true
}

/// Two circles overlap when their centers are closer than the sum of their radii.
/// The contact point lies on B's boundary, facing A.
///
/// Concentric circles have no separating direction and both operand orders get
/// `Vec2::UP`, so this case does not mirror under a swap.
pub fn circle_circle(a: &Circle, b: &Circle, m: &mut CollisionManifold) -> bool {
    let delta = a.position - b.position;
    let dist_sq = delta.magnitude_squared();
    let radii_sum = a.radius + b.radius;
    if dist_sq >= radii_sum * radii_sum {
        return false;
    }

    let distance = dist_sq.sqrt();
    let normal = if distance > 0.0 {
        delta / distance
    } else {
        // concentric, any direction separates them
        Vec2::UP
    };
    m.set_separation(normal, radii_sum - distance);
    let contact = b.position + normal * b.radius;
    m.points.push(contact);
    m.closest_point = Some(contact);
    true
}

/// A circle against a single point, pushed straight away from it.
pub fn circle_point(circle: &Circle, point: Vec2, m: &mut CollisionManifold) -> bool {
    let delta = circle.position - point;
    let dist_sq = delta.magnitude_squared();
    if dist_sq >= circle.radius * circle.radius {
        return false;
    }

    let distance = dist_sq.sqrt();
    let normal = if distance > 0.0 { delta / distance } else { Vec2::UP };
    m.set_separation(normal, circle.radius - distance);
    m.points.push(point);
    m.closest_point = Some(point);
    true
}

/// A circle against a segment, split into the segment's three Voronoi regions.
///
/// Beyond either end the circle is tested against that endpoint. Along the span it is tested
/// against the infinite line, and the push always follows the segment's normal: a circle on
/// the normal-facing side needs `radius - distance`, one behind it `radius + distance`.
pub fn circle_segment(circle: &Circle, segment: &Segment, m: &mut CollisionManifold) -> bool {
    let plane = segment.plane();
    let length_sq = plane.magnitude_squared();
    if length_sq == 0.0 {
        return circle_point(circle, segment.start, m);
    }

    let to_center = circle.position - segment.start;
    let along = to_center.dot(plane);
    if along < 0.0 {
        return circle_point(circle, segment.start, m);
    }
    if along > length_sq {
        return circle_point(circle, segment.end, m);
    }

    let normal = segment.unit_normal();
    // positive on the side the normal faces
    let distance = to_center.dot(normal);
    if distance.abs() >= circle.radius {
        return false;
    }
    m.set_separation(normal, circle.radius - distance);
    let contact = circle.position - normal * distance;
    m.points.push(contact);
    m.closest_point = Some(contact);
    true
}

/// A circle against a polygon, via the single edge the circle center is furthest in front of.
///
/// This picks the most-facing edge rather than the nearest one, so circles near a corner
/// may get that edge's normal instead of the corner direction. A circle that sits entirely
/// inside the polygon, further than its radius from every edge, is not reported.
pub fn circle_polygon<P: Polygonal + ?Sized>(
    circle: &Circle,
    polygon: &P,
    m: &mut CollisionManifold,
) -> bool {
    let facing = polygon
        .lines()
        .iter()
        .zip(polygon.normals())
        .map(|(edge, normal)| (edge, (circle.position - edge.start).dot(*normal)))
        .max_by(|(_, d1), (_, d2)| d1.total_cmp(d2));

    match facing {
        Some((edge, _)) => circle_segment(circle, edge, m),
        None => false,
    }
}

/// A point is inside a convex polygon when it is behind every edge.
/// The nearest edge provides the push-out normal and its distance becomes the overlap.
pub fn point_polygon<P: Polygonal + ?Sized>(
    point: Vec2,
    polygon: &P,
    m: &mut CollisionManifold,
) -> bool {
    let mut nearest: Option<(f64, Vec2)> = None;
    for (edge, normal) in polygon.lines().iter().zip(polygon.normals()) {
        // zero-length edges have no normal
        if normal.magnitude_squared() == 0.0 {
            continue;
        }
        let depth = (edge.start - point).dot(*normal);
        if depth < 0.0 {
            return false;
        }
        if nearest.map_or(true, |(best, _)| depth < best) {
            nearest = Some((depth, *normal));
        }
    }

    let Some((overlap, normal)) = nearest else {
        return false;
    };
    m.set_separation(normal, overlap);
    let exit = point + normal * overlap;
    m.points.push(exit);
    m.closest_point = Some(exit);
    true
}

/// Boolean-only box test; the manifold is left untouched.
pub fn box_box(a: &AxisAlignedBox, b: &AxisAlignedBox, offset: Vec2) -> bool {
    a.overlaps(b, offset)
}

/// A circle poking out of the screen. The deepest crossed edge supplies the inward normal;
/// a contact point is recorded for every crossed edge, deepest first.
pub fn circle_screen(circle: &Circle, screen: &ScreenBounds, m: &mut CollisionManifold) -> bool {
    let p = circle.position;
    let r = circle.radius;
    let mut crossings = [
        (r - p.x, Vec2::new(1.0, 0.0), Vec2::new(0.0, p.y)),
        (p.x + r - screen.width, Vec2::new(-1.0, 0.0), Vec2::new(screen.width, p.y)),
        (r - p.y, Vec2::new(0.0, 1.0), Vec2::new(p.x, 0.0)),
        (p.y + r - screen.height, Vec2::new(0.0, -1.0), Vec2::new(p.x, screen.height)),
    ];
    crossings.sort_by(|(d1, _, _), (d2, _, _)| d2.total_cmp(d1));

    let (overlap, normal, contact) = crossings[0];
    if !(overlap > 0.0) {
        return false;
    }
    m.set_separation(normal, overlap);
    m.closest_point = Some(contact);
    m.points.extend(
        crossings
            .iter()
            .take_while(|(depth, _, _)| *depth > 0.0)
            .map(|(_, _, point)| *point),
    );
    true
}
