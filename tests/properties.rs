use approx::assert_relative_eq;
use collision_engine::{
    collide, AxisAlignedBox, Circle, CollisionEngine, CollisionManifold, ConvexPolygon,
    PlacedPolygon, Polygonal, Segment, Vec2,
};

const EPSILON: f64 = 1e-9;

fn polygon(sides: usize, radius: f64, position: Vec2, rotation: f64) -> PlacedPolygon {
    let mut placed = PlacedPolygon::new(ConvexPolygon::regular(sides, radius).unwrap(), position);
    placed.set_rotation(rotation);
    placed
}

fn assert_mirrored(forward: &CollisionManifold, backward: &CollisionManifold) {
    assert_relative_eq!(forward.overlap, backward.overlap, epsilon = EPSILON);
    assert!(forward.normal.abs_diff_eq(-backward.normal, EPSILON));
    assert!(forward.mtv.abs_diff_eq(-backward.mtv, EPSILON));
}

fn assert_normalized(m: &CollisionManifold) {
    assert!(m.overlap >= 0.0);
    assert_relative_eq!(m.normal.magnitude(), 1.0, epsilon = 1e-9);
    assert!(m.mtv.abs_diff_eq(m.normal * m.overlap, EPSILON));
}

#[test]
fn test_polygon_pairs_are_symmetric() {
    let cases = [
        (polygon(4, 5.0, Vec2::ZERO, 0.0), polygon(4, 5.0, Vec2::new(6.0, 1.0), 0.2)),
        (polygon(3, 4.0, Vec2::new(10.0, 10.0), 0.5), polygon(6, 3.0, Vec2::new(13.0, 9.0), 0.0)),
        (polygon(5, 2.0, Vec2::ZERO, 1.0), polygon(8, 2.0, Vec2::new(0.0, 3.0), 0.1)),
    ];
    for (a, b) in &cases {
        let forward = collide(a, b, Vec2::ZERO).unwrap();
        let backward = collide(b, a, Vec2::ZERO).unwrap();
        assert_normalized(&forward);
        assert_mirrored(&forward, &backward);
    }
}

#[test]
fn test_sat_mtv_separates() {
    let a = polygon(6, 4.0, Vec2::new(20.0, 20.0), 0.4);
    let mut b = polygon(4, 3.0, Vec2::new(25.0, 21.0), 0.0);
    let m = collide(&a, &b, Vec2::ZERO).unwrap();
    assert_normalized(&m);

    // moving B against the mtv (a little past it) separates the pair
    b.translate(-m.mtv * 1.001);
    assert!(collide(&a, &b, Vec2::ZERO).is_none());
}

#[test]
fn test_sat_detects_far_apart() {
    let a = polygon(4, 1.0, Vec2::ZERO, 0.0);
    let b = polygon(4, 1.0, Vec2::new(100.0, -50.0), 0.0);
    assert!(collide(&a, &b, Vec2::ZERO).is_none());
    assert!(collide(&b, &a, Vec2::ZERO).is_none());
}

#[test]
fn test_circle_pairs() {
    let a = Circle::new(Vec2::new(3.0, 4.0), 2.0).unwrap();
    let b = Circle::new(Vec2::new(6.0, 8.0), 4.0).unwrap();
    let forward = collide(&a, &b, Vec2::ZERO).unwrap();
    let backward = collide(&b, &a, Vec2::ZERO).unwrap();
    assert_relative_eq!(forward.overlap, 1.0, epsilon = EPSILON);
    assert!(forward.normal.abs_diff_eq(Vec2::new(-0.6, -0.8), EPSILON));
    assert_normalized(&forward);
    assert_mirrored(&forward, &backward);

    let touching = Circle::new(Vec2::new(9.0, 12.0), 8.0).unwrap();
    assert!(collide(&a, &touching, Vec2::ZERO).is_none());
}

#[test]
fn test_box_pairs_are_symmetric() {
    let a = AxisAlignedBox::new(0.0, 0.0, 4.0, 4.0);
    let b = AxisAlignedBox::new(3.0, -3.0, 4.0, 4.0);
    for offset in [Vec2::ZERO, Vec2::new(0.4, 0.4), Vec2::new(-1.0, 0.0)] {
        assert_eq!(collide(&a, &b, offset).is_some(), collide(&b, &a, offset).is_some());
    }
    assert!(collide(&a, &b, Vec2::ZERO).is_some());
    assert!(collide(&a, &b, Vec2::new(0.6, 0.0)).is_none());
}

#[test]
fn test_segment_crossing_reports_point_on_both() {
    let a = Segment::new(Vec2::new(-3.0, -1.0), Vec2::new(5.0, 3.0));
    let b = Segment::new(Vec2::new(0.0, 4.0), Vec2::new(2.0, -4.0));
    let m = collide(&a, &b, Vec2::ZERO).unwrap();
    let point = m.contact().unwrap();
    assert_eq!(m.closest_point, Some(point));

    // the point lies on both segments
    for segment in [&a, &b] {
        let along = (point - segment.start).dot(segment.plane()) / segment.length_squared();
        let projected = segment.start + segment.plane() * along;
        assert!(projected.abs_diff_eq(point, 1e-9));
        assert!((0.0..=1.0).contains(&along));
    }
    assert_normalized(&m);

    // a tolerance swallowing the crossing fraction rejects it
    assert!(collide(&a, &b, Vec2::new(0.7, 0.0)).is_none());
}

#[test]
fn test_point_inside_pushes_to_boundary() {
    let square = polygon(4, 8.0, Vec2::new(50.0, 50.0), 0.3);
    let inside = Vec2::new(52.0, 49.0);
    let m = collide(inside, &square, Vec2::ZERO).unwrap();
    assert_normalized(&m);
    let exit = m.contact().unwrap();
    assert!(exit.abs_diff_eq(inside + m.mtv, EPSILON));

    // the exit point sits on the boundary: behind or on every edge, on one of them
    let depths: Vec<f64> = square
        .lines()
        .iter()
        .zip(square.normals())
        .map(|(edge, normal)| (edge.start - exit).dot(*normal))
        .collect();
    assert!(depths.iter().all(|d| *d >= -1e-9));
    assert!(depths.iter().any(|d| d.abs() <= 1e-9));

    assert!(collide(Vec2::new(80.0, 80.0), &square, Vec2::ZERO).is_none());
}

#[test]
fn test_slicing_preserves_area() {
    let mut engine = CollisionEngine::new();
    let cuts = [
        Segment::new(Vec2::new(-20.0, -3.0), Vec2::new(20.0, 4.0)),
        Segment::new(Vec2::new(2.0, 30.0), Vec2::new(-1.0, -30.0)),
        Segment::new(Vec2::new(-30.0, -30.0), Vec2::new(30.0, 30.0)),
    ];
    for sides in [3, 4, 7, 12] {
        let shape = polygon(sides, 10.0, Vec2::ZERO, 0.25);
        for cut in &cuts {
            let sliced = engine.slice_shape(cut, &shape).unwrap();
            assert_relative_eq!(
                sliced.left.area() + sliced.right.area(),
                shape.area(),
                epsilon = 1e-9
            );
            for piece in [&sliced.left, &sliced.right] {
                assert!(piece.shape().is_convex());
                assert!(piece.area() > 0.0);
            }
        }
    }
}

#[test]
fn test_check_is_idempotent() {
    let mut engine = CollisionEngine::new();
    let square = polygon(4, 6.0, Vec2::new(10.0, 10.0), 0.0);
    let circle = Circle::new(Vec2::new(13.0, 11.0), 2.0).unwrap();
    let probe = Segment::new(Vec2::new(0.0, 11.0), Vec2::new(20.0, 11.0));

    for _ in 0..3 {
        assert!(engine.check(&circle, &square, None));
        let first = engine.manifold().clone();
        assert!(engine.check(&circle, &square, None));
        assert_eq!(engine.manifold(), &first);

        // a different pair in between leaves no trace
        assert!(engine.check(&probe, &square, None));
        assert_eq!(engine.points().len(), 2);
    }
}
