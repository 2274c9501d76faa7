use log::{trace, warn};

use crate::config::EngineConfig;
use crate::math::vec2::Vec2;
use crate::objects::ScreenBody;
use crate::shapes::{Polygonal, Segment, Shape};

use super::detection;
use super::manifold::CollisionManifold;
use super::slicing::{self, SlicedPolygon};

/// Dispatches shape pairs to the matching detection algorithm and keeps the last result.
///
/// Every `check` overwrites the manifold, so read `normal`, `mtv` and `points` before the
/// next call. For parallel queries give each thread its own engine, or use [`collide`].
#[derive(Debug, Clone, Default)]
pub struct CollisionEngine {
    manifold: CollisionManifold,
    config: EngineConfig,
}

impl CollisionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        CollisionEngine {
            manifold: CollisionManifold::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tests `a` against `b` and records the result in the manifold.
    ///
    /// `offset` defaults to the configured one. Its `x` is the endpoint tolerance for
    /// segment pairs; boxes are inset by `x` horizontally and `y` vertically.
    /// Unsupported pairs log a warning and report no collision.
    pub fn check<'a, 'b>(
        &mut self,
        a: impl Into<Shape<'a>>,
        b: impl Into<Shape<'b>>,
        offset: Option<Vec2>,
    ) -> bool {
        let (a, b): (Shape<'a>, Shape<'b>) = (a.into(), b.into());
        let offset = offset.unwrap_or(self.config.default_offset);
        self.manifold.clear();
        let hit = dispatch(a, b, offset, &mut self.manifold);
        trace!(
            "check {:?}/{:?}: hit={} overlap={} normal={:?}",
            a.kind(),
            b.kind(),
            hit,
            self.manifold.overlap,
            self.manifold.normal
        );
        hit
    }

    pub fn manifold(&self) -> &CollisionManifold {
        &self.manifold
    }

    pub fn overlap(&self) -> f64 {
        self.manifold.overlap
    }

    pub fn normal(&self) -> Vec2 {
        self.manifold.normal
    }

    pub fn mtv(&self) -> Vec2 {
        self.manifold.mtv
    }

    pub fn points(&self) -> &[Vec2] {
        &self.manifold.points
    }

    pub fn closest_point(&self) -> Option<Vec2> {
        self.manifold.closest_point
    }

    /// Cuts `polygon` in two along `segment`. The manifold is used as scratch space and
    /// holds the raw crossings afterwards.
    pub fn slice_shape(&mut self, segment: &Segment, polygon: &dyn Polygonal) -> Option<SlicedPolygon> {
        slicing::slice_polygon(segment, polygon, self.config.epsilon, &mut self.manifold)
    }

    /// Keeps a body inside `[0, width] x [0, height]`, shrunk by its bounce radius.
    /// A body found outside is clamped back to the edge and the matching velocity
    /// component is negated. Returns whether any axis bounced.
    pub fn bounce_screen<B: ScreenBody + ?Sized>(body: &mut B, width: f64, height: f64) -> bool {
        let r = body.bounce_radius();
        let x = bounce_axis(body.position_mut().x, r, width);
        let y = bounce_axis(body.position_mut().y, r, height);

        if let Some(px) = x {
            body.position_mut().x = px;
            body.velocity_mut().x *= -1.0;
        }
        if let Some(py) = y {
            body.position_mut().y = py;
            body.velocity_mut().y *= -1.0;
        }
        x.is_some() || y.is_some()
    }
}

/// The clamped coordinate when `value` left `[r, extent - r]`.
fn bounce_axis(value: f64, r: f64, extent: f64) -> Option<f64> {
    if value < r {
        Some(r)
    } else if value > extent - r {
        Some(extent - r)
    } else {
        None
    }
}

/// Stateless variant of [`CollisionEngine::check`] returning the manifold by value.
pub fn collide<'a, 'b>(
    a: impl Into<Shape<'a>>,
    b: impl Into<Shape<'b>>,
    offset: Vec2,
) -> Option<CollisionManifold> {
    let mut m = CollisionManifold::new();
    dispatch(a.into(), b.into(), offset, &mut m).then_some(m)
}

fn dispatch(a: Shape<'_>, b: Shape<'_>, offset: Vec2, m: &mut CollisionManifold) -> bool {
    match (a, b) {
        (Shape::Polygon(pa), Shape::Polygon(pb)) => detection::polygon_polygon(pa, pb, m),
        (Shape::Segment(sa), Shape::Segment(sb)) => detection::segment_segment(sa, sb, offset.x, m),
        (Shape::Segment(s), Shape::Polygon(p)) => detection::segment_polygon(s, p, m),
        (Shape::Circle(ca), Shape::Circle(cb)) => detection::circle_circle(ca, cb, m),
        (Shape::Circle(c), Shape::Segment(s)) => detection::circle_segment(c, s, m),
        (Shape::Circle(c), Shape::Polygon(p)) => detection::circle_polygon(c, p, m),
        (Shape::Point(point), Shape::Polygon(p)) => detection::point_polygon(point, p, m),
        (Shape::Box(ba), Shape::Box(bb)) => detection::box_box(ba, bb, offset),
        (Shape::Circle(c), Shape::ScreenEdge(screen)) => detection::circle_screen(c, screen, m),

        (Shape::Polygon(_), Shape::Segment(_))
        | (Shape::Segment(_), Shape::Circle(_))
        | (Shape::Polygon(_), Shape::Circle(_))
        | (Shape::Polygon(_), Shape::Point(_))
        | (Shape::ScreenEdge(_), Shape::Circle(_)) => {
            let hit = dispatch(b, a, offset, m);
            if hit {
                m.flip();
            }
            hit
        }

        _ => {
            warn!("no collision test for {:?} against {:?}", a.kind(), b.kind());
            false
        }
    }
}
