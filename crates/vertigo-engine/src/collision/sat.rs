use core::f64::consts::PI;

use crate::coords::{NdCoords, Viewport};
use crate::shapes::{Shape, rotate_pixel_offset};

use super::Range;

/// Angles closer than this are the same candidate axis.
const AXIS_EPSILON: f64 = 1e-6;

/// Folds an edge angle from `atan2` into `[0, π)`.
///
/// An edge and its reverse describe the same axis, so negative angles move up
/// by π. Angles within [`AXIS_EPSILON`] of π wrap to 0.
pub fn fold_angle(radians: f64) -> f64 {
    let folded = if radians < 0.0 { radians + PI } else { radians };
    if folded >= PI - AXIS_EPSILON { 0.0 } else { folded }
}

/// Union of both shapes' edge axes, folded, sorted and deduplicated.
pub fn candidate_axes(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut axes: Vec<f64> = a.iter().chain(b).copied().map(fold_angle).collect();
    axes.sort_by(f64::total_cmp);
    axes.dedup_by(|next, kept| (*next - *kept).abs() < AXIS_EPSILON);
    axes
}

/// Projected extents of a point set after rotating a candidate axis onto X.
#[derive(Debug, Copy, Clone)]
struct Footprint {
    x: Range,
    y: Range,
}

impl Footprint {
    fn of_points(points: &[(f64, f64)], axis: f64) -> Self {
        let rotated: Vec<(f64, f64)> =
            points.iter().map(|&(x, y)| rotate_pixel_offset(x, y, axis)).collect();
        Self {
            x: Range::from_values(rotated.iter().map(|p| p.0)).unwrap_or(Range::EMPTY),
            y: Range::from_values(rotated.iter().map(|p| p.1)).unwrap_or(Range::EMPTY),
        }
    }

    fn of_circle(center: (f64, f64), radius: f64, axis: f64) -> Self {
        let (x, y) = rotate_pixel_offset(center.0, center.1, axis);
        Self { x: Range::around(x, radius), y: Range::around(y, radius) }
    }

    /// Both the X and the Y extents must overlap.
    fn overlaps(&self, other: &Footprint) -> bool {
        self.x.overlaps(&other.x) && self.y.overlaps(&other.y)
    }
}

/// Exterior loop as screen-centered pixel offsets (+Y up).
fn exterior_pixels(shape: &Shape, viewport: Viewport) -> Vec<(f64, f64)> {
    shape
        .exterior_vertices(viewport)
        .into_iter()
        .map(|v| {
            let px = viewport.ndc_offset_to_pixels(v);
            (f64::from(px.x), f64::from(px.y))
        })
        .collect()
}

fn center_pixels(center: NdCoords, viewport: Viewport) -> (f64, f64) {
    let px = viewport.ndc_offset_to_pixels(center.as_vec2());
    (f64::from(px.x), f64::from(px.y))
}

/// Dispatches on the shape kinds.
///
/// - circle/circle: closed-form distance test
/// - polygon/circle (either order): SAT over the polygon's axes with the
///   circle projected analytically
/// - polygon/polygon: SAT over both shapes' axes
pub fn collides(a: &Shape, b: &Shape, viewport: Viewport) -> bool {
    match (a.is_circle(), b.is_circle()) {
        (true, true) => circles_collide(a, b, viewport),
        (false, true) => polygon_circle_collide(a, b, viewport),
        (true, false) => polygon_circle_collide(b, a, viewport),
        (false, false) => polygons_collide(a, b, viewport),
    }
}

/// Separating-axis test between two convex polygons.
///
/// Circles passed here are treated as their rendered polygon.
pub fn polygons_collide(a: &Shape, b: &Shape, viewport: Viewport) -> bool {
    let axes = candidate_axes(&a.outside_edge_angles(viewport), &b.outside_edge_angles(viewport));
    let a_points = exterior_pixels(a, viewport);
    let b_points = exterior_pixels(b, viewport);

    for axis in axes {
        let fa = Footprint::of_points(&a_points, axis);
        let fb = Footprint::of_points(&b_points, axis);
        if !fa.overlaps(&fb) {
            log::trace!("separated on axis {axis:.6} rad: {fa:?} / {fb:?}");
            return false;
        }
    }
    true
}

/// Separating-axis test between a convex polygon and a circle.
///
/// Only the polygon's edges contribute axes. The circle projects to its
/// rotated center ± its pixel radius. If `circle` is not a circle, this is
/// [`polygons_collide`].
pub fn polygon_circle_collide(polygon: &Shape, circle: &Shape, viewport: Viewport) -> bool {
    let Some(radius) = circle.circle_radius_pixels(viewport) else {
        return polygons_collide(polygon, circle, viewport);
    };

    let axes = candidate_axes(&polygon.outside_edge_angles(viewport), &[]);
    let points = exterior_pixels(polygon, viewport);
    let center = center_pixels(circle.center(), viewport);
    let radius = f64::from(radius);

    for axis in axes {
        let fp = Footprint::of_points(&points, axis);
        let fc = Footprint::of_circle(center, radius, axis);
        if !fp.overlaps(&fc) {
            log::trace!("separated from circle on axis {axis:.6} rad: {fp:?} / {fc:?}");
            return false;
        }
    }
    true
}

/// Closed-form circle overlap in pixel space: `dist² <= (r₁ + r₂)²`.
///
/// Falls back to [`collides`] when either shape is not a circle.
pub fn circles_collide(a: &Shape, b: &Shape, viewport: Viewport) -> bool {
    let (Some(ra), Some(rb)) = (a.circle_radius_pixels(viewport), b.circle_radius_pixels(viewport)) else {
        return collides(a, b, viewport);
    };

    let (ax, ay) = center_pixels(a.center(), viewport);
    let (bx, by) = center_pixels(b.center(), viewport);
    let (dx, dy) = (bx - ax, by - ay);
    let reach = f64::from(ra) + f64::from(rb);

    dx * dx + dy * dy <= reach * reach
}

/// Whether `point` lies inside or on the edge of `circle`.
///
/// Always `false` (with a warning) when `circle` is not a circle.
pub fn circle_contains_point(circle: &Shape, point: NdCoords, viewport: Viewport) -> bool {
    let Some(r) = circle.circle_radius_pixels(viewport) else {
        log::warn!("circle_contains_point called with {:?}", circle.kind());
        return false;
    };

    let (cx, cy) = center_pixels(circle.center(), viewport);
    let (px, py) = center_pixels(point, viewport);
    let (dx, dy) = (px - cx, py - cy);
    let r = f64::from(r);

    dx * dx + dy * dy <= r * r
}

/// [`circle_contains_point`] with the arguments swapped.
#[inline]
pub fn point_in_circle(point: NdCoords, circle: &Shape, viewport: Viewport) -> bool {
    circle_contains_point(circle, point, viewport)
}
