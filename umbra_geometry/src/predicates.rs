// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation, intersection and distance predicates.
//!
//! All predicates work on [`kurbo::Point`] and [`kurbo::Line`]. A `Line` may be
//! degenerate here; use [`Segment`](crate::Segment) when a non-zero length must
//! be guaranteed.
//!
//! Two tolerances are used, one per class of comparison:
//!
//! - [`ORIENTATION_EPSILON`] for signed areas and determinants.
//! - [`POINT_EPSILON`] for point equality, ray parameters and angle ties.

use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point, Vec2};

/// Signed areas and determinants with magnitude below this are treated as zero.
pub const ORIENTATION_EPSILON: f64 = 1e-10;

/// Points closer than this are the same point; also the slack on ray and
/// segment parameters.
pub const POINT_EPSILON: f64 = 1e-9;

/// Turn direction of an ordered point triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Signed area within [`ORIENTATION_EPSILON`] of zero.
    Collinear,
}

impl Orientation {
    /// Classify the turn `p → q → r`.
    pub fn of(p: Point, q: Point, r: Point) -> Self {
        let value = orientation(p, q, r);
        if value > 0.0 {
            Self::CounterClockwise
        } else if value < 0.0 {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }
}

/// Twice the signed area of the triangle `(p, q, r)`.
///
/// Positive for a counter-clockwise turn in a y-up frame. Values with magnitude
/// strictly below [`ORIENTATION_EPSILON`] are returned as exactly `0.0`.
pub fn orientation(p: Point, q: Point, r: Point) -> f64 {
    let value = (q - p).cross(r - p);
    if value.abs() < ORIENTATION_EPSILON {
        0.0
    } else {
        value
    }
}

/// Whether `q` lies inside the box spanned by `p` and `r`, edges included.
#[inline]
fn within_span(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether two closed segments share at least one point.
///
/// Touching endpoints and collinear overlap count as intersecting. The result
/// is symmetric in its arguments.
pub fn segments_intersect(a: Line, b: Line) -> bool {
    let o1 = Orientation::of(a.p0, a.p1, b.p0);
    let o2 = Orientation::of(a.p0, a.p1, b.p1);
    let o3 = Orientation::of(b.p0, b.p1, a.p0);
    let o4 = Orientation::of(b.p0, b.p1, a.p1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && within_span(a.p0, b.p0, a.p1))
        || (o2 == Orientation::Collinear && within_span(a.p0, b.p1, a.p1))
        || (o3 == Orientation::Collinear && within_span(b.p0, a.p0, b.p1))
        || (o4 == Orientation::Collinear && within_span(b.p0, a.p1, b.p1))
}

/// The crossing point of the lines supporting `a` and `b`.
///
/// Returns `None` when the determinant magnitude is below
/// [`ORIENTATION_EPSILON`] (parallel or collinear), even if the segments
/// overlap. The point is not clamped to either segment; combine with
/// [`segments_intersect`] for a bounded test.
pub fn segment_intersection(a: Line, b: Line) -> Option<Point> {
    let da = a.p1 - a.p0;
    let db = b.p1 - b.p0;
    let det = da.cross(db);
    if det.abs() < ORIENTATION_EPSILON {
        return None;
    }
    let t = (b.p0 - a.p0).cross(db) / det;
    Some(a.p0 + da * t)
}

/// Euclidean distance from `p` to the closest point of `segment`.
///
/// A segment whose endpoints coincide is treated as a point.
pub fn distance_point_to_segment(p: Point, segment: Line) -> f64 {
    let d = segment.p1 - segment.p0;
    let len2 = d.hypot2();
    if len2 < POINT_EPSILON * POINT_EPSILON {
        return p.distance(segment.p0);
    }
    let t = ((p - segment.p0).dot(d) / len2).clamp(0.0, 1.0);
    p.distance(segment.p0 + d * t)
}

/// Distance along the unit ray from `origin` at `angle` to `segment`.
///
/// Returns `None` when the ray is parallel to the segment, when the hit is at
/// or behind the origin (`t <= POINT_EPSILON`), or when the hit falls outside
/// the segment by more than [`POINT_EPSILON`] in parameter space.
pub fn ray_segment_distance(origin: Point, angle: f64, segment: Line) -> Option<f64> {
    let dir = Vec2::from_angle(angle);
    let d = segment.p1 - segment.p0;
    let det = dir.cross(d);
    if det.abs() < ORIENTATION_EPSILON {
        return None;
    }
    let w = segment.p0 - origin;
    let t = w.cross(d) / det;
    let u = w.cross(dir) / det;
    if t > POINT_EPSILON && (-POINT_EPSILON..=1.0 + POINT_EPSILON).contains(&u) {
        Some(t)
    } else {
        None
    }
}

/// Wrap an angle in radians into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    if a >= TAU { 0.0 } else { a }
}

/// Angle of `p` as seen from `origin`, in `[0, 2π)`.
pub fn polar_angle(origin: Point, p: Point) -> f64 {
    normalize_angle((p - origin).atan2())
}

/// Whether `a` and `b` are closer than [`POINT_EPSILON`].
pub fn points_coincide(a: Point, b: Point) -> bool {
    (a - b).hypot() < POINT_EPSILON
}
