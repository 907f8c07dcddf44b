// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated line segments.

use kurbo::{Line, Point, Vec2};

use crate::bbox::BoundingBox;
use crate::error::GeometryError;
use crate::predicates::{
    Orientation, distance_point_to_segment, points_coincide, segment_intersection,
    segments_intersect,
};

/// A segment with finite, distinct endpoints.
///
/// The endpoints keep their order: `p0` and `p1` are reported exactly as given,
/// which matters to callers that assign sweep roles by endpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    p0: Point,
    p1: Point,
}

impl Segment {
    /// Create a segment from two endpoints.
    ///
    /// Fails with [`GeometryError::NonFinite`] if any coordinate is NaN or
    /// infinite, and with [`GeometryError::ZeroLengthSegment`] if the endpoints
    /// coincide.
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Result<Self, GeometryError> {
        let (p0, p1) = (p0.into(), p1.into());
        if !p0.is_finite() || !p1.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if points_coincide(p0, p1) {
            return Err(GeometryError::ZeroLengthSegment);
        }
        Ok(Self { p0, p1 })
    }

    /// First endpoint.
    #[inline]
    pub fn p0(&self) -> Point {
        self.p0
    }

    /// Second endpoint.
    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// This segment as a [`kurbo::Line`].
    #[inline]
    pub fn line(&self) -> Line {
        Line::new(self.p0, self.p1)
    }

    /// Euclidean length; always positive.
    pub fn length(&self) -> f64 {
        self.p0.distance(self.p1)
    }

    /// Midpoint.
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// Tight bounding box of the endpoints.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points([self.p0, self.p1])
    }

    /// Whether `p` lies on the segment, endpoints included.
    pub fn contains_point(&self, p: Point) -> bool {
        Orientation::of(self.p0, self.p1, p) == Orientation::Collinear
            && self.bounding_box().contains(p)
    }

    /// Whether this segment shares a point with `other`.
    pub fn intersects(&self, other: &Self) -> bool {
        segments_intersect(self.line(), other.line())
    }

    /// Crossing point of the supporting lines; see [`segment_intersection`].
    pub fn intersection(&self, other: &Self) -> Option<Point> {
        segment_intersection(self.line(), other.line())
    }

    /// Distance from `p` to the closest point of this segment.
    pub fn distance_to_point(&self, p: Point) -> f64 {
        distance_point_to_segment(p, self.line())
    }

    /// This segment moved by `offset`.
    ///
    /// Fails only if the translated coordinates stop being finite.
    pub fn translate(&self, offset: Vec2) -> Result<Self, GeometryError> {
        Self::new(self.p0 + offset, self.p1 + offset)
    }
}

impl From<Segment> for Line {
    fn from(segment: Segment) -> Self {
        segment.line()
    }
}

impl TryFrom<Line> for Segment {
    type Error = GeometryError;

    fn try_from(line: Line) -> Result<Self, Self::Error> {
        Self::new(line.p0, line.p1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_and_non_finite() {
        assert_eq!(
            Segment::new((1.0, 1.0), (1.0, 1.0)),
            Err(GeometryError::ZeroLengthSegment)
        );
        assert_eq!(
            Segment::new((0.0, 0.0), (1e-10, 0.0)),
            Err(GeometryError::ZeroLengthSegment)
        );
        assert_eq!(
            Segment::new((f64::NAN, 0.0), (1.0, 0.0)),
            Err(GeometryError::NonFinite)
        );
        assert_eq!(
            Segment::new((0.0, 0.0), (f64::INFINITY, 0.0)),
            Err(GeometryError::NonFinite)
        );
    }

    #[test]
    fn keeps_endpoint_order() {
        let s = Segment::new((3.0, 4.0), (0.0, 0.0)).unwrap();
        assert_eq!(s.p0(), Point::new(3.0, 4.0));
        assert_eq!(s.p1(), Point::ORIGIN);
        assert_eq!(s.length(), 5.0);
        assert_eq!(Line::from(s), Line::new((3.0, 4.0), (0.0, 0.0)));
    }

    #[test]
    fn contains_points_on_the_segment_only() {
        let s = Segment::new((0.0, 0.0), (4.0, 4.0)).unwrap();
        assert!(s.contains_point(Point::new(2.0, 2.0)));
        assert!(s.contains_point(Point::new(4.0, 4.0)));
        assert!(!s.contains_point(Point::new(5.0, 5.0)));
        assert!(!s.contains_point(Point::new(2.0, 2.5)));
    }

    #[test]
    fn bounding_box_spans_endpoints() {
        let s = Segment::new((4.0, -1.0), (-2.0, 3.0)).unwrap();
        assert_eq!(s.bounding_box(), BoundingBox::new(-2.0, -1.0, 4.0, 3.0));
    }

    #[test]
    fn translate_moves_both_endpoints() {
        let s = Segment::new((0.0, 0.0), (1.0, 0.0)).unwrap();
        let moved = s.translate(Vec2::new(2.0, 3.0)).unwrap();
        assert_eq!(moved.p0(), Point::new(2.0, 3.0));
        assert_eq!(moved.p1(), Point::new(3.0, 3.0));
        assert_eq!(
            s.translate(Vec2::new(f64::NAN, 0.0)),
            Err(GeometryError::NonFinite)
        );
    }

    #[test]
    fn try_from_line_validates() {
        assert!(Segment::try_from(Line::new((0.0, 0.0), (0.0, 2.0))).is_ok());
        assert!(Segment::try_from(Line::new((0.0, 0.0), (0.0, 0.0))).is_err());
    }
}
