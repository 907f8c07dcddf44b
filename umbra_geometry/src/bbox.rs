// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes used as a fast reject.

use kurbo::{Point, Rect};

/// Axis-aligned bounding box in 2D.
///
/// A box starts out [`EMPTY`](Self::EMPTY) (`+∞, +∞, −∞, −∞`) and only grows
/// through [`expand`](Self::expand) and [`expand_box`](Self::expand_box).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y
    pub max_y: f64,
}

impl BoundingBox {
    /// The box containing nothing. Expanding it by a point yields that point.
    pub const EMPTY: Self = Self::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );

    /// Create a box from min/max corners.
    #[inline(always)]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The smallest box containing every point.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut bbox = Self::EMPTY;
        for p in points {
            bbox.expand(p);
        }
        bbox
    }

    /// Grow to include `p`.
    #[inline]
    pub fn expand(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Grow to include `other`. Expanding by an empty box is a no-op.
    #[inline]
    pub fn expand_box(&mut self, other: &Self) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Whether this box contains the point. All four edges are inside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min_x <= p.x && self.min_y <= p.y && p.x <= self.max_x && p.y <= self.max_y
    }

    /// Whether this box overlaps `other`.
    ///
    /// Boxes that only share an edge or a corner are considered to overlap.
    /// An empty box overlaps nothing.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// True if the box has no extent on some axis (`max < min`).
    ///
    /// A box around a single point is not empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.min_x <= self.max_x && self.min_y <= self.max_y)
    }

    /// Width, or 0 for an empty box.
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    /// Height, or 0 for an empty box.
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    /// Area, or 0 for an empty box.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// This box as a [`kurbo::Rect`], or `None` when empty.
    pub fn to_rect(&self) -> Option<Rect> {
        (!self.is_empty()).then(|| Rect::new(self.min_x, self.min_y, self.max_x, self.max_y))
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        let r = rect.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_has_no_area_and_contains_nothing() {
        let empty = BoundingBox::EMPTY;
        assert!(empty.is_empty());
        assert_eq!(empty.area(), 0.0);
        assert_eq!(empty.width(), 0.0);
        assert!(!empty.contains(Point::ORIGIN));
        assert!(!empty.intersects(&BoundingBox::new(-1.0, -1.0, 1.0, 1.0)));
        assert_eq!(empty.to_rect(), None);
        assert_eq!(BoundingBox::default(), empty);
    }

    #[test]
    fn expand_from_empty_yields_point_box() {
        let mut b = BoundingBox::EMPTY;
        b.expand(Point::new(2.0, 3.0));
        assert_eq!(b, BoundingBox::new(2.0, 3.0, 2.0, 3.0));
        assert!(!b.is_empty());
        assert!(b.contains(Point::new(2.0, 3.0)));
        assert_eq!(b.area(), 0.0);
    }

    #[test]
    fn expand_never_shrinks() {
        let mut b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        b.expand(Point::new(5.0, 5.0));
        assert_eq!(b, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        b.expand(Point::new(-1.0, 12.0));
        assert_eq!(b, BoundingBox::new(-1.0, 0.0, 10.0, 12.0));
        b.expand_box(&BoundingBox::EMPTY);
        assert_eq!(b, BoundingBox::new(-1.0, 0.0, 10.0, 12.0));
        b.expand_box(&BoundingBox::new(20.0, 20.0, 21.0, 21.0));
        assert_eq!(b, BoundingBox::new(-1.0, 0.0, 21.0, 21.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 5.0);
        assert!(b.contains(Point::new(0.0, 0.0)));
        assert!(b.contains(Point::new(10.0, 5.0)));
        assert!(b.contains(Point::new(10.0, 2.0)));
        assert!(!b.contains(Point::new(10.000001, 2.0)));
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&BoundingBox::new(10.0, 0.0, 20.0, 10.0)));
        assert!(a.intersects(&BoundingBox::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!a.intersects(&BoundingBox::new(10.5, 0.0, 20.0, 10.0)));
        assert!(a.intersects(&BoundingBox::new(2.0, 2.0, 3.0, 3.0)));
    }

    #[test]
    fn dimensions_and_rect_conversion() {
        let b = BoundingBox::from_points([Point::new(1.0, 2.0), Point::new(4.0, 8.0)]);
        assert_eq!(b.width(), 3.0);
        assert_eq!(b.height(), 6.0);
        assert_eq!(b.area(), 18.0);
        assert_eq!(b.to_rect(), Some(Rect::new(1.0, 2.0, 4.0, 8.0)));
        assert_eq!(BoundingBox::from(Rect::new(4.0, 8.0, 1.0, 2.0)), b);
    }
}
