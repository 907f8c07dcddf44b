// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use kurbo::{Circle, Point, Rect, Vec2};
use smallvec::{SmallVec, smallvec};
use umbra_geometry::{GeometryError, Polygon, Segment};

use crate::text::{Anchor, TextLabel};
use crate::{RegionParams, RegionTest, line_in_region, rect_corners};

/// A line shape: a segment that may act as a shield.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineShape {
    /// Geometry of the line.
    pub segment: Segment,
    /// Whether the line blocks line of sight.
    pub shield: bool,
}

impl RegionTest for LineShape {
    fn in_region(&self, region: &Polygon, params: &RegionParams) -> bool {
        line_in_region(self.segment.line(), region, params)
    }
}

/// Discriminant of [`Shape`], for reports and logs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    /// A circle.
    Circle,
    /// An axis-aligned rectangle.
    Rect,
    /// A line, shield or not.
    Line,
    /// A text label.
    Text,
}

impl ShapeKind {
    /// Short lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Line => "line",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any shape a scene can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A filled circle.
    Circle(Circle),
    /// An axis-aligned rectangle with non-negative size.
    Rect(Rect),
    /// A line, possibly a shield.
    Line(LineShape),
    /// A text label.
    Text(TextLabel),
}

fn finite(p: Point) -> Result<Point, GeometryError> {
    if p.is_finite() {
        Ok(p)
    } else {
        Err(GeometryError::NonFinite)
    }
}

impl Shape {
    /// A circle; the radius must be positive.
    pub fn circle(center: impl Into<Point>, radius: f64) -> Result<Self, GeometryError> {
        let center = finite(center.into())?;
        if !radius.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self::Circle(Circle::new(center, radius)))
    }

    /// A rectangle from its minimum corner and a positive size.
    pub fn rect(origin: impl Into<Point>, width: f64, height: f64) -> Result<Self, GeometryError> {
        let origin = finite(origin.into())?;
        if !width.is_finite() || !height.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::NonPositiveSize { width, height });
        }
        Ok(Self::Rect(Rect::from_origin_size(origin, (width, height))))
    }

    /// A plain, non-blocking line.
    pub fn line(p0: impl Into<Point>, p1: impl Into<Point>) -> Result<Self, GeometryError> {
        Ok(Self::Line(LineShape {
            segment: Segment::new(p0, p1)?,
            shield: false,
        }))
    }

    /// A line that blocks line of sight.
    pub fn shield(p0: impl Into<Point>, p1: impl Into<Point>) -> Result<Self, GeometryError> {
        Ok(Self::Line(LineShape {
            segment: Segment::new(p0, p1)?,
            shield: true,
        }))
    }

    /// A text label anchored at `position`.
    pub fn text(
        position: impl Into<Point>,
        anchor: Anchor,
        text: impl Into<String>,
    ) -> Result<Self, GeometryError> {
        Ok(Self::Text(TextLabel {
            position: finite(position.into())?,
            anchor,
            text: text.into(),
        }))
    }

    /// Which variant this is.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Rect(_) => ShapeKind::Rect,
            Self::Line(_) => ShapeKind::Line,
            Self::Text(_) => ShapeKind::Text,
        }
    }

    /// The segment of a shield line, or `None` for anything else.
    pub fn as_shield(&self) -> Option<Segment> {
        match self {
            Self::Line(line) if line.shield => Some(line.segment),
            _ => None,
        }
    }

    /// Whether this is a shield line.
    pub fn is_shield(&self) -> bool {
        self.as_shield().is_some()
    }

    /// Points that basic region tests probe: the center, the corners, the
    /// endpoints or the baseline ends.
    pub fn key_points(&self) -> SmallVec<[Point; 4]> {
        match self {
            Self::Circle(c) => smallvec![c.center],
            Self::Rect(r) => SmallVec::from_buf(rect_corners(r)),
            Self::Line(l) => smallvec![l.segment.p0(), l.segment.p1()],
            Self::Text(t) => {
                let baseline = t.baseline();
                smallvec![baseline.p0, baseline.p1]
            }
        }
    }

    /// This shape moved by `offset`.
    ///
    /// Fails only if the result stops being finite.
    pub fn translate(&self, offset: Vec2) -> Result<Self, GeometryError> {
        if !offset.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        Ok(match self {
            Self::Circle(c) => Self::Circle(Circle::new(finite(c.center + offset)?, c.radius)),
            Self::Rect(r) => {
                let moved = *r + offset;
                finite(moved.origin())?;
                finite(Point::new(moved.x1, moved.y1))?;
                Self::Rect(moved)
            }
            Self::Line(l) => Self::Line(LineShape {
                segment: l.segment.translate(offset)?,
                shield: l.shield,
            }),
            Self::Text(t) => Self::Text(TextLabel {
                position: finite(t.position + offset)?,
                anchor: t.anchor,
                text: t.text.clone(),
            }),
        })
    }
}

impl RegionTest for Shape {
    fn in_region(&self, region: &Polygon, params: &RegionParams) -> bool {
        match self {
            Self::Circle(c) => c.in_region(region, params),
            Self::Rect(r) => r.in_region(region, params),
            Self::Line(l) => l.in_region(region, params),
            Self::Text(t) => t.in_region(region, params),
        }
    }
}
