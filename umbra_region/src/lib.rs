// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region membership for shapes against visibility polygons.
//!
//! This crate answers "is this shape (at least partly) inside that region?"
//! for the shapes of an Umbra scene, and glues the scene's shields to the
//! sweep in [`umbra_visibility`].
//!
//! # Typical usage
//!
//! - Collect the scene's shields with [`occluders`] and compute the region with
//!   [`compute_visibility_polygon`] (or [`compute_visibility`] to also get
//!   per-shield flags).
//! - Call [`RegionTest::in_region`] on each candidate shape, or
//!   [`is_shape_in_region`] for the default parameters.
//!
//! # Key types
//!
//! - [`RegionParams`]: per-query parameters, most importantly the
//!   [`Membership`] mode.
//! - [`RegionTest`]: implemented by shapes that can be tested against a
//!   region [`Polygon`].
//! - [`Shape`]: the closed set of scene shapes (circle, rectangle, line, text).
//!
//! ## Shapes and scope
//!
//! [`RegionTest`] is implemented for:
//!
//! - [`Circle`]: inside when the center is inside or some region edge comes
//!   within the radius.
//! - [`Rect`]: inside when a corner is inside; [`Membership::Thorough`] adds
//!   region vertices inside the rectangle and edge crossings.
//! - [`Segment`] and [`LineShape`]: inside when an endpoint is inside;
//!   thorough mode adds edge crossings.
//! - [`TextLabel`]: tested as its horizontal baseline; see the [`text`] module.
//! - [`Shape`]: dispatches to the above.
//!
//! A region with fewer than 3 vertices contains no shape.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Circle, Line, Point, Rect};
use umbra_geometry::{Polygon, Segment, distance_point_to_segment, segments_intersect};
use umbra_visibility::{SweepConfig, Visibility, sweep};

/// The shape enum and line shapes.
pub mod shape;
/// Text labels and their baseline projection.
pub mod text;

pub use shape::{LineShape, Shape, ShapeKind};
pub use text::{Anchor, GLYPH_WIDTH, TextLabel};

/// How hard a region test looks for overlap.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Membership {
    /// Key points only: centers, corners, endpoints, plus circle edge distance.
    #[default]
    Basic,
    /// Also looks for boundary crossings and for the region poking into the shape.
    ///
    /// Circles give the same answer in both modes: the edge-distance check
    /// already finds every region that reaches into the disc.
    Thorough,
}

/// Parameters controlling region tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionParams {
    /// Test mode.
    pub mode: Membership,
}

impl RegionParams {
    /// Parameters in [`Membership::Thorough`] mode.
    pub const fn thorough() -> Self {
        Self {
            mode: Membership::Thorough,
        }
    }

    fn is_thorough(&self) -> bool {
        self.mode == Membership::Thorough
    }
}

/// Trait for shapes that can be tested against a region polygon.
///
/// Implementations must be pure: the same shape, region and parameters always
/// give the same answer.
pub trait RegionTest {
    /// Whether any part of this shape is considered inside `region`.
    fn in_region(&self, region: &Polygon, params: &RegionParams) -> bool;
}

impl RegionTest for Circle {
    fn in_region(&self, region: &Polygon, _params: &RegionParams) -> bool {
        if region.len() < 3 {
            return false;
        }
        // A disc point inside the region with the center outside means some
        // region edge is within the radius.
        region.contains(self.center)
            || region
                .boundary()
                .any(|edge| distance_point_to_segment(self.center, edge) <= self.radius)
    }
}

/// The corners of `rect` counter-clockwise from its minimum corner, after
/// normalizing negative sizes.
///
/// In y-down screen coordinates this is top-left, top-right, bottom-right,
/// bottom-left.
pub fn rect_corners(rect: &Rect) -> [Point; 4] {
    let rect = rect.abs();
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}

// Edges included, unlike `Rect::contains`.
fn rect_touches(rect: &Rect, p: Point) -> bool {
    rect.x0 <= p.x && p.x <= rect.x1 && rect.y0 <= p.y && p.y <= rect.y1
}

impl RegionTest for Rect {
    fn in_region(&self, region: &Polygon, params: &RegionParams) -> bool {
        if region.len() < 3 {
            return false;
        }
        let corners = rect_corners(self);
        if corners.iter().any(|c| region.contains(*c)) {
            return true;
        }
        if !params.is_thorough() {
            return false;
        }
        let rect = self.abs();
        region.vertices().iter().any(|v| rect_touches(&rect, *v))
            || (0..4).any(|i| {
                let side = Line::new(corners[i], corners[(i + 1) % 4]);
                crosses_boundary(region, side)
            })
    }
}

impl RegionTest for Segment {
    fn in_region(&self, region: &Polygon, params: &RegionParams) -> bool {
        line_in_region(self.line(), region, params)
    }
}

/// Whether a segment, possibly degenerate, is inside `region`.
///
/// Shared by segment-like shapes: an endpoint inside, or in thorough mode any
/// crossing of the region boundary.
pub(crate) fn line_in_region(line: Line, region: &Polygon, params: &RegionParams) -> bool {
    if region.len() < 3 {
        return false;
    }
    region.contains(line.p0)
        || region.contains(line.p1)
        || (params.is_thorough() && crosses_boundary(region, line))
}

fn crosses_boundary(region: &Polygon, line: Line) -> bool {
    region.boundary().any(|edge| segments_intersect(edge, line))
}

/// Whether `shape` is inside `region` under the default [`RegionParams`].
pub fn is_shape_in_region(shape: &Shape, region: &Polygon) -> bool {
    shape.in_region(region, &RegionParams::default())
}

/// The shield segments among `shapes`, in order.
pub fn occluders<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Vec<Segment> {
    shapes.into_iter().filter_map(Shape::as_shield).collect()
}

/// Visibility from `origin` with the shields among `shapes` as occluders.
///
/// `visible[i]` refers to the `i`-th element of [`occluders`]`(shapes)`.
pub fn compute_visibility(origin: Point, shapes: &[Shape], config: &SweepConfig) -> Visibility {
    sweep(origin, &occluders(shapes), config)
}

/// The region visible from `origin` with the shields among `shapes` as
/// occluders.
pub fn compute_visibility_polygon(
    origin: Point,
    shapes: &[Shape],
    config: &SweepConfig,
) -> Polygon {
    compute_visibility(origin, shapes, config).polygon
}
