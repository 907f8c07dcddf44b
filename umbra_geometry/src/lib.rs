// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Umbra Geometry: tolerance-aware 2D primitives for line-of-sight queries.
//!
//! This crate provides the leaf layer of the Umbra workspace:
//!
//! - [`predicates`]: orientation, segment intersection, point and ray distances,
//!   polar angles. Every comparison goes through one of two documented
//!   tolerances, [`ORIENTATION_EPSILON`] and [`POINT_EPSILON`].
//! - [`Segment`]: a validated, non-degenerate segment that converts to
//!   [`kurbo::Line`].
//! - [`BoundingBox`]: an axis-aligned box that starts empty and only grows.
//! - [`Polygon`]: an ordered vertex ring with derived edges, point-in-polygon,
//!   area, perimeter and convexity.
//!
//! Points, vectors and lines are [`kurbo`] types throughout.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use umbra_geometry::{Polygon, Segment, segments_intersect};
//!
//! let a = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
//! let b = Segment::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0)).unwrap();
//! assert!(segments_intersect(a.line(), b.line()));
//!
//! let square = Polygon::from_vertices([
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 4.0),
//!     Point::new(0.0, 4.0),
//! ]);
//! assert!(square.contains(Point::new(2.0, 2.0)));
//! assert_eq!(square.edges().len(), 4);
//! assert_eq!(square.area(), 16.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable the `libm` feature when
//! building without `std`.

#![no_std]

extern crate alloc;

pub mod bbox;
pub mod error;
pub mod polygon;
pub mod predicates;
pub mod segment;

pub use bbox::BoundingBox;
pub use error::GeometryError;
pub use polygon::Polygon;
pub use predicates::{
    ORIENTATION_EPSILON, Orientation, POINT_EPSILON, distance_point_to_segment, normalize_angle,
    orientation, points_coincide, polar_angle, ray_segment_distance, segment_intersection,
    segments_intersect,
};
pub use segment::Segment;
