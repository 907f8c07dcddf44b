// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Umbra Visibility: what an observer can see among opaque segments.
//!
//! [`sweep`] takes an observer point and a slice of occluding
//! [`Segment`](umbra_geometry::Segment)s and returns a [`Visibility`]: the
//! star-shaped polygon of points with a clear line of sight to the observer,
//! and one flag per occluder telling whether any part of it is seen.
//!
//! The algorithm is an angular sweep:
//!
//! - [`EventPlan`] turns each occluder into a `Start` and an `End` event at the
//!   polar angles of its endpoints, handling occluders that cross the 0 ray and
//!   occluders seen edge-on.
//! - Events are sorted by angle (`End` first on ties) and grouped by angle.
//! - [`ActiveOccluders`] holds the occluders crossed by the current direction,
//!   ordered by distance; the nearest one after each group is visible.
//! - The polygon is sampled with evenly spaced rays plus rays hugging every
//!   endpoint, each stopped by the first occluder it hits and clipped to
//!   [`SweepConfig::max_radius`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use umbra_geometry::Segment;
//! use umbra_visibility::{SweepConfig, sweep};
//!
//! let near = Segment::new((5.0, -5.0), (5.0, 5.0)).unwrap();
//! let far = Segment::new((10.0, -10.0), (10.0, 10.0)).unwrap();
//! let result = sweep(Point::ORIGIN, &[far, near], &SweepConfig::default());
//!
//! assert_eq!(result.visible, vec![false, true]);
//! assert!(result.polygon.contains(Point::new(4.0, 0.0)));
//! assert!(!result.polygon.contains(Point::new(7.0, 0.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Logging goes through the [`log`]
//! facade at `debug` and `trace` level.

#![no_std]

extern crate alloc;

pub mod active;
pub mod config;
pub mod events;
pub mod sort;
pub mod sweep;

pub use active::ActiveOccluders;
pub use config::SweepConfig;
pub use events::{Batch, EventKind, EventPlan, SweepEvent, batches};
pub use sort::{SortStrategy, hybrid_sort_by, insertion_sort_by};
pub use sweep::{Visibility, sweep};
