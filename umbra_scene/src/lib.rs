// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Umbra Scene: shapes, shields and bombs.
//!
//! A [`Scene`] is an ordered list of [`Shape`](umbra_region::Shape)s, each
//! with a [`ShapeId`] and a [`Style`]. Shield lines in the scene block line of
//! sight; everything else is transparent.
//!
//! - [`Scene::raise_shields`] turns shapes into shield lines.
//! - [`Scene::detonate`] sets off a [`Bomb`]: the region visible from its origin
//!   is computed once, and every shape inside is destroyed, repainted or
//!   cloned.
//!
//! Operations that create shapes take a [`SceneContext`] holding the id
//! generator and the current text style. There is no global state.
//!
//! ## Example
//!
//! ```rust
//! use umbra_region::{RegionParams, Shape};
//! use umbra_scene::{Bomb, Scene, SceneContext, ShapeId, Style};
//! use umbra_visibility::SweepConfig;
//!
//! let mut scene = Scene::new();
//! scene.insert(ShapeId(1), Shape::shield((10.0, -50.0), (10.0, 50.0)).unwrap(), Style::stroke_only("black")).unwrap();
//! scene.insert(ShapeId(2), Shape::circle((20.0, 0.0), 2.0).unwrap(), Style::new("red", "red")).unwrap();
//! scene.insert(ShapeId(3), Shape::circle((-20.0, 0.0), 2.0).unwrap(), Style::new("red", "red")).unwrap();
//!
//! let mut ctx = SceneContext::for_scene(&scene);
//! let bomb = Bomb::paint((0.0, 0.0), "blue").unwrap();
//! scene.detonate(&bomb, &mut ctx, &SweepConfig::default(), &RegionParams::default());
//!
//! // The circle behind the shield keeps its color.
//! assert_eq!(scene.get(ShapeId(2)).unwrap().style.fill, "red");
//! assert_eq!(scene.get(ShapeId(3)).unwrap().style.fill, "blue");
//! ```
//!
//! Effects are logged through the [`log`] facade.

#![no_std]

extern crate alloc;

pub mod bomb;
pub mod context;
pub mod error;
pub mod scene;
pub mod shield;
pub mod types;

pub use bomb::{Bomb, BombKind, BombReport};
pub use context::{IdGenerator, SceneContext, TextStyle};
pub use error::SceneError;
pub use scene::Scene;
pub use shield::{ShieldOrientation, ShieldReport};
pub use types::{SceneShape, ShapeId, Style};
