// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bombs and their effects on a scene.
//!
//! A bomb sees the scene from its origin. Everything inside the visible region
//! is affected, shields included; a shield hides what lies behind it, not
//! itself.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, Vec2};
use umbra_geometry::{GeometryError, Polygon};
use umbra_region::{RegionParams, RegionTest, Shape, ShapeKind};
use umbra_visibility::SweepConfig;

use crate::context::SceneContext;
use crate::scene::Scene;
use crate::types::{SceneShape, ShapeId};

/// What a bomb does to the shapes it sees.
#[derive(Clone, Debug, PartialEq)]
pub enum BombKind {
    /// Remove them from the scene.
    Destroy,
    /// Set both stroke and fill to `color`.
    Paint {
        /// New color.
        color: String,
    },
    /// Append copies moved by `(dx, dy)`.
    Clone {
        /// Horizontal offset of the copies.
        dx: f64,
        /// Vertical offset of the copies.
        dy: f64,
    },
}

impl BombKind {
    /// Short lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Destroy => "destroy",
            Self::Paint { .. } => "paint",
            Self::Clone { .. } => "clone",
        }
    }
}

/// A bomb placed in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Bomb {
    /// Where it goes off.
    pub origin: Point,
    /// What it does.
    pub kind: BombKind,
}

impl Bomb {
    fn checked(origin: Point, kind: BombKind) -> Result<Self, GeometryError> {
        if !origin.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        Ok(Self { origin, kind })
    }

    /// A bomb that destroys what it sees.
    pub fn destroy(origin: impl Into<Point>) -> Result<Self, GeometryError> {
        Self::checked(origin.into(), BombKind::Destroy)
    }

    /// A bomb that repaints what it sees.
    pub fn paint(
        origin: impl Into<Point>,
        color: impl Into<String>,
    ) -> Result<Self, GeometryError> {
        Self::checked(
            origin.into(),
            BombKind::Paint {
                color: color.into(),
            },
        )
    }

    /// A bomb that clones what it sees, offset by `(dx, dy)`.
    pub fn clone_shifted(
        origin: impl Into<Point>,
        dx: f64,
        dy: f64,
    ) -> Result<Self, GeometryError> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        Self::checked(origin.into(), BombKind::Clone { dx, dy })
    }
}

/// Outcome of [`Scene::detonate`].
#[derive(Clone, Debug, PartialEq)]
pub struct BombReport {
    /// [`BombKind::name`] of the bomb.
    pub kind: &'static str,
    /// Where the bomb went off.
    pub origin: Point,
    /// The region the bomb could see.
    pub region: Polygon,
    /// Affected shapes in scene order.
    pub affected: Vec<(ShapeId, ShapeKind)>,
    /// `(original, copy)` id pairs; empty unless the bomb clones.
    pub clones: Vec<(ShapeId, ShapeId)>,
    /// Affected shapes a clone bomb could not copy, because the copy would
    /// not be finite or no ids were left.
    pub skipped: Vec<ShapeId>,
}

impl Scene {
    /// Ids of shapes inside `region`, in scene order.
    fn shapes_in(&self, region: &Polygon, params: &RegionParams) -> Vec<(ShapeId, ShapeKind)> {
        self.shapes
            .iter()
            .filter(|s| s.shape.in_region(region, params))
            .map(|s| (s.id, s.shape.kind()))
            .collect()
    }

    /// Set off `bomb` and apply its effect.
    ///
    /// The region is computed once, before any shape changes. Copies made by
    /// a clone bomb are not shields, keep the original's style and get fresh
    /// ids from `ctx`. Cloning stops when `ctx` runs out of ids.
    pub fn detonate(
        &mut self,
        bomb: &Bomb,
        ctx: &mut SceneContext,
        config: &SweepConfig,
        params: &RegionParams,
    ) -> BombReport {
        let region = self.visibility(bomb.origin, config).polygon;
        let affected = self.shapes_in(&region, params);
        log::info!(
            "{} bomb at ({}, {}) reaches {} shapes",
            bomb.kind.name(),
            bomb.origin.x,
            bomb.origin.y,
            affected.len()
        );

        let mut clones = Vec::new();
        let mut skipped = Vec::new();
        match &bomb.kind {
            BombKind::Destroy => {
                let doomed: HashSet<ShapeId> = affected.iter().map(|&(id, _)| id).collect();
                self.shapes.retain(|s| !doomed.contains(&s.id));
            }
            BombKind::Paint { color } => {
                for &(id, _) in &affected {
                    if let Some(entry) = self.get_mut(id) {
                        entry.style.stroke.clone_from(color);
                        entry.style.fill.clone_from(color);
                    }
                }
            }
            BombKind::Clone { dx, dy } => {
                self.sync_ids(ctx);
                let offset = Vec2::new(*dx, *dy);
                let mut copies = Vec::with_capacity(affected.len());
                for &(id, _) in &affected {
                    let Some(original) = self.get(id) else {
                        continue;
                    };
                    let shape = match original.shape.translate(offset) {
                        Ok(Shape::Line(mut line)) => {
                            line.shield = false;
                            Shape::Line(line)
                        }
                        Ok(shape) => shape,
                        Err(err) => {
                            log::warn!("cannot clone shape {id}: {err}");
                            skipped.push(id);
                            continue;
                        }
                    };
                    let copy = match ctx.ids.next_id() {
                        Ok(copy) => copy,
                        Err(err) => {
                            log::warn!("cannot clone shape {id}: {err}");
                            skipped.push(id);
                            continue;
                        }
                    };
                    log::debug!("cloned shape {id} as {copy}");
                    copies.push(SceneShape {
                        id: copy,
                        shape,
                        style: original.style.clone(),
                    });
                    clones.push((id, copy));
                }
                self.shapes.extend(copies);
            }
        }

        BombReport {
            kind: bomb.kind.name(),
            origin: bomb.origin,
            region,
            affected,
            clones,
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    /// A shield at x = 10 with a circle on each side of it.
    fn walled_scene() -> Scene {
        let mut scene = Scene::new();
        scene
            .insert(
                ShapeId(1),
                Shape::shield((10.0, -50.0), (10.0, 50.0)).unwrap(),
                Style::stroke_only("black"),
            )
            .unwrap();
        scene
            .insert(
                ShapeId(2),
                Shape::circle((5.0, 0.0), 1.0).unwrap(),
                Style::new("red", "red"),
            )
            .unwrap();
        scene
            .insert(
                ShapeId(3),
                Shape::circle((20.0, 0.0), 1.0).unwrap(),
                Style::new("green", "green"),
            )
            .unwrap();
        scene
    }

    fn detonate(scene: &mut Scene, bomb: &Bomb) -> BombReport {
        let mut ctx = SceneContext::for_scene(scene);
        scene.detonate(
            bomb,
            &mut ctx,
            &SweepConfig::default(),
            &RegionParams::thorough(),
        )
    }

    #[test]
    fn constructors_reject_non_finite() {
        assert_eq!(
            Bomb::destroy((f64::NAN, 0.0)),
            Err(GeometryError::NonFinite)
        );
        assert_eq!(
            Bomb::clone_shifted((0.0, 0.0), f64::INFINITY, 0.0),
            Err(GeometryError::NonFinite)
        );
        let paint = Bomb::paint((1.0, 2.0), "blue").unwrap();
        assert_eq!(paint.kind.name(), "paint");
    }

    #[test]
    fn destroy_spares_what_the_shield_hides() {
        let mut scene = walled_scene();
        let report = detonate(&mut scene, &Bomb::destroy((0.0, 0.0)).unwrap());
        assert_eq!(report.kind, "destroy");
        assert_eq!(
            report.affected,
            [
                (ShapeId(1), ShapeKind::Line),
                (ShapeId(2), ShapeKind::Circle),
            ]
        );
        let left: Vec<u32> = scene.iter().map(|s| s.id.get()).collect();
        assert_eq!(left, [3]);
    }

    #[test]
    fn paint_sets_stroke_and_fill() {
        let mut scene = walled_scene();
        detonate(&mut scene, &Bomb::paint((0.0, 0.0), "#ff00ff").unwrap());
        let painted = &scene.get(ShapeId(2)).unwrap().style;
        assert_eq!(painted.stroke, "#ff00ff");
        assert_eq!(painted.fill, "#ff00ff");
        assert_eq!(scene.get(ShapeId(3)).unwrap().style.fill, "green");
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn clones_are_offset_and_not_shields() {
        let mut scene = walled_scene();
        let bomb = Bomb::clone_shifted((0.0, 0.0), 0.0, 100.0).unwrap();
        let report = detonate(&mut scene, &bomb);
        assert_eq!(
            report.clones,
            [(ShapeId(1), ShapeId(4)), (ShapeId(2), ShapeId(5))]
        );
        assert!(report.skipped.is_empty());
        assert_eq!(scene.len(), 5);

        let wall = &scene.get(ShapeId(4)).unwrap().shape;
        assert_eq!(wall.kind(), ShapeKind::Line);
        assert!(!wall.is_shield());
        assert_eq!(scene.occluders().len(), 1);

        let copy = scene.get(ShapeId(5)).unwrap();
        assert_eq!(copy.shape, Shape::circle((5.0, 100.0), 1.0).unwrap());
        assert_eq!(copy.style, Style::new("red", "red"));
    }

    #[test]
    fn clone_stops_when_ids_run_out() {
        let last = ShapeId(u32::MAX);
        let mut scene = walled_scene();
        scene
            .insert(
                last,
                Shape::circle((-5.0, 0.0), 1.0).unwrap(),
                Style::new("blue", "blue"),
            )
            .unwrap();
        let bomb = Bomb::clone_shifted((0.0, 0.0), 0.0, 100.0).unwrap();
        let report = detonate(&mut scene, &bomb);
        assert_eq!(report.affected.len(), 3);
        assert!(report.clones.is_empty());
        assert_eq!(report.skipped, [ShapeId(1), ShapeId(2), last]);
        assert_eq!(scene.len(), 4);
    }

    #[test]
    fn empty_scene_is_untouched() {
        let mut scene = Scene::new();
        let report = detonate(&mut scene, &Bomb::destroy((3.0, 4.0)).unwrap());
        assert!(report.affected.is_empty());
        assert!(report.region.len() >= 3);
        assert!(scene.is_empty());
    }
}
