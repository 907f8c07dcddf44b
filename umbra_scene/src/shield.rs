// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning scene shapes into shields.
//!
//! Lines become shields in place. Every other shape is replaced by shield
//! lines that follow its outline:
//!
//! - a circle by one diameter, horizontal or vertical;
//! - a rectangle by its four sides, clockwise from the top edge in y-down
//!   screen coordinates;
//! - a text label by its baseline.
//!
//! New lines take the original's stroke color and fresh ids, and are appended
//! to the scene in the order their originals appear.

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use hashbrown::HashSet;
use smallvec::SmallVec;
use umbra_geometry::Segment;
use umbra_region::{LineShape, Shape, ShapeKind, rect_corners};

use crate::context::SceneContext;
use crate::scene::Scene;
use crate::types::{SceneShape, ShapeId, Style};

/// Direction of the diameter a circle is reduced to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ShieldOrientation {
    /// Left to right through the center.
    Horizontal,
    /// Top to bottom through the center.
    #[default]
    Vertical,
}

impl ShieldOrientation {
    /// `h` or `H` is horizontal; anything else is vertical.
    pub fn from_char(c: char) -> Self {
        match c {
            'h' | 'H' => Self::Horizontal,
            _ => Self::Vertical,
        }
    }
}

/// What [`Scene::raise_shields`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShieldReport {
    /// Shapes turned into shields, in scene order.
    pub converted: Vec<(ShapeId, ShapeKind)>,
    /// Ids of shield lines added to the scene.
    pub created: Vec<ShapeId>,
    /// Shapes in range left untouched: they have no outline to shield with,
    /// or no ids were left for their shield lines.
    pub skipped: Vec<ShapeId>,
}

/// Shield segments that replace `shape`.
///
/// Empty for lines, which are converted in place, and for outlines that
/// collapse to a point.
fn outline(shape: &Shape, orientation: ShieldOrientation) -> SmallVec<[Segment; 4]> {
    let mut out = SmallVec::new();
    match shape {
        Shape::Line(_) => {}
        Shape::Circle(c) => {
            let (cx, cy, r) = (c.center.x, c.center.y, c.radius);
            let diameter = match orientation {
                ShieldOrientation::Horizontal => Segment::new((cx - r, cy), (cx + r, cy)),
                ShieldOrientation::Vertical => Segment::new((cx, cy - r), (cx, cy + r)),
            };
            out.extend(diameter.ok());
        }
        Shape::Rect(r) => {
            let corners = rect_corners(r);
            // Degenerate sides of a zero-width or zero-height rect drop out.
            for (i, &corner) in corners.iter().enumerate() {
                out.extend(Segment::new(corner, corners[(i + 1) % 4]).ok());
            }
        }
        Shape::Text(t) => {
            out.extend(Segment::try_from(t.baseline()).ok());
        }
    }
    out
}

impl Scene {
    /// Convert every shape whose id lies in `range` into shields.
    ///
    /// Lines keep their id and become shields. Other shapes are removed and
    /// replaced by shield lines with ids drawn from `ctx`; a shape is skipped
    /// when `ctx` runs out of ids.
    pub fn raise_shields(
        &mut self,
        range: RangeInclusive<ShapeId>,
        orientation: ShieldOrientation,
        ctx: &mut SceneContext,
    ) -> ShieldReport {
        self.sync_ids(ctx);
        let mut report = ShieldReport::default();
        let mut retired = HashSet::new();
        let mut added = Vec::new();

        for entry in &mut self.shapes {
            if !range.contains(&entry.id) {
                continue;
            }
            let kind = entry.shape.kind();
            if let Shape::Line(line) = &mut entry.shape {
                line.shield = true;
                report.converted.push((entry.id, kind));
                continue;
            }
            let sides = outline(&entry.shape, orientation);
            if sides.is_empty() {
                log::warn!("shape {} ({kind}) has no outline to shield with", entry.id);
                report.skipped.push(entry.id);
                continue;
            }
            let ids: Result<SmallVec<[ShapeId; 4]>, _> =
                sides.iter().map(|_| ctx.ids.next_id()).collect();
            let ids = match ids {
                Ok(ids) => ids,
                Err(err) => {
                    log::warn!("cannot shield shape {}: {err}", entry.id);
                    report.skipped.push(entry.id);
                    continue;
                }
            };
            for (segment, id) in sides.into_iter().zip(ids) {
                added.push(SceneShape {
                    id,
                    shape: Shape::Line(LineShape {
                        segment,
                        shield: true,
                    }),
                    style: Style::stroke_only(entry.style.stroke.clone()),
                });
                report.created.push(id);
            }
            retired.insert(entry.id);
            report.converted.push((entry.id, kind));
        }

        self.shapes.retain(|s| !retired.contains(&s.id));
        self.shapes.extend(added);
        log::debug!(
            "raised shields on {} shapes, {} lines added",
            report.converted.len(),
            report.created.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};
    use umbra_region::Anchor;

    fn scene_of(shapes: impl IntoIterator<Item = (u32, Shape)>) -> Scene {
        let mut scene = Scene::new();
        for (id, shape) in shapes {
            scene
                .insert(ShapeId(id), shape, Style::new("red", "blue"))
                .unwrap();
        }
        scene
    }

    fn segment_of(scene: &Scene, id: ShapeId) -> Segment {
        scene.get(id).unwrap().shape.as_shield().unwrap()
    }

    #[test]
    fn orientation_from_char() {
        use ShieldOrientation::{Horizontal, Vertical};
        assert_eq!(ShieldOrientation::from_char('h'), Horizontal);
        assert_eq!(ShieldOrientation::from_char('H'), Horizontal);
        assert_eq!(ShieldOrientation::from_char('v'), Vertical);
        assert_eq!(ShieldOrientation::from_char('x'), Vertical);
    }

    #[test]
    fn line_becomes_shield_in_place() {
        let mut scene = scene_of([(4, Shape::line((0.0, 0.0), (3.0, 0.0)).unwrap())]);
        let mut ctx = SceneContext::default();
        let report = scene.raise_shields(
            ShapeId(4)..=ShapeId(4),
            ShieldOrientation::Vertical,
            &mut ctx,
        );
        assert_eq!(report.converted, [(ShapeId(4), ShapeKind::Line)]);
        assert!(report.created.is_empty());
        assert!(scene.get(ShapeId(4)).unwrap().shape.is_shield());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn circle_becomes_diameter() {
        let circle = || Shape::circle((10.0, 20.0), 5.0).unwrap();
        let mut scene = scene_of([(1, circle())]);
        let mut ctx = SceneContext::default();
        let report = scene.raise_shields(
            ShapeId(1)..=ShapeId(1),
            ShieldOrientation::Horizontal,
            &mut ctx,
        );
        assert_eq!(report.created, [ShapeId(2)]);
        assert!(scene.get(ShapeId(1)).is_none());
        let seg = segment_of(&scene, ShapeId(2));
        assert_eq!(
            (seg.p0(), seg.p1()),
            (Point::new(5.0, 20.0), Point::new(15.0, 20.0))
        );
        let style = &scene.get(ShapeId(2)).unwrap().style;
        assert_eq!(*style, Style::stroke_only("red"));

        let mut scene = scene_of([(1, circle())]);
        scene.raise_shields(
            ShapeId(1)..=ShapeId(1),
            ShieldOrientation::Vertical,
            &mut SceneContext::default(),
        );
        let seg = segment_of(&scene, ShapeId(2));
        assert_eq!(
            (seg.p0(), seg.p1()),
            (Point::new(10.0, 15.0), Point::new(10.0, 25.0))
        );
    }

    #[test]
    fn rect_becomes_four_sides() {
        let mut scene = scene_of([(1, Shape::rect((0.0, 0.0), 4.0, 2.0).unwrap())]);
        let mut ctx = SceneContext::default();
        let report = scene.raise_shields(
            ShapeId(1)..=ShapeId(1),
            ShieldOrientation::Vertical,
            &mut ctx,
        );
        assert_eq!(
            report.created,
            [ShapeId(2), ShapeId(3), ShapeId(4), ShapeId(5)]
        );
        assert_eq!(scene.occluders().len(), 4);
        let top = segment_of(&scene, ShapeId(2));
        assert_eq!(
            (top.p0(), top.p1()),
            (Point::new(0.0, 0.0), Point::new(4.0, 0.0))
        );
        let left = segment_of(&scene, ShapeId(5));
        assert_eq!(
            (left.p0(), left.p1()),
            (Point::new(0.0, 2.0), Point::new(0.0, 0.0))
        );
    }

    #[test]
    fn rect_sides_follow_its_corners() {
        let rect = Rect::new(6.0, 5.0, 1.0, 2.0);
        let sides = outline(&Shape::Rect(rect), ShieldOrientation::Vertical);
        let corners = rect_corners(&rect);
        assert_eq!(sides.len(), 4);
        for (i, side) in sides.iter().enumerate() {
            assert_eq!(side.p0(), corners[i]);
            assert_eq!(side.p1(), corners[(i + 1) % 4]);
        }
        assert_eq!(sides[0].p0(), Point::new(1.0, 2.0));
    }

    #[test]
    fn text_becomes_baseline() {
        let text = Shape::text((0.0, 0.0), Anchor::Start, "abc").unwrap();
        let mut scene = scene_of([(1, text)]);
        let report = scene.raise_shields(
            ShapeId(1)..=ShapeId(1),
            ShieldOrientation::Vertical,
            &mut SceneContext::default(),
        );
        assert_eq!(report.converted, [(ShapeId(1), ShapeKind::Text)]);
        let seg = segment_of(&scene, ShapeId(2));
        assert_eq!(seg.length(), 30.0);
    }

    #[test]
    fn empty_text_is_skipped() {
        let text = Shape::text((0.0, 0.0), Anchor::Start, "").unwrap();
        let mut scene = scene_of([(1, text)]);
        let report = scene.raise_shields(
            ShapeId(1)..=ShapeId(1),
            ShieldOrientation::Vertical,
            &mut SceneContext::default(),
        );
        assert_eq!(report.skipped, [ShapeId(1)]);
        assert!(report.converted.is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn only_ids_in_range_convert() {
        let mut scene = scene_of([
            (1, Shape::line((0.0, 0.0), (1.0, 0.0)).unwrap()),
            (2, Shape::circle((5.0, 5.0), 1.0).unwrap()),
            (9, Shape::line((0.0, 1.0), (1.0, 1.0)).unwrap()),
        ]);
        let report = scene.raise_shields(
            ShapeId(2)..=ShapeId(8),
            ShieldOrientation::Vertical,
            &mut SceneContext::default(),
        );
        assert_eq!(report.converted, [(ShapeId(2), ShapeKind::Circle)]);
        // Fresh ids start past the largest id in the scene.
        assert_eq!(report.created, [ShapeId(10)]);
        assert!(!scene.get(ShapeId(1)).unwrap().shape.is_shield());
        assert!(!scene.get(ShapeId(9)).unwrap().shape.is_shield());
        let ids: Vec<u32> = scene.iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, [1, 9, 10]);
    }

    #[test]
    fn shape_stays_when_ids_run_out() {
        let mut scene = scene_of([
            (1, Shape::circle((5.0, 5.0), 1.0).unwrap()),
            (2, Shape::line((0.0, 1.0), (1.0, 1.0)).unwrap()),
            (u32::MAX, Shape::rect((0.0, 0.0), 4.0, 2.0).unwrap()),
        ]);
        let report = scene.raise_shields(
            ShapeId(1)..=ShapeId(u32::MAX),
            ShieldOrientation::Vertical,
            &mut SceneContext::default(),
        );
        assert_eq!(report.skipped, [ShapeId(1), ShapeId(u32::MAX)]);
        assert_eq!(report.converted, [(ShapeId(2), ShapeKind::Line)]);
        assert!(report.created.is_empty());
        assert_eq!(scene.get(ShapeId(1)).unwrap().shape.kind(), ShapeKind::Circle);
        assert_eq!(scene.len(), 3);
    }
}
