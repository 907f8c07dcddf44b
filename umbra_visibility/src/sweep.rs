// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The angular sweep and polygon synthesis.

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use umbra_geometry::{
    POINT_EPSILON, Polygon, Segment, normalize_angle, points_coincide, polar_angle,
    ray_segment_distance,
};

use crate::active::ActiveOccluders;
use crate::config::SweepConfig;
use crate::events::{EventKind, EventPlan, SweepEvent, batches};

/// Result of a visibility sweep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Visibility {
    /// The region visible from the observer, closed, vertices in angle order.
    pub polygon: Polygon,
    /// `visible[i]` is true when occluder `i` is the nearest occluder along
    /// some sweep direction.
    pub visible: Vec<bool>,
}

impl Visibility {
    /// An empty polygon with every one of `occluders` flagged hidden.
    pub fn empty(occluders: usize) -> Self {
        Self {
            polygon: Polygon::new(),
            visible: vec![false; occluders],
        }
    }

    /// Number of visible occluders.
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Indices of visible occluders, ascending.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
    }
}

/// Compute the region visible from `observer` among opaque `occluders`.
///
/// The sweep visits occluder endpoints in angle order, keeping the occluders
/// crossed by the current direction in an [`ActiveOccluders`] set. After each
/// group of events at one angle, the set is re-keyed at the middle of the gap
/// to the next group and its nearest member is flagged visible.
///
/// The polygon is sampled with `ray_count` evenly spaced rays plus three rays
/// around every event angle, each stopping at the nearest occluder it hits or
/// at `max_radius`. The occluder that stops a ray is flagged visible too.
/// With no occluders the polygon is a circle of `max_radius` with
/// `sentinel_ray_count` vertices.
///
/// A non-finite observer or an invalid `config` yields
/// [`Visibility::empty`].
pub fn sweep(observer: Point, occluders: &[Segment], config: &SweepConfig) -> Visibility {
    if !observer.is_finite() || !config.is_valid() {
        log::debug!("sweep skipped: observer {observer:?}, config {config:?}");
        return Visibility::empty(occluders.len());
    }
    if occluders.is_empty() {
        return Visibility {
            polygon: sentinel_polygon(observer, config),
            visible: Vec::new(),
        };
    }

    let (mut visible, event_angles) = mark_visible(observer, occluders, config);
    let polygon = synthesize(observer, occluders, &mut visible, &event_angles, config);
    let result = Visibility { polygon, visible };
    log::debug!(
        "sweep at ({:.2}, {:.2}): {} occluders, {} visible, {} vertices",
        observer.x,
        observer.y,
        occluders.len(),
        result.visible_count(),
        result.polygon.len()
    );
    result
}

fn ray_point(observer: Point, angle: f64, distance: f64) -> Point {
    observer + Vec2::from_angle(angle) * distance
}

fn sentinel_polygon(observer: Point, config: &SweepConfig) -> Polygon {
    let step = TAU / config.sentinel_ray_count as f64;
    Polygon::from_vertices(
        (0..config.sentinel_ray_count)
            .map(|i| ray_point(observer, i as f64 * step, config.max_radius)),
    )
}

/// Run the sweep proper. Returns the visibility flags and the distinct event
/// angles in ascending order.
fn mark_visible(
    observer: Point,
    occluders: &[Segment],
    config: &SweepConfig,
) -> (Vec<bool>, Vec<f64>) {
    let mut visible = vec![false; occluders.len()];
    let plan = EventPlan::build(observer, occluders);
    let mut events = plan.events;
    config.sort.sort_by(&mut events, SweepEvent::sweep_order);
    let groups = batches(&events);
    let angles: Vec<f64> = groups.iter().map(|g| g.angle).collect();

    let mut active = ActiveOccluders::new(observer, occluders, config.sort);
    if let (Some(&first), Some(&last)) = (angles.first(), angles.last()) {
        // The gap that wraps past angle 0.
        let lead_in = normalize_angle(0.5 * (last + first + TAU));
        for &occluder in &plan.wrapping {
            if !active.insert(occluder, lead_in) {
                log::trace!("wrapping occluder {occluder} missed at {lead_in}");
            }
        }

        for (g, group) in groups.iter().enumerate() {
            let next = angles.get(g + 1).copied().unwrap_or(first + TAU);
            let probe = normalize_angle(0.5 * (group.angle + next));

            let mut starts: SmallVec<[usize; 4]> = SmallVec::new();
            for event in &events[group.range.clone()] {
                match event.kind {
                    EventKind::End => {
                        active.remove(event.occluder);
                    }
                    EventKind::Start => starts.push(event.occluder),
                }
            }
            for occluder in starts {
                if !active.insert(occluder, probe) {
                    log::trace!("occluder {occluder} missed at {probe}");
                }
            }

            active.rekey(probe);
            if let Some(nearest) = active.nearest() {
                visible[nearest] = true;
            }
        }
    }

    for &occluder in &plan.edge_on {
        visible[occluder] = edge_on_visible(observer, occluders, occluder);
    }

    (visible, angles)
}

/// An edge-on occluder is visible when nothing else is hit closer than its
/// near endpoint along the shared direction.
fn edge_on_visible(observer: Point, occluders: &[Segment], index: usize) -> bool {
    let segment = &occluders[index];
    let d0 = observer.distance(segment.p0());
    let d1 = observer.distance(segment.p1());
    let (near, distance) = if d0 <= d1 {
        (segment.p0(), d0)
    } else {
        (segment.p1(), d1)
    };
    if distance < POINT_EPSILON {
        return true;
    }
    let angle = polar_angle(observer, near);
    !occluders.iter().enumerate().any(|(j, other)| {
        j != index
            && ray_segment_distance(observer, angle, other.line())
                .is_some_and(|t| t < distance - POINT_EPSILON)
    })
}

/// Cast the sampling rays. Every occluder can stop a ray, not only the ones
/// flagged so far: an occluder crossing a nearer one may be in front only
/// between two sweep steps. Whatever stops a ray is flagged visible.
fn synthesize(
    observer: Point,
    occluders: &[Segment],
    visible: &mut [bool],
    event_angles: &[f64],
    config: &SweepConfig,
) -> Polygon {
    let step = TAU / config.ray_count as f64;
    let mut angles: Vec<f64> = Vec::with_capacity(config.ray_count + 3 * event_angles.len());
    angles.extend((0..config.ray_count).map(|i| i as f64 * step));
    for &angle in event_angles {
        for offset in [-config.edge_offset, 0.0, config.edge_offset] {
            angles.push(normalize_angle(angle + offset));
        }
    }
    config.sort.sort_by(&mut angles, f64::total_cmp);
    angles.dedup_by(|a, b| *a - *b <= POINT_EPSILON);

    let mut vertices: Vec<Point> = Vec::with_capacity(angles.len());
    for angle in angles {
        let hit = occluders
            .iter()
            .enumerate()
            .filter_map(|(i, s)| Some((i, ray_segment_distance(observer, angle, s.line())?)))
            .filter(|&(_, t)| t < config.max_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        let reach = match hit {
            Some((i, t)) => {
                visible[i] = true;
                t
            }
            None => config.max_radius,
        };
        let vertex = ray_point(observer, angle, reach);
        if vertices
            .last()
            .is_some_and(|last| points_coincide(*last, vertex))
        {
            continue;
        }
        vertices.push(vertex);
    }
    if vertices.len() > 1 && points_coincide(vertices[0], vertices[vertices.len() - 1]) {
        vertices.pop();
    }
    Polygon::from_vertices(vertices)
}
