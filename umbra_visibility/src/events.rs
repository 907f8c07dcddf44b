// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep events: where each occluder enters and leaves the sweep.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::f64::consts::{PI, TAU};
use core::ops::Range;

use kurbo::Point;
use umbra_geometry::{POINT_EPSILON, Segment, polar_angle};

/// Whether an event opens or closes an occluder's angular span.
///
/// `End` orders before `Start` so that, at a shared angle, the set is drained
/// before it is refilled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    /// The sweep ray leaves the occluder.
    End,
    /// The sweep ray reaches the occluder.
    Start,
}

/// One endpoint of one occluder, as seen from the observer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepEvent {
    /// Polar angle of `point` around the observer, in `[0, 2π)`.
    pub angle: f64,
    /// Role of this endpoint.
    pub kind: EventKind,
    /// Index of the occluder.
    pub occluder: usize,
    /// The endpoint itself.
    pub point: Point,
}

impl SweepEvent {
    /// Sweep order: ascending angle, then `End` before `Start`, then occluder index.
    pub fn sweep_order(&self, other: &Self) -> Ordering {
        self.angle
            .total_cmp(&other.angle)
            .then(self.kind.cmp(&other.kind))
            .then(self.occluder.cmp(&other.occluder))
    }
}

/// Events for one observer, plus the occluders that need special handling.
#[derive(Clone, Debug, Default)]
pub struct EventPlan {
    /// Two events per occluder that spans a positive angle, unsorted.
    pub events: Vec<SweepEvent>,
    /// Occluders that cross the 0 angle ray and are active when the sweep starts.
    pub wrapping: Vec<usize>,
    /// Occluders seen edge-on: their endpoints share a direction, so they
    /// produce no events.
    pub edge_on: Vec<usize>,
}

impl EventPlan {
    /// Classify every occluder as seen from `observer`.
    ///
    /// For an occluder spanning at most π, the smaller angle is the `Start`.
    /// A span above π means the occluder actually covers the short way round
    /// through angle 0; then the larger angle starts it, the smaller ends it,
    /// and it is listed in [`wrapping`](Self::wrapping).
    pub fn build(observer: Point, occluders: &[Segment]) -> Self {
        let mut plan = Self {
            events: Vec::with_capacity(occluders.len() * 2),
            ..Self::default()
        };
        for (occluder, segment) in occluders.iter().enumerate() {
            let a0 = polar_angle(observer, segment.p0());
            let a1 = polar_angle(observer, segment.p1());
            let ((lo, lo_point), (hi, hi_point)) = if a0 <= a1 {
                ((a0, segment.p0()), (a1, segment.p1()))
            } else {
                ((a1, segment.p1()), (a0, segment.p0()))
            };
            let span = hi - lo;
            if span.min(TAU - span) < POINT_EPSILON {
                plan.edge_on.push(occluder);
                continue;
            }
            let (start, end) = if span > PI {
                plan.wrapping.push(occluder);
                ((hi, hi_point), (lo, lo_point))
            } else {
                ((lo, lo_point), (hi, hi_point))
            };
            plan.events.push(SweepEvent {
                angle: start.0,
                kind: EventKind::Start,
                occluder,
                point: start.1,
            });
            plan.events.push(SweepEvent {
                angle: end.0,
                kind: EventKind::End,
                occluder,
                point: end.1,
            });
        }
        plan
    }
}

/// A run of sorted events sharing one angle.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
    /// Angle of the first event in the run.
    pub angle: f64,
    /// Index range into the sorted event list.
    pub range: Range<usize>,
}

/// Group sorted events whose angles are within [`POINT_EPSILON`] of the
/// first event of their run.
pub fn batches(events: &[SweepEvent]) -> Vec<Batch> {
    let mut out = Vec::new();
    let mut start = 0;
    while start < events.len() {
        let angle = events[start].angle;
        let mut end = start + 1;
        while end < events.len() && events[end].angle - angle <= POINT_EPSILON {
            end += 1;
        }
        out.push(Batch {
            angle,
            range: start..end,
        });
        start = end;
    }
    out
}
