// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered vertex rings with derived edges.

use alloc::vec::Vec;

use kurbo::{Line, Point};

use crate::bbox::BoundingBox;
use crate::predicates::Orientation;

/// A simple polygon described by its vertices in boundary order.
///
/// The edge list is derived: it is empty until [`close`](Self::close) is
/// called, after which `edges()[i]` joins vertex `i` to vertex `(i + 1) % n`.
/// The bounding box always covers every vertex.
///
/// Queries that only need the boundary ([`contains`](Self::contains),
/// [`perimeter`](Self::perimeter), [`boundary`](Self::boundary)) read the
/// vertex ring directly and work whether or not the polygon was closed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Line>,
    bbox: BoundingBox,
}

impl Polygon {
    /// An empty polygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty polygon with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            edges: Vec::new(),
            bbox: BoundingBox::EMPTY,
        }
    }

    /// A closed polygon over `vertices`.
    pub fn from_vertices(vertices: impl IntoIterator<Item = Point>) -> Self {
        let mut polygon = Self::new();
        for v in vertices {
            polygon.push(v);
        }
        polygon.close();
        polygon
    }

    /// Append a vertex and grow the bounding box.
    ///
    /// Appending after `close` leaves the edge list stale until the next
    /// `close`.
    pub fn push(&mut self, vertex: Point) {
        self.vertices.push(vertex);
        self.bbox.expand(vertex);
    }

    /// Rebuild the edge list as the closed ring of the current vertices.
    ///
    /// Replaces any previous edges, so calling it twice is the same as calling
    /// it once. Does nothing with fewer than 2 vertices.
    pub fn close(&mut self) {
        if self.vertices.len() < 2 {
            return;
        }
        let n = self.vertices.len();
        let vertices = &self.vertices;
        self.edges.clear();
        self.edges
            .extend((0..n).map(|i| Line::new(vertices[i], vertices[(i + 1) % n])));
    }

    /// Whether the edge list matches the current vertex ring.
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 2 && self.edges.len() == self.vertices.len()
    }

    /// Vertices in boundary order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Edges produced by the last [`close`](Self::close).
    #[inline]
    pub fn edges(&self) -> &[Line] {
        &self.edges
    }

    /// The closing ring of edges computed from the vertices.
    pub fn boundary(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| Line::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Box around every vertex; [`BoundingBox::EMPTY`] when there are none.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Point-in-polygon by horizontal ray parity.
    ///
    /// Rejects by bounding box first. An edge is counted when exactly one of
    /// its endpoints lies strictly above `pt.y` and the crossing is to the
    /// right of `pt`. Fewer than 3 vertices contain nothing.
    pub fn contains(&self, pt: Point) -> bool {
        let n = self.vertices.len();
        if n < 3 || !self.bbox.contains(pt) {
            return false;
        }
        let mut inside = false;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if (a.y > pt.y) != (b.y > pt.y) {
                let x = (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x;
                if pt.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Enclosed area by the shoelace formula; always non-negative.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() / 2.0
    }

    /// Total length of the closing ring.
    pub fn perimeter(&self) -> f64 {
        self.boundary().map(|edge| edge.p0.distance(edge.p1)).sum()
    }

    /// Whether every non-collinear corner turns the same way.
    ///
    /// Fewer than 3 vertices is not convex.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut turn = None;
        for i in 0..n {
            let o = Orientation::of(
                self.vertices[i],
                self.vertices[(i + 1) % n],
                self.vertices[(i + 2) % n],
            );
            if o == Orientation::Collinear {
                continue;
            }
            match turn {
                None => turn = Some(o),
                Some(t) if t != o => return false,
                Some(_) => {}
            }
        }
        true
    }
}
