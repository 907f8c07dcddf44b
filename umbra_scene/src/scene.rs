// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene container.

use alloc::vec::Vec;

use kurbo::Point;
use umbra_geometry::Segment;
use umbra_region::{Shape, occluders};
use umbra_visibility::{SweepConfig, Visibility, sweep};

use crate::context::SceneContext;
use crate::error::SceneError;
use crate::types::{SceneShape, ShapeId, Style};

/// An ordered collection of shapes with unique ids.
///
/// Iteration order is insertion order; bomb effects and shield conversion
/// visit shapes in that order and append new shapes at the end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub(crate) shapes: Vec<SceneShape>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape under a caller-chosen id.
    ///
    /// Fails with [`SceneError::DuplicateId`] when the id is taken.
    pub fn insert(&mut self, id: ShapeId, shape: Shape, style: Style) -> Result<(), SceneError> {
        if self.get(id).is_some() {
            return Err(SceneError::DuplicateId(id));
        }
        self.shapes.push(SceneShape { id, shape, style });
        Ok(())
    }

    /// Add a shape under a fresh id from `ctx`.
    ///
    /// Text shapes without a font get the context's current text style.
    /// Fails with [`SceneError::IdsExhausted`] when `ctx` has no ids left.
    pub fn add(
        &mut self,
        shape: Shape,
        mut style: Style,
        ctx: &mut SceneContext,
    ) -> Result<ShapeId, SceneError> {
        self.sync_ids(ctx);
        let id = ctx.ids.next_id()?;
        if matches!(shape, Shape::Text(_)) && style.font.is_none() {
            style.font = Some(ctx.text_style.clone());
        }
        self.shapes.push(SceneShape { id, shape, style });
        Ok(id)
    }

    /// The shape with `id`.
    pub fn get(&self, id: ShapeId) -> Option<&SceneShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Mutable access to the shape with `id`.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut SceneShape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Remove and return the shape with `id`.
    pub fn remove(&mut self, id: ShapeId) -> Result<SceneShape, SceneError> {
        let at = self
            .shapes
            .iter()
            .position(|s| s.id == id)
            .ok_or(SceneError::UnknownShape(id))?;
        Ok(self.shapes.remove(at))
    }

    /// Shapes in scene order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneShape> + '_ {
        self.shapes.iter()
    }

    /// Shapes in scene order, as a slice.
    pub fn shapes(&self) -> &[SceneShape] {
        &self.shapes
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True when the scene holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Largest id in use.
    pub fn max_id(&self) -> Option<ShapeId> {
        self.shapes.iter().map(|s| s.id).max()
    }

    /// Advance `ctx` past every id in the scene.
    pub(crate) fn sync_ids(&self, ctx: &mut SceneContext) {
        if let Some(max) = self.max_id() {
            ctx.ids.observe(max);
        }
    }

    /// Shield segments in scene order.
    pub fn occluders(&self) -> Vec<Segment> {
        occluders(self.shapes.iter().map(|s| &s.shape))
    }

    /// What can be seen from `origin`; flags align with [`occluders`](Self::occluders).
    pub fn visibility(&self, origin: Point, config: &SweepConfig) -> Visibility {
        sweep(origin, &self.occluders(), config)
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a SceneShape;
    type IntoIter = core::slice::Iter<'a, SceneShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
