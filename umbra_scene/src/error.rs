// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene errors.

use thiserror::Error;
use umbra_geometry::GeometryError;

use crate::types::ShapeId;

/// Errors from scene edits.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SceneError {
    /// No shape has this id.
    #[error("no shape with id {0}")]
    UnknownShape(ShapeId),
    /// The id is already taken by another shape.
    #[error("shape id {0} is already in use")]
    DuplicateId(ShapeId),
    /// Every id up to `u32::MAX` has been handed out or observed.
    #[error("no shape ids left")]
    IdsExhausted,
    /// Invalid geometry.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
