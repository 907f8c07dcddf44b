// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for scenes: shape identifiers, styles and stored shapes.

use alloc::string::String;
use core::fmt;

use umbra_region::Shape;

use crate::context::TextStyle;

/// Identifier of a shape in a [`Scene`](crate::Scene).
///
/// Ids come from the scene description or from an
/// [`IdGenerator`](crate::IdGenerator); they are never reused by the generator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShapeId(pub u32);

impl ShapeId {
    /// The raw id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Colors and font of a shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    /// Outline color.
    pub stroke: String,
    /// Fill color.
    pub fill: String,
    /// Font for text shapes.
    pub font: Option<TextStyle>,
}

impl Style {
    /// Outline and fill colors, no font.
    pub fn new(stroke: impl Into<String>, fill: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
            fill: fill.into(),
            font: None,
        }
    }

    /// A line style: only the stroke color matters.
    pub fn stroke_only(stroke: impl Into<String>) -> Self {
        Self::new(stroke, "none")
    }

    /// Same colors with `font` attached.
    pub fn with_font(mut self, font: TextStyle) -> Self {
        self.font = Some(font);
        self
    }
}

/// A shape stored in a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneShape {
    /// Unique id within the scene.
    pub id: ShapeId,
    /// Geometry.
    pub shape: Shape,
    /// Presentation.
    pub style: Style,
}
