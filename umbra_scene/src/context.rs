// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutable state shared by scene edits: id allocation and the current font.

use alloc::string::String;

use crate::error::SceneError;
use crate::types::ShapeId;

/// Hands out fresh, increasing shape ids.
///
/// Ids are never reused. Once `u32::MAX` is taken the generator is exhausted
/// and [`next_id`](Self::next_id) fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdGenerator {
    /// `None` once every id is taken.
    next: Option<u32>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdGenerator {
    /// A generator whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator whose first id follows `last`, or 1 when `last` is `None`.
    pub fn starting_after(last: Option<ShapeId>) -> Self {
        let mut ids = Self::new();
        if let Some(id) = last {
            ids.observe(id);
        }
        ids
    }

    /// Make sure `id` will never be handed out.
    pub fn observe(&mut self, id: ShapeId) {
        if self.next.is_some_and(|next| id.0 >= next) {
            self.next = id.0.checked_add(1);
        }
    }

    /// The id the next call to [`next_id`](Self::next_id) returns, or `None`
    /// when the generator is exhausted.
    pub fn peek(&self) -> Option<ShapeId> {
        self.next.map(ShapeId)
    }

    /// Allocate an id.
    ///
    /// Fails with [`SceneError::IdsExhausted`] after `u32::MAX` is taken.
    pub fn next_id(&mut self) -> Result<ShapeId, SceneError> {
        let id = self.next.ok_or(SceneError::IdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(ShapeId(id))
    }
}

/// Font applied to text shapes added to a scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextStyle {
    /// Font family, e.g. `sans-serif`.
    pub family: String,
    /// Font weight, e.g. `normal` or `bold`.
    pub weight: String,
    /// Font size with unit, e.g. `12pt`.
    pub size: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".into(),
            weight: "normal".into(),
            size: "12pt".into(),
        }
    }
}

impl TextStyle {
    /// Build a style from the short codes used in scene files.
    ///
    /// `sans` expands to `sans-serif`. Weights `n`, `b`, `b+` and `l` expand to
    /// `normal`, `bold`, `bolder` and `lighter`. Anything else is kept as is.
    pub fn from_codes(family: &str, weight: &str, size: &str) -> Self {
        let family = match family {
            "sans" => "sans-serif",
            other => other,
        };
        let weight = match weight {
            "n" => "normal",
            "b" => "bold",
            "b+" => "bolder",
            "l" => "lighter",
            other => other,
        };
        Self {
            family: family.into(),
            weight: weight.into(),
            size: size.into(),
        }
    }
}

/// Explicit context for scene edits.
///
/// Passed to every operation that creates shapes, in place of process-wide
/// state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneContext {
    /// Id allocation.
    pub ids: IdGenerator,
    /// Font given to new text shapes that do not carry one.
    pub text_style: TextStyle,
}

impl SceneContext {
    /// A context whose ids start after every id already in `scene`.
    pub fn for_scene(scene: &crate::Scene) -> Self {
        Self {
            ids: IdGenerator::starting_after(scene.max_id()),
            text_style: TextStyle::default(),
        }
    }
}
