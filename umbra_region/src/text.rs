// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text labels as seen by region tests.
//!
//! A label has no real glyph geometry here. It is reduced to a horizontal
//! baseline through its position, [`GLYPH_WIDTH`] units per character, placed
//! according to its [`Anchor`]. An empty label collapses to its position.

use alloc::string::String;

use kurbo::{Line, Point};
use umbra_geometry::Polygon;

use crate::{RegionParams, RegionTest, line_in_region};

/// Horizontal advance assumed for every character.
pub const GLYPH_WIDTH: f64 = 10.0;

/// Which point of the baseline the label position refers to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Anchor {
    /// The position is the left end.
    #[default]
    Start,
    /// The position is the midpoint.
    Middle,
    /// The position is the right end.
    End,
}

/// A text label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    /// Anchor point.
    pub position: Point,
    /// How the baseline is placed around `position`.
    pub anchor: Anchor,
    /// Label contents.
    pub text: String,
}

impl TextLabel {
    /// Length of the baseline.
    pub fn width(&self) -> f64 {
        GLYPH_WIDTH * self.text.chars().count() as f64
    }

    /// The baseline, left to right.
    pub fn baseline(&self) -> Line {
        let width = self.width();
        let x0 = match self.anchor {
            Anchor::Start => self.position.x,
            Anchor::Middle => self.position.x - width / 2.0,
            Anchor::End => self.position.x - width,
        };
        Line::new((x0, self.position.y), (x0 + width, self.position.y))
    }
}

impl RegionTest for TextLabel {
    fn in_region(&self, region: &Polygon, params: &RegionParams) -> bool {
        line_in_region(self.baseline(), region, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(anchor: Anchor, text: &str) -> TextLabel {
        TextLabel {
            position: Point::new(100.0, 20.0),
            anchor,
            text: text.into(),
        }
    }

    #[test]
    fn baseline_follows_anchor() {
        assert_eq!(
            label(Anchor::Start, "abcd").baseline(),
            Line::new((100.0, 20.0), (140.0, 20.0))
        );
        assert_eq!(
            label(Anchor::Middle, "abcd").baseline(),
            Line::new((80.0, 20.0), (120.0, 20.0))
        );
        assert_eq!(
            label(Anchor::End, "abcd").baseline(),
            Line::new((60.0, 20.0), (100.0, 20.0))
        );
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        assert_eq!(label(Anchor::Start, "déjà").width(), 40.0);
    }

    #[test]
    fn empty_label_is_its_position() {
        let empty = label(Anchor::Middle, "");
        let baseline = empty.baseline();
        assert_eq!(baseline.p0, baseline.p1);
        assert_eq!(baseline.p0, Point::new(100.0, 20.0));

        let region = Polygon::from_vertices([
            Point::new(90.0, 10.0),
            Point::new(110.0, 10.0),
            Point::new(110.0, 30.0),
            Point::new(90.0, 30.0),
        ]);
        assert!(empty.in_region(&region, &RegionParams::default()));
        assert!(empty.in_region(&region, &RegionParams::thorough()));
    }

    #[test]
    fn long_label_through_region_needs_thorough_mode() {
        let region = Polygon::from_vertices([
            Point::new(120.0, 0.0),
            Point::new(140.0, 0.0),
            Point::new(140.0, 40.0),
            Point::new(120.0, 40.0),
        ]);
        let wide = label(Anchor::Middle, "abcdefghij");
        assert!(!wide.in_region(&region, &RegionParams::default()));
        assert!(wide.in_region(&region, &RegionParams::thorough()));
    }
}
