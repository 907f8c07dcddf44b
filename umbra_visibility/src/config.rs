// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep parameters.

use crate::sort::SortStrategy;

/// Parameters for [`sweep`](crate::sweep).
///
/// The defaults suit scenes measured in screen units of a few hundred to a
/// few thousand.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Rays that hit nothing stop at this distance.
    pub max_radius: f64,
    /// Number of evenly spaced rays sampled around the observer.
    pub ray_count: usize,
    /// Vertices of the circle returned when there are no occluders.
    pub sentinel_ray_count: usize,
    /// Angular offset of the extra rays cast just before and after each
    /// occluder endpoint.
    pub edge_offset: f64,
    /// Sort used for events, ray angles and the active set.
    pub sort: SortStrategy,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_radius: 1000.0,
            ray_count: 360,
            sentinel_ray_count: 36,
            edge_offset: 1e-6,
            sort: SortStrategy::default(),
        }
    }
}

impl SweepConfig {
    /// Whether these parameters can produce a polygon.
    ///
    /// Requires a finite positive radius, at least 3 rays of each kind and a
    /// finite, non-negative edge offset.
    pub fn is_valid(&self) -> bool {
        self.max_radius.is_finite()
            && self.max_radius > 0.0
            && self.ray_count >= 3
            && self.sentinel_ray_count >= 3
            && self.edge_offset.is_finite()
            && self.edge_offset >= 0.0
    }

    /// Same parameters with a different radius.
    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = max_radius;
        self
    }

    /// Same parameters with a different sort.
    pub fn with_sort(mut self, sort: SortStrategy) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SweepConfig::default();
        assert!(config.is_valid());
        assert_eq!(config.max_radius, 1000.0);
        assert_eq!(config.ray_count, 360);
        assert_eq!(config.sentinel_ray_count, 36);
        assert_eq!(config.sort, SortStrategy::Hybrid { threshold: 10 });
    }

    #[test]
    fn rejects_unusable_parameters() {
        let base = SweepConfig::default();
        assert!(!base.with_max_radius(0.0).is_valid());
        assert!(!base.with_max_radius(f64::INFINITY).is_valid());
        assert!(
            !SweepConfig {
                ray_count: 2,
                ..base
            }
            .is_valid()
        );
        assert!(
            !SweepConfig {
                edge_offset: f64::NAN,
                ..base
            }
            .is_valid()
        );
    }
}
