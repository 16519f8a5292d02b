// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing for curves and control points in normalized canvas space

use super::Scene;
use crate::settings;
use kurbo::Point;

impl Scene {
    /// Find the first curve passing within `tolerance` of `pos`
    ///
    /// Each curve is sampled at `t = 0, 0.01, ... 0.98`; curves are tried
    /// in scene order and the first one with a sample strictly closer than
    /// `tolerance` wins. Curves that cannot be evaluated are skipped.
    pub fn hit_test_curve(&self, pos: Point, tolerance: f64) -> Option<usize> {
        let result = self.curves.iter().position(|curve| {
            curve
                .samples(settings::sampling::HIT_TEST_SAMPLES)
                .any(|sample| sample.distance(pos) < tolerance)
        });

        match result {
            Some(index) => {
                tracing::debug!("[hit_test_curve] ({}, {}) hit curve {}", pos.x, pos.y, index)
            }
            None => tracing::debug!("[hit_test_curve] ({}, {}) no hit", pos.x, pos.y),
        }

        result
    }

    /// Find the first control point of curve `curve_index` within
    /// `tolerance` of `pos`
    ///
    /// Returns `None` when nothing is close enough or the curve index is out
    /// of range.
    pub fn hit_test_control_point(
        &self,
        curve_index: usize,
        pos: Point,
        tolerance: f64,
    ) -> Option<usize> {
        let curve = self.curves.get(curve_index)?;
        let result = curve
            .control_points()
            .iter()
            .position(|point| point.distance(pos) < tolerance);

        tracing::debug!(
            "[hit_test_control_point] curve={}, pos=({}, {}), hit={:?}",
            curve_index,
            pos.x,
            pos.y,
            result
        );

        result
    }
}
