// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Polyline: straight segments between consecutive control points.
//!
//! The parameter is spread evenly over the segments by index, not by arc
//! length, so with four points each segment covers a third of `[0, 1]`
//! no matter how long it is.

use super::CurveKind;
use super::control_points::ControlPoints;
use crate::error::CurveError;
use crate::model::EntityId;
use kurbo::Point;

/// A piecewise-linear curve through its control points
#[derive(Debug, Clone)]
pub struct PolylineCurve {
    points: ControlPoints,

    /// Unique identifier for this curve
    pub id: EntityId,

    selected: bool,
}

impl PolylineCurve {
    /// Create a new polyline with a single starting point
    pub fn new(point: Point) -> Self {
        Self::from_points(ControlPoints::from_vec(vec![point]))
    }

    /// Create a polyline from existing points
    pub fn from_points(points: ControlPoints) -> Self {
        Self {
            points,
            id: EntityId::next(),
            selected: false,
        }
    }

    /// Create a polyline with no points
    pub fn empty() -> Self {
        Self::from_points(ControlPoints::new())
    }

    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    pub fn add_control_point(&mut self, point: Point) -> usize {
        self.points.push(point)
    }

    pub fn remove_control_point(&mut self, index: usize) -> Result<Point, CurveError> {
        self.points.remove(index)
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Point at parameter `t`.
    ///
    /// `t` outside `[0, 1]` is clamped to the first or last segment and
    /// then extends that segment's line.
    pub fn evaluate(&self, t: f64) -> Result<Point, CurveError> {
        let n = self.points.len();
        CurveKind::Polyline.check_evaluable(n)?;

        let pts = self.points.as_slice();
        // Position in segment units: t / w with w = 1 / (n - 1)
        let s = t * (n - 1) as f64;
        // NaN and negative t both land on segment 0
        let k = (s.floor().max(0.0) as usize).min(n - 2);
        let u = s - k as f64;

        // lerp at u = 1 can miss the end point by an ulp
        if u == 1.0 {
            return Ok(pts[k + 1]);
        }
        Ok(pts[k].lerp(pts[k + 1], u))
    }
}
