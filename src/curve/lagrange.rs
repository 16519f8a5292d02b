// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Lagrange interpolating curve
//!
//! The curve passes through every control point. Point `i` is reached at
//! knot `i / (n - 1)`, so knots are evenly spaced over `[0, 1]` and have to
//! be rebuilt whenever a point is added or removed.

use super::CurveKind;
use super::control_points::ControlPoints;
use crate::error::CurveError;
use crate::model::EntityId;
use kurbo::{Point, Vec2};

/// An interpolating polynomial curve with evenly spaced knots
#[derive(Debug, Clone)]
pub struct LagrangeCurve {
    points: ControlPoints,

    /// One parameter value per control point
    knots: Vec<f64>,

    /// Unique identifier for this curve
    pub id: EntityId,

    selected: bool,
}

impl LagrangeCurve {
    /// Create a new Lagrange curve with a single starting point
    pub fn new(point: Point) -> Self {
        Self::from_points(ControlPoints::from_vec(vec![point]))
    }

    /// Create a Lagrange curve from existing points
    pub fn from_points(points: ControlPoints) -> Self {
        let mut curve = Self {
            points,
            knots: Vec::new(),
            id: EntityId::next(),
            selected: false,
        };
        curve.rebuild_knots();
        curve
    }

    /// Create a Lagrange curve with no points
    pub fn empty() -> Self {
        Self::from_points(ControlPoints::new())
    }

    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn add_control_point(&mut self, point: Point) -> usize {
        let index = self.points.push(point);
        self.rebuild_knots();
        index
    }

    pub fn remove_control_point(&mut self, index: usize) -> Result<Point, CurveError> {
        let removed = self.points.remove(index)?;
        self.rebuild_knots();
        Ok(removed)
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Point at parameter `t`; values outside `[0, 1]` continue the
    /// polynomial.
    pub fn evaluate(&self, t: f64) -> Result<Point, CurveError> {
        CurveKind::Lagrange.check_evaluable(self.points.len())?;

        let mut sum = Vec2::ZERO;
        for (i, (point, &ki)) in self.points.iter().zip(&self.knots).enumerate() {
            let weight: f64 = self
                .knots
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &kj)| (t - kj) / (ki - kj))
                .product();
            sum += point.to_vec2() * weight;
        }

        Ok(sum.to_point())
    }

    /// Full rebuild, never incremental: every knot moves when `n` changes.
    fn rebuild_knots(&mut self) {
        let n = self.points.len();
        self.knots.clear();
        match n {
            0 => {}
            1 => self.knots.push(0.0),
            _ => {
                let last = (n - 1) as f64;
                self.knots.extend((0..n).map(|i| i as f64 / last));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn lagrange(points: &[(f64, f64)]) -> LagrangeCurve {
        LagrangeCurve::from_points(ControlPoints::from_vec(
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        ))
    }

    #[test]
    fn knots_are_evenly_spaced() {
        let curve = lagrange(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]);
        assert_eq!(curve.knots(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn knots_track_point_count() {
        let mut curve = LagrangeCurve::empty();
        assert!(curve.knots().is_empty());

        curve.add_control_point(Point::new(0.0, 0.0));
        assert_eq!(curve.knots(), &[0.0]);

        curve.add_control_point(Point::new(1.0, 0.0));
        curve.add_control_point(Point::new(1.0, 1.0));
        assert_eq!(curve.knots(), &[0.0, 0.5, 1.0]);

        curve.remove_control_point(0).unwrap();
        assert_eq!(curve.knots(), &[0.0, 1.0]);
        assert_eq!(curve.knots().len(), curve.points().len());
    }

    #[test]
    fn failed_removal_keeps_knots() {
        let mut curve = lagrange(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(curve.remove_control_point(2).is_err());
        assert_eq!(curve.knots(), &[0.0, 1.0]);
    }

    #[test]
    fn passes_through_every_point() {
        let pts = [(-0.8, 0.1), (-0.3, 0.7), (0.1, -0.4), (0.6, 0.2), (0.9, -0.9)];
        let curve = lagrange(&pts);
        for (i, &(x, y)) in pts.iter().enumerate() {
            let p = curve.evaluate(curve.knots()[i]).unwrap();
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn three_collinear_points_stay_on_the_line() {
        let curve = lagrange(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let p = curve.evaluate(0.25).unwrap();
        assert_abs_diff_eq!(p.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn single_point_is_degenerate() {
        let curve = LagrangeCurve::new(Point::ZERO);
        assert!(matches!(
            curve.evaluate(0.0),
            Err(CurveError::DegenerateCurve {
                kind: CurveKind::Lagrange,
                count: 1,
                required: 2,
            })
        ));
    }
}
