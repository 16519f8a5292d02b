// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Bezier curve of arbitrary degree
//!
//! All control points feed a single Bernstein polynomial of degree
//! `n - 1`; there is no splitting into segments, so adding a point raises
//! the degree of the whole curve.

use super::CurveKind;
use super::control_points::ControlPoints;
use crate::error::CurveError;
use crate::model::EntityId;
use kurbo::{Point, Vec2};

/// A single Bernstein-basis curve over all of its control points
#[derive(Debug, Clone)]
pub struct BezierCurve {
    points: ControlPoints,

    /// Unique identifier for this curve
    pub id: EntityId,

    selected: bool,
}

impl BezierCurve {
    /// Create a new Bezier curve with a single starting point
    pub fn new(point: Point) -> Self {
        Self::from_points(ControlPoints::from_vec(vec![point]))
    }

    /// Create a Bezier curve from existing points
    pub fn from_points(points: ControlPoints) -> Self {
        Self {
            points,
            id: EntityId::next(),
            selected: false,
        }
    }

    /// Create a Bezier curve with no points
    pub fn empty() -> Self {
        Self::from_points(ControlPoints::new())
    }

    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    /// Polynomial degree, or `None` for an empty curve
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
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

    /// Point at parameter `t`; values outside `[0, 1]` continue the
    /// polynomial.
    pub fn evaluate(&self, t: f64) -> Result<Point, CurveError> {
        let n = self.points.len();
        CurveKind::Bezier.check_evaluable(n)?;

        let weights = bernstein_weights(n - 1, t);
        let sum = self
            .points
            .iter()
            .zip(weights)
            .fold(Vec2::ZERO, |acc, (p, w)| acc + p.to_vec2() * w);

        Ok(sum.to_point())
    }
}

/// All Bernstein basis values `b(i, degree, t)` for `i` in `0..=degree`.
///
/// Builds the triangle of the recurrence
/// `b(i, n, t) = (1 - t) b(i, n - 1, t) + t b(i - 1, n - 1, t)` one degree
/// at a time, with `b(i, n, t) = 0` outside `0..=n`, so each value is
/// computed once.
pub fn bernstein_weights(degree: usize, t: f64) -> Vec<f64> {
    let mt = 1.0 - t;
    let mut weights = Vec::with_capacity(degree + 1);
    weights.push(1.0);

    for n in 1..=degree {
        // Walk backwards so weights[i - 1] is still the degree n - 1 value
        weights.push(0.0);
        for i in (0..=n).rev() {
            let keep = if i < n { mt * weights[i] } else { 0.0 };
            let shift = if i > 0 { t * weights[i - 1] } else { 0.0 };
            weights[i] = keep + shift;
        }
    }

    weights
}

/// A single Bernstein basis value; zero when `i > n`.
pub fn bernstein(i: usize, n: usize, t: f64) -> f64 {
    if i > n {
        return 0.0;
    }
    bernstein_weights(n, t)[i]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn bezier(points: &[(f64, f64)]) -> BezierCurve {
        BezierCurve::from_points(ControlPoints::from_vec(
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        ))
    }

    #[test]
    fn linear_basis() {
        assert_abs_diff_eq!(bernstein(0, 1, 0.3), 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(bernstein(1, 1, 0.3), 0.3, epsilon = 1e-12);
        assert_eq!(bernstein(2, 1, 0.3), 0.0);
    }

    #[test]
    fn cubic_basis_matches_closed_form() {
        let t = 0.37_f64;
        let mt = 1.0 - t;
        let expected = [mt.powi(3), 3.0 * t * mt * mt, 3.0 * t * t * mt, t.powi(3)];
        let weights = bernstein_weights(3, t);
        for (w, e) in weights.iter().zip(expected) {
            assert_abs_diff_eq!(*w, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn weights_partition_unity() {
        for degree in 0..12 {
            let sum: f64 = bernstein_weights(degree, 0.42).iter().sum();
            assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn endpoints_interpolated() {
        let curve = bezier(&[(-1.0, 0.0), (0.2, 0.9), (0.5, -0.3), (1.0, 0.4)]);
        assert_eq!(curve.evaluate(0.0).unwrap(), Point::new(-1.0, 0.0));
        assert_eq!(curve.evaluate(1.0).unwrap(), Point::new(1.0, 0.4));
    }

    #[test]
    fn two_points_is_a_line() {
        let curve = bezier(&[(0.0, 0.0), (2.0, 1.0)]);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let p = curve.evaluate(t).unwrap();
            let expected = Point::new(0.0, 0.0).lerp(Point::new(2.0, 1.0), t);
            assert_abs_diff_eq!(p.x, expected.x, epsilon = 1e-12);
            assert_abs_diff_eq!(p.y, expected.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn symmetric_quadratic_midpoint() {
        let curve = bezier(&[(-1.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
        assert_eq!(curve.evaluate(0.5).unwrap(), Point::new(0.0, 0.5));
    }

    #[test]
    fn single_point_evaluates_to_itself() {
        let curve = BezierCurve::new(Point::new(0.3, -0.2));
        assert_eq!(curve.evaluate(0.7).unwrap(), Point::new(0.3, -0.2));
        assert_eq!(curve.degree(), Some(0));
    }

    #[test]
    fn empty_is_degenerate() {
        let curve = BezierCurve::empty();
        assert!(matches!(
            curve.evaluate(0.0),
            Err(CurveError::DegenerateCurve { required: 1, .. })
        ));
    }
}
