// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve abstraction: the editable, evaluable representation.
//!
//! The `Curve` enum wraps three curve kinds: `Polyline` (straight segments),
//! `Bezier` (one Bernstein polynomial over all points) and `Lagrange` (an
//! interpolating polynomial through all points). Every kind maps a
//! parameter `t` in `[0, 1]` to a point and can be sampled into a line
//! strip for drawing.

pub mod bezier;
pub mod control_points;
pub mod geometry;
pub mod lagrange;
pub mod polyline;

pub use bezier::BezierCurve;
pub use control_points::ControlPoints;
pub use geometry::{CurveStyle, RenderGeometry};
pub use lagrange::LagrangeCurve;
pub use polyline::PolylineCurve;

use crate::error::CurveError;
use crate::model::EntityId;
use crate::settings;
use kurbo::{BezPath, Point};
use std::fmt;

/// Below this many control points a curve is pruned by the scene
pub const MIN_CONTROL_POINTS: usize = 2;

/// The kind of a curve, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Polyline,
    Bezier,
    Lagrange,
}

impl CurveKind {
    /// Fewest control points `evaluate` accepts
    pub fn min_evaluable_points(self) -> usize {
        match self {
            CurveKind::Polyline | CurveKind::Lagrange => 2,
            CurveKind::Bezier => 1,
        }
    }

    pub(crate) fn check_evaluable(self, count: usize) -> Result<(), CurveError> {
        let required = self.min_evaluable_points();
        if count < required {
            Err(CurveError::DegenerateCurve {
                kind: self,
                count,
                required,
            })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveKind::Polyline => "polyline",
            CurveKind::Bezier => "bezier",
            CurveKind::Lagrange => "lagrange",
        };
        f.pad(name)
    }
}

/// A curve in the scene
#[derive(Debug, Clone)]
pub enum Curve {
    /// Straight segments between control points
    Polyline(PolylineCurve),
    /// Single Bernstein polynomial of degree n - 1
    Bezier(BezierCurve),
    /// Interpolating polynomial with evenly spaced knots
    Lagrange(LagrangeCurve),
}

impl Curve {
    /// Start a new curve of the given kind at `point`
    pub fn new(kind: CurveKind, point: Point) -> Self {
        match kind {
            CurveKind::Polyline => Curve::Polyline(PolylineCurve::new(point)),
            CurveKind::Bezier => Curve::Bezier(BezierCurve::new(point)),
            CurveKind::Lagrange => Curve::Lagrange(LagrangeCurve::new(point)),
        }
    }

    /// Build a curve of the given kind from a list of points
    pub fn from_points(kind: CurveKind, points: impl IntoIterator<Item = Point>) -> Self {
        let points = ControlPoints::from_vec(points.into_iter().collect());
        match kind {
            CurveKind::Polyline => Curve::Polyline(PolylineCurve::from_points(points)),
            CurveKind::Bezier => Curve::Bezier(BezierCurve::from_points(points)),
            CurveKind::Lagrange => Curve::Lagrange(LagrangeCurve::from_points(points)),
        }
    }

    pub fn kind(&self) -> CurveKind {
        match self {
            Curve::Polyline(_) => CurveKind::Polyline,
            Curve::Bezier(_) => CurveKind::Bezier,
            Curve::Lagrange(_) => CurveKind::Lagrange,
        }
    }

    pub fn id(&self) -> EntityId {
        match self {
            Curve::Polyline(c) => c.id,
            Curve::Bezier(c) => c.id,
            Curve::Lagrange(c) => c.id,
        }
    }

    fn points(&self) -> &ControlPoints {
        match self {
            Curve::Polyline(c) => c.points(),
            Curve::Bezier(c) => c.points(),
            Curve::Lagrange(c) => c.points(),
        }
    }

    /// Control points in parameter order
    pub fn control_points(&self) -> &[Point] {
        self.points().as_slice()
    }

    pub fn control_point(&self, index: usize) -> Option<Point> {
        self.points().get(index)
    }

    pub fn control_point_count(&self) -> usize {
        self.points().len()
    }

    /// True when the curve has too few points to be kept
    pub fn is_degenerate(&self) -> bool {
        self.control_point_count() < MIN_CONTROL_POINTS
    }

    /// Point at parameter `t`
    pub fn evaluate(&self, t: f64) -> Result<Point, CurveError> {
        match self {
            Curve::Polyline(c) => c.evaluate(t),
            Curve::Bezier(c) => c.evaluate(t),
            Curve::Lagrange(c) => c.evaluate(t),
        }
    }

    /// Append a control point, returning its index
    pub fn add_control_point(&mut self, point: Point) -> usize {
        match self {
            Curve::Polyline(c) => c.add_control_point(point),
            Curve::Bezier(c) => c.add_control_point(point),
            Curve::Lagrange(c) => c.add_control_point(point),
        }
    }

    /// Remove the control point at `index`
    pub fn remove_control_point(&mut self, index: usize) -> Result<Point, CurveError> {
        match self {
            Curve::Polyline(c) => c.remove_control_point(index),
            Curve::Bezier(c) => c.remove_control_point(index),
            Curve::Lagrange(c) => c.remove_control_point(index),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Curve::Polyline(c) => c.is_selected(),
            Curve::Bezier(c) => c.is_selected(),
            Curve::Lagrange(c) => c.is_selected(),
        }
    }

    /// Mark this curve selected. Other curves are not touched; keeping a
    /// single selection is the scene's job.
    pub fn select(&mut self) {
        self.set_selected(true);
    }

    pub fn deselect(&mut self) {
        self.set_selected(false);
    }

    fn set_selected(&mut self, selected: bool) {
        match self {
            Curve::Polyline(c) => c.set_selected(selected),
            Curve::Bezier(c) => c.set_selected(selected),
            Curve::Lagrange(c) => c.set_selected(selected),
        }
    }

    /// Sample the curve at `samples` evenly spaced parameters starting at
    /// zero, `settings::sampling::STEP` apart
    pub fn samples(&self, samples: usize) -> impl Iterator<Item = Point> + '_ {
        (0..samples).filter_map(move |i| self.evaluate(i as f64 * settings::sampling::STEP).ok())
    }

    /// The line strip used to draw this curve.
    ///
    /// Polylines are drawn through their control points directly; the
    /// polynomial kinds are sampled at `RENDER_SEGMENTS + 1` parameters
    /// from 0 to 1 inclusive. A curve that cannot be evaluated yields an
    /// empty strip.
    pub fn render_path(&self) -> Vec<Point> {
        match self {
            Curve::Polyline(c) => c.points().as_slice().to_vec(),
            Curve::Bezier(_) | Curve::Lagrange(_) => {
                let segments = settings::sampling::RENDER_SEGMENTS;
                (0..=segments)
                    .map(|i| self.evaluate(i as f64 / segments as f64))
                    .collect::<Result<Vec<_>, _>>()
                    .unwrap_or_default()
            }
        }
    }

    /// Snapshot of this curve for the renderer
    pub fn render_geometry(&self) -> RenderGeometry {
        let selected = self.is_selected();
        RenderGeometry {
            id: self.id(),
            kind: self.kind(),
            selected,
            path: self.render_path(),
            control_points: self.control_points().to_vec(),
            style: CurveStyle::for_curve(self.kind(), selected),
        }
    }

    /// Convert this curve's render strip to a kurbo BezPath
    pub fn to_bezpath(&self) -> BezPath {
        self.render_geometry().to_bezpath()
    }
}
