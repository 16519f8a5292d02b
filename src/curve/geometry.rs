// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Per-frame render snapshots
//!
//! `RenderGeometry` owns its points, so the renderer can keep it for as
//! long as the frame takes without borrowing the scene. It is rebuilt from
//! scratch every frame.

use super::CurveKind;
use crate::model::EntityId;
use crate::theme;
use kurbo::{BezPath, Point};
use peniko::Color;

/// How a curve should be stroked and whether its markers are visible
#[derive(Debug, Clone, Copy)]
pub struct CurveStyle {
    pub stroke: Color,
    pub line_width: f64,
    pub show_control_points: bool,
    pub point_color: Color,
    pub point_size: f64,
}

impl CurveStyle {
    pub fn for_curve(kind: CurveKind, selected: bool) -> Self {
        let (stroke, line_width) = if selected {
            (theme::curve::SELECTED, theme::curve::SELECTED_WIDTH)
        } else {
            let stroke = match kind {
                CurveKind::Polyline => theme::curve::POLYLINE,
                CurveKind::Bezier => theme::curve::BEZIER,
                CurveKind::Lagrange => theme::curve::LAGRANGE,
            };
            (stroke, theme::curve::WIDTH)
        };

        Self {
            stroke,
            line_width,
            show_control_points: selected,
            point_color: theme::control_point::COLOR,
            point_size: theme::control_point::SIZE,
        }
    }
}

/// Everything the renderer needs to draw one curve
#[derive(Debug, Clone)]
pub struct RenderGeometry {
    pub id: EntityId,
    pub kind: CurveKind,
    pub selected: bool,

    /// Line strip approximating the curve
    pub path: Vec<Point>,

    /// Control points in order
    pub control_points: Vec<Point>,

    pub style: CurveStyle,
}

impl RenderGeometry {
    /// Control points to draw as markers; empty unless the style shows them
    pub fn visible_control_points(&self) -> &[Point] {
        if self.style.show_control_points {
            &self.control_points
        } else {
            &[]
        }
    }

    /// The line strip as a kurbo path
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.path.iter();
        if let Some(&first) = points.next() {
            path.move_to(first);
            for &p in points {
                path.line_to(p);
            }
        }
        path
    }
}
