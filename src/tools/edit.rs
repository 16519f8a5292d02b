// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Tools that edit the selected curve

use crate::error::CurveError;
use crate::scene::Scene;
use crate::tools::{ClickOutcome, Tool, ToolId};
use kurbo::Point;

/// Appends the click to the selected curve
#[derive(Debug, Clone, Default)]
pub struct AppendTool;

impl Tool for AppendTool {
    fn id(&self) -> ToolId {
        ToolId::Append
    }

    fn click(&mut self, pos: Point, scene: &mut Scene) -> Result<ClickOutcome, CurveError> {
        let curve = scene.selected_index().ok_or(CurveError::EmptyScene)?;
        let point = scene.add_control_point_to_selected(pos)?;
        Ok(ClickOutcome::PointAdded { curve, point })
    }
}

/// Removes the selected curve's first control point near the click
#[derive(Debug, Clone)]
pub struct DeletePointTool {
    tolerance: f64,
}

impl DeletePointTool {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Tool for DeletePointTool {
    fn id(&self) -> ToolId {
        ToolId::DeletePoint
    }

    fn click(&mut self, pos: Point, scene: &mut Scene) -> Result<ClickOutcome, CurveError> {
        let curve = scene.selected_index().ok_or(CurveError::EmptyScene)?;
        let Some(point) = scene.hit_test_control_point(curve, pos, self.tolerance) else {
            return Ok(ClickOutcome::Nothing);
        };
        scene.remove_control_point_from_selected(point)?;
        Ok(ClickOutcome::PointRemoved { curve, point })
    }
}

/// Removes the selected curve wherever the click lands
#[derive(Debug, Clone, Default)]
pub struct DeleteCurveTool;

impl Tool for DeleteCurveTool {
    fn id(&self) -> ToolId {
        ToolId::DeleteCurve
    }

    fn click(&mut self, _pos: Point, scene: &mut Scene) -> Result<ClickOutcome, CurveError> {
        let index = scene.selected_index().ok_or(CurveError::EmptyScene)?;
        scene.remove_selected()?;
        Ok(ClickOutcome::CurveRemoved(index))
    }
}
