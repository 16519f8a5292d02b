// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve creation: the first click of a gesture starts a curve, the rest
//! extend it

use crate::curve::{Curve, CurveKind};
use crate::error::CurveError;
use crate::scene::Scene;
use crate::tools::{ClickOutcome, Tool, ToolId};
use kurbo::Point;

/// Starts a new curve with the click as its first control point
#[derive(Debug, Clone)]
pub struct CreateTool {
    kind: CurveKind,
}

impl CreateTool {
    pub fn new(kind: CurveKind) -> Self {
        Self { kind }
    }
}

impl Tool for CreateTool {
    fn id(&self) -> ToolId {
        ToolId::Create(self.kind)
    }

    fn click(&mut self, pos: Point, scene: &mut Scene) -> Result<ClickOutcome, CurveError> {
        let index = scene.add_curve(Curve::new(self.kind, pos));
        tracing::debug!("Create tool: new {} curve at index {}", self.kind, index);
        Ok(ClickOutcome::CurveCreated(index))
    }
}

/// Adds the click to the curve created last
#[derive(Debug, Clone, Default)]
pub struct ExtendTool;

impl Tool for ExtendTool {
    fn id(&self) -> ToolId {
        ToolId::Extend
    }

    fn click(&mut self, pos: Point, scene: &mut Scene) -> Result<ClickOutcome, CurveError> {
        let point = scene.add_control_point_to_last(pos)?;
        Ok(ClickOutcome::PointAdded {
            curve: scene.len() - 1,
            point,
        })
    }
}
