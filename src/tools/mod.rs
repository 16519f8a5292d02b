// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system: what a click does in each mode

use crate::config::HitTestConfig;
use crate::curve::CurveKind;
use crate::error::CurveError;
use crate::scene::Scene;
use kurbo::Point;

// ===== Tool Identifier =====

/// Tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    /// Start a new curve of the given kind at the click
    Create(CurveKind),
    /// Add the click to the most recently created curve
    Extend,
    /// Add the click to the selected curve
    Append,
    /// Remove the selected curve's control point under the click
    DeletePoint,
    /// Remove the selected curve
    DeleteCurve,
    /// Select the curve under the click
    Select,
}

// ===== Click Outcome =====

/// What a click changed in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    CurveCreated(usize),
    PointAdded { curve: usize, point: usize },
    PointRemoved { curve: usize, point: usize },
    CurveRemoved(usize),
    CurveSelected(usize),
    /// The click landed on nothing the tool acts on
    Nothing,
}

// ===== Tool Trait =====

/// A click handler for one interaction mode
pub trait Tool {
    /// Get the tool identifier
    fn id(&self) -> ToolId;

    /// Apply a click at `pos` (normalized canvas coordinates)
    fn click(&mut self, pos: Point, scene: &mut Scene) -> Result<ClickOutcome, CurveError>;
}

// ===== ToolBox Enum =====

/// Enum wrapping all tool types
#[derive(Debug, Clone)]
pub enum ToolBox {
    Create(create::CreateTool),
    Extend(create::ExtendTool),
    Append(edit::AppendTool),
    DeletePoint(edit::DeletePointTool),
    DeleteCurve(edit::DeleteCurveTool),
    Select(select::SelectTool),
}

// ===== ToolBox Implementation =====

impl ToolBox {
    /// Create a tool by ID
    pub fn for_id(id: ToolId, hit_test: &HitTestConfig) -> Self {
        match id {
            ToolId::Create(kind) => ToolBox::Create(create::CreateTool::new(kind)),
            ToolId::Extend => ToolBox::Extend(create::ExtendTool),
            ToolId::Append => ToolBox::Append(edit::AppendTool),
            ToolId::DeletePoint => {
                ToolBox::DeletePoint(edit::DeletePointTool::new(hit_test.control_point_tolerance))
            }
            ToolId::DeleteCurve => ToolBox::DeleteCurve(edit::DeleteCurveTool),
            ToolId::Select => ToolBox::Select(select::SelectTool::new(hit_test.curve_tolerance)),
        }
    }

    /// Get the tool ID
    pub fn id(&self) -> ToolId {
        match self {
            ToolBox::Create(tool) => tool.id(),
            ToolBox::Extend(tool) => tool.id(),
            ToolBox::Append(tool) => tool.id(),
            ToolBox::DeletePoint(tool) => tool.id(),
            ToolBox::DeleteCurve(tool) => tool.id(),
            ToolBox::Select(tool) => tool.id(),
        }
    }

    /// Handle a click
    pub fn click(&mut self, pos: Point, scene: &mut Scene) -> Result<ClickOutcome, CurveError> {
        match self {
            ToolBox::Create(tool) => tool.click(pos, scene),
            ToolBox::Extend(tool) => tool.click(pos, scene),
            ToolBox::Append(tool) => tool.click(pos, scene),
            ToolBox::DeletePoint(tool) => tool.click(pos, scene),
            ToolBox::DeleteCurve(tool) => tool.click(pos, scene),
            ToolBox::Select(tool) => tool.click(pos, scene),
        }
    }
}

// ===== Tool Modules =====

pub mod create;
pub mod edit;
pub mod select;
