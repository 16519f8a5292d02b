// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection by clicking near a curve

use crate::error::CurveError;
use crate::scene::Scene;
use crate::tools::{ClickOutcome, Tool, ToolId};
use kurbo::Point;

/// Selects the first curve passing near the click.
///
/// A click that misses every curve leaves the selection alone.
#[derive(Debug, Clone)]
pub struct SelectTool {
    tolerance: f64,
}

impl SelectTool {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Tool for SelectTool {
    fn id(&self) -> ToolId {
        ToolId::Select
    }

    fn click(&mut self, pos: Point, scene: &mut Scene) -> Result<ClickOutcome, CurveError> {
        match scene.hit_test_curve(pos, self.tolerance) {
            Some(index) => {
                scene.select_by_index(index)?;
                Ok(ClickOutcome::CurveSelected(index))
            }
            None => Ok(ClickOutcome::Nothing),
        }
    }
}
