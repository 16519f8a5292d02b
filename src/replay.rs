// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Scripted input replay
//!
//! Stands in for a window: a TOML script lists key, click, resize and frame
//! events, and each frame event records what the renderer would have been
//! handed.
//!
//! ```toml
//! [[events]]
//! type = "key_down"
//! key = "b"
//!
//! [[events]]
//! type = "click"
//! x = 120
//! y = 300
//!
//! [[events]]
//! type = "frame"
//! ```

use crate::curve::{CurveKind, RenderGeometry};
use crate::editing::SketchSession;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// One recorded input event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    KeyDown { key: char },
    KeyUp { key: char },
    /// Click at window pixel coordinates
    Click { x: f64, y: f64 },
    Resize { width: f64, height: f64 },
    /// Produce render snapshots, as the display callback would
    Frame,
}

/// A list of events replayed in order
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl Script {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse input script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("Invalid script {}", path.display()))
    }
}

/// What one curve looked like in a frame
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSummary {
    pub kind: CurveKind,
    pub control_points: usize,
    pub path_points: usize,
    pub selected: bool,
}

impl From<&RenderGeometry> for CurveSummary {
    fn from(geometry: &RenderGeometry) -> Self {
        Self {
            kind: geometry.kind,
            control_points: geometry.control_points.len(),
            path_points: geometry.path.len(),
            selected: geometry.selected,
        }
    }
}

/// The curves handed to the renderer for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummary {
    /// Position of this frame among the script's frame events
    pub frame: usize,
    pub curves: Vec<CurveSummary>,
}

impl fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frame {}: {} curve(s)", self.frame, self.curves.len())?;
        for (i, curve) in self.curves.iter().enumerate() {
            let marker = if curve.selected { '*' } else { ' ' };
            writeln!(
                f,
                " {marker} [{i}] {:<8} {} control point(s), {} path point(s)",
                curve.kind,
                curve.control_points,
                curve.path_points
            )?;
        }
        Ok(())
    }
}

/// Feed every event of `script` to `session`, collecting one summary per
/// frame event
pub fn replay(session: &mut SketchSession, script: &Script) -> Vec<FrameSummary> {
    let mut frames = Vec::new();

    for event in &script.events {
        match *event {
            InputEvent::KeyDown { key } => session.key_down(key),
            InputEvent::KeyUp { key } => session.key_up(key),
            InputEvent::Click { x, y } => {
                session.click(x, y);
            }
            InputEvent::Resize { width, height } => session.resize(width, height),
            InputEvent::Frame => {
                let curves = session.frame().iter().map(CurveSummary::from).collect();
                frames.push(FrameSummary {
                    frame: frames.len(),
                    curves,
                });
            }
        }
    }

    tracing::info!(
        "Replayed {} event(s), {} frame(s), {} curve(s) left",
        script.events.len(),
        frames.len(),
        session.scene().len()
    );
    frames
}
