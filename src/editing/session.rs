// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Sketch session - the single writer of the scene
//!
//! The session turns key and click events into scene operations and hands
//! out render snapshots once per frame. Curve and scene errors stop here:
//! they are logged and the event is dropped, so the event loop driving the
//! session never sees a failure.

use super::input::InputState;
use super::viewport::Viewport;
use crate::config::{Config, HitTestConfig, KeyAction, Keymap};
use crate::curve::RenderGeometry;
use crate::scene::Scene;
use crate::tools::{ClickOutcome, ToolBox, ToolId};
use kurbo::Point;

/// All editing state for one canvas
#[derive(Debug, Clone)]
pub struct SketchSession {
    /// The curves being edited
    scene: Scene,

    /// Which mode keys are held
    input: InputState,

    keymap: Keymap,

    /// Window size used to normalize clicks
    viewport: Viewport,

    hit_test: HitTestConfig,
}

impl SketchSession {
    pub fn new(config: &Config) -> Self {
        Self {
            scene: Scene::new(),
            input: InputState::new(),
            keymap: config.keys.clone(),
            viewport: Viewport::new(config.viewport.width, config.viewport.height),
            hit_test: config.hit_test,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Handle a key press; unbound keys are ignored
    pub fn key_down(&mut self, key: char) {
        match self.keymap.action(key) {
            Some(KeyAction::Mode(mode)) => {
                if self.input.press(mode) {
                    tracing::debug!("Mode key {:?} down", mode);
                }
            }
            Some(KeyAction::CycleSelection) => {
                self.scene.select_next();
                tracing::debug!("Selection cycled to {:?}", self.scene.selected_index());
            }
            None => {}
        }
    }

    /// Handle a key release; unbound keys are ignored
    pub fn key_up(&mut self, key: char) {
        if let Some(KeyAction::Mode(mode)) = self.keymap.action(key) {
            self.input.release(mode);
            tracing::debug!("Mode key {:?} up", mode);
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
    }

    /// Handle a click at window pixel `(x, y)`
    pub fn click(&mut self, x: f64, y: f64) -> ClickOutcome {
        let pos = self.viewport.to_normalized(x, y);
        self.click_normalized(pos)
    }

    /// Handle a click already in canvas coordinates
    pub fn click_normalized(&mut self, pos: Point) -> ClickOutcome {
        let Some(tool_id) = self.input.active_tool() else {
            tracing::debug!(
                "Click at ({}, {}) ignored: no creation gesture running",
                pos.x,
                pos.y
            );
            return ClickOutcome::Nothing;
        };
        let mut tool = ToolBox::for_id(tool_id, &self.hit_test);

        match tool.click(pos, &mut self.scene) {
            Ok(outcome) => {
                if matches!(tool_id, ToolId::Create(_)) {
                    self.input.disarm_creation();
                }
                tracing::debug!(
                    "{:?} click at ({}, {}): {:?}",
                    tool_id,
                    pos.x,
                    pos.y,
                    outcome
                );
                outcome
            }
            Err(err) => {
                tracing::warn!(
                    "{:?} click at ({}, {}) ignored: {}",
                    tool_id,
                    pos.x,
                    pos.y,
                    err
                );
                ClickOutcome::Nothing
            }
        }
    }

    /// Produce this frame's render snapshots.
    ///
    /// Degenerate curves are pruned first, but only while no mode key is
    /// held, so a curve that has just been started survives until its
    /// creator lets go of the key.
    pub fn frame(&mut self) -> Vec<RenderGeometry> {
        if self.input.is_idle() {
            self.scene.prune_degenerate_curves();
        }
        self.scene.render()
    }
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
