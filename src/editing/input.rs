// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Mode-key state for the interaction policy.
//!
//! Holding a creation key and clicking starts a new curve on the first click
//! and extends that same curve on every later click until the key is let
//! go. `InputState` tracks which mode keys are held and whether the next
//! click should start a curve, and resolves both into the active tool.

use crate::curve::CurveKind;
use crate::tools::ToolId;
use std::collections::BTreeSet;

/// Keys that change what a click does while held
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModeKey {
    NewPolyline,
    NewBezier,
    NewLagrange,
    AppendToSelected,
    DeleteControlPoint,
    DeleteCurve,
}

impl ModeKey {
    /// The curve kind a creation key starts, `None` for the other keys
    pub fn curve_kind(self) -> Option<CurveKind> {
        match self {
            ModeKey::NewPolyline => Some(CurveKind::Polyline),
            ModeKey::NewBezier => Some(CurveKind::Bezier),
            ModeKey::NewLagrange => Some(CurveKind::Lagrange),
            _ => None,
        }
    }

    pub fn is_creation(self) -> bool {
        self.curve_kind().is_some()
    }
}

/// Held mode keys plus the state of the current creation gesture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: BTreeSet<ModeKey>,

    /// Kind chosen by the creation key whose press armed the gesture;
    /// cleared by the click that creates the curve
    armed: Option<CurveKind>,

    /// True once this gesture's curve exists, so later clicks extend it
    gesture_started: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Returns true on the up-to-down transition;
    /// auto-repeat of an already held key returns false and changes nothing.
    ///
    /// A creation key only arms a gesture when none is armed or running, so
    /// a second creation key pressed mid-gesture neither changes the kind
    /// nor starts another curve.
    pub fn press(&mut self, key: ModeKey) -> bool {
        let activated = self.held.insert(key);
        if activated && self.armed.is_none() && !self.gesture_started {
            self.armed = key.curve_kind();
        }
        activated
    }

    /// Record a key going up. Releasing any creation key ends the gesture.
    pub fn release(&mut self, key: ModeKey) {
        self.held.remove(&key);
        if key.is_creation() {
            self.armed = None;
            self.gesture_started = false;
        }
    }

    pub fn is_held(&self, key: ModeKey) -> bool {
        self.held.contains(&key)
    }

    /// True when no mode key is held; degenerate curves are only pruned then
    pub fn is_idle(&self) -> bool {
        self.held.is_empty()
    }

    pub fn is_creation_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Kind the next click will create, if creation is armed
    pub fn armed_kind(&self) -> Option<CurveKind> {
        self.armed
    }

    /// Called once the armed click has created its curve
    pub fn disarm_creation(&mut self) {
        if self.armed.take().is_some() {
            self.gesture_started = true;
        }
    }

    /// The tool a click should use right now, or `None` when the click
    /// should be ignored.
    ///
    /// Priority: an armed gesture creates a curve of the armed kind, a
    /// started gesture extends the last curve, then append, delete point,
    /// delete curve. A creation key held with no gesture armed or running
    /// (its gesture was ended by releasing another creation key) swallows
    /// the click. With nothing held a click selects.
    pub fn active_tool(&self) -> Option<ToolId> {
        if let Some(kind) = self.armed {
            return Some(ToolId::Create(kind));
        }
        if self.held.iter().any(|key| key.is_creation()) {
            return self.gesture_started.then_some(ToolId::Extend);
        }

        let tool = if self.is_held(ModeKey::AppendToSelected) {
            ToolId::Append
        } else if self.is_held(ModeKey::DeleteControlPoint) {
            ToolId::DeletePoint
        } else if self.is_held(ModeKey::DeleteCurve) {
            ToolId::DeleteCurve
        } else {
            ToolId::Select
        };
        Some(tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_selects() {
        let input = InputState::new();
        assert!(input.is_idle());
        assert_eq!(input.active_tool(), Some(ToolId::Select));
    }

    #[test]
    fn creation_key_arms_then_extends() {
        let mut input = InputState::new();
        assert!(input.press(ModeKey::NewBezier));
        assert_eq!(
            input.active_tool(),
            Some(ToolId::Create(CurveKind::Bezier))
        );

        input.disarm_creation();
        assert_eq!(input.active_tool(), Some(ToolId::Extend));

        // Auto-repeat must not start another curve
        assert!(!input.press(ModeKey::NewBezier));
        assert_eq!(input.active_tool(), Some(ToolId::Extend));

        input.release(ModeKey::NewBezier);
        assert!(input.is_idle());
        assert_eq!(input.active_tool(), Some(ToolId::Select));

        input.press(ModeKey::NewBezier);
        assert_eq!(
            input.active_tool(),
            Some(ToolId::Create(CurveKind::Bezier))
        );
    }

    #[test]
    fn first_creation_key_decides_kind() {
        let mut input = InputState::new();
        input.press(ModeKey::NewLagrange);
        input.press(ModeKey::NewPolyline);
        assert_eq!(input.armed_kind(), Some(CurveKind::Lagrange));
        assert_eq!(
            input.active_tool(),
            Some(ToolId::Create(CurveKind::Lagrange))
        );
    }

    #[test]
    fn second_creation_key_mid_gesture_keeps_extending() {
        let mut input = InputState::new();
        input.press(ModeKey::NewPolyline);
        input.disarm_creation();
        assert!(input.press(ModeKey::NewBezier));
        assert!(!input.is_creation_armed());
        assert_eq!(input.active_tool(), Some(ToolId::Extend));
    }

    #[test]
    fn releasing_one_creation_key_ends_the_gesture() {
        let mut input = InputState::new();
        input.press(ModeKey::NewLagrange);
        input.press(ModeKey::NewPolyline);
        input.release(ModeKey::NewPolyline);
        assert!(!input.is_creation_armed());
        assert_eq!(input.active_tool(), None);

        // Same once a curve exists
        let mut input = InputState::new();
        input.press(ModeKey::NewBezier);
        input.disarm_creation();
        input.press(ModeKey::NewLagrange);
        input.release(ModeKey::NewLagrange);
        assert_eq!(input.active_tool(), None);
    }

    #[test]
    fn disarm_without_arming_starts_nothing() {
        let mut input = InputState::new();
        input.press(ModeKey::AppendToSelected);
        input.disarm_creation();
        assert_eq!(input.active_tool(), Some(ToolId::Append));
    }

    #[test]
    fn edit_keys_in_priority_order() {
        let mut input = InputState::new();
        input.press(ModeKey::DeleteCurve);
        assert_eq!(input.active_tool(), Some(ToolId::DeleteCurve));
        input.press(ModeKey::DeleteControlPoint);
        assert_eq!(input.active_tool(), Some(ToolId::DeletePoint));
        input.press(ModeKey::AppendToSelected);
        assert_eq!(input.active_tool(), Some(ToolId::Append));
        assert!(!input.is_creation_armed());

        input.release(ModeKey::AppendToSelected);
        input.release(ModeKey::DeleteControlPoint);
        input.release(ModeKey::DeleteCurve);
        assert!(input.is_idle());
    }
}
