// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! User configuration: key bindings, pick tolerances and window size.
//!
//! Everything is optional in the TOML file; missing values fall back to the
//! defaults in `settings.rs`. A minimal file looks like:
//!
//! ```toml
//! [keys]
//! new_bezier = "c"
//!
//! [hit_test]
//! curve_tolerance = 0.08
//! ```

use crate::editing::ModeKey;
use crate::settings;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Held to change what clicks do
    Mode(ModeKey),
    /// Pressed to select the next curve
    CycleSelection,
}

/// Character bound to each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    pub new_polyline: char,
    pub new_bezier: char,
    pub new_lagrange: char,
    pub append_to_selected: char,
    pub delete_control_point: char,
    pub delete_curve: char,
    pub cycle_selection: char,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            new_polyline: 'p',
            new_bezier: 'b',
            new_lagrange: 'l',
            append_to_selected: 'a',
            delete_control_point: 'd',
            delete_curve: 'e',
            cycle_selection: ' ',
        }
    }
}

impl Keymap {
    fn bindings(&self) -> [(char, KeyAction); 7] {
        [
            (self.new_polyline, KeyAction::Mode(ModeKey::NewPolyline)),
            (self.new_bezier, KeyAction::Mode(ModeKey::NewBezier)),
            (self.new_lagrange, KeyAction::Mode(ModeKey::NewLagrange)),
            (self.append_to_selected, KeyAction::Mode(ModeKey::AppendToSelected)),
            (self.delete_control_point, KeyAction::Mode(ModeKey::DeleteControlPoint)),
            (self.delete_curve, KeyAction::Mode(ModeKey::DeleteCurve)),
            (self.cycle_selection, KeyAction::CycleSelection),
        ]
    }

    /// Look up the action bound to `key`
    pub fn action(&self, key: char) -> Option<KeyAction> {
        self.bindings()
            .into_iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| action)
    }

    fn validate(&self) -> Result<()> {
        let bindings = self.bindings();
        for (i, (key, action)) in bindings.iter().enumerate() {
            if let Some((_, other)) = bindings[i + 1..].iter().find(|(k, _)| k == key) {
                bail!("key {key:?} is bound to both {action:?} and {other:?}");
            }
        }
        Ok(())
    }
}

/// Pick distances in normalized canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestConfig {
    pub curve_tolerance: f64,
    pub control_point_tolerance: f64,
}

impl Default for HitTestConfig {
    fn default() -> Self {
        Self {
            curve_tolerance: settings::hit_test::CURVE_TOLERANCE,
            control_point_tolerance: settings::hit_test::CONTROL_POINT_TOLERANCE,
        }
    }
}

/// Initial window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: settings::viewport::WIDTH,
            height: settings::viewport::HEIGHT,
        }
    }
}

/// Complete user configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keys: Keymap,
    pub hit_test: HitTestConfig,
    pub viewport: ViewportConfig,
}

impl Config {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Render the configuration as TOML, in the format `load` reads
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    fn validate(&self) -> Result<()> {
        let tolerances = [
            ("curve_tolerance", self.hit_test.curve_tolerance),
            ("control_point_tolerance", self.hit_test.control_point_tolerance),
        ];
        for (name, value) in tolerances {
            if !(value.is_finite() && value > 0.0) {
                bail!("hit_test.{name} must be a positive number, got {value}");
            }
        }
        if !(self.viewport.width >= 1.0 && self.viewport.height >= 1.0) {
            bail!(
                "viewport must be at least 1x1 pixels, got {}x{}",
                self.viewport.width,
                self.viewport.height
            );
        }
        self.keys.validate()
    }
}
