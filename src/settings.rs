// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Built-in defaults for sampling, hit testing and the canvas.
//!
//! Values a user may want to change at runtime (tolerances, viewport size,
//! key bindings) are only defaults here; `config.rs` can override them.
//! Visual styling (colors, widths) belongs in `theme.rs`.

// ============================================================================
// SAMPLING
// ============================================================================
/// Number of line segments used to draw a Bezier or Lagrange curve
const RENDER_SEGMENTS: usize = 100;

/// Number of parameter samples tested when picking a curve.
///
/// Samples run t = 0, 0.01, ... 0.98 (the final step before t = 1 is
/// never tested).
const HIT_TEST_SAMPLES: usize = 99;

/// Parameter step shared by rendering and hit testing
const SAMPLE_STEP: f64 = 0.01;

// ============================================================================
// HIT TESTING (normalized canvas units)
// ============================================================================
/// Maximum distance from a sampled curve point for a click to select it
const CURVE_TOLERANCE: f64 = 0.1;

/// Maximum distance from a control point for a click to grab it
const CONTROL_POINT_TOLERANCE: f64 = 0.05;

// ============================================================================
// CANVAS
// ============================================================================
/// Initial canvas width in window pixels
const VIEWPORT_WIDTH: f64 = 640.0;

/// Initial canvas height in window pixels
const VIEWPORT_HEIGHT: f64 = 480.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Curve sampling resolution
pub mod sampling {
    /// Segments per rendered Bezier/Lagrange curve
    pub const RENDER_SEGMENTS: usize = super::RENDER_SEGMENTS;

    /// Samples per curve when hit testing
    pub const HIT_TEST_SAMPLES: usize = super::HIT_TEST_SAMPLES;

    /// Parameter distance between consecutive samples
    pub const STEP: f64 = super::SAMPLE_STEP;
}

/// Default pick distances
pub mod hit_test {
    pub const CURVE_TOLERANCE: f64 = super::CURVE_TOLERANCE;
    pub const CONTROL_POINT_TOLERANCE: f64 = super::CONTROL_POINT_TOLERANCE;
}

/// Default window size
pub mod viewport {
    pub const WIDTH: f64 = super::VIEWPORT_WIDTH;
    pub const HEIGHT: f64 = super::VIEWPORT_HEIGHT;
}
