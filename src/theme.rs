// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// CURVE STROKES -- one color per curve kind while unselected
// ============================================================================
const POLYLINE_STROKE: Color = Color::from_rgb8(0xff, 0x00, 0x00);
const BEZIER_STROKE: Color = Color::from_rgb8(0x80, 0xb3, 0x4d);
const LAGRANGE_STROKE: Color = Color::from_rgb8(0xb3, 0x00, 0xe6);

// Any kind, once selected
const SELECTED_STROKE: Color = Color::from_rgb8(0x00, 0x00, 0xff);

// ============================================================================
// CONTROL POINTS
// ============================================================================
const CONTROL_POINT: Color = Color::from_rgb8(0x00, 0x00, 0x00);

// ============================================================================
// SIZES
// ============================================================================
const STROKE_WIDTH: f64 = 2.0;
const SELECTED_STROKE_WIDTH: f64 = 4.0;
const CONTROL_POINT_SIZE: f64 = 6.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Curve stroke colors and widths
pub mod curve {
    use super::Color;

    pub const POLYLINE: Color = super::POLYLINE_STROKE;
    pub const BEZIER: Color = super::BEZIER_STROKE;
    pub const LAGRANGE: Color = super::LAGRANGE_STROKE;

    /// Stroke of the selected curve regardless of its kind
    pub const SELECTED: Color = super::SELECTED_STROKE;

    pub const WIDTH: f64 = super::STROKE_WIDTH;
    pub const SELECTED_WIDTH: f64 = super::SELECTED_STROKE_WIDTH;
}

/// Control point markers (drawn only for the selected curve)
pub mod control_point {
    use super::Color;
    pub const COLOR: Color = super::CONTROL_POINT;
    pub const SIZE: f64 = super::CONTROL_POINT_SIZE;
}
