// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Window pixels to normalized canvas coordinates.
//!
//! The canvas spans `[-1, 1]` on both axes with y pointing up, while window
//! pixels start at the top-left corner with y pointing down.

use crate::settings;
use kurbo::Point;

/// Size of the drawing area in window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Sizes below one pixel are clamped to one
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        *self = Self::new(width, height);
    }

    /// Convert a window pixel position to canvas coordinates
    pub fn to_normalized(&self, x: f64, y: f64) -> Point {
        Point::new(2.0 * x / self.width - 1.0, 1.0 - 2.0 * y / self.height)
    }

    /// Convert canvas coordinates back to a window pixel position
    pub fn to_screen(&self, point: Point) -> Point {
        Point::new(
            (point.x + 1.0) * self.width / 2.0,
            (1.0 - point.y) * self.height / 2.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(settings::viewport::WIDTH, settings::viewport::HEIGHT)
    }
}
