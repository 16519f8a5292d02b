// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Ordered control-point storage shared by every curve kind.
//!
//! Insertion order is the parameterization order, so points are only ever
//! appended at the end or removed by index; there is no reordering.

use crate::error::CurveError;
use kurbo::Point;

/// The control points of a single curve
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPoints {
    points: Vec<Point>,
}

impl ControlPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Append a point and return its index
    pub fn push(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Remove the point at `index`, leaving the sequence untouched if the
    /// index is out of range
    pub fn remove(&mut self, index: usize) -> Result<Point, CurveError> {
        CurveError::check_index(index, self.points.len())?;
        Ok(self.points.remove(index))
    }
}
