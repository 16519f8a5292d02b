// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for curve and scene operations.
//!
//! None of these are fatal. The editing session logs and drops them so a
//! bad click never interrupts the frame loop.

use crate::curve::CurveKind;
use thiserror::Error;

/// Errors produced by curve evaluation and scene mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A control-point or curve index is out of range
    #[error("index {index} out of range (len {len})")]
    InvalidIndex {
        /// The index that was requested
        index: usize,
        /// Length of the sequence it was checked against
        len: usize,
    },

    /// The curve has too few control points to be evaluated
    #[error("{kind} curve needs {required} control points, has {count}")]
    DegenerateCurve {
        kind: CurveKind,
        count: usize,
        required: usize,
    },

    /// The operation needs a selected (or any) curve and there is none
    #[error("no curve to operate on")]
    EmptyScene,
}

impl CurveError {
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::InvalidIndex { index, len })
        }
    }
}
