// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for curves.
//!
//! Each `EntityId` is a monotonically increasing `u64` drawn from a global
//! atomic counter. The scene uses them to keep track of the selected curve
//! while indices shift underneath it (pruning, deletion), and log lines use
//! them to name curves. IDs are never reused within a process.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Create a new unique entity ID
    pub fn next() -> Self {
        Self(ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::next()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
