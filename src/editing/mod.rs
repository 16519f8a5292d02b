// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod input;
pub mod session;
pub mod viewport;

pub use input::{InputState, ModeKey};
pub use session::SketchSession;
pub use viewport::Viewport;
