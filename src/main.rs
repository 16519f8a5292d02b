// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Curvesketch: replay a scripted editing session and print each frame

fn main() -> anyhow::Result<()> {
    curvesketch::run()
}
