// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic outline dumps of scene subtrees.

use core::fmt::{self, Write};

use crate::scene::Scene;
use crate::types::NodeId;

/// Write the labels of `root` and every node below it into `sink`, one label
/// per line, depth-first with children before the node itself.
///
/// The sink is any [`core::fmt::Write`] implementor (a `String`, a custom
/// logger adapter), so callers can capture or redirect the dump instead of
/// assuming a console. A stale `root` writes nothing.
pub fn write_outline<G, W: Write>(scene: &Scene<G>, root: NodeId, sink: &mut W) -> fmt::Result {
    for &child in scene.children_of(root) {
        write_outline(scene, child, sink)?;
    }
    if let Some(label) = scene.label(root) {
        writeln!(sink, "{label}")?;
    }
    Ok(())
}
