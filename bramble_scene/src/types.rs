// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers, flags, and item payloads.

use alloc::string::String;

/// Identifier for a node in the scene (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Item flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item is visible (participates in rendering and outline dumps).
        const VISIBLE  = 0b0000_0001;
        /// Item is pickable (participates in point queries).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Payload stored for each node: an identifying label, the geometry the item
/// answers spatial queries with, and flags.
///
/// `G` is whatever geometry capability the surrounding application uses; see
/// [`ItemGeometry`](crate::ItemGeometry) and the stock
/// [`RectGeometry`](crate::RectGeometry).
#[derive(Clone, Debug)]
pub struct Item<G> {
    /// Identifying label, used by diagnostics such as
    /// [`write_outline`](crate::write_outline).
    pub label: String,
    /// Geometry capability consumed by spatial queries.
    pub geometry: G,
    /// Visibility and picking flags.
    pub flags: ItemFlags,
}

impl<G> Item<G> {
    /// Create an item with the given label and geometry, and default flags.
    pub fn new(label: impl Into<String>, geometry: G) -> Self {
        Self {
            label: label.into(),
            geometry,
            flags: ItemFlags::default(),
        }
    }

    /// Builder-style override of the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }
}
