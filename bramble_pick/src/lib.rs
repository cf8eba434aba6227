// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bramble Pick: depth-first point picking over a scene tree.
//!
//! Given a subtree root and a point in the caller's global space, the picker
//! returns every node whose geometry contains the point. The traversal visits
//! children before testing the node itself, so the result lists descendant
//! matches before ancestor matches, in the order the recursive calls return.
//! This is the order an editor wants when picking at a click location: the
//! deepest (visually frontmost within its branch) item comes first, and an
//! enclosing container such as a page comes last.
//!
//! Coordinate mapping and containment are delegated to each item's
//! [`ItemGeometry`], so the picker is independent of how the surrounding
//! framework represents transforms or bounds.
//!
//! # Example
//!
//! ```rust
//! use bramble_pick::items_above_point;
//! use bramble_scene::{Item, RectGeometry, Scene};
//! use kurbo::{Point, Rect};
//!
//! let mut scene = Scene::new();
//! let page = scene.insert(
//!     None,
//!     Item::new("page", RectGeometry::new(Rect::new(0.0, 0.0, 800.0, 600.0))),
//! );
//! let shape = scene.insert(
//!     Some(page),
//!     Item::new("shape", RectGeometry::new(Rect::new(100.0, 100.0, 200.0, 200.0))),
//! );
//!
//! let picked = items_above_point(&scene, page, Point::new(150.0, 150.0));
//! assert_eq!(picked, vec![shape, page]);
//! ```
//!
//! The [`num`] module carries the clamp helpers shared by view-layer code.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod num;

use alloc::vec::Vec;
use bramble_scene::{ItemFlags, ItemGeometry, NodeId, Scene};
use kurbo::Point;

/// Filter applied while picking.
///
/// Used by [`items_above_point_filtered`] to restrict which items may appear
/// in the result. Filtering affects reporting only: an item that fails the
/// filter is not tested, but its children are still visited.
#[derive(Clone, Copy, Debug)]
pub struct PickFilter {
    /// Bitfield of required item flags. Only items containing all these flags
    /// will be reported.
    pub required_flags: ItemFlags,
}

impl Default for PickFilter {
    fn default() -> Self {
        Self {
            required_flags: ItemFlags::empty(),
        }
    }
}

impl PickFilter {
    /// Create a new empty filter (reports all items).
    pub fn new() -> Self {
        Self::default()
    }

    /// Only report visible items.
    pub fn visible(mut self) -> Self {
        self.required_flags |= ItemFlags::VISIBLE;
        self
    }

    /// Only report pickable items.
    pub fn pickable(mut self) -> Self {
        self.required_flags |= ItemFlags::PICKABLE;
        self
    }

    /// Check if an item's flags satisfy this filter.
    pub fn matches(&self, flags: ItemFlags) -> bool {
        flags.contains(self.required_flags)
    }
}

/// Collect every node in `root`'s subtree whose geometry contains `point`.
///
/// - `point` is interpreted in the global/query space the items' geometry
///   maps from.
/// - Children are visited (in child order) before the node itself is tested,
///   so descendant matches precede ancestor matches in the result. The root
///   is tested like any other node.
/// - A point matching nothing yields an empty `Vec`, as does a stale `root`.
pub fn items_above_point<G: ItemGeometry>(
    scene: &Scene<G>,
    root: NodeId,
    point: Point,
) -> Vec<NodeId> {
    items_above_point_filtered(scene, root, point, PickFilter::new())
}

/// Like [`items_above_point`], but only items whose flags satisfy `filter`
/// are tested and reported. Items failing the filter are still traversed, so
/// a non-pickable container does not hide its pickable children.
pub fn items_above_point_filtered<G: ItemGeometry>(
    scene: &Scene<G>,
    root: NodeId,
    point: Point,
    filter: PickFilter,
) -> Vec<NodeId> {
    let mut result = Vec::new();
    items_above_point_into(scene, root, point, filter, &mut result);
    result
}

/// Appending form of [`items_above_point_filtered`]: matches are pushed onto
/// `result`, which is not cleared first. Useful for picking across several
/// roots into one buffer.
pub fn items_above_point_into<G: ItemGeometry>(
    scene: &Scene<G>,
    root: NodeId,
    point: Point,
    filter: PickFilter,
    result: &mut Vec<NodeId>,
) {
    for &child in scene.children_of(root) {
        items_above_point_into(scene, child, point, filter, result);
    }
    let (Some(geometry), Some(flags)) = (scene.geometry(root), scene.flags(root)) else {
        return;
    };
    if filter.matches(flags) && geometry.hit(point) {
        result.push(root);
    }
}
