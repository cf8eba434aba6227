// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bramble Scene: an arena-backed scene tree for editor view layers.
//!
//! Bramble Scene is a reusable building block for canvas and diagram editors.
//!
//! - Represents a hierarchy of labeled items, each carrying an opaque geometry
//!   capability (coordinate mapping plus containment).
//! - Owns node allocation through a generational slot arena, so callers hold
//!   cheap [`NodeId`] handles instead of references and stale handles are
//!   detected rather than dereferenced.
//! - Provides a diagnostic [`write_outline`] helper that dumps subtree labels
//!   into any [`core::fmt::Write`] sink.
//!
//! It deliberately does not perform layout, rendering, or event dispatch.
//! Upstream code decides item positions and sizes; this crate only stores the
//! hierarchy and the geometry each item answers queries with. Spatial queries
//! themselves live in `bramble_pick`, which walks a [`Scene`] through this
//! crate's read-only accessors.
//!
//! ## API overview
//!
//! - [`Scene`]: container managing items and their parent/child links.
//! - [`Item`]: per-node payload (label, geometry, flags).
//! - [`ItemFlags`]: visibility and picking controls.
//! - [`NodeId`]: generational handle of a node.
//! - [`ItemGeometry`]: the per-item geometry capability consumed by queries.
//! - [`RectGeometry`]: stock axis-aligned implementation built on [`kurbo`].
//!
//! Key operations:
//! - [`Scene::insert`] → [`NodeId`]
//! - [`Scene::remove`] / [`Scene::reparent`]
//! - [`Scene::children_of`] / [`Scene::parent_of`] / [`Scene::roots`]
//! - [`Scene::label`] / [`Scene::geometry`] / [`Scene::flags`] and their
//!   mutating counterparts.
//!
//! The tree is kept acyclic by construction: [`Scene::reparent`] refuses to
//! move a node underneath one of its own descendants, so traversals always
//! terminate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod geometry;
mod outline;
mod scene;
mod types;

pub use geometry::{ItemGeometry, RectGeometry};
pub use outline::write_outline;
pub use scene::Scene;
pub use types::{Item, ItemFlags, NodeId};
