// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: a generational slot arena of linked items.

use alloc::string::String;
use alloc::vec::Vec;

use crate::geometry::RectGeometry;
use crate::types::{Item, ItemFlags, NodeId};

/// Scene tree over items of geometry type `G`.
///
/// Nodes live in a slot arena; callers address them through generational
/// [`NodeId`] handles. A handle is live while its slot's generation matches
/// the handle; removing a node (or reusing its slot) makes old handles stale,
/// and every accessor returns `None` (or an empty slice) for stale handles
/// rather than panicking.
///
/// The structure is a forest: a node inserted with no parent is a root, and
/// there may be several. [`Scene::reparent`] preserves acyclicity by refusing
/// to move a node underneath its own descendant, so recursive traversals over
/// [`Scene::children_of`] always terminate.
///
/// ## Example
///
/// ```rust
/// use bramble_scene::{Item, RectGeometry, Scene};
/// use kurbo::Rect;
///
/// let mut scene = Scene::new();
/// let page = scene.insert(
///     None,
///     Item::new("page", RectGeometry::new(Rect::new(0.0, 0.0, 800.0, 600.0))),
/// );
/// let box1 = scene.insert(
///     Some(page),
///     Item::new("box1", RectGeometry::new(Rect::new(10.0, 10.0, 110.0, 60.0))),
/// );
/// assert_eq!(scene.parent_of(box1), Some(page));
/// assert_eq!(scene.label(page), Some("page"));
/// ```
pub struct Scene<G = RectGeometry> {
    /// slots
    nodes: Vec<Option<Node<G>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

#[derive(Clone, Debug)]
struct Node<G> {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    item: Item<G>,
}

impl<G> core::fmt::Debug for Scene<G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Scene")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

impl<G> Default for Scene<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> Scene<G> {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new node as a child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` handle is treated as `None`: the node is inserted as
    /// a root rather than attached to a slot that no longer holds the node
    /// the caller meant.
    pub fn insert(&mut self, parent: Option<NodeId>, item: Item<G>) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, item));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, item)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node and its entire subtree.
    ///
    /// All removed handles become stale immediately. Removing a stale handle
    /// is a no-op.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).and_then(|n| n.parent) {
            self.unlink_parent(id, parent);
        }
        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let children = match self.node(id) {
            Some(n) => n.children.clone(),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` under `new_parent` (or detach it into a root if `None`).
    ///
    /// The request is ignored when it would create a cycle, that is when
    /// `new_parent` is `id` itself or lies in `id`'s subtree. It is also
    /// ignored when either handle is stale.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent
            && (!self.is_alive(p) || self.is_in_subtree(p, id))
        {
            return;
        }
        if let Some(parent) = self.node(id).and_then(|n| n.parent) {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is live if its slot exists and its generation matches the
    /// generation currently stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.generation())
            .unwrap_or(false)
    }

    /// Get the children of a node, or an empty slice if the handle is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Returns the parent of a node if live, or `None` for roots or stale handles.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Returns the label of a node if the handle is live.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.item.label.as_str())
    }

    /// Replace the label of a live node. No-op for stale handles.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) {
        if let Some(n) = self.node_mut(id) {
            n.item.label = label.into();
        }
    }

    /// Returns the geometry of a node if the handle is live.
    pub fn geometry(&self, id: NodeId) -> Option<&G> {
        self.node(id).map(|n| &n.item.geometry)
    }

    /// Mutable access to the geometry of a live node.
    pub fn geometry_mut(&mut self, id: NodeId) -> Option<&mut G> {
        self.node_mut(id).map(|n| &mut n.item.geometry)
    }

    /// Returns the flags of a node if the handle is live.
    pub fn flags(&self, id: NodeId) -> Option<ItemFlags> {
        self.node(id).map(|n| n.item.flags)
    }

    /// Replace the flags of a live node. No-op for stale handles.
    pub fn set_flags(&mut self, id: NodeId, flags: ItemFlags) {
        if let Some(n) = self.node_mut(id) {
            n.item.flags = flags;
        }
    }

    /// Iterate the live root nodes (nodes without a parent).
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| match n {
            Some(n) if n.parent.is_none() =>
            {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices by design."
                )]
                Some(NodeId::new(i as u32, n.generation))
            }
            _ => None,
        })
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns true if the scene has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- internals ---

    /// Returns true if `node` is `ancestor` or one of its descendants.
    fn is_in_subtree(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    fn node(&self, id: NodeId) -> Option<&Node<G>> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.generation() {
            return None;
        }
        Some(n)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<G>> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.generation() {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = Some(parent);
        }
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = None;
        }
    }
}

impl<G> Node<G> {
    fn new(generation: u32, item: Item<G>) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    fn item(label: &str) -> Item<RectGeometry> {
        Item::new(label, RectGeometry::new(Rect::new(0.0, 0.0, 1.0, 1.0)))
    }

    #[test]
    fn insert_links_children_in_order() {
        let mut scene = Scene::new();
        let root = scene.insert(None, item("root"));
        let a = scene.insert(Some(root), item("a"));
        let b = scene.insert(Some(root), item("b"));

        assert_eq!(scene.children_of(root), &[a, b]);
        assert_eq!(scene.parent_of(a), Some(root));
        assert_eq!(scene.parent_of(root), None);
        assert_eq!(scene.label(b), Some("b"));
    }

    #[test]
    fn liveness_insert_remove_reuse() {
        let mut scene = Scene::new();
        let root = scene.insert(None, item("root"));
        let a = scene.insert(Some(root), item("a"));

        assert!(scene.is_alive(root));
        assert!(scene.is_alive(a));

        // Remove child; handle becomes stale.
        scene.remove(a);
        assert!(!scene.is_alive(a));

        // Insert new child; might reuse the slot but the generation bumps.
        let b = scene.insert(Some(root), item("b"));
        assert!(scene.is_alive(b));
        assert!(!scene.is_alive(a));
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on reuse");
        }
    }

    #[test]
    fn remove_takes_whole_subtree() {
        let mut scene = Scene::new();
        let root = scene.insert(None, item("root"));
        let a = scene.insert(Some(root), item("a"));
        let c = scene.insert(Some(a), item("c"));
        let b = scene.insert(Some(root), item("b"));

        scene.remove(a);
        assert!(!scene.is_alive(a));
        assert!(!scene.is_alive(c), "descendants are removed too");
        assert!(scene.is_alive(b));
        assert_eq!(scene.children_of(root), &[b]);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn stale_handles_are_inert() {
        let mut scene = Scene::new();
        let n = scene.insert(None, item("n"));
        scene.remove(n);

        assert_eq!(scene.label(n), None);
        assert_eq!(scene.geometry(n), None);
        assert_eq!(scene.flags(n), None);
        assert_eq!(scene.parent_of(n), None);
        assert!(scene.children_of(n).is_empty());
        scene.remove(n); // no-op, must not panic
        scene.set_label(n, "renamed");
        scene.set_flags(n, ItemFlags::empty());
    }

    #[test]
    fn insert_under_stale_parent_becomes_root() {
        let mut scene = Scene::new();
        let p = scene.insert(None, item("p"));
        scene.remove(p);
        let orphan = scene.insert(Some(p), item("orphan"));
        assert_eq!(scene.parent_of(orphan), None);
        assert!(scene.roots().any(|r| r == orphan));
    }

    #[test]
    fn reparent_moves_subtree() {
        let mut scene = Scene::new();
        let root = scene.insert(None, item("root"));
        let a = scene.insert(Some(root), item("a"));
        let b = scene.insert(Some(root), item("b"));
        let c = scene.insert(Some(a), item("c"));

        scene.reparent(c, Some(b));
        assert_eq!(scene.parent_of(c), Some(b));
        assert_eq!(scene.children_of(a), &[]);
        assert_eq!(scene.children_of(b), &[c]);
    }

    #[test]
    fn reparent_refuses_cycles() {
        let mut scene = Scene::new();
        let root = scene.insert(None, item("root"));
        let a = scene.insert(Some(root), item("a"));
        let b = scene.insert(Some(a), item("b"));

        // Moving an ancestor under its descendant is refused.
        scene.reparent(root, Some(b));
        assert_eq!(scene.parent_of(root), None);
        // Self-parenting is refused.
        scene.reparent(a, Some(a));
        assert_eq!(scene.parent_of(a), Some(root));
    }

    #[test]
    fn reparent_to_none_detaches_into_root() {
        let mut scene = Scene::new();
        let root = scene.insert(None, item("root"));
        let a = scene.insert(Some(root), item("a"));

        scene.reparent(a, None);
        assert_eq!(scene.parent_of(a), None);
        assert!(scene.children_of(root).is_empty());
        let roots: Vec<NodeId> = scene.roots().collect();
        assert_eq!(roots, alloc::vec![root, a]);
    }

    #[test]
    fn label_and_flags_updates() {
        let mut scene = Scene::new();
        let n = scene.insert(None, item("old"));
        scene.set_label(n, "new");
        assert_eq!(scene.label(n), Some("new"));

        assert_eq!(scene.flags(n), Some(ItemFlags::default()));
        scene.set_flags(n, ItemFlags::VISIBLE);
        assert_eq!(scene.flags(n), Some(ItemFlags::VISIBLE));
    }

    #[test]
    fn geometry_mut_updates_in_place() {
        let mut scene = Scene::new();
        let n = scene.insert(None, item("n"));
        scene.geometry_mut(n).unwrap().bounds = Rect::new(0.0, 0.0, 5.0, 5.0);
        assert_eq!(
            scene.geometry(n).unwrap().bounds,
            Rect::new(0.0, 0.0, 5.0, 5.0)
        );
    }
}
