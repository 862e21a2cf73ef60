// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, queries.

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use spotlight_focus::{Kind, SpotAttr, SpotTree};

use crate::types::{Element, ElementFlags, NodeId};

/// Generational element tree.
///
/// Identifiers stay valid until their node is removed; a removed slot is reused with a bumped
/// generation so stale identifiers never alias a new node. Every query taking a stale
/// identifier returns `None` (or an empty slice) and every update ignores it.
#[derive(Default)]
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts the node as a root.
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let node = |generation| Node {
            generation,
            parent: None,
            children: Vec::new(),
            element,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(node(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(node(generation)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices."
        )]
        let id = NodeId::new(idx as u32, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node and its subtree.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).and_then(|n| n.parent) {
            self.unlink_parent(id, parent);
        }
        self.free_subtree(id);
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = self
            .nodes
            .get_mut(id.idx())
            .and_then(Option::take)
            .map(|n| n.children)
            .unwrap_or_default();
        self.free_list.push(id.idx());
        for child in children {
            self.free_subtree(child);
        }
    }

    /// Move `id` under `new_parent` (appended last), or make it a root.
    ///
    /// Ignored when either node is stale or when `new_parent` lies inside the subtree of `id`.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent
            && (!self.is_alive(p) || self.is_ancestor_or_self(id, p))
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

    /// Update local bounds.
    pub fn set_local_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(n) = self.node_mut(id) {
            n.element.local_bounds = bounds;
        }
    }

    /// Update the spotlight attribute.
    pub fn set_spot(&mut self, id: NodeId, spot: SpotAttr) {
        if let Some(n) = self.node_mut(id) {
            n.element.spot = spot;
        }
    }

    /// Update the kind tag.
    pub fn set_kind(&mut self, id: NodeId, kind: Kind) {
        if let Some(n) = self.node_mut(id) {
            n.element.kind = kind;
        }
    }

    /// Update element flags.
    pub fn set_flags(&mut self, id: NodeId, flags: ElementFlags) {
        if let Some(n) = self.node_mut(id) {
            n.element.flags = flags;
        }
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.1)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Whether the tree has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element data of a live node.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id).map(|n| &n.element)
    }

    /// Spotlight attribute of a live node.
    pub fn spot_attr(&self, id: NodeId) -> Option<SpotAttr> {
        self.node(id).map(|n| n.element.spot)
    }

    /// Kind tag of a live node.
    pub fn kind_of(&self, id: NodeId) -> Option<Kind> {
        self.node(id).map(|n| n.element.kind)
    }

    /// Flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<ElementFlags> {
        self.node(id).map(|n| n.element.flags)
    }

    /// Returns the parent of a live node, or `None` for roots and stale identifiers.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children of a live node in insertion order. Empty for stale identifiers.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Live root nodes in slot order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| match n {
            Some(n) if n.parent.is_none() => {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices."
                )]
                Some(NodeId::new(i as u32, n.generation))
            }
            _ => None,
        })
    }

    /// Absolute bounds of a live node: its local bounds offset by every ancestor's origin.
    pub fn absolute_bounds(&self, id: NodeId) -> Option<Rect> {
        let node = self.node(id)?;
        let mut offset = Vec2::ZERO;
        let mut cur = node.parent;
        while let Some(p) = cur {
            let parent = self.node(p)?;
            offset += parent.element.local_bounds.origin().to_vec2();
            cur = parent.parent;
        }
        Some(node.element.local_bounds + offset)
    }

    /// First node named `name` below `scope`, in depth-first order. `scope` itself is skipped.
    pub fn find_named(&self, scope: NodeId, name: &str) -> Option<NodeId> {
        for &child in self.children_of(scope) {
            if self.element(child).and_then(|e| e.name.as_deref()) == Some(name) {
                return Some(child);
            }
            if let Some(found) = self.find_named(child, name) {
                return Some(found);
            }
        }
        None
    }

    /// Path from `id` up to its root, both inclusive. Empty for stale identifiers.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cur = self.is_alive(id).then_some(id);
        while let Some(n) = cur {
            path.push(n);
            cur = self.parent_of(n);
        }
        path
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.parent_of(n);
        }
        false
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .filter(|n| n.generation == id.1)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes
            .get_mut(id.idx())
            .and_then(|slot| slot.as_mut())
            .filter(|n| n.generation == id.1)
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
            p.children.retain(|&c| c != id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = None;
        }
    }
}

impl SpotTree for Tree {
    type Node = NodeId;

    fn spot_attr(&self, node: NodeId) -> SpotAttr {
        Self::spot_attr(self, node).unwrap_or_default()
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        Self::parent_of(self, node)
    }

    fn children_of(&self, node: NodeId) -> &[NodeId] {
        Self::children_of(self, node)
    }

    fn absolute_bounds(&self, node: NodeId) -> Rect {
        Self::absolute_bounds(self, node).unwrap_or(Rect::ZERO)
    }
}
