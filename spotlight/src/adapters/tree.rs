// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host adapter for Spotlight Tree.
//!
//! ## Feature
//!
//! Enable with `tree_adapter` (on by default).
//!
//! ## Notes
//!
//! [`TreeHost`] bubbles each event from its originator to the root of the tree. Listeners can
//! be attached per node; a listener returning [`Propagation::Stop`] ends bubbling at its node.
//! An event reaches the owner when the owner is on the travelled path, so listeners on the
//! owner itself cannot hide an event from it.
//! Every delivery is recorded with the path it actually travelled, which makes the host handy
//! for tests and demos.
//!
//! The focus marker is the [`ElementFlags::FOCUSED`] flag.

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;
use spotlight_focus::{Kind, SpotAttr, SpotTree};
use spotlight_tree::{ElementFlags, NodeId, Tree};

use crate::host::Host;
use crate::types::NavEvent;

/// Whether bubbling continues past a listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Keep bubbling.
    Continue,
    /// Stop at this node.
    Stop,
}

/// Per-node event listener.
pub type Listener = Box<dyn FnMut(NodeId, &NavEvent<NodeId>) -> Propagation>;

/// One bubbled event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    /// The event.
    pub event: NavEvent<NodeId>,
    /// Nodes visited, originator first.
    pub path: Vec<NodeId>,
}

/// [`Host`] over a [`Tree`].
pub struct TreeHost {
    tree: Tree,
    listeners: HashMap<NodeId, Vec<Listener>>,
    deliveries: Vec<Delivery>,
}

impl core::fmt::Debug for TreeHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TreeHost")
            .field("tree", &self.tree)
            .field("listeners", &self.listeners.len())
            .field("deliveries", &self.deliveries.len())
            .finish()
    }
}

impl TreeHost {
    /// Wrap `tree`.
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            listeners: HashMap::new(),
            deliveries: Vec::new(),
        }
    }

    /// The wrapped tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The wrapped tree, mutably.
    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Unwrap the tree.
    pub fn into_tree(self) -> Tree {
        self.tree
    }

    /// Call `listener` for every event bubbling through `node`.
    pub fn listen(
        &mut self,
        node: NodeId,
        listener: impl FnMut(NodeId, &NavEvent<NodeId>) -> Propagation + 'static,
    ) {
        self.listeners
            .entry(node)
            .or_default()
            .push(Box::new(listener));
    }

    /// Remove every listener of `node`.
    pub fn unlisten(&mut self, node: NodeId) {
        self.listeners.remove(&node);
    }

    /// Deliveries recorded so far, oldest first.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Take the recorded deliveries, leaving the log empty.
    pub fn take_deliveries(&mut self) -> Vec<Delivery> {
        core::mem::take(&mut self.deliveries)
    }

    /// Whether `node` carries the focus marker.
    pub fn is_marked(&self, node: NodeId) -> bool {
        self.tree
            .flags(node)
            .is_some_and(|f| f.contains(ElementFlags::FOCUSED))
    }

    fn update_flags(&mut self, node: NodeId, f: impl FnOnce(ElementFlags) -> ElementFlags) {
        if let Some(flags) = self.tree.flags(node) {
            self.tree.set_flags(node, f(flags));
        }
    }
}

impl SpotTree for TreeHost {
    type Node = NodeId;

    fn spot_attr(&self, node: NodeId) -> SpotAttr {
        SpotTree::spot_attr(&self.tree, node)
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent_of(node)
    }

    fn children_of(&self, node: NodeId) -> &[NodeId] {
        self.tree.children_of(node)
    }

    fn absolute_bounds(&self, node: NodeId) -> Rect {
        SpotTree::absolute_bounds(&self.tree, node)
    }
}

impl Host for TreeHost {
    fn kind_of(&self, node: NodeId) -> Kind {
        self.tree.kind_of(node).unwrap_or_default()
    }

    fn control_by_name(&self, owner: NodeId, name: &str) -> Option<NodeId> {
        self.tree.find_named(owner, name)
    }

    fn add_focus_marker(&mut self, node: NodeId) {
        self.update_flags(node, |f| f | ElementFlags::FOCUSED);
    }

    fn remove_focus_marker(&mut self, node: NodeId) {
        self.update_flags(node, |f| f - ElementFlags::FOCUSED);
    }

    fn bubble(&mut self, event: &NavEvent<NodeId>, owner: Option<NodeId>) -> bool {
        let mut path = Vec::new();
        for node in self.tree.path_to_root(event.originator) {
            path.push(node);
            let stop = self.listeners.get_mut(&node).is_some_and(|listeners| {
                let mut stop = false;
                for listener in listeners.iter_mut() {
                    if listener(node, event) == Propagation::Stop {
                        stop = true;
                        break;
                    }
                }
                stop
            });
            if stop {
                break;
            }
        }
        let reached = owner.is_some_and(|owner| path.contains(&owner));
        self.deliveries.push(Delivery {
            event: *event,
            path,
        });
        reached
    }
}
