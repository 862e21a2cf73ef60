// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spottable-tree navigation over a host-owned [`SpotTree`].
//!
//! The host tree may contain any number of non-spottable intermediate nodes (layout rows,
//! panels, wrappers). The functions here look through them:
//!
//! - [`spottable_children`] flattens non-spottable descendants into one list, in tree order.
//! - [`spottable_parent`] walks up to the nearest spottable ancestor.
//! - [`siblings`] combines both to find the focus group an element belongs to.
//! - [`adjacent_control`] scores that group with the [`geometry`](crate::geometry) module.
//!
//! None of these functions fail: dead ends are empty lists or `None`.

use smallvec::SmallVec;

use crate::geometry::{adjacency_score, in_half_plane};
use crate::{Direction, SpotTree};

/// Spottable elements collected from a subtree.
pub type Spottables<K> = SmallVec<[K; 8]>;

/// Spottable siblings of an element and its position among them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Siblings<K> {
    /// Spottable children of the element's spottable parent, in tree order.
    pub siblings: Spottables<K>,
    /// Index of the element within `siblings`, if it is listed there.
    pub self_position: Option<usize>,
}

/// Whether `node` can receive focus.
pub fn is_spottable<T: SpotTree + ?Sized>(tree: &T, node: T::Node) -> bool {
    tree.spot_attr(node).is_spottable()
}

/// Collect the spottable descendants of `node`.
///
/// Each direct child is included when spottable; otherwise its own spottable descendants are
/// spliced in at its position. Spottable children are not descended into.
pub fn spottable_children<T: SpotTree + ?Sized>(tree: &T, node: T::Node) -> Spottables<T::Node> {
    let mut out = Spottables::new();
    collect_spottable(tree, node, &mut out);
    out
}

fn collect_spottable<T: SpotTree + ?Sized>(
    tree: &T,
    node: T::Node,
    out: &mut Spottables<T::Node>,
) {
    for &child in tree.children_of(node) {
        if is_spottable(tree, child) {
            out.push(child);
        } else {
            collect_spottable(tree, child, out);
        }
    }
}

/// First spottable descendant of `node` in tree order.
pub fn first_spottable_child<T: SpotTree + ?Sized>(tree: &T, node: T::Node) -> Option<T::Node> {
    for &child in tree.children_of(node) {
        if is_spottable(tree, child) {
            return Some(child);
        }
        if let Some(found) = first_spottable_child(tree, child) {
            return Some(found);
        }
    }
    None
}

/// Nearest spottable ancestor of `node`.
///
/// When no ancestor is spottable, returns the top-most ancestor reached, which is `node`
/// itself for a root.
pub fn spottable_parent<T: SpotTree + ?Sized>(tree: &T, node: T::Node) -> T::Node {
    let mut cur = node;
    while let Some(parent) = tree.parent_of(cur) {
        cur = parent;
        if is_spottable(tree, cur) {
            return cur;
        }
    }
    cur
}

/// Spottable siblings of `node`: the spottable children of its spottable parent.
pub fn siblings<T: SpotTree + ?Sized>(tree: &T, node: T::Node) -> Siblings<T::Node> {
    let parent = spottable_parent(tree, node);
    let siblings = spottable_children(tree, parent);
    let self_position = siblings.iter().position(|&s| s == node);
    Siblings {
        siblings,
        self_position,
    }
}

/// Best spottable sibling of `origin` in `direction`.
///
/// Candidates must lie strictly in the direction's half plane and score above zero. On equal
/// scores the first candidate in tree order wins.
pub fn adjacent_control<T: SpotTree + ?Sized>(
    tree: &T,
    direction: Direction,
    origin: T::Node,
) -> Option<T::Node> {
    let from = tree.absolute_bounds(origin);
    let mut best: Option<T::Node> = None;
    let mut best_score = 0.0;

    for candidate in siblings(tree, origin).siblings {
        if candidate == origin {
            continue;
        }
        let to = tree.absolute_bounds(candidate);
        if !in_half_plane(direction, from, to) {
            continue;
        }
        let score = adjacency_score(direction, from, to);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    best
}
