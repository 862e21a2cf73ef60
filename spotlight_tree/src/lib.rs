// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight Tree: a small generational element tree for 5-way navigation hosts.
//!
//! - Represents a hierarchy of elements, each with bounds relative to its parent, a spotlight
//!   attribute ([`SpotAttr`](spotlight_focus::SpotAttr)), a [`Kind`](spotlight_focus::Kind)
//!   tag, an optional name, and [`ElementFlags`].
//! - Implements [`SpotTree`](spotlight_focus::SpotTree) so the navigator and the focus engine
//!   can walk it directly.
//! - Absolute bounds are derived on request by summing ancestor origins; nothing is cached, so
//!   moving a parent moves its whole subtree immediately.
//!
//! ## Not a layout engine
//!
//! This crate does not measure or arrange anything. Upstream code computes positions and sizes
//! and writes them here with [`Tree::set_local_bounds`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use spotlight_focus::{Direction, SpotAttr, navigate};
//! use spotlight_tree::{Element, Tree};
//!
//! let mut tree = Tree::new();
//! let row = tree.insert(None, Element::new(Rect::new(0.0, 100.0, 300.0, 140.0)));
//! let a = tree.insert(Some(row), Element::control(Rect::new(0.0, 0.0, 90.0, 40.0)));
//! let b = tree.insert(Some(row), Element::control(Rect::new(100.0, 0.0, 190.0, 40.0)));
//!
//! // Children are positioned relative to the row.
//! assert_eq!(tree.absolute_bounds(b), Some(Rect::new(100.0, 100.0, 190.0, 140.0)));
//! assert_eq!(tree.spot_attr(row), Some(SpotAttr::None));
//! assert_eq!(navigate::adjacent_control(&tree, Direction::Right, a), Some(b));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::Tree;
pub use types::{Element, ElementFlags, NodeId};
