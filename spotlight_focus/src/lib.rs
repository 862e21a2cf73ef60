// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight Focus: 5-way focus navigation primitives.
//!
//! This crate models remote-control style ("5-way") navigation as a combination of:
//! - **Directions** ([`Direction`]) requested by the user: up, down, left, right.
//! - **Per-element spotlight attributes** ([`SpotAttr`]) telling whether an element can
//!   receive focus, and whether it is a purely structural container.
//! - A **read-only view of the element tree** ([`SpotTree`]) supplied by the host, exposing
//!   parent/child links and absolute bounds.
//! - A **geometry scorer** ([`geometry`]) that decides which candidates lie in the requested
//!   direction and how eligible they are.
//! - A **tree navigator** ([`navigate`]) that flattens non-spottable intermediate nodes and
//!   picks the best adjacent sibling.
//!
//! ## Minimal example
//!
//! Two buttons side by side inside a plain (non-spottable) row:
//!
//! ```rust
//! use kurbo::Rect;
//! use spotlight_focus::{navigate, Direction, SpotAttr, SpotTree};
//!
//! struct Row {
//!     children: [usize; 2],
//!     bounds: [Rect; 3],
//! }
//!
//! impl SpotTree for Row {
//!     type Node = usize;
//!     fn spot_attr(&self, node: usize) -> SpotAttr {
//!         if node == 0 { SpotAttr::None } else { SpotAttr::Control }
//!     }
//!     fn parent_of(&self, node: usize) -> Option<usize> {
//!         (node != 0).then_some(0)
//!     }
//!     fn children_of(&self, node: usize) -> &[usize] {
//!         let children: &[usize] = if node == 0 { &self.children[..] } else { &[] };
//!         children
//!     }
//!     fn absolute_bounds(&self, node: usize) -> Rect {
//!         self.bounds[node]
//!     }
//! }
//!
//! let row = Row {
//!     children: [1, 2],
//!     bounds: [
//!         Rect::new(0.0, 0.0, 100.0, 20.0),
//!         Rect::new(0.0, 0.0, 40.0, 20.0),
//!         Rect::new(50.0, 0.0, 90.0, 20.0),
//!     ],
//! };
//!
//! assert_eq!(navigate::adjacent_control(&row, Direction::Right, 1), Some(2));
//! assert_eq!(navigate::adjacent_control(&row, Direction::Left, 2), Some(1));
//! // Nothing lies further to the right.
//! assert_eq!(navigate::adjacent_control(&row, Direction::Right, 2), None);
//! ```
//!
//! Geometry is expressed in terms of [`kurbo::Rect`]. All bounds handed out by a [`SpotTree`]
//! must share one absolute coordinate space; the navigator queries them on demand and never
//! caches them, since layout may change between two navigation requests.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Rect;

pub mod geometry;
pub mod navigate;

/// Direction of a 5-way navigation step.
///
/// Select is not a direction; it is handled by the focus engine on top of this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move towards smaller `y`.
    Up,
    /// Move towards larger `y`.
    Down,
    /// Move towards smaller `x`.
    Left,
    /// Move towards larger `x`.
    Right,
}

impl Direction {
    /// All four directions, in a stable order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Whether this direction moves along the vertical axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Spotlight attribute of an element.
///
/// An element is *spottable* when the attribute is truthy, that is [`SpotAttr::Control`] or
/// [`SpotAttr::Container`]. Containers are structural: their own children are considered for
/// focus when a pointer lands on them or when they are selected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpotAttr {
    /// Attribute absent or false: the element is never focused itself.
    #[default]
    None,
    /// A focusable control.
    Control,
    /// A focusable structural container.
    Container,
}

impl SpotAttr {
    /// Whether the element can receive directional focus.
    #[must_use]
    pub const fn is_spottable(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether the element is marked as a container.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Container)
    }
}

impl From<bool> for SpotAttr {
    fn from(spottable: bool) -> Self {
        if spottable { Self::Control } else { Self::None }
    }
}

/// Type tag of an element, used to pick per-kind behaviors.
///
/// This is a small, copyable handle; hosts typically use their widget type names
/// (for example `Kind("moon.Button")`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kind(pub &'static str);

impl Kind {
    /// The tag as a string slice.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// Read-only view of the host's element tree.
///
/// The tree is owned by the host; implementations only answer queries. Bounds must be absolute
/// (one coordinate space for every node).
pub trait SpotTree {
    /// Element handle. Cheap to copy and compare.
    type Node: Copy + Eq + Hash + Debug;

    /// Spotlight attribute of `node`.
    fn spot_attr(&self, node: Self::Node) -> SpotAttr;

    /// Raw parent of `node`, or `None` for a root.
    fn parent_of(&self, node: Self::Node) -> Option<Self::Node>;

    /// Raw children of `node` in tree order.
    fn children_of(&self, node: Self::Node) -> &[Self::Node];

    /// Absolute bounding box of `node`.
    fn absolute_bounds(&self, node: Self::Node) -> Rect;
}

impl<T: SpotTree + ?Sized> SpotTree for &T {
    type Node = T::Node;

    fn spot_attr(&self, node: Self::Node) -> SpotAttr {
        (**self).spot_attr(node)
    }

    fn parent_of(&self, node: Self::Node) -> Option<Self::Node> {
        (**self).parent_of(node)
    }

    fn children_of(&self, node: Self::Node) -> &[Self::Node] {
        (**self).children_of(node)
    }

    fn absolute_bounds(&self, node: Self::Node) -> Rect {
        (**self).absolute_bounds(node)
    }
}
