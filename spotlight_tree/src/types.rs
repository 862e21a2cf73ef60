// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element tree: node identifiers, flags, and per-element data.

use alloc::string::String;

use kurbo::Rect;
use spotlight_focus::{Kind, SpotAttr};

/// Identifier for a node in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element state flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element carries the focus marker ("spotlight" visual state).
        const FOCUSED = 0b0000_0001;
    }
}

/// Per-element data.
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Bounds relative to the parent's origin (the parent's `x0`/`y0`).
    pub local_bounds: Rect,
    /// Spotlight attribute.
    pub spot: SpotAttr,
    /// Type tag used to pick behaviors.
    pub kind: Kind,
    /// Name, unique among the descendants of an owner, used to look up default controls.
    pub name: Option<String>,
    /// State flags.
    pub flags: ElementFlags,
}

impl Element {
    /// Plain, non-spottable element.
    pub fn new(local_bounds: Rect) -> Self {
        Self {
            local_bounds,
            ..Self::default()
        }
    }

    /// Spottable control.
    pub fn control(local_bounds: Rect) -> Self {
        Self::new(local_bounds).with_spot(SpotAttr::Control)
    }

    /// Spottable container.
    pub fn container(local_bounds: Rect) -> Self {
        Self::new(local_bounds).with_spot(SpotAttr::Container)
    }

    /// Set the spotlight attribute.
    #[must_use]
    pub fn with_spot(mut self, spot: SpotAttr) -> Self {
        self.spot = spot;
        self
    }

    /// Set the kind tag.
    #[must_use]
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the element name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
