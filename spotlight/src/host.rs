// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host integration trait.

use spotlight_focus::{Kind, SpotTree};

use crate::types::NavEvent;

/// The UI system the engine drives.
///
/// On top of the read-only [`SpotTree`] view, a host tags elements with a [`Kind`], resolves
/// named default controls, toggles the visual focus marker, and delivers events through its
/// own bubbling mechanism.
pub trait Host: SpotTree {
    /// Kind tag of `node`, used to pick behaviors.
    fn kind_of(&self, node: Self::Node) -> Kind;

    /// Control named `name` within `owner`.
    fn control_by_name(&self, owner: Self::Node, name: &str) -> Option<Self::Node>;

    /// Show the focus marker on `node`.
    fn add_focus_marker(&mut self, node: Self::Node);

    /// Hide the focus marker on `node`.
    fn remove_focus_marker(&mut self, node: Self::Node);

    /// Deliver `event` to its originator and bubble it towards the root.
    ///
    /// Returns whether delivery reached `owner`. An event that was stopped below the owner, or
    /// that originated outside its subtree, did not. With no owner the result is `false`.
    fn bubble(&mut self, event: &NavEvent<Self::Node>, owner: Option<Self::Node>) -> bool;
}
