// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Spotlight crates.
//!
//! Each adapter is gated behind a feature flag so the engine itself only depends on the
//! [`Host`](crate::Host) trait.
//!
//! ## Available Adapters
//!
//! - [`tree`] (`tree_adapter` feature): a [`Host`](crate::Host) over [`spotlight_tree::Tree`]
//!   that records every bubbled event and supports per-node listeners.

#[cfg(feature = "tree_adapter")]
pub mod tree;
