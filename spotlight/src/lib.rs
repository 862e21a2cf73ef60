// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight: 5-way focus navigation for remote-control driven interfaces.
//!
//! ## Overview
//!
//! A TV remote has four arrows and an OK key and no pointer (or one that comes and goes).
//! Given the element that currently has focus and a requested direction, this crate decides
//! which element gets focus next and applies the side effects of a focus change: the visual
//! marker, the blur/focus event pair, and a synthetic activation when OK is pressed on a leaf.
//!
//! The pieces:
//!
//! - [`Spotlight`]: the focus engine. One per owner (usually the application root).
//! - [`Host`]: what the engine needs from the UI system. It extends the read-only
//!   [`SpotTree`] view with kind tags, name lookup, focus markers and event bubbling.
//! - [`Behavior`] and [`BehaviorRegistry`]: per-kind hooks that can intercept navigation
//!   events before the default handling runs.
//! - [`KeyMap`] and [`SpotlightConfig`]: key bindings, marker toggling, and key-repeat
//!   acceleration settings.
//! - [`adapters::tree::TreeHost`] (`tree_adapter` feature): a ready-made host over
//!   [`spotlight_tree::Tree`].
//!
//! Geometry and tree walking live in [`spotlight_focus`] (re-exported as [`navigate`] and
//! [`geometry`]); key repeat lives in [`spotlight_event_state`].
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "tree_adapter")]
//! # {
//! use kurbo::Rect;
//! use spotlight::adapters::tree::TreeHost;
//! use spotlight::{RawEvent, Spotlight};
//! use spotlight_tree::{Element, Tree};
//!
//! let mut tree = Tree::new();
//! let app = tree.insert(None, Element::new(Rect::new(0.0, 0.0, 400.0, 200.0)));
//! let ok = tree.insert(
//!     Some(app),
//!     Element::control(Rect::new(10.0, 10.0, 110.0, 50.0)).with_name("ok"),
//! );
//! let cancel = tree.insert(Some(app), Element::control(Rect::new(150.0, 10.0, 250.0, 50.0)));
//! let mut host = TreeHost::new(tree);
//!
//! let mut spotlight = Spotlight::new();
//! assert!(spotlight.initialize(&mut host, app, Some("ok")));
//! assert_eq!(spotlight.current(), Some(ok));
//!
//! // Right arrow pressed at t = 0 ms.
//! spotlight.on_event(&mut host, RawEvent::key_down(39), 0);
//! assert_eq!(spotlight.current(), Some(cancel));
//! assert!(host.is_marked(cancel));
//! assert!(!host.is_marked(ok));
//!
//! // Holding the key repeats after one second.
//! assert_eq!(spotlight.next_repeat_deadline(), Some(1000));
//! spotlight.on_event(&mut host, RawEvent::key_up(39), 400);
//! assert_eq!(spotlight.next_repeat_deadline(), None);
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tree_adapter` (default): the [`adapters::tree`] host.
//!
//! ## Logging
//!
//! The engine logs through the [`log`] facade: a warning when it is attached to a new owner
//! without being deregistered, debug records for attach/detach, focus changes and boundary
//! fallbacks, and trace records for every observed event and key repeat. Install any logger
//! to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod behavior;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod intercept;
pub mod keymap;
pub mod state;
pub mod types;

pub use behavior::{Behavior, BehaviorRegistry};
pub use config::SpotlightConfig;
pub use engine::Spotlight;
pub use error::{Result, SpotlightError};
pub use host::Host;
pub use keymap::{Command, KeyMap};
pub use types::{EventKind, NavEvent, Outcome, RawEvent, RawKind};

pub use spotlight_focus::{Direction, Kind, SpotAttr, SpotTree, geometry, navigate};
