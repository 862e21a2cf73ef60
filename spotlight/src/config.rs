// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use spotlight_event_state::accelerator::RepeatSchedule;

use crate::keymap::KeyMap;

/// Configuration for a [`Spotlight`](crate::Spotlight) engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpotlightConfig {
    /// Add and remove the focus marker on elements. When false the engine never asks the
    /// host to change marker state.
    pub use_visuals: bool,
    /// Key bindings for 5-way commands.
    pub key_map: KeyMap,
    /// Key repeat acceleration.
    pub repeat: RepeatSchedule,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            use_visuals: true,
            key_map: KeyMap::default(),
            repeat: RepeatSchedule::default(),
        }
    }
}
