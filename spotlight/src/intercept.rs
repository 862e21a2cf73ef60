// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner dispatch hook.
//!
//! While attached, every event the engine dispatches reaches the host first (bubbling from the
//! originator to the root). Only events whose delivery reached the owner are then observed by
//! the engine itself. The [`Interceptor`] records which owner the hook is installed on;
//! uninstalling it restores plain host dispatch.

/// Installed-hook record for one owner.
#[derive(Clone, Debug)]
pub struct Interceptor<K> {
    owner: Option<K>,
    observed: u64,
}

impl<K> Default for Interceptor<K> {
    fn default() -> Self {
        Self {
            owner: None,
            observed: 0,
        }
    }
}

impl<K: Copy + Eq> Interceptor<K> {
    /// Install the hook on `owner`, replacing any previous installation.
    ///
    /// Returns the owner it was previously installed on.
    pub fn install(&mut self, owner: K) -> Option<K> {
        self.owner.replace(owner)
    }

    /// Remove the hook. Returns the owner it was installed on.
    pub fn uninstall(&mut self) -> Option<K> {
        self.owner.take()
    }

    /// Owner the hook is installed on.
    pub fn owner(&self) -> Option<K> {
        self.owner
    }

    /// Whether the hook is installed.
    pub fn is_installed(&self) -> bool {
        self.owner.is_some()
    }

    /// Count one event passing through the hook. Returns whether the engine should observe it.
    pub fn observe(&mut self) -> bool {
        if self.is_installed() {
            self.observed = self.observed.wrapping_add(1);
            true
        } else {
            false
        }
    }

    /// Number of events observed since creation.
    pub fn observed(&self) -> u64 {
        self.observed
    }
}
