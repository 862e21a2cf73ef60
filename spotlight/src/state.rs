// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element state owned by the engine.
//!
//! Each element that has ever been current gets a [`StateBag`]: a small typed key/value store
//! behaviors can use to keep navigation state (for example the last selected row of a list).
//! Bags live in a side table keyed by element handle, so the host tree never sees them.

use alloc::boxed::Box;
use core::any::Any;
use core::hash::Hash;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

/// Typed key/value store attached to one element.
#[derive(Default)]
pub struct StateBag {
    values: HashMap<&'static str, Box<dyn Any>>,
}

impl core::fmt::Debug for StateBag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}

impl StateBag {
    /// Store `value` under `key`, replacing anything stored there.
    pub fn set<T: 'static>(&mut self, key: &'static str, value: T) {
        self.values.insert(key, Box::new(value));
    }

    /// Value stored under `key`, if it has type `T`.
    pub fn get<T: 'static>(&self, key: &'static str) -> Option<&T> {
        self.values.get(key)?.downcast_ref::<T>()
    }

    /// Mutable value stored under `key`, if it has type `T`.
    pub fn get_mut<T: 'static>(&mut self, key: &'static str) -> Option<&mut T> {
        self.values.get_mut(key)?.downcast_mut::<T>()
    }

    /// Value under `key`, inserting `init()` first when absent or of another type.
    pub fn remember<T: 'static>(
        &mut self,
        key: &'static str,
        init: impl FnOnce() -> T,
    ) -> Option<&mut T> {
        let slot = match self.values.entry(key) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                if !slot.is::<T>() {
                    *slot = Box::new(init());
                }
                slot
            }
            Entry::Vacant(entry) => entry.insert(Box::new(init())),
        };
        slot.downcast_mut::<T>()
    }

    /// Remove and return the value under `key`, if it has type `T`.
    pub fn take<T: 'static>(&mut self, key: &'static str) -> Option<T> {
        if !self.values.get(key)?.is::<T>() {
            return None;
        }
        self.values.remove(key)?.downcast::<T>().ok().map(|b| *b)
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Side table of [`StateBag`]s keyed by element.
pub struct ElementStates<K> {
    bags: HashMap<K, StateBag>,
}

impl<K: core::fmt::Debug> core::fmt::Debug for ElementStates<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.bags.iter()).finish()
    }
}

impl<K> Default for ElementStates<K> {
    fn default() -> Self {
        Self {
            bags: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> ElementStates<K> {
    /// Bag for `element`, created empty when missing.
    pub fn ensure(&mut self, element: K) -> &mut StateBag {
        self.bags.entry(element).or_default()
    }

    /// Bag for `element`, if it exists.
    pub fn get(&self, element: K) -> Option<&StateBag> {
        self.bags.get(&element)
    }

    /// Drop the bag of `element`. Returns whether one existed.
    pub fn forget(&mut self, element: K) -> bool {
        self.bags.remove(&element).is_some()
    }

    /// Number of elements with a bag.
    pub fn len(&self) -> usize {
        self.bags.len()
    }

    /// Whether no element has a bag.
    pub fn is_empty(&self) -> bool {
        self.bags.is_empty()
    }
}
