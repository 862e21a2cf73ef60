// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-kind behaviors and their registry.
//!
//! A [`Behavior`] lets a widget kind intercept spotlight events before the engine's default
//! handling runs. Every handler defaults to [`Outcome::Continue`], so a behavior only overrides
//! the events it cares about; returning [`Outcome::PreventDefault`] skips the default handling
//! for that one event.
//!
//! ## Resolution
//!
//! [`BehaviorRegistry::resolve`] picks the behavior for an element from its [`Kind`] and
//! [`SpotAttr`]:
//!
//! 1. Containers ([`SpotAttr::Container`]) get the container behavior, if one is registered.
//! 2. Otherwise the element's kind lineage is walked from the kind itself towards its
//!    ancestors (declared with [`BehaviorRegistry::declare_kind`]); the first kind with a
//!    registered behavior wins, so the most specific behavior is used.
//!
//! Results (including "no behavior") are cached per kind until the registry changes.

use alloc::rc::Rc;

use hashbrown::HashMap;
use spotlight_focus::{Kind, SpotAttr};

use crate::engine::Spotlight;
use crate::error::{Result, SpotlightError};
use crate::host::Host;
use crate::types::{EventKind, NavEvent, Outcome};

/// Handlers a widget kind can provide for spotlight events.
///
/// Handlers receive the engine and the host, so they may move focus themselves (for example
/// with [`Spotlight::spot`]) before deciding whether the default should still run.
#[expect(unused_variables, reason = "Default handlers ignore their arguments.")]
pub trait Behavior<H: Host> {
    /// An element is about to become current.
    fn on_focus(
        &self,
        spotlight: &mut Spotlight<H>,
        host: &mut H,
        event: &NavEvent<H::Node>,
    ) -> Outcome {
        Outcome::Continue
    }

    /// The current element changed.
    fn on_focused(
        &self,
        spotlight: &mut Spotlight<H>,
        host: &mut H,
        event: &NavEvent<H::Node>,
    ) -> Outcome {
        Outcome::Continue
    }

    /// The current element is losing focus.
    fn on_blur(
        &self,
        spotlight: &mut Spotlight<H>,
        host: &mut H,
        event: &NavEvent<H::Node>,
    ) -> Outcome {
        Outcome::Continue
    }

    /// Left was pressed.
    fn on_left(
        &self,
        spotlight: &mut Spotlight<H>,
        host: &mut H,
        event: &NavEvent<H::Node>,
    ) -> Outcome {
        Outcome::Continue
    }

    /// Right was pressed.
    fn on_right(
        &self,
        spotlight: &mut Spotlight<H>,
        host: &mut H,
        event: &NavEvent<H::Node>,
    ) -> Outcome {
        Outcome::Continue
    }

    /// Up was pressed.
    fn on_up(
        &self,
        spotlight: &mut Spotlight<H>,
        host: &mut H,
        event: &NavEvent<H::Node>,
    ) -> Outcome {
        Outcome::Continue
    }

    /// Down was pressed.
    fn on_down(
        &self,
        spotlight: &mut Spotlight<H>,
        host: &mut H,
        event: &NavEvent<H::Node>,
    ) -> Outcome {
        Outcome::Continue
    }

    /// Enter/OK was pressed.
    fn on_select(
        &self,
        spotlight: &mut Spotlight<H>,
        host: &mut H,
        event: &NavEvent<H::Node>,
    ) -> Outcome {
        Outcome::Continue
    }

    /// The pointer moved over the element.
    fn on_point(
        &self,
        spotlight: &mut Spotlight<H>,
        host: &mut H,
        event: &NavEvent<H::Node>,
    ) -> Outcome {
        Outcome::Continue
    }
}

/// Call the handler of `behavior` matching `event.kind`.
pub(crate) fn invoke<H: Host>(
    behavior: &dyn Behavior<H>,
    spotlight: &mut Spotlight<H>,
    host: &mut H,
    event: &NavEvent<H::Node>,
) -> Outcome {
    match event.kind {
        EventKind::Focus => behavior.on_focus(spotlight, host, event),
        EventKind::Focused => behavior.on_focused(spotlight, host, event),
        EventKind::Blur => behavior.on_blur(spotlight, host, event),
        EventKind::Left => behavior.on_left(spotlight, host, event),
        EventKind::Right => behavior.on_right(spotlight, host, event),
        EventKind::Up => behavior.on_up(spotlight, host, event),
        EventKind::Down => behavior.on_down(spotlight, host, event),
        EventKind::Select => behavior.on_select(spotlight, host, event),
        EventKind::Point => behavior.on_point(spotlight, host, event),
        EventKind::Activate => Outcome::Continue,
    }
}

/// Registry of behaviors keyed by target kind.
pub struct BehaviorRegistry<H: Host> {
    parents: HashMap<Kind, Kind>,
    by_kind: HashMap<Kind, Rc<dyn Behavior<H>>>,
    container: Option<Rc<dyn Behavior<H>>>,
    cache: HashMap<(Kind, bool), Option<Rc<dyn Behavior<H>>>>,
}

impl<H: Host> core::fmt::Debug for BehaviorRegistry<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BehaviorRegistry")
            .field("kinds", &self.by_kind.keys())
            .field("has_container", &self.container.is_some())
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl<H: Host> Default for BehaviorRegistry<H> {
    fn default() -> Self {
        Self {
            parents: HashMap::new(),
            by_kind: HashMap::new(),
            container: None,
            cache: HashMap::new(),
        }
    }
}

impl<H: Host> BehaviorRegistry<H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `kind` derives from `parent`.
    ///
    /// Behaviors registered for `parent` (or any of its ancestors) apply to `kind` unless a
    /// more specific one exists.
    pub fn declare_kind(&mut self, kind: Kind, parent: Kind) {
        self.parents.insert(kind, parent);
        self.cache.clear();
    }

    /// Declared parent of `kind`.
    pub fn parent_kind(&self, kind: Kind) -> Option<Kind> {
        self.parents.get(&kind).copied()
    }

    /// `kind` followed by its declared ancestors, nearest first.
    ///
    /// Stops early if the declarations contain a cycle.
    pub fn lineage(&self, kind: Kind) -> impl Iterator<Item = Kind> + '_ {
        let mut next = Some(kind);
        let mut remaining = self.parents.len() + 1;
        core::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            let cur = next?;
            next = self.parent_kind(cur);
            Some(cur)
        })
    }

    /// Register `behavior` for elements of kind `target` and its descendants.
    pub fn register<B: Behavior<H> + 'static>(&mut self, target: Kind, behavior: B) -> Result<()> {
        if self.by_kind.contains_key(&target) {
            return Err(SpotlightError::DuplicateBehavior(target));
        }
        self.by_kind.insert(target, Rc::new(behavior));
        self.cache.clear();
        Ok(())
    }

    /// Register the behavior used for container elements.
    pub fn register_container<B: Behavior<H> + 'static>(&mut self, behavior: B) -> Result<()> {
        if self.container.is_some() {
            return Err(SpotlightError::DuplicateContainerBehavior);
        }
        self.container = Some(Rc::new(behavior));
        self.cache.clear();
        Ok(())
    }

    /// Remove the behavior registered for `target`. Returns whether one existed.
    pub fn unregister(&mut self, target: Kind) -> bool {
        let removed = self.by_kind.remove(&target).is_some();
        if removed {
            self.cache.clear();
        }
        removed
    }

    /// Whether a behavior is registered for exactly `target`.
    pub fn contains(&self, target: Kind) -> bool {
        self.by_kind.contains_key(&target)
    }

    /// Whether the resolution for (`kind`, `spot`) is cached.
    pub fn is_cached(&self, kind: Kind, spot: SpotAttr) -> bool {
        self.cache.contains_key(&(kind, spot.is_container()))
    }

    /// Behavior applying to an element of `kind` with attribute `spot`.
    pub fn resolve(&mut self, kind: Kind, spot: SpotAttr) -> Option<Rc<dyn Behavior<H>>> {
        let key = (kind, spot.is_container());
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }
        let found = if spot.is_container() {
            self.container.clone()
        } else {
            self.lineage(kind)
                .find_map(|k| self.by_kind.get(&k))
                .cloned()
        };
        self.cache.insert(key, found.clone());
        found
    }
}
