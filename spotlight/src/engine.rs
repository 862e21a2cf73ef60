// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus engine.
//!
//! [`Spotlight`] owns all navigation state for one owner (usually an application root):
//! the current element, the pointer-mode flag, the last events seen, the behavior registry,
//! the key accelerator, and per-element state bags. The host tree is passed into every call
//! and never stored.
//!
//! ## States
//!
//! - **Idle**: no owner. Raw input is ignored.
//! - **Attached, pointer mode**: the last input was a pointer move.
//! - **Attached, key mode**: the last input was a key.
//!
//! [`Spotlight::initialize`] attaches, [`Spotlight::deregister`] detaches.
//!
//! ## Event flow
//!
//! Every spotlight event goes through [`Spotlight::dispatch_event`]: the host bubbles it from
//! the originator to the root. If the owner was on that path and no listener below it stopped
//! the event, the engine observes it in [`Spotlight::on_spotlight_event`]. There a registered
//! [`Behavior`](crate::Behavior) gets the first word; unless it prevents the default, the
//! built-in handling runs:
//!
//! | event | default handling |
//! |---|---|
//! | Focus | make the originator current, then dispatch Focused |
//! | Focused | nothing |
//! | Blur | remove the focus marker from the originator |
//! | Left/Right/Up/Down | spot the adjacent control, or the spottable parent at a boundary |
//! | Select | activate a leaf, or spot the first spottable child |
//! | Point | spot the originator unless it is a container |
//! | Activate | nothing |
//!
//! ## Key repeat
//!
//! Key presses go through an [`Accelerator`]. The engine never schedules timers: after each
//! call, ask [`Spotlight::next_repeat_deadline`] when the next repeat is due and call
//! [`Spotlight::tick`] at (or after) that time.

use spotlight_event_state::accelerator::Accelerator;
use spotlight_focus::{Direction, navigate};

use crate::behavior::{self, BehaviorRegistry};
use crate::config::SpotlightConfig;
use crate::error::{Result, SpotlightError};
use crate::host::Host;
use crate::intercept::Interceptor;
use crate::keymap::Command;
use crate::state::{ElementStates, StateBag};
use crate::types::{EventKind, NavEvent, Outcome, RawEvent, RawKind};

/// 5-way focus engine for one owner.
pub struct Spotlight<H: Host> {
    config: SpotlightConfig,
    interceptor: Interceptor<H::Node>,
    current: Option<H::Node>,
    pointer_mode: bool,
    last_event: Option<NavEvent<H::Node>>,
    last_5way_event: Option<NavEvent<H::Node>>,
    registry: BehaviorRegistry<H>,
    accelerator: Accelerator<RawEvent<H::Node>>,
    states: ElementStates<H::Node>,
}

impl<H: Host> core::fmt::Debug for Spotlight<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Spotlight")
            .field("owner", &self.interceptor.owner())
            .field("current", &self.current)
            .field("pointer_mode", &self.pointer_mode)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl<H: Host> Default for Spotlight<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> Spotlight<H> {
    /// Create an idle engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SpotlightConfig::default())
    }

    /// Create an idle engine with `config`.
    pub fn with_config(config: SpotlightConfig) -> Self {
        let accelerator = Accelerator::with_schedule(config.repeat);
        Self {
            config,
            interceptor: Interceptor::default(),
            current: None,
            pointer_mode: false,
            last_event: None,
            last_5way_event: None,
            registry: BehaviorRegistry::new(),
            accelerator,
            states: ElementStates::default(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SpotlightConfig {
        &self.config
    }

    /// Turn focus marker updates on or off.
    pub fn set_use_visuals(&mut self, use_visuals: bool) {
        self.config.use_visuals = use_visuals;
    }

    /// Attach to `owner` and spot its default control.
    ///
    /// If `default_control` names a control of `owner` it is spotted, otherwise `owner` itself
    /// (which descends to its first spottable child when it is not spottable). Attaching while
    /// already attached detaches from the previous owner first.
    ///
    /// Returns whether an element received focus.
    pub fn initialize(
        &mut self,
        host: &mut H,
        owner: H::Node,
        default_control: Option<&str>,
    ) -> bool {
        if let Some(previous) = self.interceptor.owner() {
            if previous == owner {
                log::debug!("re-attaching to {owner:?}");
            } else {
                log::warn!("attached to {owner:?} before {previous:?} was deregistered");
            }
            self.detach();
        }
        self.current = None;
        self.interceptor.install(owner);
        log::debug!("attached to {owner:?}");

        let target = default_control
            .and_then(|name| host.control_by_name(owner, name))
            .unwrap_or(owner);
        self.spot_node(host, target, None)
    }

    /// Detach from `owner`.
    ///
    /// Restores plain host dispatch, stops any key repeat and clears the current element.
    pub fn deregister(&mut self, owner: H::Node) -> Result<()> {
        match self.interceptor.owner() {
            None => Err(SpotlightError::NotAttached),
            Some(attached) if attached != owner => Err(SpotlightError::OwnerMismatch),
            Some(_) => {
                self.detach();
                Ok(())
            }
        }
    }

    fn detach(&mut self) {
        if let Some(owner) = self.interceptor.uninstall() {
            log::debug!("detached from {owner:?}");
        }
        self.accelerator.stop();
        self.current = None;
    }

    /// Owner the engine is attached to.
    pub fn owner(&self) -> Option<H::Node> {
        self.interceptor.owner()
    }

    /// Whether the engine is attached.
    pub fn is_attached(&self) -> bool {
        self.interceptor.is_installed()
    }

    /// Feed a raw input event. Ignored while idle.
    ///
    /// Pointer moves switch to pointer mode and dispatch Point against the spottable element
    /// under the pointer. Key edges go through the accelerator; a press that fires right away
    /// is handled by [`Spotlight::on_key_event`].
    pub fn on_event(&mut self, host: &mut H, raw: RawEvent<H::Node>, now_ms: u64) {
        if !self.is_attached() {
            return;
        }
        match raw.kind {
            RawKind::MouseMove => {
                self.pointer_mode = true;
                if let Some(target) = raw.target {
                    let target = if navigate::is_spottable(&*host, target) {
                        target
                    } else {
                        navigate::spottable_parent(&*host, target)
                    };
                    self.dispatch_event(host, NavEvent::new(EventKind::Point, target));
                }
            }
            RawKind::KeyDown => {
                if let Some(code) = raw.key_code
                    && let Some(fired) = self.accelerator.key_down(code, raw, now_ms)
                {
                    self.on_key_event(host, fired);
                }
            }
            RawKind::KeyUp => self.accelerator.key_up(),
            RawKind::Other => {}
        }
    }

    /// Fire a due key repeat. Returns whether one fired.
    pub fn tick(&mut self, host: &mut H, now_ms: u64) -> bool {
        match self.accelerator.poll(now_ms) {
            Some(repeat) => {
                self.on_key_event(host, repeat);
                true
            }
            None => false,
        }
    }

    /// When [`Spotlight::tick`] should be called next, if a key is held.
    pub fn next_repeat_deadline(&self) -> Option<u64> {
        self.accelerator.next_deadline()
    }

    /// Handle one (possibly repeated) key press.
    ///
    /// Leaves pointer mode and dispatches the bound command against the current element.
    /// Unbound keys, and keys pressed while nothing is current, are ignored.
    pub fn on_key_event(&mut self, host: &mut H, raw: RawEvent<H::Node>) {
        self.pointer_mode = false;
        let Some(code) = raw.key_code else {
            return;
        };
        let Some(command) = self.config.key_map.command(code) else {
            return;
        };
        let Some(current) = self.current else {
            log::debug!("key {code} ignored: nothing is spotted");
            return;
        };
        let kind = match command {
            Command::Select => EventKind::Select,
            Command::Move(direction) => EventKind::from_direction(direction),
        };
        self.dispatch_event(host, NavEvent::new(kind, current).with_key_code(code));
    }

    /// Dispatch `event` through the host, then observe it if delivery reached the owner.
    pub fn dispatch_event(&mut self, host: &mut H, event: NavEvent<H::Node>) {
        let reached = host.bubble(&event, self.interceptor.owner());
        if !reached {
            log::trace!("{:?} on {:?} did not reach the owner", event.kind, event.originator);
            return;
        }
        if self.interceptor.observe() {
            self.on_spotlight_event(host, event);
        }
    }

    /// Observe a spotlight event that reached the owner.
    pub fn on_spotlight_event(&mut self, host: &mut H, event: NavEvent<H::Node>) {
        log::trace!("{:?} on {:?}", event.kind, event.originator);
        self.last_event = Some(event);

        if self.delegate(host, &event) == Outcome::PreventDefault {
            return;
        }

        match event.kind {
            EventKind::Focus => self.set_current(host, event.originator),
            EventKind::Focused | EventKind::Activate => {}
            EventKind::Blur => {
                if self.current.is_some() {
                    self.remove_marker(host, event.originator);
                }
            }
            EventKind::Left | EventKind::Right | EventKind::Up | EventKind::Down => {
                self.last_5way_event = Some(event);
                if let Some(direction) = event.kind.direction() {
                    self.move_to(host, direction);
                }
            }
            EventKind::Select => self.select(host, event.originator),
            EventKind::Point => {
                if !host.spot_attr(event.originator).is_container() {
                    self.spot_node(host, event.originator, None);
                }
            }
        }
    }

    /// Give the behavior of the originator's kind a chance to handle `event`.
    ///
    /// Returns [`Outcome::Continue`] when no behavior applies, when the behavior has no handler
    /// for the event, or for events behaviors never see ([`EventKind::Activate`]).
    pub fn delegate(&mut self, host: &mut H, event: &NavEvent<H::Node>) -> Outcome {
        if !event.kind.is_semantic() {
            return Outcome::Continue;
        }
        let kind = host.kind_of(event.originator);
        let spot = host.spot_attr(event.originator);
        match self.registry.resolve(kind, spot) {
            Some(found) => behavior::invoke(&*found, self, host, event),
            None => Outcome::Continue,
        }
    }

    fn move_to(&mut self, host: &mut H, direction: Direction) {
        let Some(current) = self.current else {
            return;
        };
        let target = match navigate::adjacent_control(&*host, direction, current) {
            Some(adjacent) => adjacent,
            None => {
                let parent = navigate::spottable_parent(&*host, current);
                log::debug!("no control {direction:?} of {current:?}, going up to {parent:?}");
                parent
            }
        };
        self.spot_node(host, target, Some(direction));
    }

    fn select(&mut self, host: &mut H, originator: H::Node) {
        match navigate::first_spottable_child(&*host, originator) {
            Some(first) => {
                self.spot_node(host, first, None);
            }
            None => self.dispatch_event(host, NavEvent::new(EventKind::Activate, originator)),
        }
    }

    /// Move focus to `target`, or re-spot the current element when `target` is `None`.
    ///
    /// The current element is blurred first when it differs from `target`. A non-spottable
    /// target is replaced by its first spottable descendant. On success the focus marker is
    /// added and Focus is dispatched (carrying `direction`).
    ///
    /// Returns `Ok(false)` when nothing spottable was found; the current element is left
    /// unchanged in that case. Fails with [`SpotlightError::NoCurrent`] when `target` is
    /// `None` and nothing is current.
    pub fn spot(
        &mut self,
        host: &mut H,
        target: Option<H::Node>,
        direction: Option<Direction>,
    ) -> Result<bool> {
        let target = target.or(self.current).ok_or(SpotlightError::NoCurrent)?;
        Ok(self.spot_node(host, target, direction))
    }

    fn spot_node(&mut self, host: &mut H, target: H::Node, direction: Option<Direction>) -> bool {
        if let Some(current) = self.current
            && current != target
        {
            self.dispatch_event(host, NavEvent::new(EventKind::Blur, current));
        }
        let resolved = if navigate::is_spottable(&*host, target) {
            Some(target)
        } else {
            navigate::first_spottable_child(&*host, target)
        };
        let Some(node) = resolved else {
            log::debug!("nothing spottable in {target:?}");
            return false;
        };
        if self.config.use_visuals {
            host.add_focus_marker(node);
        }
        self.dispatch_event(
            host,
            NavEvent::new(EventKind::Focus, node).with_direction(direction),
        );
        true
    }

    /// Make `node` current and dispatch Focused against it.
    ///
    /// This is the only place the current element changes while attached. It does not touch
    /// the focus marker; use [`Spotlight::spot`] for a full focus move.
    pub fn set_current(&mut self, host: &mut H, node: H::Node) {
        self.states.ensure(node);
        if self.current != Some(node) {
            log::debug!("current: {node:?}");
        }
        self.current = Some(node);
        self.dispatch_event(host, NavEvent::new(EventKind::Focused, node));
    }

    fn remove_marker(&mut self, host: &mut H, node: H::Node) {
        if self.config.use_visuals {
            host.remove_focus_marker(node);
        }
    }

    /// Currently spotted element.
    pub fn current(&self) -> Option<H::Node> {
        self.current
    }

    /// Whether the last input came from the pointer.
    pub fn pointer_mode(&self) -> bool {
        self.pointer_mode
    }

    /// Force pointer mode on or off.
    pub fn set_pointer_mode(&mut self, pointer_mode: bool) {
        self.pointer_mode = pointer_mode;
    }

    /// Last event observed.
    pub fn last_event(&self) -> Option<&NavEvent<H::Node>> {
        self.last_event.as_ref()
    }

    /// Last directional event observed (and not prevented by a behavior).
    pub fn last_5way_event(&self) -> Option<&NavEvent<H::Node>> {
        self.last_5way_event.as_ref()
    }

    /// Number of events observed while attached.
    pub fn observed_events(&self) -> u64 {
        self.interceptor.observed()
    }

    /// Whether `node` can receive focus.
    pub fn is_spottable(&self, host: &H, node: H::Node) -> bool {
        navigate::is_spottable(&*host, node)
    }

    /// State bag of `node`, created when it first became current.
    pub fn state_of(&self, node: H::Node) -> Option<&StateBag> {
        self.states.get(node)
    }

    /// Mutable state bag of `node`, created when missing.
    pub fn state_of_mut(&mut self, node: H::Node) -> &mut StateBag {
        self.states.ensure(node)
    }

    /// Drop the state bag of `node`. Hosts call this when they destroy an element.
    pub fn forget(&mut self, node: H::Node) -> bool {
        self.states.forget(node)
    }

    /// Behavior registry.
    pub fn registry(&self) -> &BehaviorRegistry<H> {
        &self.registry
    }

    /// Mutable behavior registry.
    pub fn registry_mut(&mut self) -> &mut BehaviorRegistry<H> {
        &mut self.registry
    }

    /// Key accelerator state.
    pub fn accelerator(&self) -> &Accelerator<RawEvent<H::Node>> {
        &self.accelerator
    }
}
