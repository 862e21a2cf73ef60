// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accelerated key repeat for D-pad navigation.
//!
//! A remote only reports key-down and key-up edges. This module turns a held key into a
//! stream of repeated key events: one right away, then at 1 Hz, speeding up by one step every
//! few seconds until a ceiling is reached.
//!
//! ## Usage
//!
//! ```
//! use spotlight_event_state::accelerator::{Accelerator, KeyEdge};
//!
//! let mut acc: Accelerator<&str> = Accelerator::new();
//!
//! // Key down fires immediately.
//! assert_eq!(acc.process(KeyEdge::Down, 39, "right", 0), Some("right"));
//! assert_eq!(acc.next_deadline(), Some(1000));
//!
//! // Nothing is due before the deadline.
//! assert_eq!(acc.poll(500), None);
//! assert_eq!(acc.poll(1000), Some("right"));
//!
//! // Key up stops the stream.
//! assert_eq!(acc.process(KeyEdge::Up, 39, "right", 1200), None);
//! assert_eq!(acc.poll(2000), None);
//! ```
//!
//! ## Repeat rules
//!
//! 1. **Key down, new code**: latch the event, record the start time, fire immediately.
//! 2. **Key down, same code**: ignored; the key is already repeating (OS auto-repeat).
//! 3. **Key up**: stop, forget the held key, reset the rate to 1 Hz.
//! 4. **Repeat**: when a deadline passes, the next one is scheduled `1000 / hz` ms later at the
//!    current rate, then the rate is raised according to the time held, then the event fires.
//!
//! With the default [`RepeatSchedule`] the rate is 1 Hz for the first 3 s, 2 Hz until 6 s,
//! 3 Hz until 9 s, and 4 Hz after that. The rate never drops while the key is held.
//!
//! Only one key repeats at a time: a key down for a different code replaces the held key and
//! restarts the elapsed-time tracking.

/// Key code reported by the host (DOM `keyCode` style).
pub type KeyCode = u32;

/// Edge of a raw key event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyEdge {
    /// Key pressed.
    Down,
    /// Key released.
    Up,
}

/// How the repeat rate grows while a key is held.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RepeatSchedule {
    /// Time held (milliseconds) between two rate increases.
    pub step_ms: u64,
    /// Highest repeat rate in Hz.
    pub max_hz: u32,
}

impl Default for RepeatSchedule {
    fn default() -> Self {
        Self {
            step_ms: 3000,
            max_hz: 4,
        }
    }
}

impl RepeatSchedule {
    /// Repeat rate in Hz once a key has been held for `elapsed_ms`.
    #[must_use]
    pub fn frequency_at(&self, elapsed_ms: u64) -> u32 {
        let max_hz = self.max_hz.max(1);
        if self.step_ms == 0 {
            return max_hz;
        }
        let steps = elapsed_ms / self.step_ms;
        u32::try_from(steps)
            .unwrap_or(u32::MAX)
            .saturating_add(1)
            .min(max_hz)
    }

    /// Delay between two repeats at `hz`.
    #[must_use]
    pub fn period_ms(hz: u32) -> u64 {
        1000 / u64::from(hz.max(1))
    }
}

#[derive(Clone, Debug)]
struct Held<E> {
    code: KeyCode,
    event: E,
}

/// Key-repeat accelerator.
///
/// Holds at most one repeating key. The event payload `E` is whatever the caller wants handed
/// back on each repeat (typically the original key-down event).
#[derive(Clone, Debug)]
pub struct Accelerator<E> {
    held: Option<Held<E>>,
    hz: u32,
    started_at: u64,
    next_at: Option<u64>,
    /// Rate growth configuration.
    pub schedule: RepeatSchedule,
}

impl<E: Clone> Accelerator<E> {
    /// Create an idle accelerator with the default schedule.
    pub fn new() -> Self {
        Self::with_schedule(RepeatSchedule::default())
    }

    /// Create an idle accelerator with a custom schedule.
    pub fn with_schedule(schedule: RepeatSchedule) -> Self {
        Self {
            held: None,
            hz: 1,
            started_at: 0,
            next_at: None,
            schedule,
        }
    }

    /// Feed one raw key edge.
    ///
    /// Returns the event to dispatch right away, if any.
    pub fn process(&mut self, edge: KeyEdge, code: KeyCode, event: E, now: u64) -> Option<E> {
        match edge {
            KeyEdge::Down => self.key_down(code, event, now),
            KeyEdge::Up => {
                self.key_up();
                None
            }
        }
    }

    /// Record a key press.
    ///
    /// A press of the key already held is ignored. Any other press replaces the held key and
    /// fires immediately.
    pub fn key_down(&mut self, code: KeyCode, event: E, now: u64) -> Option<E> {
        if self.held_code() == Some(code) {
            return None;
        }
        log::debug!("key {code} latched for repeat");
        self.held = Some(Held { code, event });
        self.hz = 1;
        self.started_at = now;
        self.fire(now)
    }

    /// Record a key release. Any release stops the held key.
    pub fn key_up(&mut self) {
        self.stop();
    }

    /// Stop repeating. Calling this while idle does nothing.
    pub fn stop(&mut self) {
        if let Some(held) = self.held.take() {
            log::debug!("key {} released", held.code);
        }
        self.next_at = None;
        self.started_at = 0;
        self.hz = 1;
    }

    /// Fire a repeat if one is due at `now`.
    pub fn poll(&mut self, now: u64) -> Option<E> {
        match self.next_at {
            Some(due) if now >= due => self.fire(now),
            _ => None,
        }
    }

    fn fire(&mut self, now: u64) -> Option<E> {
        let event = self.held.as_ref()?.event.clone();
        self.next_at = Some(now.saturating_add(RepeatSchedule::period_ms(self.hz)));
        let reached = self
            .schedule
            .frequency_at(now.saturating_sub(self.started_at));
        self.hz = self.hz.max(reached);
        log::trace!("key repeat at {now}, next at {:?} ({} Hz)", self.next_at, self.hz);
        Some(event)
    }

    /// Whether a key is currently held and repeating.
    pub fn is_repeating(&self) -> bool {
        self.held.is_some()
    }

    /// Code of the held key.
    pub fn held_code(&self) -> Option<KeyCode> {
        self.held.as_ref().map(|h| h.code)
    }

    /// Event latched for the held key.
    pub fn held_event(&self) -> Option<&E> {
        self.held.as_ref().map(|h| &h.event)
    }

    /// Timestamp at which the held key was latched.
    pub fn started_at(&self) -> Option<u64> {
        self.held.as_ref().map(|_| self.started_at)
    }

    /// Current repeat rate in Hz.
    pub fn frequency(&self) -> u32 {
        self.hz
    }

    /// When the next repeat is due, if a key is held.
    ///
    /// Hosts schedule a timer for this instant and call [`Accelerator::poll`] when it fires.
    pub fn next_deadline(&self) -> Option<u64> {
        self.next_at
    }
}

impl<E: Clone> Default for Accelerator<E> {
    fn default() -> Self {
        Self::new()
    }
}
