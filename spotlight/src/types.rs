// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event and outcome types shared by the engine, behaviors, and hosts.

use spotlight_event_state::accelerator::KeyCode;
use spotlight_focus::Direction;

/// Kind of a spotlight event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// An element is about to become current.
    Focus,
    /// The current element changed.
    Focused,
    /// The current element is losing focus.
    Blur,
    /// Move left.
    Left,
    /// Move right.
    Right,
    /// Move up.
    Up,
    /// Move down.
    Down,
    /// Enter/OK on the originator.
    Select,
    /// The pointer moved over the originator.
    Point,
    /// Synthetic activation ("tap") of a leaf element.
    ///
    /// Hosts see it like any other event, but it is not a navigation event: behaviors are
    /// never consulted for it and the engine has no default action beyond recording it.
    Activate,
}

impl EventKind {
    /// Directional event kind for `direction`.
    #[must_use]
    pub const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }

    /// Direction carried by a directional kind.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            _ => None,
        }
    }

    /// Whether behaviors may intercept this kind.
    #[must_use]
    pub const fn is_semantic(self) -> bool {
        !matches!(self, Self::Activate)
    }
}

/// A spotlight event dispatched against an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavEvent<K> {
    /// What happened.
    pub kind: EventKind,
    /// Element the event was dispatched against.
    pub originator: K,
    /// Direction of the move that produced a Focus event.
    pub direction: Option<Direction>,
    /// Key that produced the event, when it came from the keyboard.
    pub key_code: Option<KeyCode>,
}

impl<K> NavEvent<K> {
    /// Create an event with no direction and no key.
    pub fn new(kind: EventKind, originator: K) -> Self {
        Self {
            kind,
            originator,
            direction: None,
            key_code: None,
        }
    }

    /// Attach a direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Option<Direction>) -> Self {
        self.direction = direction;
        self
    }

    /// Attach a key code.
    #[must_use]
    pub fn with_key_code(mut self, key_code: KeyCode) -> Self {
        self.key_code = Some(key_code);
        self
    }
}

/// Kind of a raw input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawKind {
    /// Pointer moved.
    MouseMove,
    /// Key pressed.
    KeyDown,
    /// Key released.
    KeyUp,
    /// Anything else; ignored.
    Other,
}

/// Raw input event as delivered by the host's event system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawEvent<K> {
    /// Event type.
    pub kind: RawKind,
    /// Key code for key events.
    pub key_code: Option<KeyCode>,
    /// Element under the pointer for pointer events.
    pub target: Option<K>,
}

impl<K> RawEvent<K> {
    /// Pointer moved over `target`.
    pub fn mouse_move(target: K) -> Self {
        Self {
            kind: RawKind::MouseMove,
            key_code: None,
            target: Some(target),
        }
    }

    /// Key `code` pressed.
    pub fn key_down(code: KeyCode) -> Self {
        Self {
            kind: RawKind::KeyDown,
            key_code: Some(code),
            target: None,
        }
    }

    /// Key `code` released.
    pub fn key_up(code: KeyCode) -> Self {
        Self {
            kind: RawKind::KeyUp,
            key_code: Some(code),
            target: None,
        }
    }
}

/// Result of a behavior handler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Let the engine run its default handling.
    #[default]
    Continue,
    /// Skip the default handling for this event.
    PreventDefault,
}

/// `true` allows the default handling, `false` prevents it.
impl From<bool> for Outcome {
    fn from(allow_default: bool) -> Self {
        if allow_default {
            Self::Continue
        } else {
            Self::PreventDefault
        }
    }
}
