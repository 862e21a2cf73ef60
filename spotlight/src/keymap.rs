// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key code to navigation command table.

use hashbrown::HashMap;
use spotlight_event_state::accelerator::KeyCode;
use spotlight_focus::Direction;

/// Navigation command bound to a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Select the current element.
    Select,
    /// Move in a direction.
    Move(Direction),
}

/// Enter / OK.
pub const KEY_ENTER: KeyCode = 13;
/// Left arrow.
pub const KEY_LEFT: KeyCode = 37;
/// Up arrow.
pub const KEY_UP: KeyCode = 38;
/// Right arrow.
pub const KEY_RIGHT: KeyCode = 39;
/// Down arrow.
pub const KEY_DOWN: KeyCode = 40;

// Numeric-keypad codes sent by older remotes.
const LEGACY: [(KeyCode, Command); 5] = [
    (53, Command::Select),
    (52, Command::Move(Direction::Left)),
    (50, Command::Move(Direction::Up)),
    (54, Command::Move(Direction::Right)),
    (56, Command::Move(Direction::Down)),
];

/// Maps key codes to [`Command`]s.
///
/// The default map binds the arrow keys and Enter, plus the keypad codes older remotes send
/// (`5` select, `4` left, `2` up, `6` right, `8` down). [`KeyMap::standard`] leaves the keypad
/// codes out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<KeyCode, Command>,
}

impl KeyMap {
    /// Arrow keys and Enter only.
    pub fn standard() -> Self {
        let mut map = Self::empty();
        map.bind(KEY_ENTER, Command::Select);
        map.bind(KEY_LEFT, Command::Move(Direction::Left));
        map.bind(KEY_UP, Command::Move(Direction::Up));
        map.bind(KEY_RIGHT, Command::Move(Direction::Right));
        map.bind(KEY_DOWN, Command::Move(Direction::Down));
        map
    }

    /// A map with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `code` to `command`, replacing any previous binding.
    pub fn bind(&mut self, code: KeyCode, command: Command) -> &mut Self {
        self.bindings.insert(code, command);
        self
    }

    /// Remove the binding for `code`.
    pub fn unbind(&mut self, code: KeyCode) -> Option<Command> {
        self.bindings.remove(&code)
    }

    /// Command bound to `code`.
    pub fn command(&self, code: KeyCode) -> Option<Command> {
        self.bindings.get(&code).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self::standard();
        for (code, command) in LEGACY {
            map.bind(code, command);
        }
        map
    }
}
