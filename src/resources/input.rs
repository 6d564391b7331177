//! Keyboard state resource.
//!
//! Captures the keys the game cares about as a three state table. The host
//! backend feeds it from raw keyboard events; systems read it and consume
//! edges with [`InputState::take_press`].
//!
//! A key goes `Released -> Pressed` on the first press. Any further press
//! event (OS key repeat) or a consumed edge moves it to `Hold`, so a
//! `Pressed` state is seen by exactly one consumer.

use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Ctrl,
    Space,
    Enter,
    H,
    Tab,
    Escape,
}

impl Key {
    pub const ALL: [Key; 10] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Ctrl,
        Key::Space,
        Key::Enter,
        Key::H,
        Key::Tab,
        Key::Escape,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyState {
    Pressed,
    Hold,
    #[default]
    Released,
}

/// Resource holding the state of every tracked key.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    keys: [KeyState; Key::ALL.len()],
}

impl InputState {
    pub fn state(&self, key: Key) -> KeyState {
        self.keys[key.index()]
    }

    /// Register a press event for `key`.
    pub fn press(&mut self, key: Key) {
        let state = &mut self.keys[key.index()];
        *state = match *state {
            KeyState::Released => KeyState::Pressed,
            KeyState::Pressed | KeyState::Hold => KeyState::Hold,
        };
    }

    /// Register a release event for `key`.
    pub fn release(&mut self, key: Key) {
        self.keys[key.index()] = KeyState::Released;
    }

    /// Consume a press edge. Returns true if `key` was `Pressed` and moves
    /// it to `Hold`.
    pub fn take_press(&mut self, key: Key) -> bool {
        let state = &mut self.keys[key.index()];
        if *state == KeyState::Pressed {
            *state = KeyState::Hold;
            true
        } else {
            false
        }
    }

    /// Pressed or held.
    pub fn is_down(&self, key: Key) -> bool {
        self.state(key) != KeyState::Released
    }
}
