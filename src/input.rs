//! Keyboard state and the fixed key bindings

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    A,
    Right,
    D,
    Up,
    W,
    Space,
}

impl Key {
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of keys held down at the moment the refresh event is processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys(u8);

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    fn any(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&k| self.is_held(k))
    }
}

impl FromIterator<Key> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut held = Self::new();
        for key in iter {
            held.press(key);
        }
        held
    }
}

impl TickInput {
    /// Map held keys to tick input: arrows or WASD to move and jump, space to
    /// (re)start.
    pub fn from_keys(keys: &HeldKeys) -> Self {
        Self {
            left: keys.any(&[Key::Left, Key::A]),
            right: keys.any(&[Key::Right, Key::D]),
            jump: keys.any(&[Key::Up, Key::W]),
            restart: keys.is_held(Key::Space),
        }
    }
}
