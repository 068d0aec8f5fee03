//! Keyboard state and the input-listener capability

use std::collections::HashMap;

use crate::components::Body;
use crate::{Config, GameMap};

/// Keys the game reacts to. Anything else is carried through as a raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Escape,
    Other(u32),
}

impl Key {
    /// Vertical direction a movement key asks for: -1 = up, 1 = down
    pub fn direction(self) -> Option<f32> {
        match self {
            Key::Up | Key::W => Some(-1.0),
            Key::Down | Key::S => Some(1.0),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyFlags {
    pub pressed: bool,
    pub released: bool,
}

/// Current up/down state of every key seen so far
#[derive(Debug, Clone, Default)]
pub struct KeyStateTable {
    keys: HashMap<Key, KeyFlags>,
}

impl KeyStateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held. Returns true if it was not held before.
    pub fn press(&mut self, key: Key) -> bool {
        let flags = self.keys.entry(key).or_default();
        let newly = !flags.pressed;
        flags.pressed = true;
        flags.released = false;
        newly
    }

    /// Mark a key as released. Returns true if it was held before.
    pub fn release(&mut self, key: Key) -> bool {
        let flags = self.keys.entry(key).or_default();
        let was_held = flags.pressed;
        flags.pressed = false;
        flags.released = true;
        was_held
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys.get(&key).map(|f| f.pressed).unwrap_or(false)
    }

    pub fn flags(&self, key: Key) -> Option<KeyFlags> {
        self.keys.get(&key).copied()
    }

    /// Keys currently held down, in no particular order
    pub fn held_keys(&self) -> Vec<Key> {
        self.keys
            .iter()
            .filter(|(_, flags)| flags.pressed)
            .map(|(key, _)| *key)
            .collect()
    }

    /// Drop keys that were released and not pressed again. Returns how many
    /// entries went.
    pub fn forget_released(&mut self) -> usize {
        let before = self.keys.len();
        self.keys.retain(|_, flags| !flags.released);
        before - self.keys.len()
    }

    /// Release everything, e.g. on focus loss
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// What a listener may look at while handling a key
pub struct InputContext<'a> {
    pub config: &'a Config,
    pub map: &'a GameMap,
}

/// Entities that react to the keyboard
pub trait InputListener {
    /// Called once per input tick for every key that is held
    fn on_key(&mut self, body: &mut Body, key: Key, ctx: &InputContext);

    /// Called as soon as a key goes down
    fn on_key_down(&mut self, _body: &mut Body, _key: Key, _ctx: &InputContext) {}

    /// Called as soon as a key comes up
    fn on_key_up(&mut self, _body: &mut Body, _key: Key, _ctx: &InputContext) {}
}
