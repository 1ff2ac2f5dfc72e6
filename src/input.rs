//! Keyboard mapping to paddle intents
//!
//! The simulation only sees `TickInput`; which physical keys drive which
//! intent is decided here.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::{PaddleIntent, Side, TickInput};

/// Keys for one paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleKeys {
    pub up: String,
    pub down: String,
    pub fire: String,
    pub heal: String,
    pub upgrade: String,
}

impl PaddleKeys {
    fn intent(&self, pressed: &HashSet<String>) -> PaddleIntent {
        PaddleIntent {
            up: pressed.contains(&self.up),
            down: pressed.contains(&self.down),
            fire: pressed.contains(&self.fire),
            upgrade: pressed.contains(&self.upgrade),
            heal: pressed.contains(&self.heal),
        }
    }
}

/// Full key map; key names are compared case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: PaddleKeys,
    pub right: PaddleKeys,
    pub debug: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: PaddleKeys {
                up: "q".into(),
                down: "z".into(),
                fire: "a".into(),
                heal: "s".into(),
                upgrade: "d".into(),
            },
            right: PaddleKeys {
                up: "p".into(),
                down: "l".into(),
                fire: "b".into(),
                heal: "n".into(),
                upgrade: "m".into(),
            },
            debug: "k".into(),
        }
    }
}

impl KeyBindings {
    pub fn keys(&self, side: Side) -> &PaddleKeys {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Lower-case every key name so lookups are case-insensitive
    pub fn normalized(mut self) -> Self {
        for keys in [&mut self.left, &mut self.right] {
            for key in [
                &mut keys.up,
                &mut keys.down,
                &mut keys.fire,
                &mut keys.heal,
                &mut keys.upgrade,
            ] {
                *key = key.to_lowercase();
            }
        }
        self.debug = self.debug.to_lowercase();
        self
    }

    /// True if any key is bound to two different actions
    pub fn has_conflicts(&self) -> bool {
        let all = [
            &self.left.up,
            &self.left.down,
            &self.left.fire,
            &self.left.heal,
            &self.left.upgrade,
            &self.right.up,
            &self.right.down,
            &self.right.fire,
            &self.right.heal,
            &self.right.upgrade,
            &self.debug,
        ];
        let unique: HashSet<&String> = all.iter().copied().collect();
        unique.len() != all.len()
    }
}

/// Tracks held keys between ticks and turns them into `TickInput`
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    bindings: KeyBindings,
    pressed: HashSet<String>,
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings: bindings.normalized(),
            pressed: HashSet::new(),
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.pressed.insert(key.to_lowercase());
    }

    pub fn key_up(&mut self, key: &str) {
        self.pressed.remove(&key.to_lowercase());
    }

    /// Replace the held set wholesale (one frame of a replay)
    pub fn set_pressed<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pressed = keys.into_iter().map(|k| k.as_ref().to_lowercase()).collect();
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    /// Intents for the current tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.bindings.keys(Side::Left).intent(&self.pressed),
            right: self.bindings.keys(Side::Right).intent(&self.pressed),
            debug: self.pressed.contains(&self.bindings.debug),
        }
    }
}
