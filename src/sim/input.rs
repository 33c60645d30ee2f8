//! Logical player actions
//!
//! The simulation only asks "is this action active right now". Physical key
//! handling lives in the host; [`KeyboardState`] is a ready-made adapter that
//! tracks key codes and maps them through a binding table.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    ThrustForward,
    ThrustReverse,
    RotateLeft,
    RotateRight,
    Fire,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::ThrustForward,
        Action::ThrustReverse,
        Action::RotateLeft,
        Action::RotateRight,
        Action::Fire,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Input boundary consumed by the simulation step
pub trait ActionQuery {
    fn is_active(&self, action: Action) -> bool;
}

/// A fixed set of held actions (scripted input, tests, replays)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet(u8);

impl ActionSet {
    pub fn none() -> Self {
        Self(0)
    }

    pub fn of(actions: &[Action]) -> Self {
        actions.iter().fold(Self::none(), |set, &a| set.with(a))
    }

    pub fn with(self, action: Action) -> Self {
        Self(self.0 | action.bit())
    }

    pub fn without(self, action: Action) -> Self {
        Self(self.0 & !action.bit())
    }
}

impl ActionQuery for ActionSet {
    fn is_active(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }
}

/// Pressed key codes plus a code → action binding table
#[derive(Debug, Clone)]
pub struct KeyboardState {
    pressed: HashSet<String>,
    bindings: HashMap<String, Action>,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::with_bindings(default_bindings())
    }
}

impl KeyboardState {
    pub fn with_bindings(bindings: HashMap<String, Action>) -> Self {
        Self {
            pressed: HashSet::new(),
            bindings,
        }
    }

    pub fn key_down(&mut self, code: &str) {
        self.pressed.insert(code.to_owned());
    }

    pub fn key_up(&mut self, code: &str) {
        self.pressed.remove(code);
    }

    /// Drop all held keys (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    pub fn bind(&mut self, code: &str, action: Action) {
        self.bindings.insert(code.to_owned(), action);
    }
}

impl ActionQuery for KeyboardState {
    fn is_active(&self, action: Action) -> bool {
        self.pressed
            .iter()
            .any(|code| self.bindings.get(code) == Some(&action))
    }
}

/// WASD and arrow keys to steer, space to fire (DOM `KeyboardEvent.code` names)
pub fn default_bindings() -> HashMap<String, Action> {
    [
        ("KeyW", Action::ThrustForward),
        ("ArrowUp", Action::ThrustForward),
        ("KeyS", Action::ThrustReverse),
        ("ArrowDown", Action::ThrustReverse),
        ("KeyA", Action::RotateLeft),
        ("ArrowLeft", Action::RotateLeft),
        ("KeyD", Action::RotateRight),
        ("ArrowRight", Action::RotateRight),
        ("Space", Action::Fire),
    ]
    .into_iter()
    .map(|(code, action)| (code.to_owned(), action))
    .collect()
}
