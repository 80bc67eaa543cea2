//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps physical keys to game actions based on configured bindings.
//
// Architecture:
//   KeyCode → HashMap → Action
//
// Several keys may resolve to the same action (arrows + WASD).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

//=== Internal Dependencies ===============================================

use super::action::Action;
use super::event::KeyCode;
use super::state_tracker::StateTracker;

//=== ActionMapper ========================================================

/// Maps keys to actions via a single lookup table.
pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a new mapper with no bindings.
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action. Returns the action previously bound to it.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A) -> Option<A> {
        self.key_bindings.insert(key, action)
    }

    /// Removes the binding for a key.
    pub(crate) fn unbind_key(&mut self, key: KeyCode) -> Option<A> {
        self.key_bindings.remove(&key)
    }

    /// Removes every binding.
    pub(crate) fn clear(&mut self) {
        self.key_bindings.clear();
    }

    //--- Mapping ----------------------------------------------------------

    /// Returns the action bound to `key`.
    pub(crate) fn map_key(&self, key: KeyCode) -> Option<A> {
        self.key_bindings.get(&key).copied()
    }

    /// Resolves the tracker's held and pressed keys into action sets.
    pub(crate) fn resolve(&self, state: &StateTracker) -> (HashSet<A>, HashSet<A>) {
        let held = state.keys_down().filter_map(|k| self.map_key(*k)).collect();
        let pressed = state.keys_pressed().filter_map(|k| self.map_key(*k)).collect();
        (held, pressed)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
