//=========================================================================
// Action Trait & Action State
//=========================================================================
//
// Game-defined action trait and the per-frame set of active actions.
//
// Actions: Opaque identifiers routed by the engine, interpreted by the game.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// Actions represent high-level gameplay commands (MoveLeft, Jump)
/// mapped from raw keys. The engine routes actions without interpreting them.
///
/// # Example
///
/// ```
/// use star_catcher::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Jump, Restart }
///
/// impl Action for GameAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== ActionState =========================================================

/// Actions held and newly pressed during the current frame.
///
/// Rebuilt by the input system every tick. Scenes read it through
/// [`crate::core::globals::GlobalContext::actions`].
#[derive(Debug)]
pub struct ActionState<A: Action> {
    held: HashSet<A>,
    pressed: HashSet<A>,
}

impl<A: Action> ActionState<A> {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            pressed: HashSet::new(),
        }
    }

    /// Returns `true` while any key bound to `action` is held.
    pub fn is_down(&self, action: A) -> bool {
        self.held.contains(&action)
    }

    /// Returns `true` only on the frame a bound key went down.
    pub fn is_pressed(&self, action: A) -> bool {
        self.pressed.contains(&action)
    }

    /// Iterates held actions (unordered).
    pub fn held(&self) -> impl Iterator<Item = &A> {
        self.held.iter()
    }

    pub(crate) fn replace(&mut self, held: HashSet<A>, pressed: HashSet<A>) -> bool {
        let changed = held != self.held;
        self.held = held;
        self.pressed = pressed;
        changed
    }
}

impl<A: Action> Default for ActionState<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
