//=========================================================================
// Input System
//
// High-level interface for input handling within the engine.
// Applies the frame's raw keyboard batches to the `StateTracker` and
// resolves them into game actions through the `ActionMapper`.
//
// Responsibilities:
// - Aggregate and process batches of input events per tick
// - Keep the persistent key state current
// - Publish the frame's held / pressed actions
//
// Notes:
// This system is owned by `GlobalSystems` and updated on the logic thread.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
mod action_mapper;
pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, ActionState};
pub use event::{InputEvent, KeyCode};
pub use state_tracker::StateTracker;

//=== Internal Imports ====================================================

use action_mapper::ActionMapper;

//=== External Crates =====================================================

use log::debug;

//=== InputSystem =========================================================

/// Owns key bindings and turns raw input into per-frame action state.
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
}

impl<A: Action> InputSystem<A> {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
        }
    }

    //--- Bindings ---------------------------------------------------------

    /// Binds `key` to `action`, replacing any previous binding of that key.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        if let Some(previous) = self.mapper.bind_key(key, action) {
            debug!("Rebound {:?}: {:?} -> {:?}", key, previous, action);
        }
    }

    /// Removes the binding for `key`.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.mapper.unbind_key(key);
    }

    /// Removes every binding.
    pub fn clear_bindings(&mut self) {
        self.mapper.clear();
    }

    /// Action currently bound to `key`.
    pub fn binding(&self, key: KeyCode) -> Option<A> {
        self.mapper.map_key(key)
    }

    //--- process_frame() --------------------------------------------------
    //
    // Consumes all input batches received during the current tick,
    // updates the tracker and recomputes the action state.
    //
    pub fn process_frame(
        &self,
        state: &mut StateTracker,
        actions: &mut ActionState<A>,
        batches: &[Vec<InputEvent>],
    ) {
        state.clear();
        for batch in batches {
            state.process_events(batch);
        }

        let (held, pressed) = self.mapper.resolve(state);
        if actions.replace(held, pressed) {
            debug!("Actions held: {:?}", actions.held().collect::<Vec<_>>());
        }
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
        Right,
    }

    impl Action for TestAction {}

    //--- Test Helpers -----------------------------------------------------
    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }
    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    fn system() -> InputSystem<TestAction> {
        let mut input = InputSystem::new();
        input.bind_key(KeyCode::Space, TestAction::Jump);
        input.bind_key(KeyCode::ArrowRight, TestAction::Right);
        input
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn press_hold_release_cycle() {
        let input = system();
        let mut state = StateTracker::new();
        let mut actions = ActionState::new();

        input.process_frame(&mut state, &mut actions, &[vec![key_down(KeyCode::Space)]]);
        assert!(actions.is_down(TestAction::Jump));
        assert!(actions.is_pressed(TestAction::Jump));

        input.process_frame(&mut state, &mut actions, &[]);
        assert!(actions.is_down(TestAction::Jump));
        assert!(!actions.is_pressed(TestAction::Jump));

        input.process_frame(&mut state, &mut actions, &[vec![key_up(KeyCode::Space)]]);
        assert!(!actions.is_down(TestAction::Jump));
    }

    #[test]
    fn multiple_batches_in_one_frame() {
        let input = system();
        let mut state = StateTracker::new();
        let mut actions = ActionState::new();

        let batches = vec![
            vec![key_down(KeyCode::Space)],
            vec![key_down(KeyCode::ArrowRight)],
        ];
        input.process_frame(&mut state, &mut actions, &batches);

        assert!(actions.is_down(TestAction::Jump));
        assert!(actions.is_down(TestAction::Right));
    }

    #[test]
    fn unbind_stops_resolution() {
        let mut input = system();
        input.unbind_key(KeyCode::Space);
        assert_eq!(input.binding(KeyCode::Space), None);

        let mut state = StateTracker::new();
        let mut actions = ActionState::new();
        input.process_frame(&mut state, &mut actions, &[vec![key_down(KeyCode::Space)]]);

        assert!(!actions.is_down(TestAction::Jump));
        assert!(state.is_key_down(KeyCode::Space));
    }

    #[test]
    fn clear_bindings_removes_everything() {
        let mut input = system();
        input.clear_bindings();
        assert_eq!(input.binding(KeyCode::ArrowRight), None);
    }
}
