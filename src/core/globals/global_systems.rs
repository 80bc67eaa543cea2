//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that process input, manage scenes, and coordinate
// game logic. Systems operate on GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputSystem};
use crate::core::scene::{SceneKey, SceneManager};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `input`: High-level input system with action mapping
/// - `scene_manager`: Stack-based scene lifecycle manager
pub struct GlobalSystems<S: SceneKey, A: Action> {
    /// Key bindings and action resolution.
    pub input: InputSystem<A>,

    /// Scene registration, activation, updates, and transitions.
    pub scene_manager: SceneManager<S, A>,
}

impl<S: SceneKey, A: Action> GlobalSystems<S, A> {
    /// Creates a new systems container with default-initialized systems.
    ///
    /// Users access systems via [`crate::Engine::init`].
    pub(crate) fn new() -> Self {
        Self {
            input: InputSystem::new(),
            scene_manager: SceneManager::new(),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates all engine systems for the current tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input Processing**: platform batches into key state and actions
    /// 2. **Scene Update**: the active scene reads actions, queues transitions
    /// 3. **Transition Processing**: applies queued scene transitions
    /// 4. **Clock**: advances the tick counter
    pub(crate) fn update(&mut self, context: &mut GlobalContext<S, A>) {
        // 1. Process input events into state and actions
        let batches = std::mem::take(&mut context.frame_events);
        self.input
            .process_frame(&mut context.input_state, &mut context.actions, &batches);

        // 2. Update the active scene
        self.scene_manager.update(context);

        // 3. Process scene transitions
        self.scene_manager.process_transitions(context);

        // 4. Advance the clock
        context.time.tick += 1;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
