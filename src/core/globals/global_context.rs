//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input_state: Low-level key state
// - actions: Actions resolved from the key bindings this tick
// - scene_transitions: Command queue for scene changes
// - time: Fixed step length and tick counter
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, ActionState, InputEvent, StateTracker};
use crate::core::scene::{SceneKey, TransitionQueue};

//=== FrameTime ===========================================================

/// Fixed-step clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds simulated per tick.
    pub delta: f32,
    /// Ticks completed before the current one.
    pub tick: u64,
}

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Scenes receive `&mut GlobalContext` during their lifecycle methods.
/// This separates scene-accessible data from internal engine systems.
pub struct GlobalContext<S: SceneKey, A: Action> {
    /// Raw key state for low-level input queries.
    pub input_state: StateTracker,

    /// Held and newly pressed actions, resolved by the InputSystem
    /// before scenes update.
    pub actions: ActionState<A>,

    /// Transition queue for scene changes.
    ///
    /// Scenes queue transitions here during updates. The scene manager
    /// processes this queue at tick boundaries.
    pub scene_transitions: TransitionQueue<S>,

    pub time: FrameTime,

    /// Input events for the current frame.
    ///
    /// Filled by the orchestrator from platform batches and consumed by
    /// InputSystem during the update phase.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl<S: SceneKey, A: Action> GlobalContext<S, A> {
    /// Creates a new context with empty state and a `delta` second step.
    pub(crate) fn new(delta: f32) -> Self {
        Self {
            input_state: StateTracker::new(),
            actions: ActionState::new(),
            scene_transitions: TransitionQueue::new(),
            time: FrameTime { delta, tick: 0 },
            frame_events: Vec::new(),
        }
    }
}
