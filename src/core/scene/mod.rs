//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and stack-based scene switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     └─ stack: Vec<S>
//
// Flow:
//   update()  → top of stack → Scene::update()
//   render()  → bottom to top → Scene::render()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::Action;
use crate::core::render::Canvas;

//=== Module Declarations =================================================

mod scene_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager, SceneTransition};
pub use transition_queue::TransitionQueue;

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks and update logic.
///
/// Scenes are registered in SceneManager and activated via scene stack.
/// Each scene maintains its own state between activations.
///
/// # Minimal Implementation
///
/// Only `update()` is required. Lifecycle hooks, rendering and the status
/// line have default empty implementations:
///
/// ```rust
/// # use star_catcher::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameScene { Main }
/// # impl SceneKey for GameScene {}
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameAction { Jump }
/// # impl Action for GameAction {}
/// struct MyScene;
///
/// impl Scene<GameScene, GameAction> for MyScene {
///     fn update(&mut self, context: &mut GlobalContext<GameScene, GameAction>) {
///         // Only this method is required
///     }
/// }
/// ```
pub trait Scene<S: SceneKey, A: Action>: Send {
    /// Called when scene enters the active stack, and again on restart.
    fn on_enter(&mut self, _context: &mut GlobalContext<S, A>) {}

    /// Called when scene exits the active stack, and before a restart.
    fn on_exit(&mut self, _context: &mut GlobalContext<S, A>) {}

    /// Called every tick while scene is on top of the stack.
    fn update(&mut self, context: &mut GlobalContext<S, A>);

    /// Draws the scene. Scenes are drawn bottom of the stack first.
    fn render(&self, _canvas: &mut Canvas) {}

    /// One-line HUD text (score, state) for the top scene.
    fn status_text(&self) -> Option<String> {
        None
    }
}
