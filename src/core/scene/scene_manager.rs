//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, stack operations, and lifecycle.
//
// Scenes are stored in a HashMap by key and referenced via a stack
// of keys. This allows scenes to maintain state between activations.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::globals::GlobalContext;
use crate::core::input::Action;
use crate::core::render::Canvas;

//=== Scene Transition ====================================================

/// Encapsulates scene stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Adds a new scene to the top of the stack.
    Push(K),

    /// Removes a specific scene from the stack by key.
    Remove(K),

    /// Runs `on_exit` then `on_enter` on a scene already in the stack.
    Restart(K),

    /// Clears all scenes from the stack.
    Clear,
}

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the SceneManager's HashMap.
/// Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Manages scene lifecycle and stack-based scene switching.
///
/// Scenes are registered once and referenced by key. The topmost scene
/// receives updates; every scene in the stack is drawn.
pub struct SceneManager<S: SceneKey, A: Action> {
    scenes: HashMap<S, Box<dyn Scene<S, A>>>,
    stack: Vec<S>,
}

impl<S: SceneKey, A: Action> SceneManager<S, A> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            stack: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene with the manager.
    ///
    /// Scenes must be registered before being pushed to the stack.
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S, A> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and places it on the stack.
    ///
    /// Its `on_enter` runs when [`SceneManager::start`] is called.
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S, A> + 'static,
    {
        self.register_scene(key, scene);

        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack", key);
        } else {
            debug!("Registered scene {:?} as default and added to stack", key);
            self.stack.push(key);
        }
    }

    /// Calls `on_enter` on every scene placed by `register_default`.
    pub fn start(&mut self, context: &mut GlobalContext<S, A>) {
        for &key in &self.stack {
            debug!("Starting scene {:?}", key);
            match self.scenes.get_mut(&key) {
                Some(scene) => scene.on_enter(context),
                None => warn!("Initial scene {:?} not registered", key),
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Scene keys from bottom to top.
    pub fn stack(&self) -> &[S] {
        &self.stack
    }

    pub fn active_scene(&self) -> Option<S> {
        self.stack.last().copied()
    }

    /// Status line of the top scene.
    pub fn status_text(&self) -> Option<String> {
        self.active_scene()
            .and_then(|key| self.scenes.get(&key))
            .and_then(|scene| scene.status_text())
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates the topmost scene.
    pub fn update(&mut self, context: &mut GlobalContext<S, A>) {
        let Some(key) = self.active_scene() else {
            return;
        };
        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.update(context);
        }
    }

    /// Draws every scene in the stack, bottom first.
    pub fn render(&self, canvas: &mut Canvas) {
        for key in &self.stack {
            if let Some(scene) = self.scenes.get(key) {
                scene.render(canvas);
            }
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Processes all queued scene transitions in FIFO order.
    ///
    /// Should be called at the tick boundary after scene updates.
    /// Transitions queued by lifecycle hooks run here are left for the
    /// next tick.
    pub fn process_transitions(&mut self, context: &mut GlobalContext<S, A>) {
        for transition in context.scene_transitions.take() {
            match transition {
                SceneTransition::Push(key) => self.push_internal(key, context),
                SceneTransition::Remove(key) => self.remove_internal(key, context),
                SceneTransition::Restart(key) => self.restart_internal(key, context),
                SceneTransition::Clear => self.clear_internal(context),
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_internal(&mut self, key: S, context: &mut GlobalContext<S, A>) {
        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack, skipping push", key);
            return;
        }

        let Some(scene) = self.scenes.get_mut(&key) else {
            warn!("Attempted to push unregistered scene {:?}", key);
            return;
        };

        debug!("Pushing scene {:?} onto stack", key);
        self.stack.push(key);
        scene.on_enter(context);
    }

    fn remove_internal(&mut self, key: S, context: &mut GlobalContext<S, A>) {
        let Some(pos) = self.stack.iter().position(|&k| k == key) else {
            warn!("Scene {:?} not found in stack, skipping removal", key);
            return;
        };

        debug!("Removing scene {:?} from stack at position {}", key, pos);
        self.stack.remove(pos);
        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_exit(context);
        }
    }

    fn restart_internal(&mut self, key: S, context: &mut GlobalContext<S, A>) {
        if !self.stack.contains(&key) {
            warn!("Scene {:?} not found in stack, skipping restart", key);
            return;
        }

        let Some(scene) = self.scenes.get_mut(&key) else {
            warn!("Attempted to restart unregistered scene {:?}", key);
            return;
        };

        debug!("Restarting scene {:?}", key);
        scene.on_exit(context);
        scene.on_enter(context);
    }

    fn clear_internal(&mut self, context: &mut GlobalContext<S, A>) {
        debug!("Clearing all scenes from stack");

        for key in self.stack.drain(..).rev() {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.on_exit(context);
            }
        }
    }
}

impl<S: SceneKey, A: Action> Default for SceneManager<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
